use serde::Serialize;

use crate::cli::OutputFormat;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::render;
    use crate::cli::OutputFormat;

    #[test]
    fn raw_is_single_line() {
        let value = json!({"key": "editor.tabSize", "scope": "resource"});
        let rendered = render(&value, OutputFormat::Raw).expect("render");
        assert_eq!(rendered, r#"{"key":"editor.tabSize","scope":"resource"}"#);
    }

    #[test]
    fn json_is_pretty_and_parses_back() {
        let value = json!({"properties": {"a": {"type": "string"}}});
        let rendered = render(&value, OutputFormat::Json).expect("render");
        assert!(rendered.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("valid json");
        assert_eq!(parsed, value);
    }
}
