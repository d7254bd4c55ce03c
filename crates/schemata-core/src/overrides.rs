//! Override-identifier keys (`[identifier]`).
//!
//! A key whose tail is a bracketed section (for example `[python]`) addresses
//! per-identifier overrides and is reserved: it can only be contributed
//! through default configurations, never as a regular property.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Source of the reserved key pattern. Also used as the `patternProperties`
/// key in the published schema buckets.
pub const OVERRIDE_PROPERTY_PATTERN: &str = r"\[.*\]$";

static OVERRIDE_PROPERTY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(OVERRIDE_PROPERTY_PATTERN).expect("override property pattern is a valid regex")
});

/// Whether `key` matches the reserved override pattern.
#[must_use]
pub fn is_override_key(key: &str) -> bool {
    OVERRIDE_PROPERTY_REGEX.is_match(key)
}

/// Build the `[identifier]` key for an override identifier.
#[must_use]
pub fn override_key(identifier: &str) -> String {
    format!("[{identifier}]")
}
