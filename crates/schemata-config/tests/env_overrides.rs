//! Environment variables override TOML and defaults.

use figment::Jail;
use pretty_assertions::assert_eq;
use schemata_config::{ConfigError, SchemataConfig};

#[test]
fn env_sets_nested_fields() {
    Jail::expect_with(|jail| {
        jail.set_env("SCHEMATA_REGISTRY__VALIDATE", "false");
        jail.set_env("SCHEMATA_GENERAL__LOG_LEVEL", "trace");

        let config = SchemataConfig::load().expect("config loads");
        assert!(!config.registry.validate);
        assert_eq!(config.general.log_level, "trace");
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".schemata")?;
        jail.create_file(
            ".schemata/config.toml",
            "[general]\nlog_level = \"info\"\n",
        )?;
        jail.set_env("SCHEMATA_GENERAL__LOG_LEVEL", "debug");

        let config = SchemataConfig::load().expect("config loads");
        assert_eq!(config.general.log_level, "debug");
        Ok(())
    });
}

#[test]
fn unrelated_prefix_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("OTHER_GENERAL__LOG_LEVEL", "trace");

        let config = SchemataConfig::load().expect("config loads");
        assert_eq!(config.general.log_level, "warn");
        Ok(())
    });
}

#[test]
fn invalid_env_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("SCHEMATA_REGISTRY__VALIDATE", "[1, 2]");

        let err = SchemataConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::Figment(_)), "{err}");
        Ok(())
    });
}
