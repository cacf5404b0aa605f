use std::{fs, path::Path};

use anyhow::Context;
use serde::Deserialize;
use shared::protocol::DEFAULT_APP_NAME;

pub const DEFAULT_CONFIG_FILE: &str = "telemetry.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Suppresses every report when set.
    pub disabled: bool,
    pub collector_url: String,
    pub app_name: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            collector_url: "http://127.0.0.1:3025".into(),
            app_name: DEFAULT_APP_NAME.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    disabled: Option<bool>,
    collector_url: Option<String>,
    app_name: Option<String>,
}

impl TelemetryConfig {
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    pub fn from_toml_str(raw: &str) -> anyhow::Result<Self> {
        let file_cfg: FileConfig = toml::from_str(raw).context("invalid telemetry config")?;
        let mut config = Self::default();
        config.apply_file(file_cfg);
        Ok(config)
    }

    fn apply_file(&mut self, file_cfg: FileConfig) {
        if let Some(v) = file_cfg.disabled {
            self.disabled = v;
        }
        if let Some(v) = file_cfg.collector_url {
            self.collector_url = v;
        }
        if let Some(v) = file_cfg.app_name {
            self.app_name = v;
        }
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var("TELEMETRY_DISABLED") {
            self.disabled = parse_flag(&v);
        }
        if let Ok(v) = std::env::var("APP__TELEMETRY_DISABLED") {
            self.disabled = parse_flag(&v);
        }

        if let Ok(v) = std::env::var("TELEMETRY_COLLECTOR_URL") {
            self.collector_url = v;
        }
        if let Ok(v) = std::env::var("APP__TELEMETRY_COLLECTOR_URL") {
            self.collector_url = v;
        }

        if let Ok(v) = std::env::var("APP__TELEMETRY_APP_NAME") {
            self.app_name = v;
        }
    }
}

/// Reads `path` when it exists, then lets environment variables override it.
pub fn load_config(path: impl AsRef<Path>) -> anyhow::Result<TelemetryConfig> {
    let path = path.as_ref();
    let mut config = match fs::read_to_string(path) {
        Ok(raw) => TelemetryConfig::from_toml_str(&raw)
            .with_context(|| format!("failed to load '{}'", path.display()))?,
        Err(_) => TelemetryConfig::default(),
    };
    config.apply_env();
    Ok(config)
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_file_over_defaults() {
        let config = TelemetryConfig::from_toml_str("collector_url = \"http://collector:9000\"")
            .expect("config");
        assert_eq!(config.collector_url, "http://collector:9000");
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert!(!config.disabled);
    }

    #[test]
    fn rejects_wrongly_typed_flag() {
        assert!(TelemetryConfig::from_toml_str("disabled = \"sometimes\"").is_err());
    }

    #[test]
    fn flag_parsing_accepts_common_truthy_values() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("yes"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = load_config("definitely/not/here/telemetry.toml").expect("config");
        assert!(!config.collector_url.is_empty());
    }
}
