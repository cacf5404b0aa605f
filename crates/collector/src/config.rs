use std::{collections::HashMap, fs};

use tracing::warn;

pub const CONFIG_FILE: &str = "collector.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub max_retained_events: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3025".into(),
            max_retained_events: 1000,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = match fs::read_to_string(CONFIG_FILE) {
        Ok(raw) => settings_from_toml(&raw),
        Err(_) => Settings::default(),
    };

    if let Ok(v) = std::env::var("COLLECTOR_BIND") {
        settings.bind_addr = v;
    }
    if let Ok(v) = std::env::var("APP__BIND_ADDR") {
        settings.bind_addr = v;
    }

    if let Ok(v) = std::env::var("APP__MAX_RETAINED_EVENTS") {
        match v.parse::<usize>() {
            Ok(parsed) => settings.max_retained_events = parsed,
            Err(error) => warn!(value = %v, %error, "ignoring invalid APP__MAX_RETAINED_EVENTS"),
        }
    }

    settings
}

pub(crate) fn settings_from_toml(raw: &str) -> Settings {
    let mut settings = Settings::default();

    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        warn!("{CONFIG_FILE} is not valid TOML; using defaults");
        return settings;
    };

    if let Some(v) = file_cfg.get("bind_addr").and_then(toml::Value::as_str) {
        settings.bind_addr = v.to_string();
    }
    if let Some(v) = file_cfg
        .get("max_retained_events")
        .and_then(toml::Value::as_integer)
    {
        if let Ok(parsed) = usize::try_from(v) {
            settings.max_retained_events = parsed;
        }
    }

    settings
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
