use super::{load_settings, settings_from_toml, Settings};

#[test]
fn file_values_override_defaults() {
    let settings = settings_from_toml(
        r#"
bind_addr = "0.0.0.0:9000"
max_retained_events = 16
"#,
    );
    assert_eq!(
        settings,
        Settings {
            bind_addr: "0.0.0.0:9000".into(),
            max_retained_events: 16,
        }
    );
}

#[test]
fn negative_capacity_is_ignored() {
    let settings = settings_from_toml("max_retained_events = -4");
    assert_eq!(settings.max_retained_events, Settings::default().max_retained_events);
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    assert_eq!(settings_from_toml("bind_addr = "), Settings::default());
}

#[test]
fn retained_events_env_override_applies_and_ignores_garbage() {
    std::env::set_var("APP__MAX_RETAINED_EVENTS", "7");
    let overridden = load_settings();
    std::env::set_var("APP__MAX_RETAINED_EVENTS", "lots");
    let invalid = load_settings();
    std::env::remove_var("APP__MAX_RETAINED_EVENTS");

    assert_eq!(overridden.max_retained_events, 7);
    assert_eq!(
        invalid.max_retained_events,
        Settings::default().max_retained_events
    );
}
