use formkit::{Config, ConfigError};

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn test_defaults() {
    let config = Config::default();

    assert_eq!(config.date_picker.popup_id, "common-datepicker");
    assert_eq!(config.date_picker.wrapper_class, "date-field");
    assert_eq!(config.date_picker.range_separator, '~');
    assert_eq!(config.date_picker.margin, 4);
    assert_eq!(config.lookup.users.len(), 3);
    assert_eq!(config.chat.max_height_fallback, 280.0);
    assert_eq!(config.chat.multi_line_factor, 1.25);
    assert_eq!(config.uploader.submit_event, "fileuploader:submit");
}

#[test]
fn test_empty_object_is_default() {
    assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
}

// ============================================================================
// Overrides
// ============================================================================

#[test]
fn test_partial_override_keeps_other_defaults() {
    let config = Config::from_json_str(
        r#"{
            "date_picker": { "margin": 8, "range_separator": "-" },
            "lookup": { "users": [{ "birth": "800101", "name": "Park", "userId": "park01" }] }
        }"#,
    )
    .unwrap();

    assert_eq!(config.date_picker.margin, 8);
    assert_eq!(config.date_picker.range_separator, '-');
    assert_eq!(config.date_picker.popup_id, "common-datepicker");
    assert_eq!(config.lookup.users.len(), 1);
    assert_eq!(config.lookup.users[0].user_id, "park01");
    assert_eq!(config.lookup.users[0].org, "");
    assert_eq!(config.lookup.input_id, "lookup-key");
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_invalid_json() {
    let result = Config::from_json_str("{ \"date_picker\": 3 }");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_missing_file() {
    let result = Config::load("/nonexistent/formkit-config.json");
    assert!(matches!(result, Err(ConfigError::Io(_))));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("formkit-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "chat": { "textarea_id": "message" } }"#).unwrap();

    let config = Config::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.chat.textarea_id, "message");
    assert_eq!(config.chat.line_height_fallback, 22.0);
}
