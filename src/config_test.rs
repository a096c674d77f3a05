use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_site_identifiers() {
    let config = PaletteConfig::default();
    assert_eq!(config.storage_key, "palette");
    assert_eq!(config.switch_id, "light-switch");
    assert_eq!(config.dark_query, "(prefers-color-scheme: dark)");
    assert_eq!(config.light_class, "light-palette");
    assert_eq!(config.dark_class, "dark-palette");
    assert!(!config.follow_system);
}

#[test]
fn defaults_validate() {
    assert!(PaletteConfig::default().validate().is_ok());
}

// =============================================================
// JSON loading
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = PaletteConfig::from_json("{}").unwrap();
    assert_eq!(config, PaletteConfig::default());
}

#[test]
fn partial_object_overrides_only_named_fields() {
    let config = PaletteConfig::from_json(r#"{"storage_key":"docs-theme","follow_system":true}"#).unwrap();
    assert_eq!(config.storage_key, "docs-theme");
    assert!(config.follow_system);
    assert_eq!(config.switch_id, "light-switch");
}

#[test]
fn unknown_field_is_rejected() {
    let err = PaletteConfig::from_json(r#"{"storage":"x"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn malformed_json_is_rejected() {
    let err = PaletteConfig::from_json("{").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn blank_storage_key_is_rejected() {
    let err = PaletteConfig::from_json(r#"{"storage_key":"  "}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Empty("storage_key")));
}

#[test]
fn class_with_whitespace_is_rejected() {
    let config = PaletteConfig { dark_class: "dark palette".into(), ..PaletteConfig::default() };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::NotAToken { field: "dark_class", .. }));
}

#[test]
fn identical_classes_are_rejected() {
    let config = PaletteConfig { light_class: "x".into(), dark_class: "x".into(), ..PaletteConfig::default() };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::SameClass(ref c) if c == "x"));
    assert_eq!(err.to_string(), "light_class and dark_class must differ, both are \"x\"");
}

// =============================================================
// Tokens
// =============================================================

#[test]
fn class_for_each_palette() {
    let config = PaletteConfig::default();
    assert_eq!(config.class_for(Palette::Light), "light-palette");
    assert_eq!(config.class_for(Palette::Dark), "dark-palette");
}

#[test]
fn palette_for_recognizes_configured_tokens() {
    let config = PaletteConfig::default();
    assert_eq!(config.palette_for("light-palette"), Some(Palette::Light));
    assert_eq!(config.palette_for(" dark-palette\n"), Some(Palette::Dark));
}

#[test]
fn palette_for_rejects_foreign_and_combined_classes() {
    let config = PaletteConfig::default();
    assert_eq!(config.palette_for(""), None);
    assert_eq!(config.palette_for("dark"), None);
    assert_eq!(config.palette_for("light-palette dark-palette"), None);
    assert_eq!(config.palette_for("no-js"), None);
}
