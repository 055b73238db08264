use hui_core::Color;
use hui_theme::{ColorRole, Theme, ThemeError, ThemePreset};

#[test]
fn every_preset_round_trips_through_toml() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let source = theme.to_toml().expect("serialize");
        let back = Theme::from_toml_str(&source).expect("parse");
        assert_eq!(back, theme, "preset {}", preset.id());
        assert_eq!(back.fingerprint(), theme.fingerprint());
    }
}

#[test]
fn colors_serialize_as_css_strings() {
    let source = Theme::light().to_toml().unwrap();
    assert!(source.contains("accent = \"#2962ff\""));
    assert!(source.contains("rgba(0,0,0,0.13)"));
}

#[test]
fn missing_field_fails_to_load() {
    let mut value: toml::Value = toml::from_str(&Theme::light().to_toml().unwrap()).unwrap();
    value
        .get_mut("colors")
        .and_then(toml::Value::as_table_mut)
        .unwrap()
        .remove("danger");
    let source = toml::to_string(&value).unwrap();

    let err = Theme::from_toml_str(&source).unwrap_err();
    assert!(matches!(err, ThemeError::Parse(_)));
    assert!(err.to_string().contains("danger"));
}

#[test]
fn unknown_field_is_rejected() {
    let mut source = Theme::light().to_toml().unwrap();
    source.insert_str(0, "flavor = \"mint\"\n");
    assert!(matches!(
        Theme::from_toml_str(&source),
        Err(ThemeError::Parse(_))
    ));
}

#[test]
fn invalid_scale_is_rejected_on_load() {
    let mut theme = Theme::light();
    theme.spacing.block_unit = 10.0;
    let source = theme.to_toml().unwrap();
    assert!(matches!(
        Theme::from_toml_str(&source),
        Err(ThemeError::InvalidScale { .. })
    ));
}

#[test]
fn load_reports_missing_file() {
    let err = Theme::load("/definitely/not/here/theme.toml").unwrap_err();
    assert!(matches!(err, ThemeError::Io { .. }));
}

#[test]
fn save_then_load() {
    let path = std::env::temp_dir().join(format!("hui-theme-{}.toml", std::process::id()));
    let theme = Theme::dark().with_color(ColorRole::Accent, Color::from_hex(0x00C853));
    theme.save(&path).unwrap();
    let loaded = Theme::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(loaded, theme);
}

#[test]
fn preset_ids_parse() {
    assert_eq!("DARK".parse::<ThemePreset>().unwrap(), ThemePreset::Dark);
    assert_eq!(ThemePreset::default(), ThemePreset::Light);
    assert!("sepia".parse::<ThemePreset>().is_err());
}

#[test]
fn presets_round_trip_through_json() {
    for preset in ThemePreset::all() {
        let theme = preset.theme();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme, "preset {}", preset.id());
        assert_eq!(back.fingerprint(), theme.fingerprint());
    }

    let value = serde_json::to_value(Theme::light()).unwrap();
    assert_eq!(value["colors"]["accent"], "#2962ff");
}
