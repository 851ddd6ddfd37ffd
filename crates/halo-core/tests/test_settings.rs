use halo_core::settings::BloomSettings;

#[test]
fn test_settings_json_round_trip() {
    let settings = BloomSettings {
        blur_radius: 12,
        threshold: 2.5,
        downsampling_ratio: 8,
    };

    let json = serde_json::to_string(&settings).unwrap();
    let back: BloomSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(settings, back);
}

#[test]
fn test_settings_uses_host_field_names() {
    // The host stores camelCase keys; highlightOnly is runtime-only state
    // and must never appear in the persisted record.
    let value = serde_json::to_value(BloomSettings::default()).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 3);
    assert!(object.contains_key("blurRadius"));
    assert!(object.contains_key("threshold"));
    assert!(object.contains_key("downsamplingRatio"));
    assert!(!object.contains_key("highlightOnly"));
}

#[test]
fn test_settings_missing_fields_fall_back_to_defaults() {
    let settings: BloomSettings = serde_json::from_str(r#"{"blurRadius": 10}"#).unwrap();
    assert_eq!(settings.blur_radius, 10);
    assert_eq!(settings.threshold, 1.0);
    assert_eq!(settings.downsampling_ratio, 4);

    let settings: BloomSettings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings, BloomSettings::default());
}

#[test]
fn test_settings_capture_reflects_runtime_state() {
    let filter = BloomSettings::default().build_filter();
    filter.set_blur_radius(9);
    filter.set_threshold(3.0);
    filter.set_highlight_only(true);

    let captured = BloomSettings::capture(&filter);
    assert_eq!(captured.blur_radius, 9);
    assert_eq!(captured.threshold, 3.0);
    assert_eq!(captured.downsampling_ratio, 4);
    // highlight_only was set but has nowhere to go in the record.
}
