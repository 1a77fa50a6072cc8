use flow_placer_core::config::{GrowDirection, MAX_SPACING, PlacerConfig};
use flow_placer_core::error::PlacerError;

#[test]
fn default_config_is_valid() {
    assert!(PlacerConfig::default().validate().is_ok());
}

#[test]
fn spacing_at_limit_is_valid() {
    let cfg = PlacerConfig::builder()
        .item_spacing(MAX_SPACING)
        .line_spacing(MAX_SPACING)
        .build();
    assert!(cfg.validate().is_ok());
}

#[test]
fn item_spacing_over_limit() {
    let cfg = PlacerConfig {
        item_spacing: MAX_SPACING + 1,
        ..Default::default()
    };
    match cfg.validate() {
        Err(PlacerError::InvalidConfig(msg)) => assert!(msg.contains("item_spacing")),
        other => panic!("Expected InvalidConfig error, got {:?}", other),
    }
}

#[test]
fn line_spacing_over_limit() {
    let cfg = PlacerConfig {
        line_spacing: u32::MAX,
        ..Default::default()
    };
    match cfg.validate() {
        Err(PlacerError::InvalidConfig(msg)) => assert!(msg.contains("line_spacing")),
        other => panic!("Expected InvalidConfig error, got {:?}", other),
    }
}

#[test]
fn builder_sets_every_field() {
    let cfg = PlacerConfig::builder()
        .direction(GrowDirection::Vertical)
        .parallel_items(4)
        .item_spacing(1)
        .line_spacing(2)
        .build();
    assert_eq!(
        cfg,
        PlacerConfig {
            direction: GrowDirection::Vertical,
            parallel_items: 4,
            item_spacing: 1,
            line_spacing: 2,
        }
    );
}

#[test]
fn config_json_roundtrip_uses_lowercase_direction() {
    let cfg = PlacerConfig::builder().direction(GrowDirection::Vertical).build();
    let s = serde_json::to_string(&cfg).unwrap();
    assert!(s.contains("\"vertical\""));
    let back: PlacerConfig = serde_json::from_str(&s).unwrap();
    assert_eq!(back, cfg);
}
