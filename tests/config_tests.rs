use marquee_rs::MarqueeError;
use marquee_rs::api::MarqueeConfig;
use marquee_rs::core::Direction;

#[test]
fn defaults_match_documented_values() {
    let config = MarqueeConfig::default();
    assert_eq!(config.speed, 10.0);
    assert_eq!(config.speed_factor, 1.0);
    assert_eq!(config.direction, Direction::Forward);
    assert!(config.auto_clone);
    assert!(config.autoplay);
    assert!(config.warnings_enabled);
}

#[test]
fn json_round_trip_preserves_config() {
    let config = MarqueeConfig::new(120.0)
        .with_speed_factor(0.5)
        .with_direction(Direction::Backward)
        .with_auto_clone(false)
        .with_autoplay(false)
        .with_warnings_enabled(false);

    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"direction\": -1"));
    let parsed = MarqueeConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed = MarqueeConfig::from_json_str(r#"{ "speed": 300 }"#).expect("parse");
    assert_eq!(parsed, MarqueeConfig::new(300.0));
}

#[test]
fn invalid_json_values_are_rejected() {
    let err = MarqueeConfig::from_json_str(r#"{ "direction": 0 }"#).expect_err("bad direction");
    assert!(matches!(err, MarqueeError::InvalidConfig(_)));

    let err = MarqueeConfig::from_json_str(r#"{ "speed": -4 }"#).expect_err("bad speed");
    assert!(matches!(err, MarqueeError::InvalidSpeed { .. }));

    let err =
        MarqueeConfig::from_json_str(r#"{ "speed_factor": -1 }"#).expect_err("negative factor");
    assert!(matches!(err, MarqueeError::InvalidSpeedFactor { .. }));
}
