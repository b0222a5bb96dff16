// SPDX-License-Identifier: MPL-2.0

//! Integration tests for configuration module

use camera_controls::Config;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert!(
        config.animate_orientation,
        "Orientation changes should animate by default"
    );
    assert!(config.sound_enabled, "Sounds should be enabled by default");
    assert_eq!(config.sound_volume, 1.0);
    assert!(config.sound_theme_dir.is_none());
}

#[test]
fn test_config_long_press_threshold() {
    let config = Config::default();
    assert_eq!(config.long_press_threshold().as_millis() as u64, config.long_press_ms);
    assert!(
        config.long_press_ms >= 100,
        "Long-press threshold should not be triggerable by a tap"
    );
}

#[test]
fn test_config_json_round_trip() {
    let mut config = Config::default();
    config.sound_volume = 0.5;
    config.sound_theme_dir = Some("/usr/share/sounds/camera".into());
    config.long_press_ms = 650;

    let json = serde_json::to_string(&config).expect("config must serialize");
    let restored: Config = serde_json::from_str(&json).expect("config must deserialize");
    assert_eq!(config, restored);
}
