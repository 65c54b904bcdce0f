//! 配置与资源查找测试

use crate::audio::{AlertPlayer, AlertSink};
use crate::config::{parse_color, Palette, WidgetConfig};
use crate::error::AudioError;
use crate::Color;
use std::path::PathBuf;

#[test]
fn test_builtin_config_parses() {
    let config = WidgetConfig::builtin().expect("bundled widget.json should parse");
    assert_eq!(config.default_duration_secs, 1500);
    assert_eq!((config.window.width, config.window.height), (260, 200));
    assert_eq!((config.window.x, config.window.y), (400, 300));
    assert_eq!(config.alert_file, "alert.wav");
    assert_eq!(config.theme.palette(), Palette::STICKY);
}

/// 缺省字段使用默认值
#[test]
fn test_partial_config_uses_defaults() {
    let config = WidgetConfig::from_json(r#"{ "defaultDurationSecs": 60, "window": { "x": 10 } }"#)
        .expect("partial config should parse");
    assert_eq!(config.default_duration_secs, 60);
    assert_eq!(config.window.x, 10);
    assert_eq!(config.window.y, 300);
    assert_eq!(config.theme.corner_radius, 10.0);
}

#[test]
fn test_malformed_config_is_an_error() {
    assert!(WidgetConfig::from_json("{ not json").is_err());
}

#[test]
fn test_parse_color() {
    assert_eq!(parse_color("#FFA500"), Some(Color::rgb(0xFF, 0xA5, 0x00)));
    assert_eq!(parse_color("FFA500"), None);
    assert_eq!(parse_color("#FFF"), None);
    assert_eq!(parse_color("#GGGGGG"), None);
}

/// 非法颜色回退到默认配色
#[test]
fn test_palette_falls_back_on_bad_color() {
    let mut config = WidgetConfig::default();
    config.theme.background_color = "yellow".to_string();
    config.theme.time_color = "#000000".to_string();
    let palette = config.theme.palette();
    assert_eq!(palette.background, Palette::STICKY.background);
    assert_eq!(palette.time, Color::rgb(0, 0, 0));
}

#[test]
fn test_locate_reports_searched_dirs() {
    let dirs = vec![PathBuf::from("/nonexistent-sticky-timer-dir")];
    match AlertPlayer::locate("alert.wav", &dirs) {
        Err(AudioError::AssetNotFound { name, searched }) => {
            assert_eq!(name, "alert.wav");
            assert_eq!(searched, dirs);
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_locate_finds_repo_asset() {
    let dirs = vec![PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets")];
    let path = AlertPlayer::locate("alert.wav", &dirs).expect("repo asset should exist");
    assert!(path.ends_with("assets/alert.wav"));
}

/// 静音播放器播放时不报错也不打开设备
#[test]
fn test_silent_player_is_noop() {
    let mut player = AlertPlayer::silent();
    assert!(!player.has_asset());
    player.play();
}

/// 播放时不会临时打开音频设备，设备只在 load 时打开
#[test]
fn test_play_does_not_open_device() {
    let wav = std::fs::read(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/alert.wav"))
        .expect("repo asset should exist");
    let mut player = AlertPlayer::from_bytes(wav);
    assert!(player.has_asset());
    assert!(!player.has_output());

    player.play();
    assert!(!player.has_output());
}
