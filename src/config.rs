//! 小组件配置
//!
//! 配置随程序编译进二进制（`assets/widget.json`），不在运行时读取外部文件。

use crate::error::StartupError;
use crate::Color;
use serde::Deserialize;

/// 内置配置文件内容
pub const BUILTIN_CONFIG: &str = include_str!("../assets/widget.json");

/// widget.json 配置结构
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetConfig {
    #[serde(default = "default_duration")]
    pub default_duration_secs: i64,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default = "default_alert_file")]
    pub alert_file: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_x")]
    pub x: i32,
    #[serde(default = "default_y")]
    pub y: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    #[serde(default = "default_bg")]
    pub background_color: String,
    #[serde(default = "default_time_color")]
    pub time_color: String,
    #[serde(default = "default_button_color")]
    pub button_color: String,
    #[serde(default = "default_button_text")]
    pub button_text_color: String,
    #[serde(default = "default_radius")]
    pub corner_radius: f32,
    #[serde(default = "default_time_font")]
    pub time_font_size: f32,
    #[serde(default = "default_button_font")]
    pub button_font_size: f32,
}

fn default_duration() -> i64 { 25 * 60 }
fn default_alert_file() -> String { "alert.wav".to_string() }
fn default_width() -> u32 { 260 }
fn default_height() -> u32 { 200 }
fn default_x() -> i32 { 400 }
fn default_y() -> i32 { 300 }
fn default_bg() -> String { "#FFF89C".to_string() }
fn default_time_color() -> String { "#FFA500".to_string() }
fn default_button_color() -> String { "#F0E68C".to_string() }
fn default_button_text() -> String { "#333333".to_string() }
fn default_radius() -> f32 { 10.0 }
fn default_time_font() -> f32 { 32.0 }
fn default_button_font() -> f32 { 14.0 }

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            x: default_x(),
            y: default_y(),
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background_color: default_bg(),
            time_color: default_time_color(),
            button_color: default_button_color(),
            button_text_color: default_button_text(),
            corner_radius: default_radius(),
            time_font_size: default_time_font(),
            button_font_size: default_button_font(),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            default_duration_secs: default_duration(),
            window: WindowConfig::default(),
            theme: ThemeConfig::default(),
            alert_file: default_alert_file(),
        }
    }
}

impl WidgetConfig {
    /// 解析内置配置
    pub fn builtin() -> Result<Self, StartupError> {
        Self::from_json(BUILTIN_CONFIG)
    }

    pub fn from_json(json: &str) -> Result<Self, StartupError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        Ok(config)
    }
}

impl ThemeConfig {
    /// 解析后的配色，非法的颜色值回退到默认配色
    pub fn palette(&self) -> Palette {
        Palette {
            background: parse_color(&self.background_color).unwrap_or(Palette::STICKY.background),
            time: parse_color(&self.time_color).unwrap_or(Palette::STICKY.time),
            button: parse_color(&self.button_color).unwrap_or(Palette::STICKY.button),
            button_text: parse_color(&self.button_text_color).unwrap_or(Palette::STICKY.button_text),
        }
    }
}

/// 绘制用的配色
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub time: Color,
    pub button: Color,
    pub button_text: Color,
}

impl Palette {
    pub const STICKY: Palette = Palette {
        background: Color::from_hex(0xFFF89C),
        time: Color::from_hex(0xFFA500),
        button: Color::from_hex(0xF0E68C),
        button_text: Color::from_hex(0x333333),
    };
}

/// 解析 `#RRGGBB` 颜色
pub fn parse_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok().map(Color::from_hex)
}
