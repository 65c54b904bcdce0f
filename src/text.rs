//! 文本渲染模块 - 基于 fontdue 的字形光栅化

use crate::error::FontError;
use crate::{Canvas, Color, Rect};
use fontdue::{Font, FontSettings, Metrics};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// 随程序打包的后备字体
const BUNDLED_FONT: &[u8] = include_bytes!("../assets/DejaVuSans-Bold.ttf");

/// 系统粗体字体候选路径（按平台）
const SYSTEM_FONT_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbd.ttf",
    // Linux
    "/usr/share/fonts/truetype/msttcorefonts/Arial_Bold.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
];

/// 文本渲染器
pub struct TextRenderer {
    font: Font,
    /// 字形缓存 (char, size_key) -> (Metrics, Bitmap)，只在 UI 线程使用
    cache: RefCell<HashMap<(char, u32), (Metrics, Vec<u8>)>>,
}

impl TextRenderer {
    /// 从字体数据创建
    pub fn from_bytes(font_data: &[u8]) -> Result<Self, FontError> {
        let settings = FontSettings {
            scale: 40.0,
            ..Default::default()
        };
        let font = Font::from_bytes(font_data, settings)
            .map_err(|e| FontError::Parse(e.to_string()))?;
        Ok(Self {
            font,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// 从文件路径加载字体
    pub fn from_file(path: &str) -> Result<Self, FontError> {
        let font_data = std::fs::read(path)
            .map_err(|source| FontError::Read { path: path.to_string(), source })?;
        Self::from_bytes(&font_data)
    }

    /// 加载系统字体
    pub fn load_system_font() -> Result<Self, FontError> {
        for path in SYSTEM_FONT_PATHS {
            if !Path::new(path).exists() {
                continue;
            }
            match Self::from_file(path) {
                Ok(renderer) => {
                    info!("✅ font: {}", path);
                    return Ok(renderer);
                }
                Err(e) => debug!("skipping font {}: {}", path, e),
            }
        }
        Err(FontError::NotFound)
    }

    /// 优先系统字体，失败则使用打包字体
    pub fn load() -> Result<Self, FontError> {
        Self::load_system_font().or_else(|_| {
            info!("using bundled font");
            Self::from_bytes(BUNDLED_FONT)
        })
    }

    fn glyph(&self, ch: char, size: f32) -> (Metrics, Vec<u8>) {
        let size_key = (size * 10.0) as u32;
        if let Some(cached) = self.cache.borrow().get(&(ch, size_key)) {
            return cached.clone();
        }
        let rasterized = self.font.rasterize(ch, size);
        self.cache.borrow_mut().insert((ch, size_key), rasterized.clone());
        rasterized
    }

    /// 渲染文本，`y` 为基线位置
    pub fn draw_text(&self, canvas: &mut Canvas, text: &str, x: f32, y: f32, size: f32, color: Color) {
        let mut cursor_x = x;

        for ch in text.chars() {
            let (metrics, bitmap) = self.glyph(ch, size);

            if metrics.width == 0 || metrics.height == 0 {
                cursor_x += metrics.advance_width;
                continue;
            }

            let glyph_x = cursor_x + metrics.xmin as f32;
            let glyph_y = y - metrics.height as f32 - metrics.ymin as f32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx] as f32 / 255.0;
                    if coverage <= 0.001 {
                        continue;
                    }
                    let px = (glyph_x + gx as f32).round() as i32;
                    let py = (glyph_y + gy as f32).round() as i32;
                    let alpha = (color.a as f32 * coverage) as u8;
                    if alpha > 0 {
                        canvas.set_pixel(px, py, color.with_alpha(alpha));
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
    }

    /// 在矩形内水平垂直居中渲染
    pub fn draw_text_centered(&self, canvas: &mut Canvas, text: &str, bounds: &Rect, size: f32, color: Color) {
        let x = self.centered_origin(text, bounds, size);
        let baseline = bounds.y + (bounds.height + self.cap_height(size)) / 2.0;
        self.draw_text(canvas, text, x, baseline, size, color);
    }

    /// 居中文本的起始 x
    pub fn centered_origin(&self, text: &str, bounds: &Rect, size: f32) -> f32 {
        bounds.x + (bounds.width - self.measure_text(text, size)) / 2.0
    }

    /// 测量文本宽度
    pub fn measure_text(&self, text: &str, size: f32) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum()
    }

    /// 前 `chars` 个字符的宽度（光标位置）
    pub fn measure_prefix(&self, text: &str, chars: usize, size: f32) -> f32 {
        text.chars()
            .take(chars)
            .map(|ch| self.font.metrics(ch, size).advance_width)
            .sum()
    }

    /// 大写字母高度，用于垂直居中
    pub fn cap_height(&self, size: f32) -> f32 {
        self.font.metrics('M', size).height as f32
    }
}
