//! Canvas 画布模块 - 软件渲染目标

use crate::{Color, Rect};

/// 画布，像素坐标为物理像素
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::TRANSPARENT; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// 清空画布
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// 获取像素
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Color {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize]
        } else {
            Color::TRANSPARENT
        }
    }

    /// 设置像素（带 alpha 混合）
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }

        let idx = (y as u32 * self.width + x as u32) as usize;
        if color.a == 255 {
            self.pixels[idx] = color;
        } else if color.a > 0 {
            self.pixels[idx] = color.blend(&self.pixels[idx]);
        }
    }

    /// 设置像素（带抗锯齿 coverage）
    fn set_pixel_aa(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 { return; }
        let a = (color.a as f32 * coverage.min(1.0)) as u8;
        self.set_pixel(x, y, color.with_alpha(a));
    }

    /// 填充矩形
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) {
        let x0 = rect.x.max(0.0) as i32;
        let y0 = rect.y.max(0.0) as i32;
        let x1 = rect.right().min(self.width as f32) as i32;
        let y1 = rect.bottom().min(self.height as f32) as i32;

        for y in y0..y1 {
            for x in x0..x1 {
                self.set_pixel(x, y, color);
            }
        }
    }

    /// 填充圆角矩形，边缘按像素中心到圆角的距离做抗锯齿
    pub fn fill_round_rect(&mut self, rect: &Rect, radius: f32, color: Color) {
        let radius = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
        if radius < 0.5 {
            self.fill_rect(rect, color);
            return;
        }

        let x0 = rect.x.floor().max(0.0) as i32;
        let y0 = rect.y.floor().max(0.0) as i32;
        let x1 = rect.right().ceil().min(self.width as f32) as i32;
        let y1 = rect.bottom().ceil().min(self.height as f32) as i32;

        // 圆角圆心所在的内矩形
        let inner_left = rect.x + radius;
        let inner_right = rect.right() - radius;
        let inner_top = rect.y + radius;
        let inner_bottom = rect.bottom() - radius;

        for y in y0..y1 {
            let py = y as f32 + 0.5;
            for x in x0..x1 {
                let px = x as f32 + 0.5;
                let dx = if px < inner_left { inner_left - px } else if px > inner_right { px - inner_right } else { 0.0 };
                let dy = if py < inner_top { inner_top - py } else if py > inner_bottom { py - inner_bottom } else { 0.0 };

                let coverage = if dx == 0.0 || dy == 0.0 {
                    // 直边区域：按到矩形边的距离计算
                    let edge = (px - rect.x).min(rect.right() - px).min(py - rect.y).min(rect.bottom() - py);
                    (edge + 0.5).clamp(0.0, 1.0)
                } else {
                    let dist = (dx * dx + dy * dy).sqrt();
                    (radius - dist + 0.5).clamp(0.0, 1.0)
                };
                self.set_pixel_aa(x, y, color, coverage);
            }
        }
    }

    /// 输出到 softbuffer 缓冲区（0xAARRGGBB），超出部分裁掉
    pub fn write_argb(&self, buffer: &mut [u32], buffer_width: u32, buffer_height: u32) {
        let rows = self.height.min(buffer_height);
        let cols = self.width.min(buffer_width);
        for y in 0..rows {
            let src_row = (y * self.width) as usize;
            let dst_row = (y * buffer_width) as usize;
            for x in 0..cols {
                let dst_idx = dst_row + x as usize;
                if dst_idx < buffer.len() {
                    buffer[dst_idx] = self.pixels[src_row + x as usize].to_argb();
                }
            }
        }
    }
}
