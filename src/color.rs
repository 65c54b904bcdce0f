//! 颜色：RGBA 值与 source-over 混合

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// `0xRRGGBB`，不透明
    pub const fn from_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// 按下态的按钮底色
    pub fn darken(&self, factor: f32) -> Self {
        let scale = |c: u8| (c as f32 * factor) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b), self.a)
    }

    /// softbuffer 像素格式 0xAARRGGBB
    #[inline]
    pub fn to_argb(&self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// 把自身叠加到 `dst` 上
    ///
    /// 画布底色是透明的（圆角外要透出桌面），所以目标也可能半透明，
    /// 这时输出 alpha 为 `src + dst * (1 - src)`。
    #[inline]
    pub fn blend(&self, dst: &Color) -> Color {
        match (self.a, dst.a) {
            (0, _) => *dst,
            (255, _) => *self,
            (src_a, 255) => {
                let src_a = src_a as u32;
                let mix = |s: u8, d: u8| ((s as u32 * src_a + d as u32 * (255 - src_a)) / 255) as u8;
                Color::rgb(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b))
            }
            (src_a, dst_a) => {
                let src_a = src_a as u32;
                let dst_weight = dst_a as u32 * (255 - src_a) / 255;
                // src_a > 0，不会除零
                let out_a = src_a + dst_weight;
                let mix = |s: u8, d: u8| ((s as u32 * src_a + d as u32 * dst_weight) / out_a) as u8;
                Color::new(mix(self.r, dst.r), mix(self.g, dst.g), mix(self.b, dst.b), out_a as u8)
            }
        }
    }
}
