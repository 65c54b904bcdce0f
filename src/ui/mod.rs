//! UI 组件系统

mod button;
pub mod drag;
mod time_field;

pub use button::{Button, ButtonId};
pub use drag::{DragGesture, WindowPosition};
pub use time_field::{FieldResult, TimeField};

use crate::config::Palette;
use crate::text::TextRenderer;
use crate::{Canvas, Point, Rect};

/// 渲染上下文
pub struct RenderContext<'a> {
    /// 字体不可用时为 None，此时跳过文字
    pub text: Option<&'a TextRenderer>,
    pub scale: f32,
    pub palette: Palette,
    pub time_font_size: f32,
    pub button_font_size: f32,
}

/// 组件 trait
pub trait Widget {
    /// 逻辑坐标下的边界
    fn bounds(&self) -> Rect;

    fn hit_test(&self, point: &Point) -> bool {
        self.bounds().contains(point)
    }

    fn render(&self, canvas: &mut Canvas, ctx: &RenderContext);
}
