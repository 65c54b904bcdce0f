//! Button 组件 - 可点击按钮

use super::{RenderContext, Widget};
use crate::{Canvas, Point, Rect};

/// 小组件上的按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Start,
    Pause,
    Reset,
    Close,
}

impl ButtonId {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonId::Start => "Start",
            ButtonId::Pause => "Pause",
            ButtonId::Reset => "Reset",
            ButtonId::Close => "✕",
        }
    }
}

pub struct Button {
    id: ButtonId,
    bounds: Rect,
    border_radius: f32,
    pressed: bool,
}

impl Button {
    pub fn new(id: ButtonId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            border_radius: 6.0,
            pressed: false,
        }
    }

    pub fn with_border_radius(mut self, radius: f32) -> Self {
        self.border_radius = radius;
        self
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// 按下，返回是否命中
    pub fn press(&mut self, point: &Point) -> bool {
        self.pressed = self.hit_test(point);
        self.pressed
    }

    /// 松开：按下后在按钮内松开才算一次点击
    pub fn release(&mut self, point: &Point) -> bool {
        let clicked = self.pressed && self.hit_test(point);
        self.pressed = false;
        clicked
    }

    pub fn cancel(&mut self) {
        self.pressed = false;
    }
}

impl Widget for Button {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn render(&self, canvas: &mut Canvas, ctx: &RenderContext) {
        let bounds = self.bounds.scaled(ctx.scale);

        // 按下时颜色变深
        let bg = if self.pressed {
            ctx.palette.button.darken(0.8)
        } else {
            ctx.palette.button
        };
        canvas.fill_round_rect(&bounds, self.border_radius * ctx.scale, bg);

        if let Some(text) = ctx.text {
            let size = ctx.button_font_size * ctx.scale;
            text.draw_text_centered(canvas, self.id.label(), &bounds, size, ctx.palette.button_text);
        }
    }
}
