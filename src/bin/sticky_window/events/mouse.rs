//! 鼠标事件处理

use sticky_timer::event::PointerButton;
use sticky_timer::Point;
use winit::dpi::PhysicalPosition;
use winit::event::MouseButton;

/// 只关心左/右/中键，侧键忽略
pub fn map_button(button: MouseButton) -> Option<PointerButton> {
    match button {
        MouseButton::Left => Some(PointerButton::Primary),
        MouseButton::Right => Some(PointerButton::Secondary),
        MouseButton::Middle => Some(PointerButton::Middle),
        _ => None,
    }
}

/// 窗口内物理像素 -> 逻辑像素
pub fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
    let logical = position.to_logical::<f64>(scale_factor);
    Point::new(logical.x as f32, logical.y as f32)
}
