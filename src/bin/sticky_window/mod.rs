//! 窗口模块 - 窗口属性、事件转换与渲染

pub mod events;
pub mod render;

pub use render::*;

use sticky_timer::config::WidgetConfig;
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::window::{WindowAttributes, WindowLevel};

pub const WINDOW_TITLE: &str = "Sticky Timer";

/// 无边框、置顶、透明背景、固定大小
pub fn window_attributes(config: &WidgetConfig) -> WindowAttributes {
    let attrs = WindowAttributes::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(config.window.width, config.window.height))
        .with_position(LogicalPosition::new(config.window.x, config.window.y))
        .with_decorations(false)
        .with_transparent(true)
        .with_window_level(WindowLevel::AlwaysOnTop)
        .with_resizable(false);

    // 工具窗口，不出现在任务栏
    #[cfg(target_os = "windows")]
    let attrs = {
        use winit::platform::windows::WindowAttributesExtWindows;
        attrs.with_skip_taskbar(true)
    };

    attrs
}
