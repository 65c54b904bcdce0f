//! 渲染相关逻辑

use std::num::NonZeroU32;
use std::sync::Arc;
use sticky_timer::error::StartupError;
use sticky_timer::{Canvas, StickyTimer, TextRenderer};
use tracing::warn;
use winit::window::Window;

pub type Surface = softbuffer::Surface<Arc<Window>, Arc<Window>>;

/// 为窗口创建 softbuffer 表面
pub fn create_surface(window: &Arc<Window>) -> Result<Surface, StartupError> {
    let context = softbuffer::Context::new(window.clone())?;
    let surface = softbuffer::Surface::new(&context, window.clone())?;
    Ok(surface)
}

/// 画布尺寸与窗口物理尺寸保持一致
pub fn ensure_canvas(canvas: &mut Option<Canvas>, width: u32, height: u32) -> &mut Canvas {
    let stale = canvas.as_ref()
        .map(|c| c.width() != width || c.height() != height)
        .unwrap_or(true);
    if stale {
        *canvas = Some(Canvas::new(width, height));
    }
    canvas.get_or_insert_with(|| Canvas::new(width, height))
}

/// 绘制小组件并提交到窗口
pub fn render_and_present(
    window: &Window,
    surface: &mut Surface,
    canvas: &mut Option<Canvas>,
    widget: &StickyTimer,
    text_renderer: Option<&TextRenderer>,
) {
    let size = window.inner_size();
    let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return;
    };

    if let Err(e) = surface.resize(width, height) {
        warn!("failed to resize surface: {}", e);
        return;
    }

    let canvas = ensure_canvas(canvas, size.width, size.height);
    widget.render(canvas, text_renderer, window.scale_factor() as f32);

    match surface.buffer_mut() {
        Ok(mut buffer) => {
            canvas.write_argb(&mut buffer, size.width, size.height);
            if let Err(e) = buffer.present() {
                warn!("failed to present frame: {}", e);
            }
        }
        Err(e) => warn!("failed to map surface buffer: {}", e),
    }
}
