//! 置顶便签计时器 - 窗口运行器

mod sticky_window;

use sticky_window::events::{keyboard, mouse};
use sticky_window::*;

use std::sync::Arc;
use std::time::Instant;
use sticky_timer::audio::AlertPlayer;
use sticky_timer::config::WidgetConfig;
use sticky_timer::error::StartupError;
use sticky_timer::event::Event;
use sticky_timer::ui::WindowPosition;
use sticky_timer::{Canvas, Point, StickyTimer, TextRenderer, WidgetAction};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalPosition;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

struct StickyWindow {
    config: WidgetConfig,
    window: Option<Arc<Window>>,
    surface: Option<Surface>,
    canvas: Option<Canvas>,
    text_renderer: Option<TextRenderer>,
    widget: StickyTimer,
    mouse_pos: Point,
    modifiers: ModifiersState,
    clipboard: Option<arboard::Clipboard>,
    startup_error: Option<StartupError>,
}

impl StickyWindow {
    fn new(config: WidgetConfig) -> Self {
        let alert = AlertPlayer::load(&config.alert_file);
        let widget = StickyTimer::new(&config, Box::new(alert));

        let clipboard = match arboard::Clipboard::new() {
            Ok(cb) => Some(cb),
            Err(e) => {
                warn!("clipboard unavailable: {}", e);
                None
            }
        };

        Self {
            config,
            window: None,
            surface: None,
            canvas: None,
            text_renderer: None,
            widget,
            mouse_pos: Point::default(),
            modifiers: ModifiersState::empty(),
            clipboard,
            startup_error: None,
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StartupError> {
        let window = Arc::new(event_loop.create_window(window_attributes(&self.config))?);
        let surface = create_surface(&window)?;

        self.text_renderer = match TextRenderer::load() {
            Ok(tr) => Some(tr),
            Err(e) => {
                warn!("text rendering disabled: {}", e);
                None
            }
        };

        info!("📐 scale: {}x", window.scale_factor());
        window.request_redraw();
        self.window = Some(window);
        self.surface = Some(surface);
        Ok(())
    }

    fn request_redraw(&self) {
        if let Some(w) = &self.window {
            w.request_redraw();
        }
    }

    /// 窗口内逻辑坐标 -> 屏幕坐标，按此刻窗口的实际位置计算
    ///
    /// 移动请求是异步生效的，不能用上一次请求的位置换算。
    /// Wayland 等平台不提供窗口位置，返回 None。
    fn screen_point(&self, local: Point) -> Option<Point> {
        let window = self.window.as_ref()?;
        let origin = window.inner_position().ok()?.to_logical::<f64>(window.scale_factor());
        Some(WindowPosition::new(origin.x as f32, origin.y as f32).to_screen(local))
    }

    fn dispatch(&mut self, event: Event, event_loop: &ActiveEventLoop) {
        if let Some(action) = self.widget.handle_event(&event, Instant::now()) {
            self.apply(action, event_loop);
        }
    }

    fn apply(&mut self, action: WidgetAction, event_loop: &ActiveEventLoop) {
        match action {
            WidgetAction::Redraw => self.request_redraw(),
            WidgetAction::MoveWindow(pos) => {
                if let Some(w) = &self.window {
                    w.set_outer_position(LogicalPosition::new(pos.x as f64, pos.y as f64));
                }
            }
            WidgetAction::SystemDrag => {
                if let Some(w) = &self.window {
                    if let Err(e) = w.drag_window() {
                        warn!("failed to start window drag: {}", e);
                    }
                }
            }
            WidgetAction::CopyToClipboard(text) => {
                if let Some(cb) = self.clipboard.as_mut() {
                    if let Err(e) = cb.set_text(text) {
                        warn!("failed to write clipboard: {}", e);
                    }
                }
                self.request_redraw();
            }
            WidgetAction::Close => {
                info!("👋 closing");
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for StickyWindow {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.create_window(event_loop) {
            self.startup_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::ScaleFactorChanged { .. } | WindowEvent::Resized(_) => {
                self.request_redraw();
            }

            WindowEvent::Moved(position) => {
                // 拖动时以自身记录的位置为准
                if !self.widget.is_dragging() {
                    if let Some(w) = &self.window {
                        let logical = position.to_logical::<f64>(w.scale_factor());
                        self.widget.set_position(WindowPosition::new(logical.x as f32, logical.y as f32));
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let scale = self.window.as_ref().map(|w| w.scale_factor()).unwrap_or(1.0);
                self.mouse_pos = mouse::to_logical(position, scale);
                let screen = self.screen_point(self.mouse_pos);
                self.dispatch(Event::PointerMove { position: self.mouse_pos, screen }, event_loop);
            }

            WindowEvent::CursorLeft { .. } => {
                self.dispatch(Event::PointerLeft, event_loop);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = mouse::map_button(button) else { return };
                let position = self.mouse_pos;
                let event = match state {
                    ElementState::Pressed => {
                        let screen = self.screen_point(position);
                        Event::PointerDown { button, position, screen }
                    }
                    ElementState::Released => Event::PointerUp { button, position },
                };
                self.dispatch(event, event_loop);
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return;
                }
                if let Some(key) = keyboard::map_key(event.physical_key, self.modifiers, &mut self.clipboard) {
                    self.dispatch(Event::Key(key), event_loop);
                } else if !keyboard::is_command(self.modifiers) {
                    if let Some(text) = event.text {
                        self.dispatch(Event::Text(text.to_string()), event_loop);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                if let (Some(window), Some(surface)) = (&self.window, &mut self.surface) {
                    render_and_present(window, surface, &mut self.canvas, &self.widget, self.text_renderer.as_ref());
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.widget.advance(Instant::now()) {
            debug!("tick: {}", self.widget.display_text());
            self.request_redraw();
        }

        // 运行中休眠到下一次 tick，否则等待输入
        match self.widget.next_deadline() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,sticky_timer=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("🚀 Sticky Timer");

    let config = WidgetConfig::builtin()?;
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = StickyWindow::new(config);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.startup_error.take() {
        return Err(e.into());
    }
    Ok(())
}
