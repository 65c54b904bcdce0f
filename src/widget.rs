//! 便签计时器小组件
//!
//! 持有倒计时状态机、tick 调度、时间输入框、按钮和拖动手势，
//! 把平台无关的 [`Event`] 转换为状态变化和 [`WidgetAction`]。
//! 窗口、事件循环、剪贴板由二进制程序负责。

use crate::audio::AlertSink;
use crate::config::{Palette, WidgetConfig};
use crate::error::ParseTimeError;
use crate::event::{Event, PointerButton};
use crate::text::TextRenderer;
use crate::timer::{format_time, parse_custom_time, Countdown, Phase, TickOutcome, Ticker, FINISHED_TEXT};
use crate::ui::{Button, ButtonId, DragGesture, FieldResult, RenderContext, TimeField, Widget, WindowPosition};
use crate::{Canvas, Color, Point, Rect};
use std::time::Instant;
use tracing::{debug, info};

const MARGIN: f32 = 11.0;
const SPACING: f32 = 6.0;
const CLOSE_SIZE: f32 = 25.0;
const BUTTON_WIDTH: f32 = 60.0;
const BUTTON_HEIGHT: f32 = 30.0;

/// 事件处理后需要窗口层执行的动作
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetAction {
    Redraw,
    /// 拖动中，窗口移动到新位置
    MoveWindow(WindowPosition),
    /// 无法得知窗口位置，把拖动交给窗口管理器
    SystemDrag,
    /// 写入系统剪贴板
    CopyToClipboard(String),
    /// 关闭窗口并退出
    Close,
}

/// 各控件的逻辑坐标
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub close: Rect,
    pub field: Rect,
    pub start: Rect,
    pub pause: Rect,
    pub reset: Rect,
}

impl Layout {
    /// 关闭按钮在右上角，时间居中，三个按钮在底部一行
    pub fn compute(width: f32, height: f32) -> Self {
        let close = Rect::new(width - MARGIN - CLOSE_SIZE, MARGIN, CLOSE_SIZE, CLOSE_SIZE);

        let row_y = height - MARGIN - BUTTON_HEIGHT;
        let row_width = BUTTON_WIDTH * 3.0 + SPACING * 2.0;
        let row_x = (width - row_width) / 2.0;
        let start = Rect::new(row_x, row_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let pause = Rect::new(row_x + BUTTON_WIDTH + SPACING, row_y, BUTTON_WIDTH, BUTTON_HEIGHT);
        let reset = Rect::new(row_x + (BUTTON_WIDTH + SPACING) * 2.0, row_y, BUTTON_WIDTH, BUTTON_HEIGHT);

        let field_y = close.bottom() + SPACING;
        let field = Rect::new(MARGIN, field_y, width - MARGIN * 2.0, (row_y - SPACING - field_y).max(0.0));

        Self { close, field, start, pause, reset }
    }
}

pub struct StickyTimer {
    width: f32,
    height: f32,
    palette: Palette,
    corner_radius: f32,
    time_font_size: f32,
    button_font_size: f32,
    countdown: Countdown,
    ticker: Ticker,
    field: TimeField,
    buttons: Vec<Button>,
    drag: DragGesture,
    position: WindowPosition,
    alert: Box<dyn AlertSink>,
}

impl StickyTimer {
    pub fn new(config: &WidgetConfig, alert: Box<dyn AlertSink>) -> Self {
        let width = config.window.width as f32;
        let height = config.window.height as f32;
        let layout = Layout::compute(width, height);
        let countdown = Countdown::new(config.default_duration_secs);

        let buttons = vec![
            Button::new(ButtonId::Close, layout.close).with_border_radius(CLOSE_SIZE / 2.0),
            Button::new(ButtonId::Start, layout.start),
            Button::new(ButtonId::Pause, layout.pause),
            Button::new(ButtonId::Reset, layout.reset),
        ];

        Self {
            width,
            height,
            palette: config.theme.palette(),
            corner_radius: config.theme.corner_radius,
            time_font_size: config.theme.time_font_size,
            button_font_size: config.theme.button_font_size,
            field: TimeField::new(layout.field, &format_time(countdown.remaining())),
            countdown,
            ticker: Ticker::default(),
            buttons,
            drag: DragGesture::new(),
            position: WindowPosition::new(config.window.x as f32, config.window.y as f32),
            alert,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn remaining(&self) -> i64 {
        self.countdown.remaining()
    }

    pub fn phase(&self) -> Phase {
        self.countdown.phase()
    }

    /// 输入框当前显示的文本
    pub fn display_text(&self) -> &str {
        self.field.text()
    }

    pub fn position(&self) -> WindowPosition {
        self.position
    }

    /// 窗口层同步实际位置（例如窗口管理器调整后）
    pub fn set_position(&mut self, position: WindowPosition) {
        self.position = position;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// 下一次 tick 的时间点，事件循环据此休眠
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    /// 当前状态对应的显示文本
    fn current_display(&self) -> String {
        match self.countdown.phase() {
            Phase::Finished => FINISHED_TEXT.to_string(),
            Phase::Idle | Phase::Running => format_time(self.countdown.remaining()),
        }
    }

    pub fn start(&mut self, now: Instant) {
        if self.countdown.start() {
            self.ticker.start(now);
        }
    }

    pub fn pause(&mut self) {
        self.countdown.pause();
        self.ticker.stop();
    }

    pub fn reset(&mut self) {
        self.ticker.stop();
        self.countdown.reset();
        self.field.set_text(&format_time(self.countdown.remaining()));
    }

    /// 执行一次 tick 并刷新显示；结束时停止调度并播放提示音
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.countdown.tick();
        match outcome {
            TickOutcome::Decremented(remaining) => {
                self.field.set_text(&format_time(remaining));
            }
            TickOutcome::Finished => {
                self.ticker.stop();
                self.field.set_text(FINISHED_TEXT);
                self.alert.play();
            }
            TickOutcome::Ignored => self.ticker.stop(),
        }
        outcome
    }

    /// 处理截至 `now` 到期的 tick，返回是否需要重绘
    pub fn advance(&mut self, now: Instant) -> bool {
        let due = self.ticker.poll(now);
        for _ in 0..due {
            if !matches!(self.tick(), TickOutcome::Decremented(_)) {
                break;
            }
        }
        due > 0
    }

    /// 提交自定义时间；解析失败时恢复显示，倒计时不变
    ///
    /// 结束后只有 Reset 能离开 Finished，所以这时提交仍显示 Over!
    pub fn commit_text(&mut self, text: &str) -> Result<i64, ParseTimeError> {
        let parsed = parse_custom_time(text);
        match &parsed {
            Ok(seconds) => {
                info!("custom time set: {}s", seconds);
                self.countdown.set_remaining(*seconds);
            }
            Err(e) => debug!("discarding custom time {:?}: {}", text, e),
        }
        let display = self.current_display();
        self.field.set_text(&display);
        parsed
    }

    fn click(&mut self, id: ButtonId, now: Instant) -> Option<WidgetAction> {
        debug!("button clicked: {:?}", id);
        match id {
            ButtonId::Start => self.start(now),
            ButtonId::Pause => self.pause(),
            ButtonId::Reset => self.reset(),
            ButtonId::Close => return Some(WidgetAction::Close),
        }
        Some(WidgetAction::Redraw)
    }

    /// 处理输入事件
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Option<WidgetAction> {
        match event {
            Event::PointerDown { button, position, screen } => {
                if *button != PointerButton::Primary {
                    return None;
                }
                if let Some(pressed) = self.buttons.iter_mut().find(|b| b.hit_test(position)) {
                    pressed.press(position);
                    return Some(WidgetAction::Redraw);
                }
                // 窗口主体和输入框都走同一个拖动手势，输入框不因点击进入编辑
                if self.field.hit_test(position) {
                    debug!("drag started on time field");
                } else {
                    debug!("drag started on body");
                }
                let Some(screen) = screen else {
                    return Some(WidgetAction::SystemDrag);
                };
                self.drag.press(*screen);
                None
            }
            Event::PointerMove { screen, .. } => {
                let delta = self.drag.motion((*screen)?)?;
                if delta == Point::default() {
                    return None;
                }
                self.position.translate(delta);
                Some(WidgetAction::MoveWindow(self.position))
            }
            Event::PointerUp { button, position } => {
                self.drag.release();
                if *button != PointerButton::Primary {
                    return None;
                }
                let was_pressed = self.buttons.iter().any(Button::is_pressed);
                let clicked = self.buttons
                    .iter_mut()
                    .map(|b| (b.id(), b.release(position)))
                    .filter(|(_, clicked)| *clicked)
                    .map(|(id, _)| id)
                    .last();
                match clicked {
                    Some(id) => self.click(id, now),
                    None if was_pressed => Some(WidgetAction::Redraw),
                    None => None,
                }
            }
            Event::PointerLeft => {
                // 拖动时指针可能短暂越出窗口，只取消按钮的按下状态
                let was_pressed = self.buttons.iter().any(Button::is_pressed);
                self.buttons.iter_mut().for_each(Button::cancel);
                was_pressed.then_some(WidgetAction::Redraw)
            }
            Event::Key(key) => match self.field.handle_key(key.clone()) {
                Some(FieldResult::Commit(text)) => {
                    // 解析失败已在 commit_text 中恢复显示
                    let _ = self.commit_text(&text);
                    Some(WidgetAction::Redraw)
                }
                Some(FieldResult::Revert) => {
                    let text = self.current_display();
                    self.field.set_text(&text);
                    Some(WidgetAction::Redraw)
                }
                Some(FieldResult::CopyText(text)) | Some(FieldResult::CutText(text)) => {
                    Some(WidgetAction::CopyToClipboard(text))
                }
                Some(FieldResult::Changed) | None => Some(WidgetAction::Redraw),
            },
            Event::Text(text) => self.field.insert_text(text).map(|_| WidgetAction::Redraw),
        }
    }

    /// 绘制到物理像素画布
    pub fn render(&self, canvas: &mut Canvas, text: Option<&TextRenderer>, scale: f32) {
        canvas.clear(Color::TRANSPARENT);

        let body = Rect::new(0.0, 0.0, self.width, self.height).scaled(scale);
        canvas.fill_round_rect(&body, self.corner_radius * scale, self.palette.background);

        let ctx = RenderContext {
            text,
            scale,
            palette: self.palette,
            time_font_size: self.time_font_size,
            button_font_size: self.button_font_size,
        };
        self.field.render(canvas, &ctx);
        for button in &self.buttons {
            button.render(canvas, &ctx);
        }
    }
}
