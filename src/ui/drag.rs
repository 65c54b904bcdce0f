//! 拖动窗口
//!
//! 窗口主体和时间输入框共用同一个 [`DragGesture`]，按下时记录屏幕坐标锚点，
//! 每次移动把与上一个指针位置的差值直接加到窗口位置上。

use crate::Point;

/// 窗口左上角的屏幕坐标
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindowPosition {
    pub x: f32,
    pub y: f32,
}

impl WindowPosition {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// 窗口内坐标 -> 屏幕坐标
    pub fn to_screen(&self, local: Point) -> Point {
        Point::new(self.x + local.x, self.y + local.y)
    }

    pub fn translate(&mut self, delta: Point) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// 拖动手势：按下 -> 移动* -> 松开
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    anchor: Option<Point>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.anchor.is_some()
    }

    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// 主键按下，`screen` 为屏幕坐标
    pub fn press(&mut self, screen: Point) {
        self.anchor = Some(screen);
    }

    /// 指针移动，拖动中返回相对上一位置的位移并更新锚点
    pub fn motion(&mut self, screen: Point) -> Option<Point> {
        let anchor = self.anchor.as_mut()?;
        let delta = screen - *anchor;
        *anchor = screen;
        Some(delta)
    }

    pub fn release(&mut self) {
        self.anchor = None;
    }
}
