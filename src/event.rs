//! 事件系统 - 与窗口平台无关的输入事件
//!
//! `position` 为窗口内的逻辑像素，由窗口层从平台事件换算而来。
//! `screen` 是同一点的屏幕坐标，由窗口层按事件到达时窗口的实际位置算出；
//! 平台不提供窗口位置时为 None。

use crate::Point;

/// 指针按键
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// 输入事件
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    PointerDown { button: PointerButton, position: Point, screen: Option<Point> },
    PointerMove { position: Point, screen: Option<Point> },
    PointerUp { button: PointerButton, position: Point },
    /// 光标离开窗口
    PointerLeft,
    Key(KeyInput),
    /// 输入的可见字符
    Text(String),
}

/// 键盘输入类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Enter,
    Escape,
    SelectAll,      // Ctrl+A
    Copy,           // Ctrl+C
    Cut,            // Ctrl+X
    Paste(String),  // Ctrl+V
    ShiftLeft,      // Shift+Left (扩展选择)
    ShiftRight,     // Shift+Right
    ShiftHome,      // Shift+Home
    ShiftEnd,       // Shift+End
}
