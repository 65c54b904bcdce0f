//! Sticky Timer - 置顶便签倒计时
//! 无边框窗口、开始/暂停/重置、拖动移动、直接编辑时间、结束提示音

mod canvas;
mod color;
mod geometry;
pub mod text;

pub use canvas::Canvas;
pub use color::Color;
pub use geometry::{Point, Rect};
pub use text::TextRenderer;

// 配置与错误
pub mod config;
pub mod error;

// 事件系统
pub mod event;

// 倒计时核心
pub mod timer;

// UI 组件
pub mod ui;

// 提示音
pub mod audio;

// 小组件
pub mod widget;

pub use widget::{Layout, StickyTimer, WidgetAction};

// 单元测试
#[cfg(test)]
mod tests;
