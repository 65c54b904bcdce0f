//! 事件处理模块

pub mod mouse;
pub mod keyboard;
