//! 倒计时核心：格式化、状态机、周期调度

pub mod countdown;
pub mod format;
pub mod ticker;

pub use countdown::{Countdown, Phase, TickOutcome};
pub use format::{format_time, parse_custom_time, FINISHED_TEXT};
pub use ticker::{Ticker, TICK_PERIOD};
