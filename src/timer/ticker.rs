//! 固定周期的 tick 调度
//!
//! 不持有线程或定时器句柄：事件循环通过 [`Ticker::deadline`] 决定休眠到何时，
//! 醒来后调用 [`Ticker::poll`] 取得到期的 tick 数。

use std::time::{Duration, Instant};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self { period, next: None }
    }

    /// 开始计时，第一次 tick 在一个周期之后。已在运行时不重置相位
    pub fn start(&mut self, now: Instant) {
        if self.next.is_none() {
            self.next = Some(now + self.period);
        }
    }

    pub fn stop(&mut self) {
        self.next = None;
    }

    pub fn is_active(&self) -> bool {
        self.next.is_some()
    }

    /// 下一次 tick 的时间点
    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// 返回截至 `now` 到期的 tick 数，并把 deadline 向后推进相应周期
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(next) = self.next else {
            return 0;
        };
        if now < next {
            return 0;
        }

        let overdue = now.duration_since(next);
        let extra = (overdue.as_nanos() / self.period.as_nanos()) as u32;
        let due = extra + 1;
        self.next = Some(next + self.period * due);
        due
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}
