//! 倒计时状态机

use tracing::{debug, info};

/// 倒计时阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Finished,
}

/// 一次 tick 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// 不在运行状态，什么也没做
    Ignored,
    /// 剩余时间减一秒
    Decremented(i64),
    /// 倒计时到零，进入 Finished。每次倒计时只会返回一次
    Finished,
}

/// 倒计时
#[derive(Debug, Clone)]
pub struct Countdown {
    remaining: i64,
    default_duration: i64,
    phase: Phase,
}

impl Countdown {
    pub fn new(default_duration: i64) -> Self {
        Self {
            remaining: default_duration,
            default_duration,
            phase: Phase::Idle,
        }
    }

    pub fn remaining(&self) -> i64 {
        self.remaining
    }

    pub fn default_duration(&self) -> i64 {
        self.default_duration
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Idle -> Running，返回是否发生了状态变化
    pub fn start(&mut self) -> bool {
        match self.phase {
            Phase::Idle => {
                self.phase = Phase::Running;
                info!("▶️ countdown started at {}s", self.remaining);
                true
            }
            Phase::Running | Phase::Finished => false,
        }
    }

    /// Running -> Idle，剩余时间保留
    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.phase = Phase::Idle;
        info!("⏸️ countdown paused at {}s", self.remaining);
        true
    }

    /// 任意状态 -> Idle，恢复默认时长
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.remaining = self.default_duration;
        info!("🔄 countdown reset to {}s", self.remaining);
    }

    /// 直接设置剩余时间（自定义时间输入），不改变阶段
    pub fn set_remaining(&mut self, seconds: i64) {
        debug!("remaining time set to {}s", seconds);
        self.remaining = seconds;
    }

    /// 推进一秒
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != Phase::Running {
            return TickOutcome::Ignored;
        }

        if self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining > 0 {
                return TickOutcome::Decremented(self.remaining);
            }
        }

        self.phase = Phase::Finished;
        info!("⏰ countdown finished");
        TickOutcome::Finished
    }
}
