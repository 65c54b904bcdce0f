//! 倒计时状态机测试

use crate::timer::{Countdown, Phase, TickOutcome};

#[test]
fn test_new_countdown_is_idle() {
    let c = Countdown::new(1500);
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.remaining(), 1500);
    assert_eq!(c.default_duration(), 1500);
}

/// 重复 start 不改变状态
#[test]
fn test_double_start_is_noop() {
    let mut c = Countdown::new(1500);
    assert!(c.start());
    c.tick();
    assert!(!c.start());
    assert_eq!(c.phase(), Phase::Running);
    assert_eq!(c.remaining(), 1499);
}

#[test]
fn test_pause_preserves_remaining() {
    let mut c = Countdown::new(1500);
    c.start();
    for _ in 0..10 {
        c.tick();
    }
    assert!(c.pause());
    assert_eq!(c.phase(), Phase::Idle);
    assert_eq!(c.remaining(), 1490);

    // 暂停期间的 tick 被忽略
    assert_eq!(c.tick(), TickOutcome::Ignored);
    assert_eq!(c.remaining(), 1490);

    assert!(c.start());
    assert_eq!(c.tick(), TickOutcome::Decremented(1489));
}

#[test]
fn test_pause_when_idle_is_noop() {
    let mut c = Countdown::new(60);
    assert!(!c.pause());
    assert_eq!(c.phase(), Phase::Idle);
}

/// 1500 次 tick 后进入 Finished，且只报告一次
#[test]
fn test_finishes_exactly_once() {
    let mut c = Countdown::new(1500);
    c.start();
    let finished = (0..1500).filter(|_| c.tick() == TickOutcome::Finished).count();
    assert_eq!(finished, 1);
    assert_eq!(c.phase(), Phase::Finished);
    assert_eq!(c.remaining(), 0);

    for _ in 0..5 {
        assert_eq!(c.tick(), TickOutcome::Ignored);
    }
}

/// Finished 只能通过 reset 离开
#[test]
fn test_start_after_finished_is_noop() {
    let mut c = Countdown::new(1);
    c.start();
    assert_eq!(c.tick(), TickOutcome::Finished);
    assert!(!c.start());
    assert!(!c.pause());
    assert_eq!(c.phase(), Phase::Finished);
}

#[test]
fn test_reset_from_every_phase() {
    let mut idle = Countdown::new(1500);
    idle.set_remaining(42);
    idle.reset();
    assert_eq!((idle.phase(), idle.remaining()), (Phase::Idle, 1500));

    let mut running = Countdown::new(1500);
    running.start();
    running.tick();
    running.reset();
    assert_eq!((running.phase(), running.remaining()), (Phase::Idle, 1500));

    let mut finished = Countdown::new(2);
    finished.start();
    finished.tick();
    finished.tick();
    assert_eq!(finished.phase(), Phase::Finished);
    finished.reset();
    assert_eq!((finished.phase(), finished.remaining()), (Phase::Idle, 2));
}

/// 从 0 或负数开始运行，第一次 tick 即结束
#[test]
fn test_start_at_zero_or_negative_finishes_on_first_tick() {
    let mut c = Countdown::new(1500);
    c.set_remaining(0);
    c.start();
    assert_eq!(c.tick(), TickOutcome::Finished);

    let mut c = Countdown::new(1500);
    c.set_remaining(-300);
    c.start();
    assert_eq!(c.tick(), TickOutcome::Finished);
    assert_eq!(c.remaining(), -300);
}

#[test]
fn test_set_remaining_keeps_phase() {
    let mut c = Countdown::new(1500);
    c.start();
    c.set_remaining(125);
    assert_eq!(c.phase(), Phase::Running);
    assert_eq!(c.tick(), TickOutcome::Decremented(124));
}
