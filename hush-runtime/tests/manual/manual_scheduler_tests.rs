// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use hush_core::{HushError, TimerState};
use hush_runtime::impls::manual::ManualScheduler;
use hush_runtime::Scheduler;
use hush_test_utils::CallRecorder;
use std::sync::Arc;
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn test_callback_runs_at_deadline() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();
    let sink = recorder.clone();
    let clock = scheduler.clone();

    // Act
    let handle = scheduler.schedule_after(ms(30), move || sink.record(clock.now()))?;

    // Assert
    assert_eq!(scheduler.advance(ms(29)), 0);
    assert!(handle.is_armed());
    assert_eq!(scheduler.advance(ms(5)), 1);
    assert_eq!(recorder.calls(), vec![ms(30)]);
    assert_eq!(handle.state(), TimerState::Fired);
    assert_eq!(scheduler.now(), ms(34));

    Ok(())
}

#[test]
fn test_callbacks_run_in_deadline_order() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();

    // Act
    for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
        let sink = recorder.clone();
        scheduler.schedule_after(ms(delay), move || sink.record(label))?;
    }
    scheduler.advance(ms(30));

    // Assert
    assert_eq!(recorder.calls(), vec!["a", "b", "c"]);

    Ok(())
}

#[test]
fn test_equal_deadlines_run_in_schedule_order() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();

    // Act
    for label in 0..5_u32 {
        let sink = recorder.clone();
        scheduler.schedule_after(ms(10), move || sink.record(label))?;
    }
    scheduler.advance(ms(10));

    // Assert
    assert_eq!(recorder.calls(), vec![0, 1, 2, 3, 4]);

    Ok(())
}

#[test]
fn test_zero_delay_waits_for_tick() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();
    let sink = recorder.clone();

    // Act
    scheduler.schedule_after(Duration::ZERO, move || sink.record(()))?;

    // Assert
    assert!(recorder.is_empty());
    assert_eq!(scheduler.tick(), 1);
    assert_eq!(recorder.count(), 1);
    assert_eq!(scheduler.now(), Duration::ZERO);

    Ok(())
}

#[test]
fn test_cancelled_callback_never_runs() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();
    let sink = recorder.clone();
    let handle = scheduler.schedule_after(ms(10), move || sink.record(()))?;

    // Act
    assert!(handle.cancel());

    // Assert
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.advance(ms(100)), 0);
    assert!(recorder.is_empty());

    Ok(())
}

#[test]
fn test_cancel_after_fire_is_noop() -> anyhow::Result<()> {
    let scheduler = ManualScheduler::new();
    let handle = scheduler.schedule_after(ms(10), || {})?;

    scheduler.advance(ms(10));

    assert!(!handle.cancel());
    assert!(handle.is_fired());

    Ok(())
}

#[test]
fn test_callbacks_can_schedule_within_the_window() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();
    let sink = recorder.clone();
    let inner_scheduler = scheduler.clone();

    // Act
    scheduler.schedule_after(ms(10), move || {
        let sink = sink.clone();
        let clock = inner_scheduler.clone();
        inner_scheduler
            .schedule_after(ms(10), move || sink.record(clock.now()))
            .expect("scheduler is running");
    })?;
    let fired = scheduler.advance(ms(25));

    // Assert
    assert_eq!(fired, 2);
    assert_eq!(recorder.calls(), vec![ms(20)]);

    Ok(())
}

#[test]
fn test_pending_counts_only_armed_timers() -> anyhow::Result<()> {
    let scheduler = ManualScheduler::new();
    let first = scheduler.schedule_after(ms(10), || {})?;
    let _second = scheduler.schedule_after(ms(20), || {})?;
    let _third = scheduler.schedule_after(ms(30), || {})?;

    first.cancel();
    assert_eq!(scheduler.pending(), 2);

    scheduler.advance(ms(20));
    assert_eq!(scheduler.pending(), 1);

    Ok(())
}

#[test]
fn test_shutdown_cancels_and_rejects() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let handle = scheduler.schedule_after(ms(10), || {})?;

    // Act
    scheduler.shutdown();
    let rejected = scheduler.schedule_after(ms(10), || {});

    // Assert
    assert!(scheduler.is_shut_down());
    assert!(handle.is_cancelled());
    assert!(matches!(
        rejected,
        Err(HushError::SchedulerUnavailable { .. })
    ));
    assert_eq!(scheduler.advance(ms(100)), 0);

    Ok(())
}

#[test]
fn test_clones_share_clock_and_queue() -> anyhow::Result<()> {
    let scheduler = ManualScheduler::new();
    let other = scheduler.clone();

    other.schedule_after(ms(10), || {})?;
    scheduler.advance(ms(15));

    assert_eq!(other.now(), ms(15));
    assert_eq!(other.pending(), 0);
    assert!(format!("{other:?}").contains("ManualScheduler"));

    Ok(())
}

#[test]
fn test_max_durations_saturate_instead_of_overflowing() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    scheduler.advance(ms(5));
    let far = scheduler.schedule_after(Duration::MAX, || {})?;
    let near = scheduler.schedule_after(ms(10), || {})?;

    // Act
    let fired = scheduler.advance(Duration::MAX);

    // Assert
    assert_eq!(scheduler.now(), Duration::MAX);
    assert_eq!(fired, 2);
    assert!(near.is_fired());
    assert!(far.is_fired());

    Ok(())
}

#[test]
fn test_cancelled_entries_are_released_before_their_deadline() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let captured = Arc::new(());

    // Act
    for _ in 0..50 {
        let token = captured.clone();
        let handle = scheduler.schedule_after(ms(100), move || drop(token))?;
        handle.cancel();
    }

    // Assert
    assert!(scheduler.queued() < 10);
    assert!(Arc::strong_count(&captured) < 10);
    assert_eq!(scheduler.pending(), 0);
    assert_eq!(scheduler.advance(ms(100)), 0);
    assert_eq!(Arc::strong_count(&captured), 1);

    Ok(())
}

#[test]
fn test_sweep_keeps_armed_entries_in_order() -> anyhow::Result<()> {
    // Arrange
    let scheduler = ManualScheduler::new();
    let recorder = CallRecorder::new();

    // Act
    for label in 0..20_u32 {
        let sink = recorder.clone();
        let handle = scheduler.schedule_after(ms(10), move || sink.record(label))?;
        if label % 2 == 1 {
            handle.cancel();
        }
    }
    scheduler.advance(ms(10));

    // Assert
    assert_eq!(recorder.calls(), vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);

    Ok(())
}
