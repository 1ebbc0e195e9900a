// ABOUTME: Elapsed-time state machine for an in-progress workout session
// ABOUTME: Pure tick-driven core plus a cancelable tokio interval driver
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitTracker

//! Workout session timer.
//!
//! The core is a pure state machine (`Idle -> Active <-> Paused`, with
//! `finish` returning to the idle state for reuse) advanced by explicit
//! [`SessionTimer::tick`] calls, one per second of active time. That keeps
//! the arithmetic deterministic and testable without a clock.
//!
//! [`TimerDriver`] supplies the real 1-second cadence on a tokio task.
//! Cancelation is deterministic: [`TimerDriver::stop`] resolves only after
//! the periodic task has ended, and dropping the driver aborts it, so a
//! paused or dismissed screen cannot leak ticks.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::constants::timer;

/// Timer lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// No session running; elapsed time is zero
    Idle,
    /// Session running; ticks accumulate
    Active,
    /// Session suspended; ticks are ignored
    Paused,
}

/// Elapsed-time state machine for one workout session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimer {
    state: TimerState,
    elapsed_seconds: u64,
    started_at: Option<DateTime<Utc>>,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTimer {
    /// A fresh idle timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TimerState::Idle,
            elapsed_seconds: 0,
            started_at: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Moment the running session started, if any.
    #[must_use]
    pub const fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Seconds of active (unpaused) session time.
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    /// Whole minutes of active session time, as displayed.
    #[must_use]
    pub const fn display_minutes(&self) -> u64 {
        self.elapsed_seconds / timer::SECONDS_PER_MINUTE
    }

    /// Start a session: records the start moment and zeroes the elapsed
    /// counter. Only valid from idle; a running session is unaffected.
    pub fn start(&mut self, now: DateTime<Utc>) {
        if self.state != TimerState::Idle {
            return;
        }
        self.state = TimerState::Active;
        self.started_at = Some(now);
        self.elapsed_seconds = 0;
    }

    /// Toggle between active and paused. Accumulation halts while paused.
    /// No-op when idle.
    pub fn pause_or_resume(&mut self) {
        self.state = match self.state {
            TimerState::Active => TimerState::Paused,
            TimerState::Paused => TimerState::Active,
            TimerState::Idle => TimerState::Idle,
        };
    }

    /// Finish the session: stops accumulation and resets the counter and
    /// start moment so the timer is ready for the next session. Returns
    /// the final elapsed seconds.
    pub fn finish(&mut self) -> u64 {
        let total = self.elapsed_seconds;
        self.state = TimerState::Idle;
        self.elapsed_seconds = 0;
        self.started_at = None;
        total
    }

    /// Advance one second of wall time. Counts only while active.
    pub fn tick(&mut self) {
        if self.state == TimerState::Active {
            self.elapsed_seconds += timer::TICK_SECONDS;
        }
    }
}

/// Shared handle to a timer driven by [`TimerDriver`].
pub type SharedTimer = Arc<Mutex<SessionTimer>>;

/// Periodic driver that ticks a shared [`SessionTimer`] once per second.
#[derive(Debug)]
pub struct TimerDriver {
    stop_tx: watch::Sender<bool>,
    handle: Option<JoinHandle<()>>,
}

impl TimerDriver {
    /// Spawn the ticking task for `timer` on the current tokio runtime.
    #[must_use]
    pub fn spawn(timer: SharedTimer) -> Self {
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(timer::TICK_SECONDS));
            // A full second must elapse before the first count; the
            // interval's immediate first tick is consumed up front.
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            ticker.tick().await;

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        timer.lock().await.tick();
                    }
                    changed = stop_rx.changed() => {
                        if changed.is_err() || *stop_rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Stop the driver and wait for the periodic task to end. After this
    /// resolves, no further tick can be delivered.
    pub async fn stop(mut self) {
        let _ = self.stop_tx.send(true);
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TimerDriver {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
