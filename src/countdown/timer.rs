use std::time::Duration;

use bevy::prelude::*;

/// Count shown by a fresh countdown.
pub const MAX_COUNT: i32 = 5;

/// Delay between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// One step of a running countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// The value to display for this tick.
    Tick(i32),
    TimesUp,
}

pub type TimesUpCallback = Box<dyn FnMut() + Send + Sync>;

/// Repeating countdown: shows `max_count` on start, counts down once per
/// interval, and fires the timeout one interval after showing zero.
pub struct CountdownTimer {
    max_count: i32,
    count: i32,
    running: bool,
    interval: Timer,
    on_times_up: Option<TimesUpCallback>,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self::new(MAX_COUNT, TICK_INTERVAL)
    }
}

impl CountdownTimer {
    /// A negative `max_count` is treated as zero.
    pub fn new(max_count: i32, interval: Duration) -> Self {
        let max_count = max_count.max(0);
        Self {
            max_count,
            count: max_count,
            running: false,
            interval: Timer::new(interval, TimerMode::Repeating),
            on_times_up: None,
        }
    }

    pub fn on_times_up(mut self, f: impl FnMut() + Send + Sync + 'static) -> Self {
        self.on_times_up = Some(Box::new(f));
        self
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    pub fn max_count(&self) -> i32 {
        self.max_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Time left until the timeout fires, or zero when stopped.
    pub fn remaining(&self) -> Duration {
        if !self.running {
            return Duration::ZERO;
        }
        let pending_ticks = u32::try_from(self.count.saturating_add(1)).unwrap_or(0);
        self.interval
            .duration()
            .checked_mul(pending_ticks)
            .and_then(|pending| pending.checked_add(self.interval.remaining()))
            .unwrap_or(Duration::MAX)
    }

    /// Restart from `max_count` and show it immediately.
    pub fn start(&mut self) -> CountdownStep {
        self.reset();
        self.running = true;
        self.tick()
    }

    /// Stop without firing the timeout.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Drop any pending tick and restore the count.
    pub fn reset(&mut self) {
        self.running = false;
        self.count = self.max_count;
        self.interval.reset();
    }

    fn tick(&mut self) -> CountdownStep {
        let shown = self.count;
        self.count = self.count.saturating_sub(1);
        CountdownStep::Tick(shown)
    }

    /// Feed elapsed time and return every step that fell due, in order.
    pub fn advance(&mut self, delta: Duration) -> Vec<CountdownStep> {
        if !self.running {
            return Vec::new();
        }

        self.interval.tick(delta);
        let due = self.interval.times_finished_this_tick();

        let mut steps = Vec::new();
        for _ in 0..due {
            if !self.running {
                break;
            }
            if self.count < 0 {
                if let Some(callback) = self.on_times_up.as_mut() {
                    callback();
                }
                self.reset();
                steps.push(CountdownStep::TimesUp);
            } else {
                steps.push(self.tick());
            }
        }
        steps
    }
}

impl std::fmt::Debug for CountdownTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("max_count", &self.max_count)
            .field("count", &self.count)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

/// Render a duration as `mm:ss`.
pub fn format_clock(duration: Duration) -> String {
    let total = duration.as_secs();
    format!("{:02}:{:02}", (total / 60) % 60, total % 60)
}
