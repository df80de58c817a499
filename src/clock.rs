use std::time::{Duration, Instant};

use chrono::Utc;

use crate::engine::{Clock, TimerId};

/// Real clock whose timers fire when the frame loop polls them.
///
/// Delays count from the instant of the last `take_due`, so scheduling and
/// firing read the same frame time.
#[derive(Debug)]
pub struct FrameClock {
    now: Instant,
    next_id: u64,
    timers: Vec<(TimerId, Instant)>,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            now: Instant::now(),
            next_id: 0,
            timers: Vec::new(),
        }
    }

    /// Moves the clock to `now`, then removes and returns every timer due,
    /// earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<TimerId> {
        self.now = self.now.max(now);
        let now = self.now;
        let mut due: Vec<(TimerId, Instant)> = Vec::new();
        self.timers.retain(|&(id, at)| {
            if at <= now {
                due.push((id, at));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, at)| at);
        due.into_iter().map(|(id, _)| id).collect()
    }

    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    fn schedule_at(&mut self, at: Instant) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.timers.push((id, at));
        id
    }
}

impl Clock for FrameClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn schedule_after(&mut self, delay: Duration) -> TimerId {
        self.schedule_at(self.now + delay)
    }

    fn cancel(&mut self, timer: TimerId) {
        self.timers.retain(|&(id, _)| id != timer);
    }
}
