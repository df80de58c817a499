use std::time::Duration;

use tracing::{debug, info, trace};

use crate::constants::{FALLBACK_DELAY_MS, MINUTE_MS};
use crate::engine::{Clock, PlaybackStatus, Renderer, TimerId};
use crate::player::Player;
use crate::state::SchedulerState;

// --- Frame Selection and Timing ---
// A cursor that is no longer stored moves to the first frame later than it.
pub fn next_indices(times: &[i64], cursor: Option<i64>) -> Option<(usize, usize)> {
    if times.is_empty() {
        return None;
    }
    let len = times.len();
    let next = match cursor.map(|c| times.binary_search(&c)) {
        Some(Ok(current)) => (current + 1) % len,
        Some(Err(later)) => later % len,
        None => 0,
    };
    Some((next, (next + 1) % len))
}

// Wrapped or zero gaps use the fallback delay
pub fn frame_gap_ms(from: i64, to: i64) -> i64 {
    match to - from {
        gap if gap > 0 => gap,
        _ => FALLBACK_DELAY_MS,
    }
}

pub fn scaled_delay(gap_ms: i64, speed: f64) -> Duration {
    Duration::from_nanos((gap_ms as f64 * 1_000_000.0 / speed).round() as u64)
}

pub fn playback_status(now_ms: i64, cursor: i64, first: i64, last: i64) -> PlaybackStatus {
    let minutes_ago = ((now_ms - cursor) as f64 / MINUTE_MS as f64).round() as i64;
    let marker_percent = if last > first {
        (100.0 * (cursor - first) as f64 / (last - first) as f64).clamp(0.0, 100.0)
    } else {
        0.0
    };
    PlaybackStatus {
        minutes_ago,
        marker_percent,
    }
}

// --- Advance Loop ---
impl<R: Renderer, C: Clock> Player<R, C> {
    pub fn force_advance(&mut self) {
        debug!("Forced advance from {:?}", self.state.cursor);
        self.cancel_pending();
        self.advance();
    }

    pub fn on_timer(&mut self, timer: TimerId) {
        if self.state.pending_timer() != Some(timer) {
            trace!("Ignoring stale timer {:?}", timer);
            return;
        }
        self.state.scheduler = SchedulerState::Idle;
        self.advance();
    }

    pub(crate) fn start(&mut self) {
        self.state.cursor = self.state.timeline.first();
        info!(
            "Starting playback with {} frames at speed {}",
            self.state.timeline.len(),
            self.state.speed
        );
        self.advance();
    }

    fn cancel_pending(&mut self) {
        if let SchedulerState::Running(timer) = self.state.scheduler {
            self.clock.cancel(timer);
            self.state.scheduler = SchedulerState::Idle;
        }
    }

    fn enter_idle(&mut self) {
        self.cancel_pending();
        if self.state.cursor.take().is_some() {
            info!("Timeline is empty, playback idle");
        }
    }

    fn advance(&mut self) {
        self.cancel_pending();

        let times: Vec<i64> = self.state.timeline.timestamps().collect();
        let Some((next, next_next)) = next_indices(&times, self.state.cursor) else {
            self.enter_idle();
            return;
        };
        let next_time = times[next];

        // Crossfade: the surface animates both opacity changes.
        if let Some(visual) = self.state.cursor.and_then(|c| self.state.visuals.get(&c)) {
            self.renderer.set_opacity(visual, 0.0);
        }
        if let Some(visual) = self.state.visuals.get(&next_time) {
            self.renderer.set_opacity(visual, 1.0);
        }
        self.state.cursor = Some(next_time);

        let status = playback_status(
            self.clock.now_ms(),
            next_time,
            times[0],
            times[times.len() - 1],
        );
        self.renderer.show_status(&status);

        let delay = scaled_delay(frame_gap_ms(next_time, times[next_next]), self.state.speed);
        debug!("Showing frame {} for {:?}", next_time, delay);
        let timer = self.clock.schedule_after(delay);
        self.state.scheduler = SchedulerState::Running(timer);
    }
}
