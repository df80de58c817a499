use std::time::Duration;

use tracing::info;

use crate::constants::{SPEED_FORCE_THRESHOLD, TRANSITION_BASE_SECS};
use crate::engine::{Clock, Renderer};
use crate::error::{RadarError, RadarResult};
use crate::player::Player;

pub(crate) fn validate_speed(speed: f64) -> RadarResult<f64> {
    if speed.is_finite() && speed > 0.0 {
        Ok(speed)
    } else {
        Err(RadarError::InvalidSpeed(speed))
    }
}

/// Crossfade duration shared by every radar visual.
pub fn transition_duration(speed: f64) -> Duration {
    Duration::from_nanos((TRANSITION_BASE_SECS * 1e9 / speed).round() as u64)
}

impl<R: Renderer, C: Clock> Player<R, C> {
    pub fn transition(&self) -> Duration {
        transition_duration(self.state.speed)
    }

    /// Low speeds advance immediately so a stale frame does not linger for
    /// the rest of a long delay computed at the old speed.
    pub fn set_speed(&mut self, speed: f64) -> RadarResult<()> {
        let speed = validate_speed(speed)?;
        if speed < SPEED_FORCE_THRESHOLD {
            self.force_advance();
        }

        info!("Speed {} -> {}", self.state.speed, speed);
        self.state.speed = speed;

        let transition = self.transition();
        for visual in self.state.visuals.values() {
            self.renderer.set_transition(visual, transition);
        }
        Ok(())
    }
}
