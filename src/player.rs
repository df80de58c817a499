use crate::constants::{DEFAULT_SOURCE_TAG, DEFAULT_SPEED};
use crate::engine::{Clock, Renderer};
use crate::error::RadarResult;
use crate::source::SourceFilter;
use crate::speed::validate_speed;
use crate::state::PlayerState;
use crate::timeline::Timeline;

#[derive(Debug, Clone)]
pub struct PlayerConfig {
    pub source_tag: String, // Only paths containing this tag are played
    pub initial_speed: f64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            source_tag: DEFAULT_SOURCE_TAG.to_string(),
            initial_speed: DEFAULT_SPEED,
        }
    }
}

// Updates are handled in reconciler.rs, the advance loop in scheduler.rs
// and speed changes in speed.rs.
pub struct Player<R: Renderer, C: Clock> {
    pub(crate) state: PlayerState<R::Visual>,
    pub(crate) filter: SourceFilter,
    pub(crate) renderer: R,
    pub(crate) clock: C,
}

impl<R: Renderer, C: Clock> Player<R, C> {
    pub fn new(config: PlayerConfig, renderer: R, clock: C) -> RadarResult<Self> {
        let speed = validate_speed(config.initial_speed)?;
        Ok(Self {
            state: PlayerState::new(speed),
            filter: SourceFilter::new(config.source_tag),
            renderer,
            clock,
        })
    }

    // --- Accessors ---
    pub fn state(&self) -> &PlayerState<R::Visual> {
        &self.state
    }

    pub fn timeline(&self) -> &Timeline {
        &self.state.timeline
    }

    pub fn cursor(&self) -> Option<i64> {
        self.state.cursor
    }

    pub fn speed(&self) -> f64 {
        self.state.speed
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}
