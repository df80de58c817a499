use std::collections::HashMap;

use crate::engine::TimerId;
use crate::timeline::Timeline;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SchedulerState {
    Idle,             // No frames shown, nothing scheduled
    Running(TimerId), // Exactly one advance pending
}

/// Everything the reconciler, scheduler and speed control mutate.
#[derive(Debug)]
pub struct PlayerState<V> {
    pub timeline: Timeline,
    /// Timestamp of the frame on screen. Always a stored timestamp, or `None`.
    pub cursor: Option<i64>,
    pub speed: f64,
    pub scheduler: SchedulerState,
    /// One visual per stored frame, keyed by timestamp.
    pub visuals: HashMap<i64, V>,
}

impl<V> PlayerState<V> {
    pub fn new(speed: f64) -> Self {
        Self {
            timeline: Timeline::new(),
            cursor: None,
            speed,
            scheduler: SchedulerState::Idle,
            visuals: HashMap::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.scheduler, SchedulerState::Running(_))
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        match self.scheduler {
            SchedulerState::Running(timer) => Some(timer),
            SchedulerState::Idle => None,
        }
    }
}
