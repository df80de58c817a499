use std::time::Duration;

/// Handle of one scheduled advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// What the display shows next to the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackStatus {
    /// Age of the current frame, rounded to whole minutes.
    pub minutes_ago: i64,
    /// Position of the current frame within the timeline, 0 to 100.
    pub marker_percent: f64,
}

/// Surface that owns the visible radar images.
///
/// Opacity changes are animated by the surface itself over the visual's
/// transition duration; the player only sets targets.
pub trait Renderer {
    type Visual;

    fn create(&mut self, source: &str, opacity: f32, transition: Duration) -> Self::Visual;
    fn set_opacity(&mut self, visual: &Self::Visual, opacity: f32);
    fn set_transition(&mut self, visual: &Self::Visual, transition: Duration);
    fn destroy(&mut self, visual: Self::Visual);
    fn show_status(&mut self, status: &PlaybackStatus);
}

/// Wall time plus one-shot timers.
///
/// A cancelled timer must never be reported as fired afterwards.
pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> i64;
    fn schedule_after(&mut self, delay: Duration) -> TimerId;
    fn cancel(&mut self, timer: TimerId);
}
