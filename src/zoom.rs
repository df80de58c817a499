use crate::constants::ZOOM_WHEEL_SCALE;

/// Mouse-wheel zoom: `100 * e^(accumulated / 1000)` percent.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zoom {
    accumulated: f64,
}

impl Zoom {
    /// Adds a wheel delta (browser units, 120 per notch) and returns the new percentage.
    pub fn on_wheel(&mut self, delta: f64) -> f64 {
        self.accumulated += delta / ZOOM_WHEEL_SCALE;
        self.percent()
    }

    pub fn percent(&self) -> f64 {
        100.0 * self.accumulated.exp()
    }

    pub fn scale(&self) -> f32 {
        self.accumulated.exp() as f32
    }
}
