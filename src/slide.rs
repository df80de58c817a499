use std::path::PathBuf;
use std::time::Duration;

use raylib::prelude::*;

/// One radar image on screen, fading between opacities.
pub struct RadarSlide {
    pub path: PathBuf,
    pub texture: Option<Texture2D>,
    pub load_failed: bool,

    opacity: f32,
    transition: f32, // seconds

    fade: Option<ease::Tween>,
    fade_timer: f32,
    fade_duration: f32,
    fade_target: f32,
}

impl RadarSlide {
    pub fn new(path: PathBuf, opacity: f32, transition: Duration) -> Self {
        Self {
            path,
            texture: None,
            load_failed: false,
            opacity,
            transition: transition.as_secs_f32(),
            fade: None,
            fade_timer: 0.0,
            fade_duration: 0.0,
            fade_target: opacity,
        }
    }

    /// Applies to the next fade; a fade already running keeps its duration.
    pub fn set_transition(&mut self, transition: Duration) {
        self.transition = transition.as_secs_f32();
    }

    pub fn fade_to(&mut self, target: f32) {
        if self.transition <= 0.0 {
            self.opacity = target;
            self.fade = None;
            return;
        }
        self.fade = Some(ease::Tween::new(ease::cubic_in_out, self.opacity, target, self.transition));
        self.fade_timer = 0.0;
        self.fade_duration = self.transition;
        self.fade_target = target;
    }

    pub fn update(&mut self, dt: f32) {
        let Some(fade) = self.fade.as_mut() else {
            return;
        };
        self.opacity = fade.apply(dt);
        self.fade_timer += dt;

        if self.fade_timer >= self.fade_duration {
            self.opacity = self.fade_target;
            self.fade = None;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, zoom: f32) {
        if self.opacity <= 0.0 {
            return;
        }
        if let Some(texture) = &self.texture {
            draw_fitted(d, texture, self.opacity, zoom);
        }
    }
}

/// Draws a texture centered, scaled to fit the window, then zoomed.
pub fn draw_fitted(d: &mut RaylibDrawHandle, texture: &Texture2D, opacity: f32, zoom: f32) {
    let screen_width = d.get_screen_width() as f32;
    let screen_height = d.get_screen_height() as f32;

    let tex_width = texture.width() as f32;
    let tex_height = texture.height() as f32;

    let fit = (screen_width / tex_width).min(screen_height / tex_height) * zoom;
    let scaled_width = tex_width * fit;
    let scaled_height = tex_height * fit;

    // Relative to the dest rectangle (ie. the center of the image)
    let origin = Vector2::new(scaled_width * 0.5, scaled_height * 0.5);

    let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    d.draw_texture_pro(
        texture,
        Rectangle::new(0.0, 0.0, tex_width, tex_height),
        Rectangle::new(screen_width * 0.5, screen_height * 0.5, scaled_width, scaled_height),
        origin,
        0.0,
        Color::new(255, 255, 255, alpha),
    );
}
