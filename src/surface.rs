use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

use raylib::prelude::*;
use tracing::warn;

use radar_loop::{PlaybackStatus, Renderer};

use crate::slide::{RadarSlide, draw_fitted};
use crate::texture_loader::load_radar_texture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlideId(u64);

/// Raylib window contents: map layers, radar slides and the status overlay.
pub struct RadarSurface {
    slides: BTreeMap<SlideId, RadarSlide>,
    next_id: u64,
    status: Option<PlaybackStatus>,
    base_map: Option<Texture2D>,
    overlay_map: Option<Texture2D>,
}

impl RadarSurface {
    pub fn new(base_map: Option<Texture2D>, overlay_map: Option<Texture2D>) -> Self {
        Self {
            slides: BTreeMap::new(),
            next_id: 0,
            status: None,
            base_map,
            overlay_map,
        }
    }

    /// Textures can only be created on the render thread, so new slides are
    /// loaded here rather than in `create`.
    pub fn load_pending(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for slide in self.slides.values_mut() {
            if slide.texture.is_some() || slide.load_failed {
                continue;
            }
            match load_radar_texture(rl, thread, &slide.path) {
                Ok(texture) => slide.texture = Some(texture),
                Err(e) => {
                    warn!("Radar frame will stay blank: {:#}", e);
                    slide.load_failed = true;
                }
            }
        }
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.values_mut() {
            slide.update(dt);
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, zoom: f32, speed: f64) {
        if let Some(base_map) = &self.base_map {
            draw_fitted(d, base_map, 1.0, zoom);
        }
        for slide in self.slides.values() {
            slide.draw(d, zoom);
        }
        if let Some(overlay_map) = &self.overlay_map {
            draw_fitted(d, overlay_map, 1.0, zoom);
        }
        self.draw_status(d, speed);
    }

    fn draw_status(&self, d: &mut RaylibDrawHandle, speed: f64) {
        let screen_width = d.get_screen_width();
        let screen_height = d.get_screen_height();

        d.draw_text(&format!("speed x{:.0}", speed), 20, 50, 20, Color::LIGHTGRAY);

        let Some(status) = self.status else {
            d.draw_text("Waiting for radar images...", 20, 20, 24, Color::WHITE);
            return;
        };
        d.draw_text(&format!("{} min ago", status.minutes_ago), 20, 20, 24, Color::WHITE);

        // Timeline bar with the current frame's marker
        let bar_x = 20;
        let bar_width = screen_width - 40;
        let bar_y = screen_height - 30;
        d.draw_rectangle(bar_x, bar_y, bar_width, 6, Color::DARKGRAY);
        let marker_x = bar_x + (bar_width as f64 * status.marker_percent / 100.0) as i32;
        d.draw_rectangle(marker_x - 2, bar_y - 6, 4, 18, Color::RAYWHITE);
    }
}

impl Renderer for RadarSurface {
    type Visual = SlideId;

    fn create(&mut self, source: &str, opacity: f32, transition: Duration) -> SlideId {
        self.next_id += 1;
        let id = SlideId(self.next_id);
        self.slides
            .insert(id, RadarSlide::new(PathBuf::from(source), opacity, transition));
        id
    }

    fn set_opacity(&mut self, visual: &SlideId, opacity: f32) {
        if let Some(slide) = self.slides.get_mut(visual) {
            slide.fade_to(opacity);
        }
    }

    fn set_transition(&mut self, visual: &SlideId, transition: Duration) {
        if let Some(slide) = self.slides.get_mut(visual) {
            slide.set_transition(transition);
        }
    }

    fn destroy(&mut self, visual: SlideId) {
        // Dropping the slide unloads its texture.
        self.slides.remove(&visual);
    }

    fn show_status(&mut self, status: &PlaybackStatus) {
        self.status = Some(*status);
    }
}
