#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use radar_loop::{Clock, PlaybackStatus, Player, PlayerConfig, Renderer, TimerId};

pub const T0: i64 = 1_704_067_200_000; // 2024-01-01T00:00:00Z
pub const MINUTE: i64 = 60_000;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Create { visual: u32, source: String, opacity: f32, transition: Duration },
    Opacity { visual: u32, opacity: f32 },
    Transition { visual: u32, transition: Duration },
    Destroy { visual: u32 },
    Status(PlaybackStatus),
}

/// Records every call; keeps the live visuals and their last opacity.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    next_visual: u32,
    pub events: Vec<Event>,
    pub live: HashMap<u32, String>,
    pub opacity: HashMap<u32, f32>,
}

impl RecordingSurface {
    pub fn visual_for(&self, source: &str) -> Option<u32> {
        self.live
            .iter()
            .find(|(_, s)| s.as_str() == source)
            .map(|(v, _)| *v)
    }

    pub fn opacity_of(&self, source: &str) -> Option<f32> {
        self.visual_for(source).and_then(|v| self.opacity.get(&v).copied())
    }

    pub fn last_status(&self) -> Option<PlaybackStatus> {
        self.events.iter().rev().find_map(|e| match e {
            Event::Status(status) => Some(*status),
            _ => None,
        })
    }
}

impl Renderer for RecordingSurface {
    type Visual = u32;

    fn create(&mut self, source: &str, opacity: f32, transition: Duration) -> u32 {
        self.next_visual += 1;
        let visual = self.next_visual;
        self.live.insert(visual, source.to_string());
        self.opacity.insert(visual, opacity);
        self.events.push(Event::Create {
            visual,
            source: source.to_string(),
            opacity,
            transition,
        });
        visual
    }

    fn set_opacity(&mut self, visual: &u32, opacity: f32) {
        assert!(self.live.contains_key(visual), "opacity set on destroyed visual");
        self.opacity.insert(*visual, opacity);
        self.events.push(Event::Opacity { visual: *visual, opacity });
    }

    fn set_transition(&mut self, visual: &u32, transition: Duration) {
        self.events.push(Event::Transition { visual: *visual, transition });
    }

    fn destroy(&mut self, visual: u32) {
        assert!(self.live.remove(&visual).is_some(), "visual destroyed twice");
        self.opacity.remove(&visual);
        self.events.push(Event::Destroy { visual });
    }

    fn show_status(&mut self, status: &PlaybackStatus) {
        self.events.push(Event::Status(*status));
    }
}

/// Manual clock: timers only fire when a test says so.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub now: i64,
    next_timer: u64,
    pub pending: Vec<(TimerId, Duration)>,
    pub cancelled: Vec<TimerId>,
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now
    }

    fn schedule_after(&mut self, delay: Duration) -> TimerId {
        self.next_timer += 1;
        let timer = TimerId(self.next_timer);
        self.pending.push((timer, delay));
        timer
    }

    fn cancel(&mut self, timer: TimerId) {
        self.pending.retain(|(t, _)| *t != timer);
        self.cancelled.push(timer);
    }
}

pub type TestPlayer = Player<RecordingSurface, ManualClock>;

pub fn player(source_tag: &str, speed: f64) -> TestPlayer {
    let config = PlayerConfig {
        source_tag: source_tag.to_string(),
        initial_speed: speed,
    };
    Player::new(config, RecordingSurface::default(), ManualClock::default()).unwrap()
}

/// `a/2024-01-01T00:MM:00.png`
pub fn path_at(minute: u32) -> String {
    format!("a/2024-01-01T{:02}:{:02}:00.png", minute / 60, minute % 60)
}

pub fn pending(player: &TestPlayer) -> (TimerId, Duration) {
    let pending = &player.clock().pending;
    assert_eq!(pending.len(), 1, "expected exactly one pending advance");
    pending[0]
}

/// Fires the pending advance.
pub fn fire(player: &mut TestPlayer) {
    let (timer, _) = pending(player);
    player.clock_mut().pending.clear();
    player.on_timer(timer);
}

pub fn assert_cursor_valid(player: &TestPlayer) {
    if let Some(cursor) = player.cursor() {
        assert!(
            player.timeline().contains(cursor),
            "cursor {cursor} is not a stored frame"
        );
    }
}
