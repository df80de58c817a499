#![forbid(unsafe_code)]

//! Animated radar loop: a live list of timestamped radar images played back
//! in time order with crossfades, at an adjustable speed.

pub mod clock;
pub mod constants;
pub mod engine;
pub mod error;
pub mod frame;
pub mod player;
mod reconciler;
pub mod scheduler;
pub mod source;
pub mod speed;
pub mod state;
pub mod timeline;
pub mod zoom;

pub use clock::FrameClock;
pub use engine::{Clock, PlaybackStatus, Renderer, TimerId};
pub use error::{RadarError, RadarResult};
pub use frame::Frame;
pub use player::{Player, PlayerConfig};
pub use source::{DirectorySource, SourceFilter};
pub use state::SchedulerState;
pub use timeline::{ReconcileDelta, Timeline};
pub use zoom::Zoom;
