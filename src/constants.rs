pub const MINUTE_MS: i64 = 60 * 1000;          // One minute in milliseconds
pub const FALLBACK_DELAY_MS: i64 = 5 * MINUTE_MS; // In-world gap used when the next gap wraps around

pub const SPEED_FORCE_THRESHOLD: f64 = 500.0; // Speeds below this force an immediate advance
pub const TRANSITION_BASE_SECS: f64 = 200.0;  // Crossfade duration is this divided by the speed
pub const DEFAULT_SPEED: f64 = 300.0;         // 5 minutes of radar time per second of playback

pub const IMAGE_EXTENSION: &str = ".png";
pub const DEFAULT_SOURCE_TAG: &str = "tbos";

pub const ZOOM_WHEEL_SCALE: f64 = 1000.0;    // Wheel units per e-fold of zoom

pub const RENDER_WIDTH: i32 = 1280;           // Initial window width
pub const RENDER_HEIGHT: i32 = 960;           // Initial window height
pub const FPS: u32 = 60;                      // Frames per second
pub const POLL_INTERVAL_SECS: u64 = 60;       // How often the radar directory is listed
pub const SPEED_STEP: f64 = 1.25;             // Speed multiplier per key press
