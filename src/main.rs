use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use radar_loop::constants::*;
use radar_loop::{DirectorySource, FrameClock, Player, PlayerConfig, Zoom};

mod slide;
mod surface;
mod texture_loader;

use crate::surface::RadarSurface;
use crate::texture_loader::load_optional_texture;

const WHEEL_NOTCH: f64 = 120.0; // Browser wheel units per raylib wheel step

#[derive(Parser, Debug)]
#[command(name = "radar-loop", version, about = "Animated weather radar loop")]
struct Cli {
    /// Data directory laid out as `<layer>/radar/<timestamp>.png`.
    #[arg(long, default_value = "data")]
    data: PathBuf,

    /// Radar layer to play; image paths must contain this tag.
    #[arg(long, default_value = DEFAULT_SOURCE_TAG)]
    source: String,

    /// Playback speed. 1.0 plays in real time.
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: f64,

    /// Seconds between directory listings.
    #[arg(long, default_value_t = POLL_INTERVAL_SECS)]
    poll_secs: u64,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,
}

type RadarPlayer = Player<RadarSurface, FrameClock>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    info!(
        "Playing '{}' from {} at speed {}",
        cli.source,
        cli.data.display(),
        cli.speed
    );

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title("Radar Loop")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Map layers written next to the radar folder ---
    let layer_dir = cli.data.join(&cli.source);
    let base_map = load_optional_texture(&mut rl, &thread, &layer_dir.join("base_map.png"));
    let overlay_map = load_optional_texture(&mut rl, &thread, &layer_dir.join("overlay_map.png"));

    let config = PlayerConfig {
        source_tag: cli.source.clone(),
        initial_speed: cli.speed,
    };
    let mut player = Player::new(config, RadarSurface::new(base_map, overlay_map), FrameClock::new())?;
    let mut source = DirectorySource::new(&cli.data, Duration::from_secs(cli.poll_secs));
    let mut zoom = Zoom::default();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let now = Instant::now();

        // Timers first: this moves the clock to `now` for everything below.
        let due = player.clock_mut().take_due(now);
        for timer in due {
            player.on_timer(timer);
        }
        if let Some(paths) = source.poll(now) {
            player.on_update(&paths);
        }

        if rl.is_key_pressed(KeyboardKey::KEY_UP) {
            change_speed(&mut player, SPEED_STEP);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_DOWN) {
            change_speed(&mut player, 1.0 / SPEED_STEP);
        }
        let wheel = rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            let percent = zoom.on_wheel(wheel as f64 * WHEEL_NOTCH);
            debug!("Zoom {:.0}%", percent);
        }

        let dt = rl.get_frame_time();
        player.renderer_mut().load_pending(&mut rl, &thread);
        player.renderer_mut().update(dt);

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        player.renderer().draw(&mut d, zoom.scale(), player.speed());
    }

    Ok(())
}

fn change_speed(player: &mut RadarPlayer, factor: f64) {
    if let Err(e) = player.set_speed(player.speed() * factor) {
        warn!("Speed unchanged: {}", e);
    }
}
