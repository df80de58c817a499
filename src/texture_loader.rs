use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use raylib::prelude::*;
use tracing::{debug, warn};

use radar_loop::constants::IMAGE_EXTENSION;

// --- Load a PNG from disk straight into a GPU texture ---
pub fn load_radar_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let image = Image::load_image_from_mem(IMAGE_EXTENSION, &file_bytes)
        .map_err(|e| anyhow!("Failed to decode image {}: {}", image_path.display(), e))?;

    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    // CPU copy is no longer needed once uploaded
    drop(image);

    Ok(texture)
}

// --- Map layers are optional: missing or broken files are skipped ---
pub fn load_optional_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Option<Texture2D> {
    if !image_path.is_file() {
        debug!("No map layer at {}", image_path.display());
        return None;
    }
    match load_radar_texture(rl, thread, image_path) {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("Skipping map layer: {:#}", e);
            None
        }
    }
}
