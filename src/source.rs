use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::constants::IMAGE_EXTENSION;

// --- Source Tag Filter ---
#[derive(Debug, Clone)]
pub struct SourceFilter {
    tag: String,
}

impl SourceFilter {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn matches(&self, path: &str) -> bool {
        path.contains(self.tag.as_str())
    }

    pub fn filter<'a, S: AsRef<str>>(&'a self, paths: &'a [S]) -> impl Iterator<Item = &'a str> {
        paths.iter().map(|path| path.as_ref()).filter(|path| self.matches(path))
    }
}

// --- List <root>/*/radar/*.png, Sorted ---
pub fn list_radar_images(root: &Path) -> Result<Vec<String>> {
    let mut paths = Vec::new();
    let layers = fs::read_dir(root)
        .with_context(|| format!("Failed to read directory {}", root.display()))?;

    for layer in layers {
        let layer = layer.context("Failed to read directory entry")?;
        let radar_dir = layer.path().join("radar");
        if !radar_dir.is_dir() {
            continue;
        }
        let entries = fs::read_dir(&radar_dir)
            .with_context(|| format!("Failed to read directory {}", radar_dir.display()))?;
        for entry in entries {
            let path = entry.context("Failed to read directory entry")?.path();
            if path.is_file() && path.to_string_lossy().ends_with(IMAGE_EXTENSION) {
                paths.push(path.to_string_lossy().into_owned());
            }
        }
    }
    paths.sort();
    Ok(paths)
}

// --- Polling Subscription ---
// Emits full snapshots: the first poll always, later ones only on change.
pub struct DirectorySource {
    root: PathBuf,
    interval: Duration,
    last_poll: Option<Instant>,
    last_listing: Option<Vec<String>>,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>, interval: Duration) -> Self {
        Self {
            root: root.into(),
            interval,
            last_poll: None,
            last_listing: None,
        }
    }

    pub fn poll(&mut self, now: Instant) -> Option<Vec<String>> {
        if let Some(last) = self.last_poll {
            if now.duration_since(last) < self.interval {
                return None;
            }
        }
        self.last_poll = Some(now);

        let listing = match list_radar_images(&self.root) {
            Ok(listing) => listing,
            Err(e) => {
                warn!("Radar listing failed: {:#}", e);
                return None;
            }
        };
        if self.last_listing.as_ref() == Some(&listing) {
            return None;
        }
        debug!("Radar listing changed: {} images", listing.len());
        self.last_listing = Some(listing.clone());
        Some(listing)
    }
}
