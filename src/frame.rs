use chrono::{DateTime, NaiveDateTime};

use crate::constants::IMAGE_EXTENSION;
use crate::error::{RadarError, RadarResult};

/// One timestamped radar image. Identity is the timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Path the image is served from.
    pub path: String,
}

impl Frame {
    pub fn from_path(path: &str) -> RadarResult<Self> {
        Ok(Self {
            timestamp: timestamp_from_path(path)?,
            path: path.to_string(),
        })
    }
}

/// Derives a frame timestamp from the file name, e.g.
/// `data/tbos/radar/2024-01-01T00:05:00+00:00.png`.
///
/// Names without an offset are read as UTC.
pub fn timestamp_from_path(path: &str) -> RadarResult<i64> {
    // rsplit always yields at least one item
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    let stem = name.strip_suffix(IMAGE_EXTENSION).ok_or_else(|| {
        RadarError::invalid_timestamp(path, format!("missing {IMAGE_EXTENSION} extension"))
    })?;

    if let Ok(with_offset) = DateTime::parse_from_rfc3339(stem) {
        return Ok(with_offset.timestamp_millis());
    }

    stem.parse::<NaiveDateTime>()
        .map(|naive| naive.and_utc().timestamp_millis())
        .map_err(|e| RadarError::invalid_timestamp(path, e))
}
