use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use crate::frame::Frame;

/// Frames added and removed by one reconciliation, both ascending by timestamp.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileDelta {
    pub added: Vec<Frame>,
    pub removed: Vec<Frame>,
}

impl ReconcileDelta {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Timestamp -> image path, always ascending by timestamp.
#[derive(Debug, Default, Clone)]
pub struct Timeline {
    frames: BTreeMap<i64, String>,
    // Unparseable paths, skipped until they leave the listing
    rejected: HashSet<String>,
    // Paths whose timestamp another path owns, retried every update
    shadowed: HashSet<String>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the stored set match `latest` exactly.
    ///
    /// Paths whose file name is not a timestamp are logged once and skipped.
    /// So is a path that maps onto a timestamp another stored path owns.
    pub fn reconcile<'a, I>(&mut self, latest: I) -> ReconcileDelta
    where
        I: IntoIterator<Item = &'a str>,
    {
        let latest: HashSet<&str> = latest.into_iter().collect();

        let stale: Vec<i64> = self
            .frames
            .iter()
            .filter(|(_, path)| !latest.contains(path.as_str()))
            .map(|(timestamp, _)| *timestamp)
            .collect();

        let mut delta = ReconcileDelta::default();
        for timestamp in stale {
            if let Some(path) = self.frames.remove(&timestamp) {
                delta.removed.push(Frame { timestamp, path });
            }
        }

        self.rejected.retain(|path| latest.contains(path.as_str()));
        self.shadowed.retain(|path| latest.contains(path.as_str()));

        let known: HashSet<&str> = self.frames.values().map(String::as_str).collect();
        let candidates: Vec<&str> = latest
            .iter()
            .copied()
            .filter(|path| !known.contains(path) && !self.rejected.contains(*path))
            .collect();

        let mut added: Vec<Frame> = Vec::new();
        for path in candidates {
            match Frame::from_path(path) {
                Ok(frame) => added.push(frame),
                Err(e) => {
                    warn!("Skipping radar image: {}", e);
                    self.rejected.insert(path.to_string());
                }
            }
        }
        added.sort_by(|a, b| (a.timestamp, &a.path).cmp(&(b.timestamp, &b.path)));

        for frame in added {
            if let Some(owner) = self.frames.get(&frame.timestamp) {
                if self.shadowed.insert(frame.path.clone()) {
                    warn!(
                        "Skipping {}: timestamp {} already belongs to {}",
                        frame.path, frame.timestamp, owner
                    );
                } else {
                    debug!("Still skipping {}", frame.path);
                }
                continue;
            }
            self.shadowed.remove(&frame.path);
            self.frames.insert(frame.timestamp, frame.path.clone());
            delta.added.push(frame);
        }

        delta
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn contains(&self, timestamp: i64) -> bool {
        self.frames.contains_key(&timestamp)
    }

    pub fn first(&self) -> Option<i64> {
        self.frames.keys().next().copied()
    }

    pub fn last(&self) -> Option<i64> {
        self.frames.keys().next_back().copied()
    }

    pub fn timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        self.frames.keys().copied()
    }

    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.frames.iter().map(|(timestamp, path)| Frame {
            timestamp: *timestamp,
            path: path.clone(),
        })
    }
}
