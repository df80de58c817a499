use tracing::debug;

use crate::engine::{Clock, Renderer};
use crate::player::Player;
use crate::timeline::ReconcileDelta;

impl<R: Renderer, C: Clock> Player<R, C> {
    /// Applies one full snapshot of server paths.
    ///
    /// Paths of other radar sources are ignored. If the frame on screen goes
    /// away, playback moves on before its visual is destroyed.
    pub fn on_update<S: AsRef<str>>(&mut self, paths: &[S]) -> ReconcileDelta {
        let delta = self.state.timeline.reconcile(self.filter.filter(paths));
        if delta.is_empty() {
            return delta;
        }
        debug!(
            "Radar update: {} added, {} removed, {} stored",
            delta.added.len(),
            delta.removed.len(),
            self.state.timeline.len()
        );

        // Take the removed handles first: a replacement path can reuse the
        // timestamp of the path it replaces.
        let removed: Vec<(i64, Option<R::Visual>)> = delta
            .removed
            .iter()
            .map(|frame| (frame.timestamp, self.state.visuals.remove(&frame.timestamp)))
            .collect();

        let transition = self.transition();
        for frame in &delta.added {
            let visual = self.renderer.create(&frame.path, 0.0, transition);
            self.state.visuals.insert(frame.timestamp, visual);
        }

        for (timestamp, visual) in removed {
            if self.state.cursor == Some(timestamp) {
                self.force_advance();
            }
            if let Some(visual) = visual {
                self.renderer.destroy(visual);
            }
        }

        if !self.state.is_running() && !self.state.timeline.is_empty() {
            self.start();
        }

        delta
    }
}
