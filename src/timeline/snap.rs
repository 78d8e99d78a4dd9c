use crate::timeline::span::LayerSpan;

/// Frames a dragged layer edge can snap to, sorted ascending and deduplicated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SnapTargets {
    frames: Vec<i64>,
}

impl SnapTargets {
    /// Gathers the playhead, the in/out points of every other layer, frame 0, the last frame
    /// and the composition markers.
    pub fn collect(
        playhead: i64,
        other_spans: impl IntoIterator<Item = LayerSpan>,
        frame_count: i64,
        markers: impl IntoIterator<Item = i64>,
    ) -> Self {
        let mut frames = vec![playhead, 0, frame_count - 1];
        for span in other_spans {
            frames.push(span.in_point);
            frames.push(span.out_point);
        }
        frames.extend(markers);
        Self::from_frames(frames)
    }

    pub fn from_frames(mut frames: Vec<i64>) -> Self {
        frames.sort_unstable();
        frames.dedup();
        Self { frames }
    }

    pub fn frames(&self) -> &[i64] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Nearest target within `tolerance` frames of `frame`. Equal distances pick the lower
    /// target.
    pub fn nearest(&self, frame: i64, tolerance: i64) -> Option<i64> {
        let idx = self.frames.partition_point(|&t| t < frame);
        let below = idx.checked_sub(1).map(|i| self.frames[i]);
        let at_or_above = self.frames.get(idx).copied();

        let best = match (below, at_or_above) {
            (Some(b), Some(a)) => {
                if frame.abs_diff(b) <= a.abs_diff(frame) {
                    b
                } else {
                    a
                }
            }
            (Some(b), None) => b,
            (None, Some(a)) => a,
            (None, None) => return None,
        };
        let tolerance = u64::try_from(tolerance).ok()?;
        (best.abs_diff(frame) <= tolerance).then_some(best)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/snap.rs"]
mod tests;
