use crate::foundation::error::{WorkspaceError, WorkspaceResult};

/// Horizontal mapping between timeline frames and track-area pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineScale {
    pub pixels_per_frame: f64,
    pub scroll_px: f64,
}

impl TimelineScale {
    pub fn new(pixels_per_frame: f64) -> WorkspaceResult<Self> {
        if !pixels_per_frame.is_finite() || pixels_per_frame <= 0.0 {
            return Err(WorkspaceError::validation(
                "pixels_per_frame must be finite and > 0",
            ));
        }
        Ok(Self {
            pixels_per_frame,
            scroll_px: 0.0,
        })
    }

    pub fn with_scroll(mut self, scroll_px: f64) -> Self {
        self.scroll_px = scroll_px;
        self
    }

    pub fn frame_to_px(self, frame: i64) -> f64 {
        (frame as f64) * self.pixels_per_frame - self.scroll_px
    }

    pub fn px_to_frame(self, px: f64) -> i64 {
        ((px + self.scroll_px) / self.pixels_per_frame).round() as i64
    }

    /// Playhead frame for a click at `px`, clamped into `[0, frame_count - 1]`.
    pub fn scrub_frame(self, px: f64, frame_count: i64) -> i64 {
        self.px_to_frame(px).clamp(0, (frame_count - 1).max(0))
    }

    /// Zoom that fits `frame_count` frames into `width_px`.
    pub fn fit(width_px: f64, frame_count: i64) -> WorkspaceResult<Self> {
        if frame_count <= 0 {
            return Err(WorkspaceError::validation("frame_count must be > 0"));
        }
        Self::new(width_px / frame_count as f64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/scale.rs"]
mod tests;
