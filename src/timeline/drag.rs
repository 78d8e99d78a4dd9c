//! Layer-bar drag and resize gestures.
//!
//! A gesture is an immutable snapshot taken at pointer-down. Every pointer move recomputes the
//! span from that snapshot and the total pointer delta, so rounding never accumulates.

use crate::foundation::error::{WorkspaceError, WorkspaceResult};
use crate::foundation::settings::SNAP_TOLERANCE_FRAMES;
use crate::timeline::snap::SnapTargets;
use crate::timeline::span::LayerSpan;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragMode {
    /// Drag the bar body; both bounds move together.
    Move,
    /// Drag the left handle; only `in_point` moves.
    ResizeLeft,
    /// Drag the right handle; only `out_point` moves.
    ResizeRight,
}

/// Whole frames covered by a pointer delta of `dx` pixels.
pub fn frames_delta(dx: f64, pixels_per_frame: f64) -> i64 {
    (dx / pixels_per_frame).round() as i64
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragGesture {
    mode: DragMode,
    start_x: f64,
    start: LayerSpan,
    pixels_per_frame: f64,
    frame_count: i64,
    tolerance: i64,
}

impl DragGesture {
    pub fn begin(
        mode: DragMode,
        pointer_x: f64,
        start: LayerSpan,
        pixels_per_frame: f64,
        frame_count: i64,
    ) -> WorkspaceResult<Self> {
        if !pixels_per_frame.is_finite() || pixels_per_frame <= 0.0 {
            return Err(WorkspaceError::validation(
                "pixels_per_frame must be finite and > 0",
            ));
        }
        if !pointer_x.is_finite() {
            return Err(WorkspaceError::validation("pointer_x must be finite"));
        }
        if frame_count < 2 {
            return Err(WorkspaceError::validation("frame_count must be >= 2"));
        }
        start.validate_within(frame_count)?;
        Ok(Self {
            mode,
            start_x: pointer_x,
            start,
            pixels_per_frame,
            frame_count,
            tolerance: SNAP_TOLERANCE_FRAMES,
        })
    }

    pub fn with_tolerance(mut self, tolerance: i64) -> Self {
        self.tolerance = tolerance.max(0);
        self
    }

    pub fn mode(&self) -> DragMode {
        self.mode
    }

    pub fn start_span(&self) -> LayerSpan {
        self.start
    }

    /// Span for the pointer at `pointer_x`. `snap` is `Some` while the snap modifier is held.
    pub fn update(&self, pointer_x: f64, snap: Option<&SnapTargets>) -> LayerSpan {
        // Anything past the composition length clamps the same way.
        let delta = frames_delta(pointer_x - self.start_x, self.pixels_per_frame)
            .clamp(-self.frame_count, self.frame_count);
        let last = self.frame_count - 1;
        let LayerSpan {
            in_point: start_in,
            out_point: start_out,
        } = self.start;

        match self.mode {
            DragMode::Move => {
                let duration = self.start.duration();
                let mut new_in = start_in + delta;
                if let Some(targets) = snap {
                    new_in = self.snap_move(targets, new_in, duration);
                }

                let mut new_in = new_in.max(0);
                let mut new_out = new_in.saturating_add(duration);
                if new_out > last {
                    new_out = last;
                    new_in = (new_out - duration).max(0);
                }
                LayerSpan {
                    in_point: new_in,
                    out_point: new_out,
                }
            }
            DragMode::ResizeLeft => {
                let mut new_in = start_in + delta;
                if let Some(snapped) = snap.and_then(|t| t.nearest(new_in, self.tolerance)) {
                    new_in = snapped;
                }
                LayerSpan {
                    in_point: new_in.clamp(0, start_out - 1),
                    out_point: start_out,
                }
            }
            DragMode::ResizeRight => {
                let mut new_out = start_out + delta;
                if let Some(snapped) = snap.and_then(|t| t.nearest(new_out, self.tolerance)) {
                    new_out = snapped;
                }
                LayerSpan {
                    in_point: start_in,
                    out_point: new_out.clamp(start_in + 1, last),
                }
            }
        }
    }

    /// Snaps whichever edge lands closer to a target and returns the resulting in-point.
    fn snap_move(&self, targets: &SnapTargets, new_in: i64, duration: i64) -> i64 {
        let new_out = new_in + duration;
        let snap_in = targets.nearest(new_in, self.tolerance);
        let snap_out = targets.nearest(new_out, self.tolerance);

        match (snap_in, snap_out) {
            (Some(si), Some(so)) => {
                if si.abs_diff(new_in) <= so.abs_diff(new_out) {
                    si
                } else {
                    so.saturating_sub(duration)
                }
            }
            (Some(si), None) => si,
            (None, Some(so)) => so.saturating_sub(duration),
            (None, None) => new_in,
        }
    }
}

/// Global pointer listeners a drag holds between press and release.
pub trait PointerCapture {
    fn acquire(&mut self);
    fn release(&mut self);
}

/// A drag in progress. The pointer capture is acquired on `begin` and released exactly once,
/// on `finish` or when the session is dropped.
pub struct DragSession<'c, C: PointerCapture> {
    capture: &'c mut C,
    gesture: DragGesture,
    current: LayerSpan,
}

impl<'c, C: PointerCapture> DragSession<'c, C> {
    pub fn begin(capture: &'c mut C, gesture: DragGesture) -> Self {
        capture.acquire();
        tracing::debug!(mode = ?gesture.mode, "drag session started");
        Self {
            capture,
            current: gesture.start,
            gesture,
        }
    }

    pub fn update(&mut self, pointer_x: f64, snap: Option<&SnapTargets>) -> LayerSpan {
        self.current = self.gesture.update(pointer_x, snap);
        self.current
    }

    pub fn current(&self) -> LayerSpan {
        self.current
    }

    /// Ends the gesture and returns the last computed span.
    pub fn finish(self) -> LayerSpan {
        self.current
    }
}

impl<C: PointerCapture> Drop for DragSession<'_, C> {
    fn drop(&mut self) {
        self.capture.release();
        tracing::debug!(
            in_point = self.current.in_point,
            out_point = self.current.out_point,
            "drag session ended"
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/drag.rs"]
mod tests;
