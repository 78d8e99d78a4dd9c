use kurbo::Size;

use crate::foundation::core::{Composition, Point};
use crate::foundation::settings::{OVERLAY_SNAP_TOLERANCE_PX, WorkspaceSettings};
use crate::overlay::guides::{GuideSet, Orientation};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapResult {
    pub point: Point,
    pub snapped_x: bool,
    pub snapped_y: bool,
}

/// Snaps a dragged object's composition-space position to grid, guides, center and edges.
///
/// Axes snap independently. Candidates are checked in that order and every candidate within
/// tolerance of the unsnapped coordinate overwrites the axis result, so edges beat the center,
/// the center beats guides, and guides beat the grid.
#[derive(Clone, Copy, Debug)]
pub struct OverlaySnapper<'a> {
    size: Size,
    center: Point,
    grid_size: Option<f64>,
    guides: &'a GuideSet,
    tolerance: f64,
}

impl<'a> OverlaySnapper<'a> {
    pub fn new(composition: &Composition, guides: &'a GuideSet) -> Self {
        Self {
            size: composition.size(),
            center: composition.center(),
            grid_size: None,
            guides,
            tolerance: OVERLAY_SNAP_TOLERANCE_PX,
        }
    }

    pub fn from_settings(
        composition: &Composition,
        guides: &'a GuideSet,
        settings: &WorkspaceSettings,
    ) -> Self {
        let snapper =
            Self::new(composition, guides).with_tolerance(settings.overlay_snap_tolerance_px);
        if settings.grid_visible {
            snapper.with_grid(settings.grid_size_px)
        } else {
            snapper
        }
    }

    /// Enables grid snapping; non-positive sizes leave it off.
    pub fn with_grid(mut self, cell: f64) -> Self {
        self.grid_size = (cell.is_finite() && cell > 0.0).then_some(cell);
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.max(0.0);
        self
    }

    pub fn snap(&self, point: Point) -> SnapResult {
        let (x, snapped_x) = self.snap_axis(
            point.x,
            self.center.x,
            self.size.width,
            Orientation::Vertical,
        );
        let (y, snapped_y) = self.snap_axis(
            point.y,
            self.center.y,
            self.size.height,
            Orientation::Horizontal,
        );
        if snapped_x || snapped_y {
            tracing::trace!(x, y, snapped_x, snapped_y, "overlay snap");
        }
        SnapResult {
            point: Point::new(x, y),
            snapped_x,
            snapped_y,
        }
    }

    fn snap_axis(
        &self,
        value: f64,
        center: f64,
        extent: f64,
        guide_orientation: Orientation,
    ) -> (f64, bool) {
        let mut out = value;
        let mut snapped = false;
        let mut consider = |candidate: f64| {
            if (candidate - value).abs() <= self.tolerance {
                out = candidate;
                snapped = true;
            }
        };

        if let Some(cell) = self.grid_size {
            consider(((value / cell).floor() + 0.5) * cell);
        }
        for position in self.guides.positions(guide_orientation) {
            consider(position);
        }
        consider(center);
        consider(0.0);
        consider(extent);

        (out, snapped)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/snap.rs"]
mod tests;
