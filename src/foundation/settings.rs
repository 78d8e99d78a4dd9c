use std::path::Path;

use crate::foundation::error::{WorkspaceError, WorkspaceResult};

/// Snap distance for timeline bounds, in frames.
pub const SNAP_TOLERANCE_FRAMES: i64 = 5;
/// Snap distance for viewport overlays, in composition pixels.
pub const OVERLAY_SNAP_TOLERANCE_PX: f64 = 10.0;
/// Default grid cell edge, in composition pixels.
pub const DEFAULT_GRID_SIZE_PX: f64 = 50.0;

/// Workspace view settings.
///
/// Every field has a default, so a settings file only needs the keys it overrides:
///
/// ```json
/// { "grid_visible": true, "grid_size_px": 32.0 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct WorkspaceSettings {
    pub timeline_snap_tolerance_frames: i64,
    pub overlay_snap_tolerance_px: f64,
    pub grid_visible: bool,
    pub grid_size_px: f64,
    pub pixels_per_frame: f64,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            timeline_snap_tolerance_frames: SNAP_TOLERANCE_FRAMES,
            overlay_snap_tolerance_px: OVERLAY_SNAP_TOLERANCE_PX,
            grid_visible: false,
            grid_size_px: DEFAULT_GRID_SIZE_PX,
            pixels_per_frame: 10.0,
        }
    }
}

impl WorkspaceSettings {
    pub fn from_json(json: &str) -> WorkspaceResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_path(path: &Path) -> WorkspaceResult<Self> {
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading workspace settings");
        Self::from_json(&json)
    }

    pub fn validate(&self) -> WorkspaceResult<()> {
        if self.timeline_snap_tolerance_frames < 0 {
            return Err(WorkspaceError::validation(
                "timeline_snap_tolerance_frames must be >= 0",
            ));
        }
        if !self.overlay_snap_tolerance_px.is_finite() || self.overlay_snap_tolerance_px < 0.0 {
            return Err(WorkspaceError::validation(
                "overlay_snap_tolerance_px must be finite and >= 0",
            ));
        }
        if !self.grid_size_px.is_finite() || self.grid_size_px <= 0.0 {
            return Err(WorkspaceError::validation("grid_size_px must be > 0"));
        }
        if !self.pixels_per_frame.is_finite() || self.pixels_per_frame <= 0.0 {
            return Err(WorkspaceError::validation("pixels_per_frame must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/settings.rs"]
mod tests;
