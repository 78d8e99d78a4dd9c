use crate::foundation::error::{WorkspaceError, WorkspaceResult};

pub use kurbo::{BezPath, Point, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> WorkspaceResult<Self> {
        if den == 0 {
            return Err(WorkspaceError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(WorkspaceError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    pub fn frames_to_secs(self, frames: i64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    pub fn secs_to_frames_floor(self, secs: f64) -> i64 {
        (secs * self.as_f64()).floor().max(0.0) as i64
    }
}

/// A named point on the composition timeline.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Marker {
    pub frame: i64,
    #[serde(default)]
    pub label: String,
}

/// The editable canvas/timeline context: pixel size, frame rate and length.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Composition {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
    pub frame_count: i64,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl Default for Composition {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fps: Fps { num: 16, den: 1 },
            frame_count: 81,
            markers: Vec::new(),
        }
    }
}

impl Composition {
    pub fn new(width: u32, height: u32, fps: Fps, frame_count: i64) -> WorkspaceResult<Self> {
        let comp = Self {
            width,
            height,
            fps,
            frame_count,
            markers: Vec::new(),
        };
        comp.validate()?;
        Ok(comp)
    }

    pub fn validate(&self) -> WorkspaceResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(WorkspaceError::validation(
                "Composition width and height must be > 0",
            ));
        }
        Fps::new(self.fps.num, self.fps.den)?;
        // A layer needs in < out inside [0, frame_count - 1].
        if self.frame_count < 2 {
            return Err(WorkspaceError::validation(
                "Composition frame_count must be >= 2",
            ));
        }
        Ok(())
    }

    pub fn last_frame(&self) -> i64 {
        self.frame_count - 1
    }

    pub fn size(&self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.width), f64::from(self.height))
    }

    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub fn marker_frames(&self) -> impl Iterator<Item = i64> + '_ {
        self.markers.iter().map(|m| m.frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
