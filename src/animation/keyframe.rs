use crate::animation::easing::BezierHandles;
use crate::foundation::core::Vec2;
use crate::foundation::error::{WorkspaceError, WorkspaceResult};

pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct KeyframeId(pub u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Linear,
    Bezier,
    Hold,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    Symmetric,
    #[default]
    Smooth,
    Corner,
}

/// Bezier control offset in normalized time/value space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Handle {
    pub x: f64,
    pub y: f64,
}

/// Everything about a keyframe except its value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeMeta {
    pub id: KeyframeId,
    pub frame: i64,
    #[serde(default)]
    pub interpolation: Interpolation,
    #[serde(default)]
    pub in_handle: Option<Handle>,
    #[serde(default)]
    pub out_handle: Option<Handle>,
    #[serde(default)]
    pub control_mode: ControlMode,
}

impl KeyframeMeta {
    pub fn new(id: KeyframeId, frame: i64) -> Self {
        Self {
            id,
            frame,
            interpolation: Interpolation::Linear,
            in_handle: None,
            out_handle: None,
            control_mode: ControlMode::Smooth,
        }
    }

    /// Writes both handles from a preset.
    pub fn set_handles(&mut self, handles: BezierHandles) {
        self.out_handle = Some(Handle {
            x: handles.out_x,
            y: handles.out_y,
        });
        self.in_handle = Some(Handle {
            x: handles.in_x,
            y: handles.in_y,
        });
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    #[serde(flatten)]
    pub meta: KeyframeMeta,
    pub value: T,
}

impl<T> Keyframe<T> {
    pub fn new(id: KeyframeId, frame: i64, value: T) -> Self {
        Self {
            meta: KeyframeMeta::new(id, frame),
            value,
        }
    }

    pub fn frame(&self) -> i64 {
        self.meta.frame
    }
}

/// Keyframes of one animatable property, kept sorted by frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct KeyframeTrack<T> {
    pub keys: Vec<Keyframe<T>>,
}

impl<T> Default for KeyframeTrack<T> {
    fn default() -> Self {
        Self { keys: Vec::new() }
    }
}

impl<T> KeyframeTrack<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> WorkspaceResult<()> {
        if !self.keys.windows(2).all(|w| w[0].frame() < w[1].frame()) {
            return Err(WorkspaceError::keyframe(
                "keys must be sorted by frame without duplicates",
            ));
        }
        Ok(())
    }

    /// Inserts a key, replacing any key already on the same frame.
    pub fn insert(&mut self, key: Keyframe<T>) {
        let idx = self.keys.partition_point(|k| k.frame() < key.frame());
        if self.keys.get(idx).is_some_and(|k| k.frame() == key.frame()) {
            self.keys[idx] = key;
        } else {
            self.keys.insert(idx, key);
        }
    }

    pub fn remove(&mut self, id: KeyframeId) -> Option<Keyframe<T>> {
        let idx = self.keys.iter().position(|k| k.meta.id == id)?;
        Some(self.keys.remove(idx))
    }

    pub fn metas_mut(&mut self) -> impl Iterator<Item = &mut KeyframeMeta> {
        self.keys.iter_mut().map(|k| &mut k.meta)
    }

    pub fn sample(&self, frame: i64) -> WorkspaceResult<T> {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(WorkspaceError::keyframe("track has no keys")),
        };

        let idx = self.keys.partition_point(|k| k.frame() <= frame);
        if idx == 0 {
            return Ok(first.value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(last.value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.frame() - a.frame();
        if denom <= 0 {
            return Ok(a.value.clone());
        }
        let t = ((frame - a.frame()) as f64) / (denom as f64);

        match a.meta.interpolation {
            Interpolation::Hold => Ok(a.value.clone()),
            Interpolation::Linear => Ok(T::lerp(&a.value, &b.value, t)),
            Interpolation::Bezier => {
                let out = a.meta.out_handle.unwrap_or(Handle { x: 0.0, y: 0.0 });
                let inn = b.meta.in_handle.unwrap_or(Handle { x: 1.0, y: 1.0 });
                let handles = BezierHandles::new(out.x, out.y, inn.x, inn.y);
                Ok(T::lerp(&a.value, &b.value, handles.ease(t)))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframe.rs"]
mod tests;
