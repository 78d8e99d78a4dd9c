use crate::foundation::core::{Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Runs left to right; `position` is a y offset.
    Horizontal,
    /// Runs top to bottom; `position` is an x offset.
    Vertical,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct GuideId(pub String);

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Guide {
    pub id: GuideId,
    pub orientation: Orientation,
    pub position: f64,
}

/// Pointer offset along the axis a guide of `orientation` measures, relative to the viewport's
/// bounding box.
pub fn ruler_local_offset(orientation: Orientation, client: Point, viewport: Rect) -> f64 {
    match orientation {
        Orientation::Horizontal => client.y - viewport.y0,
        Orientation::Vertical => client.x - viewport.x0,
    }
}

fn viewport_extent(orientation: Orientation, viewport: Rect) -> f64 {
    match orientation {
        Orientation::Horizontal => viewport.height(),
        Orientation::Vertical => viewport.width(),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GuideDrag {
    Moved(f64),
    /// The pointer left the viewport; the guide was deleted.
    Removed,
    Missing,
}

/// User-placed alignment lines. View state only; not part of the scene.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GuideSet {
    guides: Vec<Guide>,
    next_id: u64,
}

impl GuideSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    pub fn len(&self) -> usize {
        self.guides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guides.is_empty()
    }

    pub fn get(&self, id: &GuideId) -> Option<&Guide> {
        self.guides.iter().find(|g| &g.id == id)
    }

    pub fn add(&mut self, orientation: Orientation, position: f64) -> &Guide {
        self.next_id += 1;
        let guide = Guide {
            id: GuideId(format!("guide-{}", self.next_id)),
            orientation,
            position,
        };
        tracing::debug!(id = %guide.id.0, ?orientation, position, "guide added");
        self.guides.push(guide);
        let last = self.guides.len() - 1;
        &self.guides[last]
    }

    /// Creates a guide where the ruler was pressed.
    pub fn add_from_ruler(
        &mut self,
        orientation: Orientation,
        client: Point,
        viewport: Rect,
    ) -> &Guide {
        let position = ruler_local_offset(orientation, client, viewport);
        self.add(orientation, position)
    }

    /// Moves a guide under the pointer, deleting it when dragged outside the viewport.
    pub fn drag_to(&mut self, id: &GuideId, client: Point, viewport: Rect) -> GuideDrag {
        let Some(idx) = self.guides.iter().position(|g| &g.id == id) else {
            tracing::warn!(id = %id.0, "drag on missing guide");
            return GuideDrag::Missing;
        };
        let orientation = self.guides[idx].orientation;
        let position = ruler_local_offset(orientation, client, viewport);
        if position < 0.0 || position > viewport_extent(orientation, viewport) {
            self.guides.remove(idx);
            tracing::debug!(id = %id.0, "guide dragged off viewport");
            return GuideDrag::Removed;
        }
        self.guides[idx].position = position;
        GuideDrag::Moved(position)
    }

    pub fn remove(&mut self, id: &GuideId) -> Option<Guide> {
        let idx = self.guides.iter().position(|g| &g.id == id)?;
        Some(self.guides.remove(idx))
    }

    pub fn clear(&mut self) {
        self.guides.clear();
    }

    pub fn positions(&self, orientation: Orientation) -> impl Iterator<Item = f64> + '_ {
        self.guides
            .iter()
            .filter(move |g| g.orientation == orientation)
            .map(|g| g.position)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/guides.rs"]
mod tests;
