use std::collections::BTreeSet;

use crate::animation::apply::{Channel, KeyframeStore};
use crate::animation::keyframe::{Keyframe, KeyframeId, KeyframeMeta, KeyframeTrack};
use crate::foundation::core::{Composition, Vec2};
use crate::foundation::error::{WorkspaceError, WorkspaceResult};
use crate::timeline::drag::{DragGesture, DragMode};
use crate::timeline::snap::SnapTargets;
use crate::timeline::span::LayerSpan;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct LayerId(pub String);

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerTransform {
    pub position: KeyframeTrack<Vec2>,
    pub rotation: KeyframeTrack<f64>,
    pub scale: KeyframeTrack<Vec2>,
    pub anchor: KeyframeTrack<Vec2>,
    pub opacity: KeyframeTrack<f64>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    pub id: LayerId,
    pub name: String,
    pub span: LayerSpan,
    #[serde(default)]
    pub transform: LayerTransform,
}

impl LayerTransform {
    pub fn key_ids(&self) -> impl Iterator<Item = KeyframeId> + '_ {
        fn ids<T>(track: &KeyframeTrack<T>) -> impl Iterator<Item = KeyframeId> + '_ {
            track.keys.iter().map(|k| k.meta.id)
        }
        ids(&self.position)
            .chain(ids(&self.rotation))
            .chain(ids(&self.scale))
            .chain(ids(&self.anchor))
            .chain(ids(&self.opacity))
    }

    pub fn validate(&self) -> WorkspaceResult<()> {
        self.position.validate()?;
        self.rotation.validate()?;
        self.scale.validate()?;
        self.anchor.validate()?;
        self.opacity.validate()
    }
}

/// A keyframe value for one of the transform channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChannelValue {
    Scalar(f64),
    Vector(Vec2),
}

/// In-memory compositor state: layers, their keyframes, selection and the playhead.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompositorState {
    pub composition: Composition,
    layers: Vec<Layer>,
    #[serde(default)]
    selected_layers: Vec<LayerId>,
    #[serde(default)]
    selected_keyframes: BTreeSet<KeyframeId>,
    #[serde(default)]
    playhead: i64,
    #[serde(default)]
    next_id: u64,
}

impl CompositorState {
    pub fn new(composition: Composition) -> WorkspaceResult<Self> {
        composition.validate()?;
        Ok(Self {
            composition,
            layers: Vec::new(),
            selected_layers: Vec::new(),
            selected_keyframes: BTreeSet::new(),
            playhead: 0,
            next_id: 0,
        })
    }

    /// Checks a state that did not come from [`CompositorState::new`], e.g. a loaded project.
    pub fn validate(&self) -> WorkspaceResult<()> {
        self.composition.validate()?;
        let mut seen = BTreeSet::new();
        let mut max_id = 0;
        for l in &self.layers {
            if !seen.insert(&l.id) {
                return Err(WorkspaceError::validation(format!(
                    "duplicate layer id {}",
                    l.id.0
                )));
            }
            l.span.validate_within(self.composition.frame_count)?;
            l.transform.validate()?;

            if let Some(n) = l.id.0.strip_prefix("layer-").and_then(|n| n.parse().ok()) {
                max_id = max_id.max(n);
            }
            max_id = l.transform.key_ids().fold(max_id, |m, id| m.max(id.0));
        }
        if self.next_id < max_id {
            return Err(WorkspaceError::validation(format!(
                "next_id {} is below allocated id {max_id}",
                self.next_id
            )));
        }
        if !(0..self.composition.frame_count).contains(&self.playhead) {
            return Err(WorkspaceError::validation(format!(
                "playhead {} outside composition",
                self.playhead
            )));
        }
        Ok(())
    }

    fn alloc_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|l| &l.id == id)
    }

    pub fn layer_mut(&mut self, id: &LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| &l.id == id)
    }

    pub fn add_layer(
        &mut self,
        name: impl Into<String>,
        span: LayerSpan,
    ) -> WorkspaceResult<LayerId> {
        span.validate_within(self.composition.frame_count)?;
        let id = LayerId(format!("layer-{}", self.alloc_id()));
        self.layers.push(Layer {
            id: id.clone(),
            name: name.into(),
            span,
            transform: LayerTransform::default(),
        });
        Ok(id)
    }

    pub fn remove_layer(&mut self, id: &LayerId) -> Option<Layer> {
        let idx = self.layers.iter().position(|l| &l.id == id)?;
        let layer = self.layers.remove(idx);
        self.selected_layers.retain(|s| s != id);
        for k in layer.transform.key_ids() {
            self.selected_keyframes.remove(&k);
        }
        Some(layer)
    }

    pub fn select_layer(&mut self, id: &LayerId, additive: bool) -> bool {
        if self.layer(id).is_none() {
            tracing::warn!(layer = %id.0, "select on missing layer");
            return false;
        }
        if !additive {
            self.selected_layers.clear();
        }
        if !self.selected_layers.contains(id) {
            self.selected_layers.push(id.clone());
        }
        true
    }

    pub fn selected_layers(&self) -> &[LayerId] {
        &self.selected_layers
    }

    pub fn playhead(&self) -> i64 {
        self.playhead
    }

    pub fn set_playhead(&mut self, frame: i64) {
        self.playhead = frame.clamp(0, self.composition.last_frame());
    }

    pub fn add_keyframe(
        &mut self,
        layer: &LayerId,
        channel: Channel,
        frame: i64,
        value: ChannelValue,
    ) -> WorkspaceResult<KeyframeId> {
        let id = KeyframeId(self.alloc_id());
        let Some(l) = self.layer_mut(layer) else {
            return Err(WorkspaceError::not_found(format!("layer {}", layer.0)));
        };
        let t = &mut l.transform;
        match (channel, value) {
            (Channel::Rotation, ChannelValue::Scalar(v)) => {
                t.rotation.insert(Keyframe::new(id, frame, v));
            }
            (Channel::Opacity, ChannelValue::Scalar(v)) => {
                t.opacity.insert(Keyframe::new(id, frame, v));
            }
            (Channel::Position, ChannelValue::Vector(v)) => {
                t.position.insert(Keyframe::new(id, frame, v));
            }
            (Channel::Scale, ChannelValue::Vector(v)) => {
                t.scale.insert(Keyframe::new(id, frame, v));
            }
            (Channel::Anchor, ChannelValue::Vector(v)) => {
                t.anchor.insert(Keyframe::new(id, frame, v));
            }
            (channel, value) => {
                return Err(WorkspaceError::keyframe(format!(
                    "{value:?} does not fit channel {}",
                    channel.name()
                )));
            }
        }
        Ok(id)
    }

    pub fn select_keyframe(&mut self, id: KeyframeId) {
        self.selected_keyframes.insert(id);
    }

    pub fn clear_keyframe_selection(&mut self) {
        self.selected_keyframes.clear();
    }

    /// Meta of a keyframe anywhere in the state.
    pub fn keyframe_meta(&self, id: KeyframeId) -> Option<KeyframeMeta> {
        fn find<T>(track: &KeyframeTrack<T>, id: KeyframeId) -> Option<KeyframeMeta> {
            track.keys.iter().find(|k| k.meta.id == id).map(|k| k.meta)
        }
        self.layers.iter().find_map(|l| {
            let t = &l.transform;
            find(&t.position, id)
                .or_else(|| find(&t.rotation, id))
                .or_else(|| find(&t.scale, id))
                .or_else(|| find(&t.anchor, id))
                .or_else(|| find(&t.opacity, id))
        })
    }

    /// Snap targets for dragging `layer`: everything except the layer's own bounds.
    pub fn snap_targets_for(&self, layer: &LayerId) -> SnapTargets {
        SnapTargets::collect(
            self.playhead,
            self.layers
                .iter()
                .filter(|l| &l.id != layer)
                .map(|l| l.span),
            self.composition.frame_count,
            self.composition.marker_frames(),
        )
    }

    /// Starts a drag on a layer bar. A missing layer short-circuits with `Ok(None)`.
    #[tracing::instrument(skip(self))]
    pub fn begin_layer_drag(
        &self,
        layer: &LayerId,
        mode: DragMode,
        pointer_x: f64,
        pixels_per_frame: f64,
    ) -> WorkspaceResult<Option<DragGesture>> {
        let Some(l) = self.layer(layer) else {
            tracing::warn!("drag on missing layer");
            return Ok(None);
        };
        let gesture = DragGesture::begin(
            mode,
            pointer_x,
            l.span,
            pixels_per_frame,
            self.composition.frame_count,
        )?;
        Ok(Some(gesture))
    }

    /// Writes a new timing window. Returns `false` when the layer no longer exists.
    pub fn commit_span(&mut self, layer: &LayerId, span: LayerSpan) -> WorkspaceResult<bool> {
        span.validate_within(self.composition.frame_count)?;
        let Some(l) = self.layer_mut(layer) else {
            tracing::warn!(layer = %layer.0, "commit on missing layer");
            return Ok(false);
        };
        l.span = span;
        Ok(true)
    }
}

impl KeyframeStore for CompositorState {
    type LayerKey = LayerId;

    fn layer_keys(&self) -> Vec<LayerId> {
        self.layers.iter().map(|l| l.id.clone()).collect()
    }

    fn selected_keyframe_ids(&self) -> Vec<KeyframeId> {
        self.selected_keyframes.iter().copied().collect()
    }

    fn visit_keyframes_mut(
        &mut self,
        layer: &LayerId,
        channel: Channel,
        visit: &mut dyn FnMut(&mut KeyframeMeta),
    ) {
        let Some(l) = self.layer_mut(layer) else {
            return;
        };
        let t = &mut l.transform;
        match channel {
            Channel::Position => t.position.metas_mut().for_each(visit),
            Channel::Rotation => t.rotation.metas_mut().for_each(visit),
            Channel::Scale => t.scale.metas_mut().for_each(visit),
            Channel::Anchor => t.anchor.metas_mut().for_each(visit),
            Channel::Opacity => t.opacity.metas_mut().for_each(visit),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/state/compositor.rs"]
mod tests;
