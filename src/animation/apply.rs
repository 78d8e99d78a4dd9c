use std::collections::BTreeSet;

use crate::animation::easing::easing_handles;
use crate::animation::keyframe::{Interpolation, KeyframeId, KeyframeMeta};

/// Transform channels that carry keyframes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Position,
    Rotation,
    Scale,
    Anchor,
    Opacity,
}

impl Channel {
    pub const ANIMATABLE: [Self; 5] = [
        Self::Position,
        Self::Rotation,
        Self::Scale,
        Self::Anchor,
        Self::Opacity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Position => "position",
            Self::Rotation => "rotation",
            Self::Scale => "scale",
            Self::Anchor => "anchor",
            Self::Opacity => "opacity",
        }
    }
}

/// Seam to the application store that owns layers and keyframes.
pub trait KeyframeStore {
    type LayerKey: Clone + std::fmt::Debug;

    fn layer_keys(&self) -> Vec<Self::LayerKey>;

    fn selected_keyframe_ids(&self) -> Vec<KeyframeId>;

    /// Calls `visit` for every keyframe of `channel` on `layer`. Unknown layers visit nothing.
    fn visit_keyframes_mut(
        &mut self,
        layer: &Self::LayerKey,
        channel: Channel,
        visit: &mut dyn FnMut(&mut KeyframeMeta),
    );
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct EasingReport {
    /// Selected keyframes whose interpolation was written.
    pub touched: usize,
    /// Whether bezier handles were overwritten from a preset.
    pub preset_applied: bool,
}

/// Sets `interpolation` on every selected keyframe across all animatable channels.
///
/// For [`Interpolation::Bezier`] with a known `preset`, both handles are overwritten from the
/// preset table. An unknown preset still sets the interpolation but leaves handles as they were.
#[tracing::instrument(skip(store))]
pub fn apply_interpolation<S: KeyframeStore>(
    store: &mut S,
    interpolation: Interpolation,
    preset: Option<&str>,
) -> EasingReport {
    let handles = match (interpolation, preset) {
        (Interpolation::Bezier, Some(name)) => {
            let handles = easing_handles(name);
            if handles.is_none() {
                tracing::warn!(preset = name, "unknown easing preset; handles left unchanged");
            }
            handles
        }
        _ => None,
    };

    let selected: BTreeSet<KeyframeId> = store.selected_keyframe_ids().into_iter().collect();
    if selected.is_empty() {
        tracing::debug!("no keyframes selected");
        return EasingReport::default();
    }

    let mut touched = 0usize;
    for layer in store.layer_keys() {
        for channel in Channel::ANIMATABLE {
            store.visit_keyframes_mut(&layer, channel, &mut |meta| {
                if !selected.contains(&meta.id) {
                    return;
                }
                meta.interpolation = interpolation;
                if let Some(h) = handles {
                    meta.set_handles(h);
                }
                touched += 1;
            });
        }
    }

    tracing::debug!(touched, "applied keyframe interpolation");
    EasingReport {
        touched,
        preset_applied: handles.is_some() && touched > 0,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/apply.rs"]
mod tests;
