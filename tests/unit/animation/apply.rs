use super::*;
use crate::animation::easing::BezierHandles;
use crate::animation::keyframe::Handle;

struct FakeStore {
    layers: Vec<(u32, Channel, Vec<KeyframeMeta>)>,
    selected: Vec<KeyframeId>,
}

impl KeyframeStore for FakeStore {
    type LayerKey = u32;

    fn layer_keys(&self) -> Vec<u32> {
        let mut keys: Vec<u32> = self.layers.iter().map(|(l, _, _)| *l).collect();
        keys.dedup();
        keys
    }

    fn selected_keyframe_ids(&self) -> Vec<KeyframeId> {
        self.selected.clone()
    }

    fn visit_keyframes_mut(
        &mut self,
        layer: &u32,
        channel: Channel,
        visit: &mut dyn FnMut(&mut KeyframeMeta),
    ) {
        for (l, c, metas) in &mut self.layers {
            if *l == *layer && *c == channel {
                for m in metas.iter_mut() {
                    visit(m);
                }
            }
        }
    }
}

fn meta(id: u64, frame: i64) -> KeyframeMeta {
    KeyframeMeta::new(KeyframeId(id), frame)
}

fn store() -> FakeStore {
    FakeStore {
        layers: vec![
            (1, Channel::Position, vec![meta(1, 0), meta(2, 10)]),
            (1, Channel::Opacity, vec![meta(3, 0)]),
            (2, Channel::Rotation, vec![meta(4, 5), meta(5, 20)]),
        ],
        selected: vec![KeyframeId(1), KeyframeId(3), KeyframeId(5)],
    }
}

fn find(store: &FakeStore, id: u64) -> KeyframeMeta {
    store
        .layers
        .iter()
        .flat_map(|(_, _, m)| m.iter())
        .find(|m| m.id == KeyframeId(id))
        .copied()
        .unwrap()
}

#[test]
fn bezier_preset_overwrites_selected_handles_only() {
    let mut s = store();
    let report = apply_interpolation(&mut s, Interpolation::Bezier, Some("easeOutBounce"));
    assert_eq!(report.touched, 3);
    assert!(report.preset_applied);

    for id in [1, 3, 5] {
        let m = find(&s, id);
        assert_eq!(m.interpolation, Interpolation::Bezier);
        assert_eq!(m.out_handle, Some(Handle { x: 0.2, y: 0.9 }));
        assert_eq!(m.in_handle, Some(Handle { x: 0.3, y: 1.0 }));
    }
    for id in [2, 4] {
        let m = find(&s, id);
        assert_eq!(m.interpolation, Interpolation::Linear);
        assert_eq!(m.out_handle, None);
    }
}

#[test]
fn unknown_preset_sets_mode_but_keeps_handles() {
    let mut s = store();
    let existing = Handle { x: 0.4, y: 0.1 };
    s.layers[0].2[0].out_handle = Some(existing);

    let report = apply_interpolation(&mut s, Interpolation::Bezier, Some("easeSideways"));
    assert_eq!(report.touched, 3);
    assert!(!report.preset_applied);
    let m = find(&s, 1);
    assert_eq!(m.interpolation, Interpolation::Bezier);
    assert_eq!(m.out_handle, Some(existing));
    assert_eq!(m.in_handle, None);
}

#[test]
fn non_bezier_modes_ignore_preset() {
    let mut s = store();
    let report = apply_interpolation(&mut s, Interpolation::Hold, Some("easeInQuad"));
    assert_eq!(report.touched, 3);
    assert!(!report.preset_applied);
    assert_eq!(find(&s, 5).interpolation, Interpolation::Hold);
    assert_eq!(find(&s, 5).out_handle, None);
}

#[test]
fn empty_selection_touches_nothing() {
    let mut s = store();
    s.selected.clear();
    let report = apply_interpolation(&mut s, Interpolation::Bezier, Some("linear"));
    assert_eq!(report, EasingReport::default());
}

#[test]
fn linear_preset_writes_identity_handles() {
    let mut s = store();
    apply_interpolation(&mut s, Interpolation::Bezier, Some("linear"));
    let m = find(&s, 3);
    let h = BezierHandles::LINEAR;
    assert_eq!(m.out_handle, Some(Handle { x: h.out_x, y: h.out_y }));
}

#[test]
fn channel_names_cover_animatable_set() {
    let names: Vec<_> = Channel::ANIMATABLE.iter().map(|c| c.name()).collect();
    assert_eq!(names, ["position", "rotation", "scale", "anchor", "opacity"]);
}
