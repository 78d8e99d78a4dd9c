use super::*;

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn composition_default_matches_editor_defaults() {
    let comp = Composition::default();
    comp.validate().unwrap();
    assert_eq!(comp.frame_count, 81);
    assert_eq!(comp.last_frame(), 80);
    assert_eq!(comp.center(), Point::new(512.0, 384.0));
}

#[test]
fn composition_needs_room_for_a_layer() {
    let fps = Fps::new(24, 1).unwrap();
    assert!(Composition::new(100, 100, fps, 1).is_err());
    assert!(Composition::new(0, 100, fps, 10).is_err());
    assert!(Composition::new(100, 100, fps, 2).is_ok());
}

#[test]
fn composition_deserializes_without_markers() {
    let comp: Composition = serde_json::from_str(
        r#"{ "width": 64, "height": 32, "fps": { "num": 30, "den": 1 }, "frame_count": 10 }"#,
    )
    .unwrap();
    assert!(comp.markers.is_empty());
    assert_eq!(comp.marker_frames().count(), 0);
}
