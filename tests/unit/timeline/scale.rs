use super::*;

#[test]
fn frame_and_pixel_mapping_agree() {
    let s = TimelineScale::new(10.0).unwrap().with_scroll(50.0);
    assert_eq!(s.frame_to_px(12), 70.0);
    assert_eq!(s.px_to_frame(70.0), 12);
    assert_eq!(s.px_to_frame(74.0), 12);
    assert_eq!(s.px_to_frame(76.0), 13);
}

#[test]
fn scrub_clamps_into_composition() {
    let s = TimelineScale::new(4.0).unwrap();
    assert_eq!(s.scrub_frame(-30.0, 81), 0);
    assert_eq!(s.scrub_frame(10_000.0, 81), 80);
    assert_eq!(s.scrub_frame(41.0, 81), 10);
}

#[test]
fn fit_and_new_validate() {
    assert!(TimelineScale::new(0.0).is_err());
    assert!(TimelineScale::fit(800.0, 0).is_err());
    assert_eq!(TimelineScale::fit(800.0, 80).unwrap().pixels_per_frame, 10.0);
}
