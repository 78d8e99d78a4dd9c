use super::*;

fn span(a: i64, b: i64) -> LayerSpan {
    LayerSpan::new(a, b).unwrap()
}

#[derive(Default)]
struct CountingCapture {
    acquired: u32,
    released: u32,
}

impl PointerCapture for CountingCapture {
    fn acquire(&mut self) {
        self.acquired += 1;
    }

    fn release(&mut self) {
        self.released += 1;
    }
}

#[test]
fn frames_delta_rounds_to_nearest() {
    assert_eq!(frames_delta(23.0, 10.0), 2);
    assert_eq!(frames_delta(25.0, 10.0), 3);
    assert_eq!(frames_delta(-23.0, 10.0), -2);
    assert_eq!(frames_delta(4.9, 10.0), 0);
}

#[test]
fn begin_rejects_bad_inputs() {
    assert!(DragGesture::begin(DragMode::Move, 0.0, span(0, 10), 0.0, 81).is_err());
    assert!(DragGesture::begin(DragMode::Move, 0.0, span(0, 10), f64::NAN, 81).is_err());
    assert!(DragGesture::begin(DragMode::Move, 0.0, span(0, 10), 10.0, 1).is_err());
    assert!(DragGesture::begin(DragMode::Move, 0.0, span(0, 90), 10.0, 81).is_err());
}

#[test]
fn move_shifts_both_bounds_by_rounded_delta() {
    let g = DragGesture::begin(DragMode::Move, 100.0, span(10, 30), 10.0, 81).unwrap();
    assert_eq!(g.update(123.0, None), span(12, 32));
    assert_eq!(g.update(77.0, None), span(8, 28));
}

#[test]
fn unclamped_move_preserves_duration() {
    let g = DragGesture::begin(DragMode::Move, 0.0, span(20, 35), 7.5, 200).unwrap();
    for dx in (-140..=600).step_by(13) {
        let s = g.update(f64::from(dx), None);
        if s.in_point > 0 && s.out_point < 199 {
            assert_eq!(s.duration(), 15);
        }
    }
}

#[test]
fn move_is_derived_from_snapshot_not_previous_update() {
    let g = DragGesture::begin(DragMode::Move, 0.0, span(10, 20), 10.0, 81).unwrap();
    for x in [4.0, 8.0, 12.0, 16.0] {
        let _ = g.update(x, None);
    }
    assert_eq!(g.update(16.0, None), span(12, 22));
}

#[test]
fn move_clamps_at_start_and_end() {
    let g = DragGesture::begin(DragMode::Move, 0.0, span(10, 30), 10.0, 81).unwrap();
    assert_eq!(g.update(-500.0, None), span(0, 20));
    assert_eq!(g.update(5000.0, None), span(60, 80));
}

#[test]
fn move_snaps_the_closer_edge_and_keeps_duration() {
    let g = DragGesture::begin(DragMode::Move, 0.0, span(10, 30), 10.0, 200).unwrap();
    // Unsnapped would be [13, 33]. in-point is 3 from 10, out-point is 1 from 34.
    let targets = SnapTargets::from_frames(vec![10, 34]);
    assert_eq!(g.update(30.0, Some(&targets)), span(14, 34));

    // in-point 1 from 12, out-point 3 from 36.
    let targets = SnapTargets::from_frames(vec![12, 36]);
    assert_eq!(g.update(30.0, Some(&targets)), span(12, 32));
}

#[test]
fn move_snap_tie_prefers_in_point() {
    let g = DragGesture::begin(DragMode::Move, 0.0, span(10, 30), 10.0, 200).unwrap();
    // Unsnapped [13, 33]; both edges are 2 frames from a target.
    let targets = SnapTargets::from_frames(vec![11, 35]);
    assert_eq!(g.update(30.0, Some(&targets)), span(11, 31));
}

#[test]
fn move_without_modifier_ignores_targets() {
    let g = DragGesture::begin(DragMode::Move, 0.0, span(10, 30), 10.0, 200).unwrap();
    assert_eq!(g.update(30.0, None), span(13, 33));
}

#[test]
fn snapping_stays_within_tolerance_for_every_delta() {
    let targets = SnapTargets::from_frames(vec![0, 17, 42, 90, 150, 199]);
    for mode in [DragMode::Move, DragMode::ResizeLeft, DragMode::ResizeRight] {
        let g = DragGesture::begin(mode, 0.0, span(60, 120), 1.0, 200).unwrap();
        for dx in -55..55 {
            let raw = g.update(f64::from(dx), None);
            let snapped = g.update(f64::from(dx), Some(&targets));
            assert!((raw.in_point - snapped.in_point).abs() <= SNAP_TOLERANCE_FRAMES);
            assert!((raw.out_point - snapped.out_point).abs() <= SNAP_TOLERANCE_FRAMES);
            if snapped != raw {
                let on_target = targets.frames().contains(&snapped.in_point)
                    || targets.frames().contains(&snapped.out_point);
                assert!(on_target, "{mode:?} dx={dx} -> {snapped:?}");
            }
            if mode == DragMode::Move {
                assert_eq!(snapped.duration(), 60);
            }
        }
    }
}

#[test]
fn huge_pointer_travel_clamps_instead_of_overflowing() {
    let targets = SnapTargets::from_frames(vec![i64::MIN, 0, 40, i64::MAX]);
    for mode in [DragMode::Move, DragMode::ResizeLeft, DragMode::ResizeRight] {
        let g = DragGesture::begin(mode, 0.0, span(10, 30), 1e-300, 81).unwrap();
        for dx in [1.0, -1.0, 1e300, -1e300] {
            for snap in [None, Some(&targets)] {
                let s = g.update(dx, snap);
                assert!(s.in_point >= 0 && s.out_point <= 80, "{mode:?} dx={dx} -> {s:?}");
                assert!(s.in_point < s.out_point);
            }
        }
    }

    let g = DragGesture::begin(DragMode::Move, 0.0, span(10, 30), 1e-300, 81).unwrap();
    assert_eq!(g.update(1.0, None), span(60, 80));
    assert_eq!(g.update(-1.0, None), span(0, 20));
    // Unbounded tolerance reaches the nearest real frame, never the sentinel targets.
    let g = g.with_tolerance(i64::MAX);
    assert_eq!(g.update(1.0, Some(&targets)), span(40, 60));
}

#[test]
fn resize_left_only_moves_in_point() {
    let g = DragGesture::begin(DragMode::ResizeLeft, 0.0, span(10, 30), 10.0, 81).unwrap();
    assert_eq!(g.update(-50.0, None), span(5, 30));
    assert_eq!(g.update(-500.0, None), span(0, 30));
    assert_eq!(g.update(5000.0, None), span(29, 30));
}

#[test]
fn resize_right_only_moves_out_point() {
    let g = DragGesture::begin(DragMode::ResizeRight, 0.0, span(10, 30), 10.0, 81).unwrap();
    assert_eq!(g.update(50.0, None), span(10, 35));
    assert_eq!(g.update(5000.0, None), span(10, 80));
    assert_eq!(g.update(-5000.0, None), span(10, 11));
}

#[test]
fn resize_never_inverts_span() {
    let targets = SnapTargets::from_frames(vec![0, 5, 9, 10, 11, 40, 80]);
    for mode in [DragMode::ResizeLeft, DragMode::ResizeRight] {
        let g = DragGesture::begin(mode, 0.0, span(9, 11), 3.0, 81).unwrap();
        for dx in -300..300 {
            for snap in [None, Some(&targets)] {
                let s = g.update(f64::from(dx), snap);
                assert!(s.in_point < s.out_point, "{mode:?} dx={dx} -> {s:?}");
                assert!(s.in_point >= 0 && s.out_point <= 80);
            }
        }
    }
}

#[test]
fn resize_snaps_to_target_within_tolerance() {
    let targets = SnapTargets::from_frames(vec![0, 24, 80]);
    let g = DragGesture::begin(DragMode::ResizeRight, 0.0, span(10, 30), 10.0, 81).unwrap();
    assert_eq!(g.update(-40.0, Some(&targets)), span(10, 24));
    let g = g.with_tolerance(1);
    assert_eq!(g.update(-40.0, Some(&targets)), span(10, 26));
}

#[test]
fn session_acquires_and_releases_capture_once() {
    let mut capture = CountingCapture::default();
    let gesture = DragGesture::begin(DragMode::Move, 0.0, span(0, 10), 10.0, 81).unwrap();
    {
        let mut session = DragSession::begin(&mut capture, gesture);
        assert_eq!(session.update(20.0, None), span(2, 12));
        assert_eq!(session.finish(), span(2, 12));
    }
    assert_eq!(capture.acquired, 1);
    assert_eq!(capture.released, 1);
}

#[test]
fn repeated_sessions_do_not_leak_capture() {
    let mut capture = CountingCapture::default();
    let gesture = DragGesture::begin(DragMode::ResizeLeft, 0.0, span(5, 10), 10.0, 81).unwrap();
    for _ in 0..3 {
        let session = DragSession::begin(&mut capture, gesture);
        assert_eq!(session.current(), span(5, 10));
    }
    assert_eq!(capture.acquired, 3);
    assert_eq!(capture.released, 3);
}
