use super::*;

#[test]
fn curve_leaves_ports_horizontally() {
    let c = connection_curve(Point::new(0.0, 0.0), Point::new(200.0, 100.0));
    assert_eq!(c.p1, Point::new(100.0, 0.0));
    assert_eq!(c.p2, Point::new(100.0, 100.0));
}

#[test]
fn short_or_backward_wires_keep_minimum_reach() {
    let c = connection_curve(Point::new(100.0, 0.0), Point::new(80.0, 0.0));
    assert_eq!(c.p1.x, 130.0);
    assert_eq!(c.p2.x, 50.0);
}

#[test]
fn svg_path_starts_at_output_port() {
    let d = connection_svg_d(Point::new(10.0, 20.0), Point::new(110.0, 60.0));
    assert!(d.starts_with('M'), "{d}");
    assert!(d.contains("10") && d.contains("20"), "{d}");
    assert!(d.contains('C'));
}

#[test]
fn midpoint_is_between_symmetric_ports() {
    let m = connection_midpoint(Point::new(0.0, 0.0), Point::new(200.0, 100.0));
    assert!((m.x - 100.0).abs() < 1e-9);
    assert!((m.y - 50.0).abs() < 1e-9);
}

#[test]
fn hit_test_accepts_points_on_the_wire_only() {
    let from = Point::new(0.0, 0.0);
    let to = Point::new(200.0, 100.0);
    assert!(connection_hit(from, to, Point::new(100.0, 50.0), 3.0));
    assert!(connection_hit(from, to, from, 0.5));
    assert!(!connection_hit(from, to, Point::new(100.0, 90.0), 3.0));
    assert!(!connection_hit(from, to, Point::new(500.0, 500.0), 3.0));
}
