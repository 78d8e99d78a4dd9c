use kurbo::{BezPath, ParamCurve, Point, Shape};

/// Minimum horizontal reach of a connection's control points.
const MIN_TANGENT: f64 = 30.0;

/// Curve from an output port to an input port. Both ends leave horizontally, so wires read
/// left to right even when the input sits behind the output.
pub fn connection_curve(from: Point, to: Point) -> kurbo::CubicBez {
    let reach = ((to.x - from.x).abs() * 0.5).max(MIN_TANGENT);
    kurbo::CubicBez::new(
        from,
        Point::new(from.x + reach, from.y),
        Point::new(to.x - reach, to.y),
        to,
    )
}

pub fn connection_path(from: Point, to: Point) -> BezPath {
    let curve = connection_curve(from, to);
    let mut path = BezPath::new();
    path.move_to(curve.p0);
    path.curve_to(curve.p1, curve.p2, curve.p3);
    path
}

/// SVG `d` attribute for a connection.
pub fn connection_svg_d(from: Point, to: Point) -> String {
    connection_path(from, to).to_svg()
}

/// Point halfway along the curve parameter, where wire labels and delete buttons sit.
pub fn connection_midpoint(from: Point, to: Point) -> Point {
    connection_curve(from, to).eval(0.5)
}

/// Whether `p` lies within `tolerance` of the wire, for hit-testing clicks.
pub fn connection_hit(from: Point, to: Point, p: Point, tolerance: f64) -> bool {
    let path = connection_path(from, to);
    if !path.bounding_box().inflate(tolerance, tolerance).contains(p) {
        return false;
    }
    let curve = connection_curve(from, to);
    const STEPS: u32 = 64;
    (0..=STEPS).any(|i| {
        let q = curve.eval(f64::from(i) / f64::from(STEPS));
        q.distance(p) <= tolerance
    })
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/connection.rs"]
mod tests;
