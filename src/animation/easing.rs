/// Normalized cubic-bezier control points for a keyframe segment.
///
/// `(out_x, out_y)` is the outgoing handle of the left keyframe and `(in_x, in_y)` the incoming
/// handle of the right keyframe; the curve runs from `(0, 0)` to `(1, 1)`. Back and elastic
/// presets push `y` outside `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BezierHandles {
    pub out_x: f64,
    pub out_y: f64,
    pub in_x: f64,
    pub in_y: f64,
}

impl BezierHandles {
    pub const LINEAR: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(out_x: f64, out_y: f64, in_x: f64, in_y: f64) -> Self {
        Self {
            out_x,
            out_y,
            in_x,
            in_y,
        }
    }

    /// Eased progress for linear progress `t`, like CSS `cubic-bezier()`.
    pub fn ease(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        let x1 = self.out_x.clamp(0.0, 1.0);
        let x2 = self.in_x.clamp(0.0, 1.0);
        let u = solve_curve_x(x1, x2, t);
        bezier_component(self.out_y, self.in_y, u)
    }
}

fn bezier_component(p1: f64, p2: f64, u: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * u * p1 + 3.0 * v * u * u * p2 + u * u * u
}

fn bezier_derivative(p1: f64, p2: f64, u: f64) -> f64 {
    let v = 1.0 - u;
    3.0 * v * v * p1 + 6.0 * v * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

/// Curve parameter whose x equals `x`. Newton first, bisection if it stalls.
fn solve_curve_x(x1: f64, x2: f64, x: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier_component(x1, x2, u) - x;
        if err.abs() < EPS {
            return u;
        }
        let d = bezier_derivative(x1, x2, u);
        if d.abs() < 1e-6 {
            break;
        }
        u -= err / d;
        if !(0.0..=1.0).contains(&u) {
            break;
        }
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    u = x;
    for _ in 0..64 {
        let cx = bezier_component(x1, x2, u);
        if (cx - x).abs() < EPS {
            break;
        }
        if cx < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    u
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingPreset {
    Linear,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

impl EasingPreset {
    pub const ALL: [Self; 31] = [
        Self::Linear,
        Self::EaseInSine,
        Self::EaseOutSine,
        Self::EaseInOutSine,
        Self::EaseInQuad,
        Self::EaseOutQuad,
        Self::EaseInOutQuad,
        Self::EaseInCubic,
        Self::EaseOutCubic,
        Self::EaseInOutCubic,
        Self::EaseInQuart,
        Self::EaseOutQuart,
        Self::EaseInOutQuart,
        Self::EaseInQuint,
        Self::EaseOutQuint,
        Self::EaseInOutQuint,
        Self::EaseInExpo,
        Self::EaseOutExpo,
        Self::EaseInOutExpo,
        Self::EaseInCirc,
        Self::EaseOutCirc,
        Self::EaseInOutCirc,
        Self::EaseInBack,
        Self::EaseOutBack,
        Self::EaseInOutBack,
        Self::EaseInElastic,
        Self::EaseOutElastic,
        Self::EaseInOutElastic,
        Self::EaseInBounce,
        Self::EaseOutBounce,
        Self::EaseInOutBounce,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInSine => "easeInSine",
            Self::EaseOutSine => "easeOutSine",
            Self::EaseInOutSine => "easeInOutSine",
            Self::EaseInQuad => "easeInQuad",
            Self::EaseOutQuad => "easeOutQuad",
            Self::EaseInOutQuad => "easeInOutQuad",
            Self::EaseInCubic => "easeInCubic",
            Self::EaseOutCubic => "easeOutCubic",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseInQuart => "easeInQuart",
            Self::EaseOutQuart => "easeOutQuart",
            Self::EaseInOutQuart => "easeInOutQuart",
            Self::EaseInQuint => "easeInQuint",
            Self::EaseOutQuint => "easeOutQuint",
            Self::EaseInOutQuint => "easeInOutQuint",
            Self::EaseInExpo => "easeInExpo",
            Self::EaseOutExpo => "easeOutExpo",
            Self::EaseInOutExpo => "easeInOutExpo",
            Self::EaseInCirc => "easeInCirc",
            Self::EaseOutCirc => "easeOutCirc",
            Self::EaseInOutCirc => "easeInOutCirc",
            Self::EaseInBack => "easeInBack",
            Self::EaseOutBack => "easeOutBack",
            Self::EaseInOutBack => "easeInOutBack",
            Self::EaseInElastic => "easeInElastic",
            Self::EaseOutElastic => "easeOutElastic",
            Self::EaseInOutElastic => "easeInOutElastic",
            Self::EaseInBounce => "easeInBounce",
            Self::EaseOutBounce => "easeOutBounce",
            Self::EaseInOutBounce => "easeInOutBounce",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn handles(self) -> BezierHandles {
        let h = BezierHandles::new;
        match self {
            Self::Linear => BezierHandles::LINEAR,
            Self::EaseInSine => h(0.12, 0.0, 0.39, 0.0),
            Self::EaseOutSine => h(0.61, 1.0, 0.88, 1.0),
            Self::EaseInOutSine => h(0.37, 0.0, 0.63, 1.0),
            Self::EaseInQuad => h(0.11, 0.0, 0.5, 0.0),
            Self::EaseOutQuad => h(0.5, 1.0, 0.89, 1.0),
            Self::EaseInOutQuad => h(0.45, 0.0, 0.55, 1.0),
            Self::EaseInCubic => h(0.32, 0.0, 0.67, 0.0),
            Self::EaseOutCubic => h(0.33, 1.0, 0.68, 1.0),
            Self::EaseInOutCubic => h(0.65, 0.0, 0.35, 1.0),
            Self::EaseInQuart => h(0.5, 0.0, 0.75, 0.0),
            Self::EaseOutQuart => h(0.25, 1.0, 0.5, 1.0),
            Self::EaseInOutQuart => h(0.76, 0.0, 0.24, 1.0),
            Self::EaseInQuint => h(0.64, 0.0, 0.78, 0.0),
            Self::EaseOutQuint => h(0.22, 1.0, 0.36, 1.0),
            Self::EaseInOutQuint => h(0.83, 0.0, 0.17, 1.0),
            Self::EaseInExpo => h(0.7, 0.0, 0.84, 0.0),
            Self::EaseOutExpo => h(0.16, 1.0, 0.3, 1.0),
            Self::EaseInOutExpo => h(0.87, 0.0, 0.13, 1.0),
            Self::EaseInCirc => h(0.55, 0.0, 1.0, 0.45),
            Self::EaseOutCirc => h(0.0, 0.55, 0.45, 1.0),
            Self::EaseInOutCirc => h(0.85, 0.0, 0.15, 1.0),
            Self::EaseInBack => h(0.36, 0.0, 0.66, -0.56),
            Self::EaseOutBack => h(0.34, 1.56, 0.64, 1.0),
            Self::EaseInOutBack => h(0.68, -0.6, 0.32, 1.6),
            // Bezier stand-ins; a single cubic cannot oscillate.
            Self::EaseInElastic => h(0.6, -0.5, 0.8, -0.3),
            Self::EaseOutElastic => h(0.2, 1.3, 0.4, 1.5),
            Self::EaseInOutElastic => h(0.7, -0.5, 0.3, 1.5),
            Self::EaseInBounce => h(0.7, 0.0, 0.8, 0.1),
            Self::EaseOutBounce => h(0.2, 0.9, 0.3, 1.0),
            Self::EaseInOutBounce => h(0.6, 0.0, 0.4, 1.0),
        }
    }
}

/// Handle coordinates for a preset name, or `None` for names outside the table.
pub fn easing_handles(name: &str) -> Option<BezierHandles> {
    EasingPreset::from_name(name).map(EasingPreset::handles)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/easing.rs"]
mod tests;
