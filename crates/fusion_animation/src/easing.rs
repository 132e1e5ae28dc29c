//! Easing curves
//!
//! Map a linear progress fraction in `[0, 1]` to an eased fraction. Named
//! curves match the CSS timing functions of the same name; `EaseOutBack`
//! overshoots slightly before settling and is used for "pop" reveals.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseOutBack,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// Apply the curve. Input is clamped; endpoints map exactly to 0 and 1.
    pub fn apply(&self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }

        match *self {
            Easing::Linear => t,
            Easing::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Easing::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Easing::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Easing::EaseOutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                let u = t - 1.0;
                1.0 + C3 * u * u * u + C1 * u * u
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

/// Evaluate a CSS cubic-bezier timing function at `x`
///
/// Solves `bx(s) = x` for the curve parameter `s` with Newton's method,
/// falling back to bisection where the slope is too flat, then returns `by(s)`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    let bx = |s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * x1 + 3.0 * inv * s * s * x2 + s * s * s
    };
    let by = |s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * y1 + 3.0 * inv * s * s * y2 + s * s * s
    };
    let dbx = |s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * x1 + 6.0 * inv * s * (x2 - x1) + 3.0 * s * s * (1.0 - x2)
    };

    let mut s = x;
    for _ in 0..8 {
        let err = bx(s) - x;
        if err.abs() < 1e-5 {
            return by(s);
        }
        let slope = dbx(s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = x;
    for _ in 0..32 {
        let value = bx(s);
        if (value - x).abs() < 1e-5 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    by(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
        Easing::EaseOutBack,
    ];

    #[test]
    fn test_endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
            assert_eq!(easing.apply(-3.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(7.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        let t = 0.3;
        assert!(Easing::EaseOut.apply(t) > t);
        assert!(Easing::EaseIn.apply(t) < t);
    }

    #[test]
    fn test_ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.apply(0.25);
        let b = Easing::EaseInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_ease_out_back_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::EaseOutBack.apply(i as f32 / 100.0))
            .fold(0.0f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_easing_is_monotonic() {
        for easing in [Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            let mut prev = 0.0;
            for i in 0..=50 {
                let v = easing.apply(i as f32 / 50.0);
                assert!(v + 1e-4 >= prev, "{easing:?} dipped at step {i}");
                prev = v;
            }
        }
    }
}
