//! Animatable values
//!
//! Anything a reveal transition interpolates implements [`Interpolate`].

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    ///
    /// `t` may leave `[0, 1]` for overshooting easings.
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

impl Interpolate for (f32, f32) {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        (self.0.lerp(&other.0, t), self.1.lerp(&other.1, t))
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0.approx_eq(&other.0, epsilon) && self.1.approx_eq(&other.1, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_f32_lerp() {
        assert_eq!(0.0f32.lerp(&10.0, 0.5), 5.0);
        assert_eq!(10.0f32.lerp(&0.0, 1.0), 0.0);
        // Overshoot past the end is allowed
        assert!(0.0f32.lerp(&10.0, 1.1).approx_eq(&11.0, 1e-4));
    }

    #[test]
    fn test_pair_lerp() {
        let v = (0.0f32, 50.0f32).lerp(&(10.0, 0.0), 0.5);
        assert!(v.approx_eq(&(5.0, 25.0), 1e-5));
    }
}
