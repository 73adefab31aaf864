//! Angles between 2D vectors.

use crate::float::Float;
use crate::vec::Vec2;

/// Unsigned angle between `v1` and `v2`, in [0, pi] radians.
///
/// The cosine is clamped to [-1, 1] so rounding overshoot never leaves the
/// domain of `acos`. The clamp also maps a NaN cosine to 1, so a zero-length
/// input silently yields 0 rather than NaN.
pub fn angle<F: Float>(v1: Vec2<F>, v2: Vec2<F>) -> F {
    if v1 == v2 {
        return F::zero();
    }
    let cos_theta = v1.dot(v2) / (v1.length() * v2.length());
    // min(1, c) before max(-1, _): NaN compares false and falls to 1.
    let cos_theta = (-F::one()).max(F::one().min(cos_theta));
    cos_theta.acos()
}

/// Angle that rotates `v1` onto `v2`; positive for counter-clockwise in
/// y-up coordinates (negative cross product means clockwise).
pub fn signed_angle<F: Float>(v1: Vec2<F>, v2: Vec2<F>) -> F {
    let theta = angle(v1, v2);
    if v1.cross(v2) < F::zero() { -theta } else { theta }
}

/// Heading of `v` in radians, `atan2(v.y, v.x)`.
pub fn heading<F: Float>(v: Vec2<F>) -> F {
    v.heading()
}

/// Radians to degrees.
pub fn to_degrees<F: Float>(radians: F) -> F {
    radians.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn quarter_turn_signs() {
        let x = Vec2::new(1.0f64, 0.0);
        let y = Vec2::new(0.0f64, 1.0);
        assert!((signed_angle(x, y) - FRAC_PI_2).abs() < 1e-9);
        assert!((signed_angle(y, x) + FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn identical_and_opposite() {
        let v = Vec2::new(3.0f32, -7.0);
        assert_eq!(angle(v, v), 0.0);
        assert!((angle(v, -v) - core::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn range_over_a_fan_of_directions() {
        let base = Vec2::new(2.0f64, 1.0);
        for i in 0..64 {
            let t = i as f64 * (2.0 * PI / 64.0);
            let v = Vec2::new(5.0 * libm::cos(t), 5.0 * libm::sin(t));
            let a = angle(base, v);
            assert!((0.0..=PI).contains(&a), "angle {} out of range", a);
            assert_eq!(signed_angle(base, v).abs(), a);
        }
    }

    #[test]
    fn scale_does_not_change_angle() {
        let a = Vec2::new(1.0f64, 1.0);
        let b = Vec2::new(-2.0f64, 0.5);
        let scaled = angle(a.scale(40.0), b.scale(0.01));
        assert!((angle(a, b) - scaled).abs() < 1e-12);
    }

    #[test]
    fn zero_vector_reads_as_no_rotation() {
        let z = Vec2::<f32>::zero();
        assert_eq!(angle(z, Vec2::new(1.0, 0.0)), 0.0);
        assert_eq!(signed_angle(Vec2::new(0.0, 1.0), z), 0.0);
        assert_eq!(angle(z, z), 0.0);
    }

    #[test]
    fn nan_input_reads_as_no_rotation() {
        let nan = Vec2::new(f32::NAN, 1.0);
        assert_eq!(signed_angle(Vec2::new(0.0, -25.0), nan), 0.0);
    }

    #[test]
    fn large_magnitudes_keep_their_angle() {
        let a = Vec2::new(1e10f32, 0.0);
        let b = Vec2::new(1e10f32, 1e10);
        assert!((angle(a, b) - core::f32::consts::FRAC_PI_4).abs() < 1e-5);
        assert!((signed_angle(b, a) + core::f32::consts::FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn tiny_magnitudes_keep_their_angle() {
        let a = Vec2::new(1e-12f32, 0.0);
        let b = Vec2::new(1e-12f32, 1e-12);
        assert!((signed_angle(a, b) - core::f32::consts::FRAC_PI_4).abs() < 1e-5);
        assert!((angle(b, -a) - 3.0 * core::f32::consts::FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn degrees() {
        assert!((to_degrees(FRAC_PI_2) - 90.0).abs() < 1e-12);
        assert!((heading(Vec2::new(-1.0f64, 0.0)) - PI).abs() < 1e-12);
    }
}
