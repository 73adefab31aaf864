//! 2D vector value type for the spring toy.

use crate::float::Float;
use core::ops::{Add, Sub, Neg, Mul};

/// 2D vector in screen space (x right, y down).
///
/// A plain value: every operation returns a new vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }

    /// Zero vector.
    pub fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z-component): self.x * other.y - self.y * other.x
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Squared length (avoids sqrt).
    pub fn length_sq(self) -> F {
        self.dot(self)
    }

    /// Length (magnitude).
    pub fn length(self) -> F {
        self.length_sq().sqrt()
    }

    /// Scale both components by a scalar.
    pub fn scale(self, s: F) -> Self {
        Vec2 { x: self.x * s, y: self.y * s }
    }

    /// Heading of the vector, `atan2(y, x)`, in radians.
    pub fn heading(self) -> F {
        F::atan2(self.y, self.x)
    }

    /// True when neither component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;
    fn mul(self, rhs: F) -> Self { self.scale(rhs) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_length() {
        let v = Vec2::new(3.0f32, 4.0);
        assert!((v.length() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn cross_sign_is_counter_clockwise_positive() {
        let i = Vec2::new(1.0f32, 0.0);
        let j = Vec2::new(0.0f32, 1.0);
        assert_eq!(i.cross(j), 1.0);
        assert_eq!(j.cross(i), -1.0);
    }

    #[test]
    fn scalar_mul_matches_scale() {
        let v = Vec2::new(2.0f64, -3.0);
        assert_eq!(v * 0.5, Vec2::new(1.0, -1.5));
        assert_eq!(v.scale(0.5), v * 0.5);
    }

    #[test]
    fn heading_of_down_vector() {
        let v = Vec2::new(0.0f64, 25.0);
        assert!((v.heading() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn non_finite_detected() {
        assert!(Vec2::new(1.0f32, 2.0).is_finite());
        assert!(!Vec2::new(f32::NAN, 2.0).is_finite());
        assert!(!Vec2::new(0.0f32, f32::INFINITY).is_finite());
    }
}
