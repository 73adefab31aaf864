//! Floating-point abstraction trait so both integrators run on `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Sub, Mul, Div, Neg};

/// Trait abstracting the floating-point operations the spring toy needs.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate stays `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
    + core::fmt::Display
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Pi (~3.14159).
    fn pi() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Arc cosine, in radians. NaN outside [-1, 1].
    fn acos(self) -> Self;
    /// Arctangent of y/x, with correct quadrant.
    fn atan2(y: Self, x: Self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// Minimum of two values. Returns `self` unless `other` is strictly smaller,
    /// so a NaN `other` yields `self`.
    fn min(self, other: Self) -> Self;
    /// Maximum of two values. Returns `self` unless `other` is strictly larger.
    fn max(self, other: Self) -> Self;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Widen to f64 (for logging and interop).
    fn to_f64(self) -> f64;
    /// False for NaN and both infinities.
    fn is_finite(self) -> bool;

    /// Radians to degrees.
    fn to_degrees(self) -> Self {
        self * Self::from_f32(180.0) / Self::pi()
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() <= epsilon
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn pi() -> Self { core::f32::consts::PI }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn acos(self) -> Self { libm::acosf(self) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2f(y, x) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn min(self, other: Self) -> Self { if self > other { other } else { self } }
    fn max(self, other: Self) -> Self { if self < other { other } else { self } }
    fn from_f32(v: f32) -> Self { v }
    fn to_f64(self) -> f64 { self as f64 }
    fn is_finite(self) -> bool { f32::is_finite(self) }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn pi() -> Self { core::f64::consts::PI }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn acos(self) -> Self { libm::acos(self) }
    fn atan2(y: Self, x: Self) -> Self { libm::atan2(y, x) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn min(self, other: Self) -> Self { if self > other { other } else { self } }
    fn max(self, other: Self) -> Self { if self < other { other } else { self } }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn to_f64(self) -> f64 { self }
    fn is_finite(self) -> bool { f64::is_finite(self) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_prefers_self_over_nan() {
        assert_eq!(<f32 as Float>::min(1.0, f32::NAN), 1.0);
        assert!(<f32 as Float>::min(f32::NAN, 1.0).is_nan());
    }

    #[test]
    fn max_min_bound_overshoot() {
        assert_eq!(<f64 as Float>::max(-1.0, <f64 as Float>::min(1.0, 1.0000001)), 1.0);
        assert_eq!(<f64 as Float>::max(-1.0, <f64 as Float>::min(1.0, -3.0)), -1.0);
    }

    #[test]
    fn degrees_of_half_turn() {
        assert!((<f64 as Float>::to_degrees(core::f64::consts::PI) - 180.0).abs() < 1e-12);
    }
}
