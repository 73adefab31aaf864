//! Configuration types for the two spring-dampers and the toy that couples them.

use crate::error::SpringError;
use crate::float::Float;

/// What the linear spring does when its end point lands exactly on the anchor.
///
/// At zero length the spring axis is undefined.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DegeneracyPolicy<F: Float> {
    /// Normalize anyway. The division by zero yields NaN, which then spreads
    /// through force, velocity and position and never clears.
    Propagate,
    /// Treat lengths at or below `epsilon` as "no spring force". Damping still
    /// applies. The driver also reads offsets this short as no rotation.
    Guard { epsilon: F },
}

impl<F: Float> DegeneracyPolicy<F> {
    /// Guard with a tiny epsilon suitable for screen-space units.
    pub fn guarded() -> Self {
        DegeneracyPolicy::Guard { epsilon: F::from_f32(1e-6) }
    }

    /// True if `length` should be treated as degenerate under this policy.
    pub fn is_degenerate(&self, length: F) -> bool {
        match *self {
            DegeneracyPolicy::Propagate => false,
            DegeneracyPolicy::Guard { epsilon } => length.is_near_zero(epsilon),
        }
    }
}

impl<F: Float> Default for DegeneracyPolicy<F> {
    fn default() -> Self {
        DegeneracyPolicy::Propagate
    }
}

/// Parameters of the compression spring.
///
/// # Builder Pattern
/// ```
/// use wobble::config::{LinearConfig, DegeneracyPolicy};
///
/// let config: LinearConfig<f32> = LinearConfig::new()
///     .with_rest_length(40.0)
///     .with_stiffness(30.0)
///     .with_damping(4.0)
///     .with_degeneracy(DegeneracyPolicy::guarded());
/// assert!(config.validate().is_ok());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinearConfig<F: Float> {
    /// Unstretched length. Default: 25.
    pub rest_length: F,
    /// Restoring force per unit of stretch. Default: 25.
    pub stiffness: F,
    /// Force per unit of velocity. Default: 5.
    pub damping: F,
    /// Zero-length handling. Default: [`DegeneracyPolicy::Propagate`].
    pub degeneracy: DegeneracyPolicy<F>,
}

impl<F: Float> LinearConfig<F> {
    pub fn new() -> Self {
        LinearConfig {
            rest_length: F::from_f32(25.0),
            stiffness: F::from_f32(25.0),
            damping: F::from_f32(5.0),
            degeneracy: DegeneracyPolicy::Propagate,
        }
    }

    pub fn with_rest_length(mut self, rest_length: F) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_degeneracy(mut self, degeneracy: DegeneracyPolicy<F>) -> Self {
        self.degeneracy = degeneracy;
        self
    }

    /// Reject parameters that do not describe a damped oscillator.
    pub fn validate(&self) -> Result<(), SpringError> {
        finite("rest_length", self.rest_length)?;
        finite("stiffness", self.stiffness)?;
        finite("damping", self.damping)?;
        if self.rest_length <= F::zero() {
            return Err(SpringError::InvalidRestLength);
        }
        if self.stiffness < F::zero() {
            return Err(SpringError::InvalidStiffness);
        }
        if self.damping < F::zero() {
            return Err(SpringError::InvalidDamping);
        }
        if let DegeneracyPolicy::Guard { epsilon } = self.degeneracy {
            finite("epsilon", epsilon)?;
            if epsilon < F::zero() {
                return Err(SpringError::InvalidEpsilon);
            }
        }
        Ok(())
    }
}

impl<F: Float> Default for LinearConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Parameters of the torque spring.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AngularConfig<F: Float> {
    /// Restoring torque per radian. Default: 10.
    pub stiffness: F,
    /// Torque per radian/second. Default: 10.
    pub damping: F,
}

impl<F: Float> AngularConfig<F> {
    pub fn new() -> Self {
        AngularConfig {
            stiffness: F::from_f32(10.0),
            damping: F::from_f32(10.0),
        }
    }

    pub fn with_stiffness(mut self, stiffness: F) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: F) -> Self {
        self.damping = damping;
        self
    }

    pub fn validate(&self) -> Result<(), SpringError> {
        finite("stiffness", self.stiffness)?;
        finite("damping", self.damping)?;
        if self.stiffness < F::zero() {
            return Err(SpringError::InvalidStiffness);
        }
        if self.damping < F::zero() {
            return Err(SpringError::InvalidDamping);
        }
        Ok(())
    }
}

impl<F: Float> Default for AngularConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Both spring configurations for a [`SpringToy`](crate::toy::SpringToy).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ToyConfig<F: Float> {
    pub linear: LinearConfig<F>,
    pub angular: AngularConfig<F>,
}

impl<F: Float> ToyConfig<F> {
    pub fn new() -> Self {
        ToyConfig {
            linear: LinearConfig::new(),
            angular: AngularConfig::new(),
        }
    }

    pub fn with_linear(mut self, linear: LinearConfig<F>) -> Self {
        self.linear = linear;
        self
    }

    pub fn with_angular(mut self, angular: AngularConfig<F>) -> Self {
        self.angular = angular;
        self
    }

    pub fn validate(&self) -> Result<(), SpringError> {
        self.linear.validate()?;
        self.angular.validate()
    }
}

fn finite<F: Float>(name: &'static str, value: F) -> Result<(), SpringError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SpringError::NonFiniteParameter { name })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_parameters() {
        let config: ToyConfig<f32> = ToyConfig::default();
        assert_eq!(config.linear.rest_length, 25.0);
        assert_eq!(config.linear.stiffness, 25.0);
        assert_eq!(config.linear.damping, 5.0);
        assert_eq!(config.linear.degeneracy, DegeneracyPolicy::Propagate);
        assert_eq!(config.angular.stiffness, 10.0);
        assert_eq!(config.angular.damping, 10.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_rest_length() {
        let config: LinearConfig<f32> = LinearConfig::new().with_rest_length(0.0);
        assert_eq!(config.validate(), Err(SpringError::InvalidRestLength));
    }

    #[test]
    fn rejects_negative_coefficients() {
        let linear: LinearConfig<f64> = LinearConfig::new().with_damping(-1.0);
        assert_eq!(linear.validate(), Err(SpringError::InvalidDamping));
        let angular: AngularConfig<f64> = AngularConfig::new().with_stiffness(-0.5);
        assert_eq!(angular.validate(), Err(SpringError::InvalidStiffness));
    }

    #[test]
    fn rejects_nan_with_parameter_name() {
        let config: LinearConfig<f32> = LinearConfig::new().with_stiffness(f32::NAN);
        assert_eq!(
            config.validate(),
            Err(SpringError::NonFiniteParameter { name: "stiffness" })
        );
    }

    #[test]
    fn guard_policy_thresholds_length() {
        let policy: DegeneracyPolicy<f32> = DegeneracyPolicy::Guard { epsilon: 0.01 };
        assert!(policy.is_degenerate(0.0));
        assert!(policy.is_degenerate(0.005));
        assert!(!policy.is_degenerate(0.5));
        assert!(!DegeneracyPolicy::<f32>::Propagate.is_degenerate(0.0));
    }

    #[test]
    fn rejects_negative_guard_epsilon() {
        let config: LinearConfig<f32> = LinearConfig::new()
            .with_degeneracy(DegeneracyPolicy::Guard { epsilon: -1e-3 });
        assert_eq!(config.validate(), Err(SpringError::InvalidEpsilon));

        let zero: LinearConfig<f32> = LinearConfig::new()
            .with_degeneracy(DegeneracyPolicy::Guard { epsilon: 0.0 });
        assert!(zero.validate().is_ok());
    }
}
