//! Torque spring: one rotational degree of freedom anchored at angle 0.

use crate::config::AngularConfig;
use crate::error::SpringError;
use crate::float::Float;

/// Rotational spring-damper. Tracks rotation only, never position.
///
/// The angle is unbounded; it is not wrapped to [-pi, pi].
#[derive(Clone, Debug)]
pub struct AngularSpringDamper<F: Float> {
    angle: F,
    stiffness: F,
    damping: F,
    angular_velocity: F,
}

impl<F: Float> AngularSpringDamper<F> {
    pub fn new(stiffness: F, damping: F) -> Self {
        AngularSpringDamper {
            angle: F::zero(),
            stiffness,
            damping,
            angular_velocity: F::zero(),
        }
    }

    pub fn try_new(stiffness: F, damping: F) -> Result<Self, SpringError> {
        Self::from_config(&AngularConfig::new().with_stiffness(stiffness).with_damping(damping))
    }

    pub fn from_config(config: &AngularConfig<F>) -> Result<Self, SpringError> {
        config.validate()?;
        Ok(Self::new(config.stiffness, config.damping))
    }

    /// Advance by `dt` seconds with semi-implicit Euler.
    pub fn update(&mut self, dt: F) {
        let torque = -self.stiffness * self.angle - self.damping * self.angular_velocity;
        self.angular_velocity = self.angular_velocity + torque * dt;
        self.rotate(self.angular_velocity * dt);
    }

    /// Overwrite the angle. Angular velocity is left alone.
    pub fn set_angle(&mut self, angle: F) { self.angle = angle; }

    /// Add `delta` radians to the angle.
    ///
    /// Both [`update`](Self::update) and external callers go through here.
    pub fn rotate(&mut self, delta: F) { self.angle = self.angle + delta; }

    pub fn angle(&self) -> F { self.angle }
    pub fn angular_velocity(&self) -> F { self.angular_velocity }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn damping(&self) -> F { self.damping }

    pub fn is_finite(&self) -> bool {
        self.angle.is_finite() && self.angular_velocity.is_finite()
    }
}
