//! Compression spring: a point mass on a damped spring hanging off a movable anchor.

use crate::config::{DegeneracyPolicy, LinearConfig};
use crate::error::SpringError;
use crate::float::Float;
use crate::vec::Vec2;

/// Point mass attached to an anchor by a spring acting along the anchor-mass axis.
///
/// Models position only. There is no force perpendicular to the axis and no
/// rotational inertia; the torque spring in [`crate::angular`] supplies the spin.
#[derive(Clone, Debug)]
pub struct LinearSpringDamper<F: Float> {
    anchor: Vec2<F>,
    end: Vec2<F>,
    rest_length: F,
    stiffness: F,
    damping: F,
    velocity: Vec2<F>,
    degeneracy: DegeneracyPolicy<F>,
}

impl<F: Float> LinearSpringDamper<F> {
    /// Create a spring at rest, its end point `rest_length` below the anchor.
    ///
    /// Parameters are not checked. Negative stiffness or damping injects
    /// energy instead of removing it; use [`try_new`](Self::try_new) to reject them.
    pub fn new(anchor: Vec2<F>, rest_length: F, stiffness: F, damping: F) -> Self {
        LinearSpringDamper {
            anchor,
            end: anchor + Vec2::new(F::zero(), rest_length),
            rest_length,
            stiffness,
            damping,
            velocity: Vec2::zero(),
            degeneracy: DegeneracyPolicy::Propagate,
        }
    }

    /// Validated constructor.
    pub fn try_new(anchor: Vec2<F>, rest_length: F, stiffness: F, damping: F) -> Result<Self, SpringError> {
        let config = LinearConfig::new()
            .with_rest_length(rest_length)
            .with_stiffness(stiffness)
            .with_damping(damping);
        Self::from_config(anchor, &config)
    }

    /// Build from a config, carrying its degeneracy policy.
    pub fn from_config(anchor: Vec2<F>, config: &LinearConfig<F>) -> Result<Self, SpringError> {
        config.validate()?;
        let mut spring = Self::new(anchor, config.rest_length, config.stiffness, config.damping);
        spring.degeneracy = config.degeneracy;
        Ok(spring)
    }

    /// Advance by `dt` seconds with semi-implicit Euler.
    ///
    /// The force is evaluated with the velocity from before the step; the
    /// position then moves by the updated velocity.
    pub fn update(&mut self, dt: F) {
        let displacement = self.end - self.anchor;
        let length = displacement.length();

        let spring_force = if self.degeneracy.is_degenerate(length) {
            Vec2::zero()
        } else {
            let direction = displacement.scale(F::one() / length);
            let stretch = length - self.rest_length;
            direction.scale(-self.stiffness * stretch)
        };
        let force = spring_force - self.velocity.scale(self.damping);

        self.velocity = self.velocity + force.scale(dt);
        self.end = self.end + self.velocity.scale(dt);
    }

    pub fn set_anchor_point(&mut self, point: Vec2<F>) { self.anchor = point; }
    pub fn anchor_point(&self) -> Vec2<F> { self.anchor }
    pub fn end_point(&self) -> Vec2<F> { self.end }
    pub fn velocity(&self) -> Vec2<F> { self.velocity }
    pub fn rest_length(&self) -> F { self.rest_length }
    pub fn stiffness(&self) -> F { self.stiffness }
    pub fn damping(&self) -> F { self.damping }
    pub fn degeneracy(&self) -> DegeneracyPolicy<F> { self.degeneracy }

    /// Current length minus rest length. Positive when stretched.
    pub fn stretch(&self) -> F {
        (self.end - self.anchor).length() - self.rest_length
    }

    /// False once NaN or infinity has reached the end point or velocity.
    pub fn is_finite(&self) -> bool {
        self.end.is_finite() && self.velocity.is_finite()
    }
}
