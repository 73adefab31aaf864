//! Per-frame driver coupling the compression spring to the torque spring.

use crate::angle::signed_angle;
use crate::angular::AngularSpringDamper;
use crate::config::{DegeneracyPolicy, ToyConfig};
use crate::error::SpringError;
use crate::float::Float;
use crate::linear::LinearSpringDamper;
use crate::observer::FrameObserver;
use crate::render::{Canvas, PointerSource, Pose};
use crate::vec::Vec2;

/// A compression spring hanging from the pointer with a torque spring on its end.
///
/// Each frame the rotation swept by the anchor-to-end offset is measured and
/// injected, negated, into the torque spring. The rendered body follows the
/// spring heading with the torque spring's wobble added on top.
///
/// The negation assumes screen-space y-down axes.
#[derive(Clone, Debug)]
pub struct SpringToy<F: Float> {
    linear: LinearSpringDamper<F>,
    angular: AngularSpringDamper<F>,
    previous_offset: Vec2<F>,
}

impl<F: Float> SpringToy<F> {
    /// Couple two existing springs. The offset history starts from the
    /// linear spring's current state.
    pub fn new(linear: LinearSpringDamper<F>, angular: AngularSpringDamper<F>) -> Self {
        let previous_offset = linear.anchor_point() - linear.end_point();
        SpringToy { linear, angular, previous_offset }
    }

    /// Build both springs from a validated config, anchored at `anchor`.
    pub fn try_new(anchor: Vec2<F>, config: &ToyConfig<F>) -> Result<Self, SpringError> {
        config.validate()?;
        let linear = LinearSpringDamper::from_config(anchor, &config.linear)?;
        let angular = AngularSpringDamper::from_config(&config.angular)?;
        Ok(Self::new(linear, angular))
    }

    /// The fixed parameters of the original toy: 25/25/5 and 10/10.
    pub fn with_defaults(anchor: Vec2<F>) -> Self {
        let config = ToyConfig::new();
        Self::new(
            LinearSpringDamper::new(
                anchor,
                config.linear.rest_length,
                config.linear.stiffness,
                config.linear.damping,
            ),
            AngularSpringDamper::new(config.angular.stiffness, config.angular.damping),
        )
    }

    /// Advance one frame with the anchor at `pointer`, `dt` seconds after the last.
    pub fn step(&mut self, pointer: Vec2<F>, dt: F) -> Pose<F> {
        self.step_observed(pointer, dt, &mut crate::observer::NoOpFrameObserver)
    }

    pub fn step_observed<O: FrameObserver<F>>(&mut self, pointer: Vec2<F>, dt: F, observer: &mut O) -> Pose<F> {
        self.linear.set_anchor_point(pointer);

        let heading = (self.linear.end_point() - self.linear.anchor_point()).heading();
        let offset = self.linear.anchor_point() - self.linear.end_point();
        let delta = self.swept_angle(offset);
        observer.on_rotation_injected(delta);
        self.angular.rotate(-delta);
        self.previous_offset = offset;

        self.linear.update(dt);
        observer.on_linear_step(&self.linear);
        self.angular.update(dt);
        observer.on_angular_step(&self.angular);

        let pose = Pose {
            anchor: self.linear.anchor_point(),
            end: self.linear.end_point(),
            rotation: heading + self.angular.angle(),
        };
        observer.on_frame_complete(&pose);
        pose
    }

    /// Sample the pointer, step, and draw the pose.
    pub fn frame<P, C, O>(&mut self, pointer: &mut P, canvas: &mut C, dt: F, observer: &mut O) -> Pose<F>
    where
        P: PointerSource<F>,
        C: Canvas<F>,
        O: FrameObserver<F>,
    {
        let pose = self.step_observed(pointer.pointer_position(), dt, observer);
        for primitive in pose.primitives().iter() {
            canvas.draw(primitive);
        }
        pose
    }

    fn swept_angle(&self, offset: Vec2<F>) -> F {
        if let DegeneracyPolicy::Guard { epsilon } = self.linear.degeneracy() {
            let eps_sq = epsilon * epsilon;
            if self.previous_offset.length_sq() <= eps_sq || offset.length_sq() <= eps_sq {
                return F::zero();
            }
        }
        signed_angle(self.previous_offset, offset)
    }

    pub fn linear(&self) -> &LinearSpringDamper<F> { &self.linear }
    pub fn angular(&self) -> &AngularSpringDamper<F> { &self.angular }
    pub fn previous_offset(&self) -> Vec2<F> { self.previous_offset }

    pub fn is_finite(&self) -> bool {
        self.linear.is_finite() && self.angular.is_finite()
    }
}
