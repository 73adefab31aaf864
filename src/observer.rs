//! Frame observer trait for monitoring the spring toy.

use crate::angular::AngularSpringDamper;
use crate::float::Float;
use crate::linear::LinearSpringDamper;
use crate::render::Pose;

/// Trait for observing simulation frames.
///
/// Implement this trait to watch the toy (e.g., for debugging, plotting, or
/// catching NaN). All methods have default no-op implementations.
pub trait FrameObserver<F: Float> {
    /// Called with the signed rotation measured from the spring offset,
    /// before it is fed (negated) into the torque spring.
    fn on_rotation_injected(&mut self, _delta: F) {}

    /// Called after the compression spring has been integrated.
    fn on_linear_step(&mut self, _spring: &LinearSpringDamper<F>) {}

    /// Called after the torque spring has been integrated.
    fn on_angular_step(&mut self, _spring: &AngularSpringDamper<F>) {}

    /// Called when the frame's pose is final.
    fn on_frame_complete(&mut self, _pose: &Pose<F>) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpFrameObserver;

impl<F: Float> FrameObserver<F> for NoOpFrameObserver {}

/// Observer that forwards frames to the `log` facade.
///
/// Per-frame detail goes out at `trace`. The first frame whose state is no
/// longer finite is reported once at `warn`.
#[derive(Default)]
pub struct LogObserver {
    frame: u64,
    poisoned: bool,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames completed so far.
    pub fn frames(&self) -> u64 {
        self.frame
    }

    /// True once a non-finite pose has been seen.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }
}

impl<F: Float> FrameObserver<F> for LogObserver {
    fn on_rotation_injected(&mut self, delta: F) {
        log::trace!("frame {}: offset swept {:.5} rad", self.frame, delta.to_f64());
    }

    fn on_linear_step(&mut self, spring: &LinearSpringDamper<F>) {
        log::trace!(
            "frame {}: stretch {:.4}, speed {:.4}",
            self.frame,
            spring.stretch().to_f64(),
            spring.velocity().length().to_f64(),
        );
    }

    fn on_angular_step(&mut self, spring: &AngularSpringDamper<F>) {
        log::trace!(
            "frame {}: torque angle {:.5}, angular velocity {:.5}",
            self.frame,
            spring.angle().to_f64(),
            spring.angular_velocity().to_f64(),
        );
    }

    fn on_frame_complete(&mut self, pose: &Pose<F>) {
        let finite = pose.end.is_finite() && pose.anchor.is_finite() && pose.rotation.is_finite();
        if !finite && !self.poisoned {
            self.poisoned = true;
            log::warn!(
                "frame {}: simulation state is no longer finite (end {:?}, rotation {})",
                self.frame,
                pose.end,
                pose.rotation,
            );
        }
        self.frame += 1;
    }
}
