//! The boundary with the windowing/graphics side: poses, primitives and the
//! two collaborator traits the toy calls through.

use crate::float::Float;
use crate::vec::Vec2;

/// Radius of the dot drawn at the anchor.
pub const ANCHOR_RADIUS: f32 = 5.0;
/// Radius of the dot drawn where the body attaches to the spring.
pub const ATTACH_RADIUS: f32 = 2.0;
/// Width and height of the body rectangle hanging off the spring.
pub const BODY_SIZE: (f32, f32) = (35.0, 25.0);
/// The body rectangle is drawn a quarter turn off the spring heading.
pub const BODY_ROTATION_OFFSET_DEGREES: f32 = 90.0;

/// Everything the renderer needs for one frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pose<F: Float> {
    pub anchor: Vec2<F>,
    pub end: Vec2<F>,
    /// Spring heading plus torque-spring angle, in radians.
    pub rotation: F,
}

impl<F: Float> Pose<F> {
    pub fn rotation_degrees(&self) -> F {
        self.rotation.to_degrees()
    }

    /// Rotation of the body rectangle as the renderer applies it.
    pub fn display_rotation_degrees(&self) -> F {
        F::from_f32(BODY_ROTATION_OFFSET_DEGREES) + self.rotation_degrees()
    }

    /// The spring drawn as a single segment from anchor to end point.
    pub fn segment(&self) -> (Vec2<F>, Vec2<F>) {
        (self.anchor, self.end)
    }

    /// Draw list in back-to-front order: anchor dot, body, attach dot, spring line.
    pub fn primitives(&self) -> [Primitive<F>; 4] {
        [
            Primitive::Circle { center: self.anchor, radius: F::from_f32(ANCHOR_RADIUS) },
            Primitive::Rect {
                center: self.end,
                size: Vec2::new(F::from_f32(BODY_SIZE.0), F::from_f32(BODY_SIZE.1)),
                rotation_degrees: self.display_rotation_degrees(),
            },
            Primitive::Circle { center: self.end, radius: F::from_f32(ATTACH_RADIUS) },
            Primitive::Line { from: self.anchor, to: self.end },
        ]
    }
}

/// A shape placed in screen space. Rectangles rotate about their center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Primitive<F: Float> {
    Circle { center: Vec2<F>, radius: F },
    Rect { center: Vec2<F>, size: Vec2<F>, rotation_degrees: F },
    Line { from: Vec2<F>, to: Vec2<F> },
}

/// Source of the pointer position that drives the anchor.
pub trait PointerSource<F: Float> {
    fn pointer_position(&mut self) -> Vec2<F>;
}

/// Fixed pointer, handy for tests and headless runs.
impl<F: Float> PointerSource<F> for Vec2<F> {
    fn pointer_position(&mut self) -> Vec2<F> {
        *self
    }
}

/// Sink for the draw list.
pub trait Canvas<F: Float> {
    fn draw(&mut self, primitive: &Primitive<F>);
}
