use wobble::{Canvas, LogObserver, Primitive, SpringToy, Vec2};
use wasm_bindgen::prelude::*;

const CIRCLE: f32 = 0.0;
const RECT: f32 = 1.0;
const LINE: f32 = 2.0;

/// Flattens primitives into records of 6 floats for the JS side:
/// `[kind, a, b, c, d, e]`.
///
/// - circle: `[0, cx, cy, radius, 0, 0]`
/// - rect:   `[1, cx, cy, width, height, rotation_degrees]`
/// - line:   `[2, x0, y0, x1, y1, 0]`
#[derive(Default)]
struct FlatCanvas {
    out: Vec<f32>,
}

impl Canvas<f32> for FlatCanvas {
    fn draw(&mut self, primitive: &Primitive<f32>) {
        let record = match *primitive {
            Primitive::Circle { center, radius } => [CIRCLE, center.x, center.y, radius, 0.0, 0.0],
            Primitive::Rect { center, size, rotation_degrees } => {
                [RECT, center.x, center.y, size.x, size.y, rotation_degrees]
            }
            Primitive::Line { from, to } => [LINE, from.x, from.y, to.x, to.y, 0.0],
        };
        self.out.extend_from_slice(&record);
    }
}

// ---- Spring Toy Demo ----

#[wasm_bindgen]
pub struct SpringToyDemo {
    toy: SpringToy<f32>,
    pointer: Vec2<f32>,
    canvas: FlatCanvas,
    observer: LogObserver,
}

#[wasm_bindgen]
impl SpringToyDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f32, y: f32) -> Self {
        let pointer = Vec2::new(x, y);
        SpringToyDemo {
            toy: SpringToy::with_defaults(pointer),
            pointer,
            canvas: FlatCanvas::default(),
            observer: LogObserver::new(),
        }
    }

    /// Pointer position in canvas pixels, sampled on the next `update`.
    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn update(&mut self, dt: f32) {
        self.canvas.out.clear();
        let mut pointer = self.pointer;
        self.toy.frame(&mut pointer, &mut self.canvas, dt, &mut self.observer);
    }

    /// Draw list from the last `update`, 6 floats per primitive.
    pub fn primitives(&self) -> Vec<f32> {
        self.canvas.out.clone()
    }

    /// Returns [anchor_x, anchor_y, end_x, end_y, torque_angle]
    pub fn state(&self) -> Vec<f32> {
        let a = self.toy.linear().anchor_point();
        let e = self.toy.linear().end_point();
        vec![a.x, a.y, e.x, e.y, self.toy.angular().angle()]
    }

    /// Put the body back at rest below the current pointer.
    pub fn reset(&mut self) {
        self.toy = SpringToy::with_defaults(self.pointer);
    }

    pub fn is_finite(&self) -> bool {
        self.toy.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_emits_four_records() {
        let mut demo = SpringToyDemo::new(100.0, 100.0);
        demo.set_pointer(110.0, 100.0);
        demo.update(1.0 / 60.0);
        let flat = demo.primitives();
        assert_eq!(flat.len(), 24);
        assert_eq!(flat[0], CIRCLE);
        assert_eq!(flat[6], RECT);
        assert_eq!(flat[12], CIRCLE);
        assert_eq!(flat[18], LINE);
        assert_eq!((flat[1], flat[2]), (110.0, 100.0));
    }
}
