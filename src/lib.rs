//! A cursor-anchored compression spring coupled to a torque spring.
//!
//! `wobble` integrates two independent spring-dampers and couples them the way
//! a hanging sign on a string behaves: the compression spring follows the
//! pointer, and every frame the rotation of its axis is fed into a torque
//! spring that adds a damped wobble to the rendered body.
//!
//! # Features
//!
//! - **Compression spring**: point mass on a damped spring along the anchor axis
//! - **Torque spring**: single rotational degree of freedom around angle 0
//! - **Semi-implicit Euler**: velocity first, then position, at the frame's `dt`
//! - **Degeneracy policy**: reproduce NaN poisoning or guard zero-length springs
//! - **Observable**: Monitor frames via the `FrameObserver` trait or the `log` facade
//! - **`no_std` compatible**: No allocation; rendering stays behind the `Canvas` trait
//!
//! # Example
//! ```
//! use wobble::{SpringToy, Vec2};
//!
//! let mut toy: SpringToy<f32> = SpringToy::with_defaults(Vec2::new(400.0, 300.0));
//! for _ in 0..60 {
//!     let pose = toy.step(Vec2::new(420.0, 300.0), 1.0 / 60.0);
//!     assert!(pose.end.is_finite());
//! }
//! ```

#![no_std]

pub mod float;
pub mod vec;
pub mod angle;
pub mod linear;
pub mod angular;
pub mod render;
pub mod toy;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use angle::{angle, signed_angle, heading, to_degrees};
pub use linear::LinearSpringDamper;
pub use angular::AngularSpringDamper;
pub use render::{Pose, Primitive, PointerSource, Canvas};
pub use toy::SpringToy;
pub use observer::{FrameObserver, NoOpFrameObserver, LogObserver};
pub use config::{LinearConfig, AngularConfig, ToyConfig, DegeneracyPolicy};
pub use error::SpringError;
