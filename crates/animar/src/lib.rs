//! Animar: frame-by-frame procedural animation of 2D geometry.
//!
//! Animar (Spanish: "to animate") drives offline video generation: a caller
//! fixes a frame count, and for every frame the engine computes a normalized
//! fraction, reshapes it through a pluggable easing curve, and blends,
//! scales, translates, or rotates geometric primitives between keyframe
//! states. Each frame's output is a geometric scene ready for an external
//! rasterizer/encoder behind the [`VideoSink`] boundary.
//!
//! # Architecture
//!
//! ```text
//! Animator ──(frame, fraction)──► caller callback
//!                                       │
//!                                       ▼
//!                          Interpolator::between / scale /
//!                          translate / rotate
//!                                       │ (fraction reshaped by EasingCurve)
//!                                       ▼
//!                              geometric values ──► VideoSink
//! ```
//!
//! # Example
//!
//! ```
//! use animar::{Animator, Interpolator, Quadratic, Rectangle, Vector};
//!
//! let interp = Interpolator::new(Quadratic);
//! let a = Rectangle::by_center_and_size(Vector::ZERO, 2.0, 2.0);
//! let b = Rectangle::by_center_and_size(Vector::new(10.0, 0.0), 4.0, 4.0);
//!
//! Animator::new(30)?.run(|_frame, fraction| {
//!     let shape = interp.between_rectangles(fraction, &a, &b);
//!     // hand `shape` to a VideoSink here
//!     assert!(shape.width() >= 2.0 && shape.width() <= 4.0);
//!     Ok(())
//! })?;
//! # Ok::<(), animar::AnimarError>(())
//! ```

#![warn(missing_docs)]

mod animator;
mod easing;
pub mod frame;
pub mod geometry;
mod interpolation;
mod result;
mod sink;

pub use animator::Animator;
pub use easing::{EasingCurve, Linear, Quadratic};
pub use geometry::{
    Circle, Geometry, LineSegment, PolyLine, Polygon, Rectangle, Transformable, Vector,
};
pub use interpolation::Interpolator;
pub use result::{AnimarError, AnimarResult};
pub use sink::{Rgb, TraceSink, VideoSink};
