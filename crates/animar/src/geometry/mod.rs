//! Geometric value types consumed and produced by the animation engine.
//!
//! Every shape implements the [`Transformable`] capability, so the generic
//! clone-then-transform operations of the
//! [`Interpolator`](crate::Interpolator) stay fully generic: the result of
//! `scale`/`translate`/`rotate` has the same concrete type as the input,
//! with no dynamic type recovery involved. Heterogeneous scenes use the
//! [`Geometry`] tagged union, which implements the same capability by
//! delegation.

mod shapes;
mod vector;

pub use shapes::{Circle, LineSegment, PolyLine, Polygon, Rectangle};
pub use vector::Vector;

use serde::{Deserialize, Serialize};

/// In-place rigid and similarity transforms shared by all geometric values.
///
/// Angles are in radians, counter-clockwise positive. Implementations mutate
/// `self`; callers wanting value semantics clone first (which is what the
/// interpolation operations do).
pub trait Transformable {
    /// Shift by `delta`.
    fn translate(&mut self, delta: Vector);

    /// Rotate by `angle` radians about `origin`.
    fn rotate(&mut self, angle: f64, origin: Vector);

    /// Scale by `factor` about `origin`.
    fn scale(&mut self, factor: f64, origin: Vector);
}

/// Any geometric value, as one tagged union.
///
/// Useful for heterogeneous scenes handed to a
/// [`VideoSink`](crate::VideoSink) and for serializing scene descriptions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    /// A single point
    Point(Vector),
    /// An axis-aligned rectangle
    Rectangle(Rectangle),
    /// A circle
    Circle(Circle),
    /// A directed line segment
    Segment(LineSegment),
    /// An open vertex sequence
    PolyLine(PolyLine),
    /// A closed vertex sequence
    Polygon(Polygon),
}

impl Transformable for Geometry {
    fn translate(&mut self, delta: Vector) {
        match self {
            Self::Point(g) => g.translate(delta),
            Self::Rectangle(g) => g.translate(delta),
            Self::Circle(g) => g.translate(delta),
            Self::Segment(g) => g.translate(delta),
            Self::PolyLine(g) => g.translate(delta),
            Self::Polygon(g) => g.translate(delta),
        }
    }

    fn rotate(&mut self, angle: f64, origin: Vector) {
        match self {
            Self::Point(g) => g.rotate(angle, origin),
            Self::Rectangle(g) => g.rotate(angle, origin),
            Self::Circle(g) => g.rotate(angle, origin),
            Self::Segment(g) => g.rotate(angle, origin),
            Self::PolyLine(g) => g.rotate(angle, origin),
            Self::Polygon(g) => g.rotate(angle, origin),
        }
    }

    fn scale(&mut self, factor: f64, origin: Vector) {
        match self {
            Self::Point(g) => g.scale(factor, origin),
            Self::Rectangle(g) => g.scale(factor, origin),
            Self::Circle(g) => g.scale(factor, origin),
            Self::Segment(g) => g.scale(factor, origin),
            Self::PolyLine(g) => g.scale(factor, origin),
            Self::Polygon(g) => g.scale(factor, origin),
        }
    }
}

impl From<Vector> for Geometry {
    fn from(value: Vector) -> Self {
        Self::Point(value)
    }
}

impl From<Rectangle> for Geometry {
    fn from(value: Rectangle) -> Self {
        Self::Rectangle(value)
    }
}

impl From<Circle> for Geometry {
    fn from(value: Circle) -> Self {
        Self::Circle(value)
    }
}

impl From<LineSegment> for Geometry {
    fn from(value: LineSegment) -> Self {
        Self::Segment(value)
    }
}

impl From<PolyLine> for Geometry {
    fn from(value: PolyLine) -> Self {
        Self::PolyLine(value)
    }
}

impl From<Polygon> for Geometry {
    fn from(value: Polygon) -> Self {
        Self::Polygon(value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_geometry_delegates_transform() {
        let mut g = Geometry::from(Circle::new(Vector::ZERO, 1.0));
        g.translate(Vector::new(2.0, 3.0));
        g.scale(2.0, Vector::new(2.0, 3.0));
        assert_eq!(
            g,
            Geometry::Circle(Circle::new(Vector::new(2.0, 3.0), 2.0))
        );
    }

    #[test]
    fn test_scene_json_roundtrip() {
        let scene = vec![
            Geometry::from(Rectangle::by_center_and_size(Vector::ZERO, 2.0, 2.0)),
            Geometry::from(LineSegment::new(Vector::ZERO, Vector::new(1.0, 1.0))),
            Geometry::from(Polygon::new(vec![
                Vector::ZERO,
                Vector::new(1.0, 0.0),
                Vector::new(0.0, 1.0),
            ])),
        ];
        let json = serde_json::to_string(&scene).unwrap();
        let parsed: Vec<Geometry> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scene);
    }
}
