//! Geometric shape primitives.
//!
//! All shapes are plain values: cheap to clone, compared field-wise, and
//! mutated only through the [`Transformable`] capability. The
//! [`Interpolator`](crate::Interpolator) never mutates a caller's shape; it
//! clones, transforms the clone, and returns it.

use serde::{Deserialize, Serialize};

use super::{Transformable, Vector};

/// An axis-aligned rectangle, stored as center plus size.
///
/// The center+size representation matches the blend semantics of
/// [`Interpolator::between_rectangles`](crate::Interpolator::between_rectangles):
/// centers and sizes interpolate independently, which is not the same as
/// interpolating corners when the endpoints are non-concentric.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    center: Vector,
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Build a rectangle from its center point and size.
    #[must_use]
    pub fn by_center_and_size(center: Vector, width: f64, height: f64) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Build a rectangle from its minimum-coordinate corner and size.
    #[must_use]
    pub fn by_corner_and_size(corner: Vector, width: f64, height: f64) -> Self {
        Self {
            center: corner + Vector::new(width / 2.0, height / 2.0),
            width,
            height,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vector {
        self.center
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Width divided by height.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Smallest x coordinate.
    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.center.x - self.width / 2.0
    }

    /// Smallest y coordinate.
    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.center.y - self.height / 2.0
    }

    /// Largest x coordinate.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.center.x + self.width / 2.0
    }

    /// Largest y coordinate.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.center.y + self.height / 2.0
    }

    /// Expand by `dx` on the left and right and `dy` on the top and bottom.
    /// The center stays put.
    pub fn grow(&mut self, dx: f64, dy: f64) {
        self.width += 2.0 * dx;
        self.height += 2.0 * dy;
    }
}

impl Transformable for Rectangle {
    fn translate(&mut self, delta: Vector) {
        self.center += delta;
    }

    /// Rotation of an axis-aligned rectangle moves its center about `origin`;
    /// the extents stay axis-aligned and unchanged.
    fn rotate(&mut self, angle: f64, origin: Vector) {
        self.center.rotate(angle, origin);
    }

    fn scale(&mut self, factor: f64, origin: Vector) {
        self.center.scale(factor, origin);
        self.width *= factor.abs();
        self.height *= factor.abs();
    }
}

/// A circle: center and radius.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    center: Vector,
    radius: f64,
}

impl Circle {
    /// Build a circle from its center and radius.
    #[must_use]
    pub fn new(center: Vector, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Vector {
        self.center
    }

    /// Radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Transformable for Circle {
    fn translate(&mut self, delta: Vector) {
        self.center += delta;
    }

    fn rotate(&mut self, angle: f64, origin: Vector) {
        self.center.rotate(angle, origin);
    }

    fn scale(&mut self, factor: f64, origin: Vector) {
        self.center.scale(factor, origin);
        self.radius *= factor.abs();
    }
}

/// A directed line segment from `start` to `end`.
///
/// Direction matters: blends pair start with start and end with end, so two
/// segments with opposite logical orientation blend with a visible flip.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    start: Vector,
    end: Vector,
}

impl LineSegment {
    /// Build a segment from its endpoints, in order.
    #[must_use]
    pub fn new(start: Vector, end: Vector) -> Self {
        Self { start, end }
    }

    /// Start point.
    #[must_use]
    pub fn start(&self) -> Vector {
        self.start
    }

    /// End point.
    #[must_use]
    pub fn end(&self) -> Vector {
        self.end
    }

    /// Segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }
}

impl Transformable for LineSegment {
    fn translate(&mut self, delta: Vector) {
        self.start += delta;
        self.end += delta;
    }

    fn rotate(&mut self, angle: f64, origin: Vector) {
        self.start.rotate(angle, origin);
        self.end.rotate(angle, origin);
    }

    fn scale(&mut self, factor: f64, origin: Vector) {
        self.start.scale(factor, origin);
        self.end.scale(factor, origin);
    }
}

/// An open sequence of vertices.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolyLine {
    vertices: Vec<Vector>,
}

impl PolyLine {
    /// Build a polyline from its vertex sequence.
    #[must_use]
    pub fn new(vertices: Vec<Vector>) -> Self {
        Self { vertices }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex at position `index`.
    ///
    /// # Panics
    /// Panics if `index >= vertex_count()`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Vector {
        self.vertices[index]
    }

    /// All vertices, in order.
    #[must_use]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    /// Append a vertex.
    pub fn add_vertex(&mut self, vertex: Vector) {
        self.vertices.push(vertex);
    }
}

impl Transformable for PolyLine {
    fn translate(&mut self, delta: Vector) {
        for v in &mut self.vertices {
            v.translate(delta);
        }
    }

    fn rotate(&mut self, angle: f64, origin: Vector) {
        for v in &mut self.vertices {
            v.rotate(angle, origin);
        }
    }

    fn scale(&mut self, factor: f64, origin: Vector) {
        for v in &mut self.vertices {
            v.scale(factor, origin);
        }
    }
}

/// A closed vertex sequence; the edge from the last vertex back to the first
/// is implicit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vector>,
}

impl Polygon {
    /// Build a polygon from its vertex sequence.
    #[must_use]
    pub fn new(vertices: Vec<Vector>) -> Self {
        Self { vertices }
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex at position `index`.
    ///
    /// # Panics
    /// Panics if `index >= vertex_count()`.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Vector {
        self.vertices[index]
    }

    /// All vertices, in order.
    #[must_use]
    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    /// Append a vertex.
    pub fn add_vertex(&mut self, vertex: Vector) {
        self.vertices.push(vertex);
    }
}

impl Transformable for Polygon {
    fn translate(&mut self, delta: Vector) {
        for v in &mut self.vertices {
            v.translate(delta);
        }
    }

    fn rotate(&mut self, angle: f64, origin: Vector) {
        for v in &mut self.vertices {
            v.rotate(angle, origin);
        }
    }

    fn scale(&mut self, factor: f64, origin: Vector) {
        for v in &mut self.vertices {
            v.scale(factor, origin);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rectangle_corner_constructor() {
        let r = Rectangle::by_corner_and_size(Vector::new(1.0, 2.0), 4.0, 6.0);
        assert_eq!(r.center(), Vector::new(3.0, 5.0));
        assert_eq!(r.min_x(), 1.0);
        assert_eq!(r.min_y(), 2.0);
        assert_eq!(r.max_x(), 5.0);
        assert_eq!(r.max_y(), 8.0);
    }

    #[test]
    fn test_rectangle_grow_keeps_center() {
        let mut r = Rectangle::by_center_and_size(Vector::new(1.0, 1.0), 2.0, 2.0);
        r.grow(1.0, 0.5);
        assert_eq!(r.center(), Vector::new(1.0, 1.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 3.0);
    }

    #[test]
    fn test_rectangle_scale_about_external_origin() {
        let mut r = Rectangle::by_center_and_size(Vector::new(2.0, 0.0), 2.0, 4.0);
        r.scale(2.0, Vector::ZERO);
        assert_eq!(r.center(), Vector::new(4.0, 0.0));
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 8.0);
    }

    #[test]
    fn test_rectangle_rotate_moves_center_only() {
        let mut r = Rectangle::by_center_and_size(Vector::new(1.0, 0.0), 2.0, 3.0);
        r.rotate(PI, Vector::ZERO);
        assert!((r.center().x + 1.0).abs() < 1e-12);
        assert!((r.center().y).abs() < 1e-12);
        assert_eq!(r.width(), 2.0);
        assert_eq!(r.height(), 3.0);
    }

    #[test]
    fn test_circle_scale_scales_radius() {
        let mut c = Circle::new(Vector::new(1.0, 0.0), 2.0);
        c.scale(3.0, Vector::ZERO);
        assert_eq!(c.center(), Vector::new(3.0, 0.0));
        assert_eq!(c.radius(), 6.0);
    }

    #[test]
    fn test_negative_scale_keeps_sizes_positive() {
        let mut c = Circle::new(Vector::new(1.0, 0.0), 2.0);
        c.scale(-1.0, Vector::ZERO);
        assert_eq!(c.center(), Vector::new(-1.0, 0.0));
        assert_eq!(c.radius(), 2.0);
    }

    #[test]
    fn test_segment_translate() {
        let mut s = LineSegment::new(Vector::ZERO, Vector::new(1.0, 0.0));
        s.translate(Vector::new(0.0, 2.0));
        assert_eq!(s.start(), Vector::new(0.0, 2.0));
        assert_eq!(s.end(), Vector::new(1.0, 2.0));
        assert_eq!(s.length(), 1.0);
    }

    #[test]
    fn test_polygon_transform_applies_to_all_vertices() {
        let mut p = Polygon::new(vec![
            Vector::ZERO,
            Vector::new(1.0, 0.0),
            Vector::new(0.0, 1.0),
        ]);
        p.translate(Vector::new(1.0, 1.0));
        assert_eq!(p.vertex(0), Vector::new(1.0, 1.0));
        assert_eq!(p.vertex(1), Vector::new(2.0, 1.0));
        assert_eq!(p.vertex(2), Vector::new(1.0, 2.0));
    }

    #[test]
    fn test_polyline_add_vertex() {
        let mut p = PolyLine::default();
        assert_eq!(p.vertex_count(), 0);
        p.add_vertex(Vector::new(1.0, 2.0));
        assert_eq!(p.vertex_count(), 1);
        assert_eq!(p.vertices(), &[Vector::new(1.0, 2.0)]);
    }
}
