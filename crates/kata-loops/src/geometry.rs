//! Triangle, rectangle and circle predicates.
//!
//! Rectangles use canvas coordinates: `top` grows downward and `left` grows
//! to the right.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance of the top edge from the origin.
    pub top: f64,
    /// Distance of the left edge from the origin.
    pub left: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
}

/// Whether a non-degenerate triangle has sides `a`, `b` and `c`.
///
/// Holds when the longest side is strictly shorter than the other two
/// together, so `1, 2, 3` is rejected.
#[must_use]
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    let longest = a.max(b).max(c);
    longest < a + b + c - longest
}

/// Whether two rectangles overlap.
///
/// The corners are compared on each axis: the rectangles overlap when the
/// distance between their tops is less than the taller height and the
/// distance between their lefts is less than the wider width. Rectangles that
/// only touch along an edge do not overlap.
#[must_use]
pub fn do_rectangles_overlap(first: &Rect, second: &Rect) -> bool {
    (first.top - second.top).abs() < first.height.max(second.height)
        && (first.left - second.left).abs() < first.width.max(second.width)
}

/// Whether `point` lies strictly inside `circle`.
///
/// Points on the circumference are outside.
#[must_use]
pub fn is_inside_circle(circle: &Circle, point: &Point) -> bool {
    (point.x - circle.center.x).hypot(point.y - circle.center.y) < circle.radius
}
