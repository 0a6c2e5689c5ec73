//! Integer points and the two exact primitives every hull decision goes through.
//!
//! - `orientation`: turn direction of an ordered triplet (sign of a cross product).
//! - `dist_sq`: squared Euclidean distance, only used to break collinear ties.
//!
//! Both widen to `i128` before subtracting, so neither can overflow for `i32` input.

use std::fmt;

/// Immutable integer point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rotational direction of an ordered triplet `(p, q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// `true` only for a strict left turn.
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }
}

/// Orientation of `(p, q, r)` from the sign of `(q - p) x (r - q)`.
///
/// The cross value is `(qy - py)(rx - qx) - (qx - px)(ry - qy)`:
/// zero is collinear, positive is clockwise, negative is counter-clockwise.
/// Identical points are reported as collinear.
#[inline]
pub fn orientation(p: Point, q: Point, r: Point) -> Orientation {
    let (px, py) = (i128::from(p.x), i128::from(p.y));
    let (qx, qy) = (i128::from(q.x), i128::from(q.y));
    let (rx, ry) = (i128::from(r.x), i128::from(r.y));
    let val = (qy - py) * (rx - qx) - (qx - px) * (ry - qy);
    match val.signum() {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// Squared Euclidean distance between `a` and `b`.
#[inline]
pub fn dist_sq(a: Point, b: Point) -> i128 {
    let dx = i128::from(a.x) - i128::from(b.x);
    let dy = i128::from(a.y) - i128::from(b.y);
    dx * dx + dy * dy
}
