//! Graham scan: pivot selection, angular sort, stack scan, output assembly.
//!
//! Output contract
//! - `Hull` vertices are counter-clockwise, starting at the pivot (construction
//!   order). The scan stack is drained top-first and then reversed.
//! - The hull is strictly convex: collinear boundary points are not vertices.
//!   All-collinear input gives the two extreme points.
//!
//! Cross-refs: `point::{orientation, dist_sq}`, `polygon::{contains, area2}`.

pub mod pivot;
pub mod scan;
pub mod sort;

use std::fmt;

use crate::error::HullError;
use crate::point::Point;
use crate::polygon;

pub use pivot::{drop_pivot_copies, select_pivot};
pub use scan::{scan, HullStack};
pub use sort::{sort_around_pivot, AngularOrder};

/// Convex hull vertices, counter-clockwise from the pivot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    /// First vertex: lowest `y`, then lowest `x`.
    #[inline]
    pub fn pivot(&self) -> Option<Point> {
        self.vertices.first().copied()
    }
    /// `true` when all input points were collinear or only two were given (two vertices).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.vertices.iter()
    }
    #[inline]
    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }
    /// Vertices in stack-pop order: clockwise, ending at the pivot.
    pub fn popped_order(&self) -> Vec<Point> {
        self.vertices.iter().rev().copied().collect()
    }
    /// Inside or on the boundary.
    pub fn contains(&self, p: Point) -> bool {
        polygon::contains(&self.vertices, p)
    }
    /// Twice the enclosed area (positive, since vertices are counter-clockwise).
    pub fn area2(&self) -> i128 {
        polygon::area2(&self.vertices)
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl IntoIterator for Hull {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl fmt::Display for Hull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in &self.vertices {
            writeln!(f, "{p}")?;
        }
        Ok(())
    }
}

/// Convex hull of `points`; the caller's slice is left untouched.
pub fn convex_hull(points: &[Point]) -> Result<Hull, HullError> {
    let mut owned = points.to_vec();
    convex_hull_in_place(&mut owned)
}

/// Convex hull computed in the caller's buffer.
///
/// On success `points` holds the pivot at index 0 followed by the other points in
/// angular order. Copies of the pivot are removed, so the buffer can get shorter
/// and indices taken before the call no longer line up.
///
/// Two distinct points are returned as a two-vertex hull.
pub fn convex_hull_in_place(points: &mut Vec<Point>) -> Result<Hull, HullError> {
    let count = points.len();
    if count < 2 {
        return Err(HullError::InsufficientPoints { found: count });
    }
    let pivot = select_pivot(points).ok_or(HullError::InsufficientPoints { found: count })?;
    drop_pivot_copies(points);
    if points.len() < 2 {
        return Err(HullError::Coincident { count });
    }
    sort_around_pivot(points);
    let mut stack = scan(points);
    let mut vertices = stack.drain_popped();
    vertices.reverse();
    tracing::debug!(
        input = count,
        %pivot,
        hull = vertices.len(),
        "graham scan"
    );
    Ok(Hull { vertices })
}
