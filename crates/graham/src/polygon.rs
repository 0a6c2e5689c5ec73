//! Predicates on counter-clockwise convex polygons given as vertex slices.

use crate::point::{orientation, Orientation, Point};

/// Every cyclic triplet turns counter-clockwise. Needs at least three vertices.
pub fn is_strictly_convex(vertices: &[Point]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    (0..n).all(|i| {
        orientation(vertices[i], vertices[(i + 1) % n], vertices[(i + 2) % n]).is_ccw()
    })
}

/// Inside or on the boundary of a counter-clockwise convex polygon.
///
/// Two vertices are treated as a segment, one as a single point.
pub fn contains(vertices: &[Point], p: Point) -> bool {
    match vertices {
        [] => false,
        [a] => *a == p,
        [a, b] => on_segment(*a, *b, p),
        _ => {
            let n = vertices.len();
            (0..n).all(|i| {
                orientation(vertices[i], vertices[(i + 1) % n], p) != Orientation::Clockwise
            })
        }
    }
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    orientation(a, b, p) == Orientation::Collinear
        && p.x >= a.x.min(b.x)
        && p.x <= a.x.max(b.x)
        && p.y >= a.y.min(b.y)
        && p.y <= a.y.max(b.y)
}

/// Twice the signed shoelace area; positive for counter-clockwise vertices.
pub fn area2(vertices: &[Point]) -> i128 {
    let n = vertices.len();
    if n < 3 {
        return 0;
    }
    let mut acc = 0i128;
    for i in 0..n {
        let p = vertices[i];
        let q = vertices[(i + 1) % n];
        acc += i128::from(p.x) * i128::from(q.y) - i128::from(q.x) * i128::from(p.y);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn square_predicates() {
        let sq = pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
        assert!(is_strictly_convex(&sq));
        assert!(contains(&sq, Point::new(1, 1)));
        assert!(contains(&sq, Point::new(2, 1)));
        assert!(contains(&sq, Point::new(0, 0)));
        assert!(!contains(&sq, Point::new(3, 1)));
        assert_eq!(area2(&sq), 8);

        let cw: Vec<Point> = sq.iter().rev().copied().collect();
        assert!(!is_strictly_convex(&cw));
        assert_eq!(area2(&cw), -8);
    }

    #[test]
    fn collinear_vertex_is_not_strict() {
        let with_mid = pts(&[(0, 0), (1, 0), (2, 0), (2, 2)]);
        assert!(!is_strictly_convex(&with_mid));
    }

    #[test]
    fn segment_and_point_containment() {
        let seg = pts(&[(0, 0), (4, 2)]);
        assert!(contains(&seg, Point::new(2, 1)));
        assert!(!contains(&seg, Point::new(6, 3)));
        assert!(!contains(&seg, Point::new(2, 2)));
        assert!(contains(&pts(&[(5, 5)]), Point::new(5, 5)));
        assert!(!contains(&[], Point::new(0, 0)));
    }
}
