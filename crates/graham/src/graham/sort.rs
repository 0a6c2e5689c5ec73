use std::cmp::Ordering;

use crate::point::{dist_sq, orientation, Orientation, Point};

/// Comparator anchored at a pivot: counter-clockwise polar order, farther first
/// when two points are collinear with the pivot.
///
/// Total on any set where the pivot is the lowest point and no other point
/// equals it (every direction then lies in the half-open upper half-plane).
#[derive(Clone, Copy, Debug)]
pub struct AngularOrder {
    pub pivot: Point,
}

impl AngularOrder {
    #[inline]
    pub fn new(pivot: Point) -> Self {
        Self { pivot }
    }

    #[inline]
    pub fn compare(&self, a: &Point, b: &Point) -> Ordering {
        match orientation(self.pivot, *a, *b) {
            Orientation::CounterClockwise => Ordering::Less,
            Orientation::Clockwise => Ordering::Greater,
            Orientation::Collinear => dist_sq(self.pivot, *b).cmp(&dist_sq(self.pivot, *a)),
        }
    }
}

/// Sort `points[1..]` around `points[0]`.
pub fn sort_around_pivot(points: &mut [Point]) {
    let Some((pivot, rest)) = points.split_first_mut() else {
        return;
    };
    let order = AngularOrder::new(*pivot);
    rest.sort_unstable_by(|a, b| order.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn orders_by_angle_counter_clockwise() {
        let mut p = pts(&[(0, 0), (0, 3), (-2, 1), (3, 1), (2, 2)]);
        sort_around_pivot(&mut p);
        assert_eq!(p, pts(&[(0, 0), (3, 1), (2, 2), (0, 3), (-2, 1)]));
    }

    #[test]
    fn collinear_runs_are_contiguous_and_farther_first() {
        let mut p = pts(&[(0, 0), (1, 1), (4, 0), (3, 3), (2, 0), (2, 2), (0, 5)]);
        sort_around_pivot(&mut p);
        assert_eq!(
            p,
            pts(&[(0, 0), (4, 0), (2, 0), (3, 3), (2, 2), (1, 1), (0, 5)])
        );
    }

    #[test]
    fn pivot_stays_in_front() {
        let mut p = pts(&[(5, -1), (9, 9), (-9, 9)]);
        sort_around_pivot(&mut p);
        assert_eq!(p[0], Point::new(5, -1));
    }

    #[test]
    fn comparator_is_antisymmetric_on_a_grid() {
        let order = AngularOrder::new(Point::new(0, 0));
        let grid: Vec<Point> = (-3..=3)
            .flat_map(|x| (0..=3).map(move |y| Point::new(x, y)))
            .filter(|p| p.y > 0 || p.x > 0)
            .collect();
        for a in &grid {
            for b in &grid {
                assert_eq!(order.compare(a, b), order.compare(b, a).reverse());
            }
        }
    }
}
