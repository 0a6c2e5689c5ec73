use crate::point::Point;

/// Index of the lowest point (minimum `y`, then minimum `x`); `None` if empty.
pub fn lowest_index(points: &[Point]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        match best {
            Some(b) => {
                let q = points[b];
                if p.y < q.y || (p.y == q.y && p.x < q.x) {
                    best = Some(i);
                }
            }
            None => best = Some(i),
        }
    }
    best
}

/// Swap the lowest point into index 0 and return it.
///
/// Ties on both coordinates keep the first occurrence.
pub fn select_pivot(points: &mut [Point]) -> Option<Point> {
    let i = lowest_index(points)?;
    points.swap(0, i);
    Some(points[0])
}

/// Remove every later copy of `points[0]`, keeping it in front.
///
/// A copy of the pivot is collinear with every direction, which would break the
/// angular ordering. Order of the remaining points is not preserved.
pub fn drop_pivot_copies(points: &mut Vec<Point>) {
    let Some(&pivot) = points.first() else {
        return;
    };
    let mut k = 1;
    while k < points.len() {
        if points[k] == pivot {
            points.swap_remove(k);
        } else {
            k += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn picks_lowest_y_then_lowest_x() {
        let mut p = pts(&[(3, 1), (5, 0), (2, 0), (0, 4)]);
        assert_eq!(select_pivot(&mut p), Some(Point::new(2, 0)));
        assert_eq!(p[0], Point::new(2, 0));
        // Only the two swapped slots move.
        assert_eq!(p[2], Point::new(3, 1));
        assert_eq!(p[1], Point::new(5, 0));
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let p = pts(&[(1, 1), (0, 0), (0, 0)]);
        assert_eq!(lowest_index(&p), Some(1));
    }

    #[test]
    fn pivot_copies_are_removed() {
        let mut p = pts(&[(0, 0), (0, 0), (2, 1), (0, 0), (1, 3)]);
        drop_pivot_copies(&mut p);
        assert_eq!(p.len(), 3);
        assert_eq!(p[0], Point::new(0, 0));
        assert!(!p[1..].contains(&Point::new(0, 0)));
    }

    #[test]
    fn empty_has_no_pivot() {
        let mut p: Vec<Point> = Vec::new();
        assert_eq!(select_pivot(&mut p), None);
    }
}
