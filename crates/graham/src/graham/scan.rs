use crate::point::{orientation, Point};

/// Growable stack of hull candidates (push / pop / peek / peek-second only).
#[derive(Clone, Debug, Default)]
pub struct HullStack {
    items: Vec<Point>,
}

impl HullStack {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            items: Vec::with_capacity(n),
        }
    }
    #[inline]
    pub fn push(&mut self, p: Point) {
        self.items.push(p);
    }
    #[inline]
    pub fn pop(&mut self) -> Option<Point> {
        self.items.pop()
    }
    #[inline]
    pub fn peek(&self) -> Option<Point> {
        self.items.last().copied()
    }
    /// Next-to-top element.
    #[inline]
    pub fn peek_second(&self) -> Option<Point> {
        let n = self.items.len();
        if n < 2 {
            None
        } else {
            Some(self.items[n - 2])
        }
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pop while the top makes a non-left turn toward `next`; never below two elements.
    fn pop_non_left(&mut self, next: Point) {
        while self.len() > 2 {
            let (Some(second), Some(top)) = (self.peek_second(), self.peek()) else {
                break;
            };
            if orientation(second, top, next).is_ccw() {
                break;
            }
            tracing::trace!(%top, %next, "pop");
            self.items.pop();
        }
    }

    /// Drain top-first (the reverse of construction order).
    pub fn drain_popped(&mut self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(p) = self.pop() {
            out.push(p);
        }
        out
    }
}

/// Stack scan over `sorted` (pivot at index 0, the rest in angular order).
///
/// Seeds the stack with the first three points, then pops non-left turns before
/// pushing each further point. A closing pass pops tops that do not turn left
/// toward the pivot, which removes the trailing collinear run and the interior
/// of an all-collinear input. The returned stack is a strictly convex chain
/// once it holds three or more points.
pub fn scan(sorted: &[Point]) -> HullStack {
    let mut stack = HullStack::with_capacity(sorted.len());
    let Some(&pivot) = sorted.first() else {
        return stack;
    };
    for &p in sorted.iter().take(3) {
        stack.push(p);
    }
    for &p in sorted.iter().skip(3) {
        stack.pop_non_left(p);
        stack.push(p);
    }
    stack.pop_non_left(pivot);
    stack
}
