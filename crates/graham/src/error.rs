//! Failure cases of a hull computation.

use thiserror::Error;

/// Inputs for which no hull is defined.
///
/// All-collinear input is not an error: it yields the two extreme points.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HullError {
    /// Fewer than two input points.
    #[error("convex hull needs at least 2 points, got {found}")]
    InsufficientPoints { found: usize },
    /// Every input point sits at the same location.
    #[error("all {count} points are coincident")]
    Coincident { count: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_count() {
        assert_eq!(
            HullError::InsufficientPoints { found: 1 }.to_string(),
            "convex hull needs at least 2 points, got 1"
        );
        assert_eq!(
            HullError::Coincident { count: 4 }.to_string(),
            "all 4 points are coincident"
        );
    }
}
