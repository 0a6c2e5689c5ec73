//! Exact-integer 2D convex hulls via the Graham scan.
//!
//! Pipeline
//! - `graham::pivot`: lowest-y (then lowest-x) point moved to the front.
//! - `graham::sort`: remaining points ordered counter-clockwise around the pivot,
//!   farther-first on ties, using only orientation tests and squared distances.
//! - `graham::scan`: stack-based pass that drops every non-left turn.
//!
//! API Policy
//! - `Point` coordinates are `i32`; all turn and distance arithmetic is done in
//!   `i128`, so every decision is exact for the full coordinate range.
//! - Hull vertices come back counter-clockwise, starting at the pivot.

pub mod api;
pub mod cloud;
pub mod error;
pub mod graham;
pub mod point;
pub mod polygon;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use graham::{convex_hull, convex_hull_in_place, Hull};
pub use point::{dist_sq, orientation, Orientation, Point};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cloud::{draw_points, CloudCfg};
    pub use crate::error::HullError;
    pub use crate::graham::{convex_hull, convex_hull_in_place, Hull};
    pub use crate::point::{dist_sq, orientation, Orientation, Point};
    pub use crate::polygon::{area2, contains, is_strictly_convex};
}
