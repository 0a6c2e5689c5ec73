//! Curated surface for callers that want the pipeline stages individually.
//!
//! Most callers only need `convex_hull`; the stage functions are exposed for
//! benchmarks and step-by-step inspection.

// Primitives
pub use crate::point::{dist_sq, orientation, Orientation, Point};
// Pipeline stages
pub use crate::graham::{
    drop_pivot_copies, pivot::lowest_index, scan, select_pivot, sort_around_pivot, AngularOrder,
    HullStack,
};
// Entry points
pub use crate::error::HullError;
pub use crate::graham::{convex_hull, convex_hull_in_place, Hull};
// Predicates and sampling
pub use crate::cloud::{draw_points, CloudCfg};
pub use crate::polygon::{area2, contains, is_strictly_convex};
