//! Mapping between geographic coordinates and the unit square.
//!
//! - [`to_bounds`] / [`from_bounds`]: scalar interval mappings
//! - [`BoundTransformer`]: per-axis box derived from an instance's deliveries

mod transformer;

pub use transformer::{from_bounds, to_bounds, BoundTransformer, DEGENERATE_AXIS_PADDING};
