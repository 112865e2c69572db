//! Distance services.
//!
//! The objective never computes travel distance itself; it asks a
//! [`DistanceService`]. Implementations must not fail: on any error they
//! log a diagnostic and return `0.0`, which callers read as "unknown".
//!
//! - [`GreatCircle`]: haversine distance in meters
//! - [`Euclidean`]: plain coordinate distance, for planar test instances
//! - `OsrmClient`: HTTP routing service (feature `osrm`)
//! - any `Fn(&Point, &Point) -> f64` closure

mod geo;
#[cfg(feature = "osrm")]
mod osrm;
mod types;

pub use geo::{Euclidean, GreatCircle, EARTH_RADIUS_METERS};
#[cfg(feature = "osrm")]
pub use osrm::{OsrmClient, OsrmConfig};
pub use types::DistanceService;
