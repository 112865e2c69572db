//! Interval mappings and the bounding-box transformer.

use crate::error::{CvrpError, CvrpResult};
use crate::models::{CvrpInstance, Point};

/// Half-width, in degrees, used to widen an axis on which every delivery
/// shares the same coordinate.
pub const DEGENERATE_AXIS_PADDING: f64 = 1e-6;

/// Maps `value` in `[0, 1]` onto `[low, high]` with an inverted scale:
/// `0` lands on `high` and `1` lands on `low`.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::bounds::to_bounds;
///
/// assert_eq!(to_bounds(0.0, 10.0, 20.0).unwrap(), 20.0);
/// assert_eq!(to_bounds(1.0, 10.0, 20.0).unwrap(), 10.0);
/// ```
pub fn to_bounds(value: f64, low: f64, high: f64) -> CvrpResult<f64> {
    check_interval(low, high)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(CvrpError::OutOfBounds {
            value,
            low: 0.0,
            high: 1.0,
        });
    }
    Ok(high - (high - low) * value)
}

/// Maps `value` in `[low, high]` linearly onto `[0, 1]`.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::bounds::from_bounds;
///
/// assert_eq!(from_bounds(15.0, 10.0, 20.0).unwrap(), 0.5);
/// assert!(from_bounds(25.0, 10.0, 20.0).is_err());
/// ```
pub fn from_bounds(value: f64, low: f64, high: f64) -> CvrpResult<f64> {
    check_interval(low, high)?;
    if !(low..=high).contains(&value) {
        return Err(CvrpError::OutOfBounds { value, low, high });
    }
    Ok((value - low) / (high - low))
}

fn check_interval(low: f64, high: f64) -> CvrpResult<()> {
    if low < high {
        Ok(())
    } else {
        Err(CvrpError::InvalidBounds {
            axis: "interval",
            min: low,
            max: high,
        })
    }
}

/// Converts points between a latitude/longitude box and `[0, 1] x [0, 1]`.
///
/// The x axis is latitude and the y axis is longitude. The box is derived
/// from delivery points only; the depot may fall outside it, in which case
/// [`normalize_clamped`](Self::normalize_clamped) must be used for it.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::bounds::BoundTransformer;
/// use cvrp_swarm::models::Point;
///
/// let bounds = BoundTransformer::new((0.0, 10.0), (20.0, 40.0)).unwrap();
/// let (x, y) = bounds.normalize(&Point::new(5.0, 30.0)).unwrap();
/// assert_eq!((x, y), (0.5, 0.5));
///
/// let p = bounds.denormalize(x, y).unwrap();
/// assert!((p.lat - 5.0).abs() < 1e-12 && (p.lng - 30.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundTransformer {
    x_minimum: f64,
    x_maximum: f64,
    y_minimum: f64,
    y_maximum: f64,
}

impl BoundTransformer {
    /// Creates a transformer from `(min, max)` latitude and longitude ranges.
    ///
    /// Returns an error if `min >= max` on either axis.
    pub fn new(x_range: (f64, f64), y_range: (f64, f64)) -> CvrpResult<Self> {
        for (axis, (min, max)) in [("lat", x_range), ("lng", y_range)] {
            if min >= max || min.is_nan() || max.is_nan() {
                return Err(CvrpError::InvalidBounds { axis, min, max });
            }
        }
        Ok(Self {
            x_minimum: x_range.0,
            x_maximum: x_range.1,
            y_minimum: y_range.0,
            y_maximum: y_range.1,
        })
    }

    /// Derives the box from the min/max latitude and longitude of the
    /// instance's deliveries. The depot is not considered.
    ///
    /// An axis on which all deliveries coincide is widened by
    /// [`DEGENERATE_AXIS_PADDING`] on both sides.
    pub fn from_instance(instance: &CvrpInstance) -> CvrpResult<Self> {
        let mut points = instance.deliveries.iter().map(|d| d.point);
        let first = points.next().ok_or(CvrpError::EmptyInstance)?;

        let (mut xmin, mut xmax) = (first.lat, first.lat);
        let (mut ymin, mut ymax) = (first.lng, first.lng);
        for p in points {
            xmin = xmin.min(p.lat);
            xmax = xmax.max(p.lat);
            ymin = ymin.min(p.lng);
            ymax = ymax.max(p.lng);
        }

        Self::new(widen(xmin, xmax), widen(ymin, ymax))
    }

    /// Latitude range `(min, max)`.
    pub fn x_range(&self) -> (f64, f64) {
        (self.x_minimum, self.x_maximum)
    }

    /// Longitude range `(min, max)`.
    pub fn y_range(&self) -> (f64, f64) {
        (self.y_minimum, self.y_maximum)
    }

    /// Returns `true` if the point lies inside the box (edges included).
    pub fn contains(&self, point: &Point) -> bool {
        (self.x_minimum..=self.x_maximum).contains(&point.lat)
            && (self.y_minimum..=self.y_maximum).contains(&point.lng)
    }

    /// Maps a point inside the box to normalized `(x, y)`.
    ///
    /// Fails with [`CvrpError::OutOfBounds`] for points outside the box.
    pub fn normalize(&self, point: &Point) -> CvrpResult<(f64, f64)> {
        let x = from_bounds(point.lat, self.x_minimum, self.x_maximum)?;
        let y = from_bounds(point.lng, self.y_minimum, self.y_maximum)?;
        Ok((x, y))
    }

    /// Like [`normalize`](Self::normalize), but clamps the point into the
    /// box first, so it never fails.
    pub fn normalize_clamped(&self, point: &Point) -> (f64, f64) {
        let lat = point.lat.clamp(self.x_minimum, self.x_maximum);
        let lng = point.lng.clamp(self.y_minimum, self.y_maximum);
        (
            (lat - self.x_minimum) / (self.x_maximum - self.x_minimum),
            (lng - self.y_minimum) / (self.y_maximum - self.y_minimum),
        )
    }

    /// Maps normalized `(x, y)` back to a geographic point.
    ///
    /// Exact inverse of [`normalize`](Self::normalize). Both inputs must lie
    /// in `[0, 1]`.
    pub fn denormalize(&self, x: f64, y: f64) -> CvrpResult<Point> {
        for value in [x, y] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CvrpError::OutOfBounds {
                    value,
                    low: 0.0,
                    high: 1.0,
                });
            }
        }
        // to_bounds runs high-to-low, so feed it the complement.
        let lat = to_bounds(1.0 - x, self.x_minimum, self.x_maximum)?;
        let lng = to_bounds(1.0 - y, self.y_minimum, self.y_maximum)?;
        Ok(Point::new(lat, lng))
    }
}

fn widen(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        (min - DEGENERATE_AXIS_PADDING, max + DEGENERATE_AXIS_PADDING)
    } else {
        (min, max)
    }
}
