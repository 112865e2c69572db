//! Nearest-reference-point decoder.

use crate::bounds::BoundTransformer;
use crate::error::{CvrpError, CvrpResult};
use crate::models::{CvrpInstance, CvrpSolution, CvrpSolutionVehicle};

/// Length of a candidate vector for `num_customers` deliveries and
/// `num_vehicles` vehicles: `N + 2M`.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::decoder::vector_length;
///
/// assert_eq!(vector_length(10, 3), 16);
/// ```
pub fn vector_length(num_customers: usize, num_vehicles: usize) -> usize {
    num_customers + 2 * num_vehicles
}

/// Number of vehicles `M` encoded by a vector of length `len` for
/// `num_customers` deliveries.
///
/// Returns `None` unless `len = N + 2M` for some `M >= 1`.
pub fn vehicle_count(len: usize, num_customers: usize) -> Option<usize> {
    let rest = len.checked_sub(num_customers)?;
    if rest == 0 || rest % 2 != 0 {
        return None;
    }
    Some(rest / 2)
}

/// Decodes candidate vectors for one instance.
///
/// Construction derives the bounding box and normalizes every delivery
/// once; [`decode`](Self::decode) can then be called for every particle.
///
/// Reference points are iterated in the order they are stored in the
/// vector, and a delivery equidistant from several reference points goes
/// to the first of them.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::decoder::ParticleDecoder;
/// use cvrp_swarm::models::{CvrpInstance, Delivery, Point};
///
/// let instance = CvrpInstance::new(
///     "tiny",
///     Point::new(0.0, 0.0),
///     vec![
///         Delivery::new("a", Point::new(1.0, 0.0), 1),
///         Delivery::new("b", Point::new(0.0, 1.0), 1),
///     ],
/// );
/// let decoder = ParticleDecoder::new(&instance).unwrap();
/// let solution = decoder.decode(&[0.1, 0.9, 0.5, 0.5]).unwrap();
///
/// assert_eq!(solution.num_vehicles(), 1);
/// let ids: Vec<&str> = solution.vehicles[0].deliveries.iter().map(|d| d.id.as_str()).collect();
/// assert_eq!(ids, ["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct ParticleDecoder<'a> {
    instance: &'a CvrpInstance,
    bounds: BoundTransformer,
    delivery_points: Vec<(f64, f64)>,
}

impl<'a> ParticleDecoder<'a> {
    /// Prepares a decoder for `instance`.
    ///
    /// Fails with [`CvrpError::EmptyInstance`] if there are no deliveries.
    pub fn new(instance: &'a CvrpInstance) -> CvrpResult<Self> {
        let bounds = BoundTransformer::from_instance(instance)?;
        let delivery_points = instance
            .deliveries
            .iter()
            .map(|d| bounds.normalize(&d.point))
            .collect::<CvrpResult<Vec<_>>>()?;
        Ok(Self {
            instance,
            bounds,
            delivery_points,
        })
    }

    /// One-shot decode without keeping the decoder around.
    pub fn decode_instance(vector: &[f64], instance: &CvrpInstance) -> CvrpResult<CvrpSolution> {
        ParticleDecoder::new(instance)?.decode(vector)
    }

    /// The instance this decoder was built for.
    pub fn instance(&self) -> &'a CvrpInstance {
        self.instance
    }

    /// Bounding box used for normalization.
    pub fn bounds(&self) -> &BoundTransformer {
        &self.bounds
    }

    /// Number of customers `N`.
    pub fn num_customers(&self) -> usize {
        self.delivery_points.len()
    }

    /// Decodes a candidate vector into exactly `M` vehicle routes.
    ///
    /// Every delivery of the instance appears in exactly one route.
    pub fn decode(&self, vector: &[f64]) -> CvrpResult<CvrpSolution> {
        let n = self.num_customers();
        let m = vehicle_count(vector.len(), n).ok_or(CvrpError::InvalidVectorLength {
            customers: n,
            actual: vector.len(),
        })?;

        let (customers_part, vehicles_part) = vector.split_at(n);
        let reference_points: Vec<(f64, f64)> = (0..m)
            .map(|i| (vehicles_part[i], vehicles_part[i + m]))
            .collect();

        let mut assignments: Vec<Vec<usize>> = vec![Vec::new(); m];
        for customer in customer_priority(customers_part) {
            let nearest = nearest_reference(self.delivery_points[customer], &reference_points);
            assignments[nearest].push(customer);
        }

        let origin = self.instance.origin;
        let vehicles = assignments
            .into_iter()
            .map(|customers| {
                CvrpSolutionVehicle::new(
                    origin,
                    customers
                        .into_iter()
                        .map(|i| self.instance.deliveries[i].clone())
                        .collect(),
                )
            })
            .collect();

        Ok(CvrpSolution::new(self.instance.name.clone(), vehicles))
    }
}

/// Customer indices sorted by ascending priority key. Stable, so equal
/// keys keep index order.
fn customer_priority(keys: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[a].total_cmp(&keys[b]));
    order
}

/// Index of the reference point closest to `point`; first one wins ties.
fn nearest_reference(point: (f64, f64), references: &[(f64, f64)]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, &reference) in references.iter().enumerate() {
        let d = linear_distance(point, reference);
        if d < best_distance {
            best = i;
            best_distance = d;
        }
    }
    best
}

fn linear_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
