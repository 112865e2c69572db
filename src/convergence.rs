//! Aggregation of convergence traces across independent runs.
//!
//! Repeated runs of the same optimizer produce one best-fitness trace each.
//! [`ConvergenceSummary`] reduces them to a per-iteration mean with a one
//! standard deviation band, ready for plotting.

use crate::error::{CvrpError, CvrpResult};

/// Per-iteration statistics over several equally long convergence traces.
///
/// # Examples
///
/// ```
/// use cvrp_swarm::convergence::ConvergenceSummary;
///
/// let runs = vec![vec![4.0, 2.0], vec![6.0, 2.0]];
/// let summary = ConvergenceSummary::from_runs(&runs).unwrap();
/// assert_eq!(summary.mean, vec![5.0, 2.0]);
/// assert_eq!(summary.std_dev, vec![1.0, 0.0]);
/// assert_eq!(summary.upper(), vec![6.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceSummary {
    /// Arithmetic mean per iteration.
    pub mean: Vec<f64>,
    /// Population standard deviation per iteration.
    pub std_dev: Vec<f64>,
    /// Number of runs aggregated.
    pub runs: usize,
}

impl ConvergenceSummary {
    /// Builds the summary from one trace per run.
    ///
    /// Every trace must have the length of the first one.
    pub fn from_runs(runs: &[Vec<f64>]) -> CvrpResult<Self> {
        let first = runs.first().ok_or(CvrpError::EmptyConvergence)?;
        let expected = first.len();
        for (run, trace) in runs.iter().enumerate() {
            if trace.len() != expected {
                return Err(CvrpError::MismatchedConvergence {
                    expected,
                    actual: trace.len(),
                    run,
                });
            }
        }

        let count = runs.len() as f64;
        let mut mean = Vec::with_capacity(expected);
        let mut std_dev = Vec::with_capacity(expected);

        for i in 0..expected {
            let m = runs.iter().map(|r| r[i]).sum::<f64>() / count;
            let var = runs.iter().map(|r| (r[i] - m).powi(2)).sum::<f64>() / count;
            mean.push(m);
            std_dev.push(var.sqrt());
        }

        Ok(Self {
            mean,
            std_dev,
            runs: runs.len(),
        })
    }

    /// `mean + std_dev` per iteration.
    pub fn upper(&self) -> Vec<f64> {
        self.mean
            .iter()
            .zip(&self.std_dev)
            .map(|(m, s)| m + s)
            .collect()
    }

    /// `mean - std_dev` per iteration.
    pub fn lower(&self) -> Vec<f64> {
        self.mean
            .iter()
            .zip(&self.std_dev)
            .map(|(m, s)| m - s)
            .collect()
    }

    /// Number of iterations covered.
    pub fn len(&self) -> usize {
        self.mean.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mean.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_run_has_zero_spread() {
        let summary = ConvergenceSummary::from_runs(&[vec![3.0, 2.0, 1.0]]).unwrap();
        assert_eq!(summary.mean, vec![3.0, 2.0, 1.0]);
        assert_eq!(summary.std_dev, vec![0.0; 3]);
        assert_eq!(summary.upper(), summary.lower());
        assert_eq!(summary.len(), 3);
        assert_eq!(summary.runs, 1);
    }

    #[test]
    fn test_population_std_dev() {
        let runs = vec![vec![2.0], vec![4.0], vec![4.0], vec![4.0], vec![5.0], vec![5.0], vec![7.0], vec![9.0]];
        let summary = ConvergenceSummary::from_runs(&runs).unwrap();
        assert!((summary.mean[0] - 5.0).abs() < 1e-12);
        assert!((summary.std_dev[0] - 2.0).abs() < 1e-12);
        assert!((summary.upper()[0] - 7.0).abs() < 1e-12);
        assert!((summary.lower()[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_runs() {
        assert_eq!(
            ConvergenceSummary::from_runs(&[]),
            Err(CvrpError::EmptyConvergence)
        );
    }

    #[test]
    fn test_zero_length_traces() {
        let summary = ConvergenceSummary::from_runs(&[vec![], vec![]]).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_mismatched_lengths() {
        let runs = vec![vec![1.0, 2.0], vec![1.0, 2.0], vec![1.0]];
        assert_eq!(
            ConvergenceSummary::from_runs(&runs),
            Err(CvrpError::MismatchedConvergence {
                expected: 2,
                actual: 1,
                run: 2,
            })
        );
    }
}
