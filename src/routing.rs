//! Closed-tour routing (TSP) on a permutation encoding.
//!
//! A chromosome is a visiting order: a permutation of `0..n` over the rows
//! of a square distance matrix. Fitness is the closed tour length (the
//! last location returns to the first) and is minimized.
//!
//! # Operator contract
//!
//! - Crossover is OX1, yields one child, and is gated by the configured
//!   crossover rate; when the gate fails the first parent passes through.
//! - Mutation performs, with probability `mutation_rate` **per
//!   individual**, one swap of two distinct positions.

use crate::error::{EvolveError, Result};
use crate::ga::operators::{is_permutation, order_crossover, random_permutation, swap_mutation};
use crate::ga::{Encoding, GaConfig, GaResult, GaRunner, Objective};
use rand::Rng;

/// A routing instance over a square, non-negative distance matrix.
#[derive(Debug, Clone)]
pub struct RoutingProblem {
    distances: Vec<Vec<f64>>,
}

impl RoutingProblem {
    /// Builds an instance after checking the matrix shape.
    ///
    /// # Errors
    /// [`EvolveError::InvalidInstance`] if the matrix is empty, not square,
    /// or holds a negative or non-finite entry.
    pub fn new(distances: Vec<Vec<f64>>) -> Result<Self> {
        let n = distances.len();
        if n == 0 {
            return Err(EvolveError::InvalidInstance("distance matrix is empty".into()));
        }
        if let Some((row, r)) = distances.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(EvolveError::InvalidInstance(format!(
                "distance matrix is not square: row {row} has {} entries, expected {n}",
                r.len()
            )));
        }
        let bad_entry = distances
            .iter()
            .flatten()
            .any(|&d| !d.is_finite() || d < 0.0);
        if bad_entry {
            return Err(EvolveError::InvalidInstance(
                "distances must be finite and non-negative".into(),
            ));
        }
        Ok(Self { distances })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distances(&self) -> &[Vec<f64>] {
        &self.distances
    }

    /// Length of the closed tour visiting `route` in order.
    pub fn tour_distance(&self, route: &[usize]) -> f64 {
        let n = route.len();
        (0..n)
            .map(|i| self.distances[route[i]][route[(i + 1) % n]])
            .sum()
    }

    /// Checks and decodes a visiting order.
    ///
    /// # Errors
    /// [`EvolveError::InvalidInstance`] if `route` is not a permutation of
    /// the locations.
    pub fn decode(&self, route: &[usize]) -> Result<RoutingSolution> {
        if !is_permutation(route, self.len()) {
            return Err(EvolveError::InvalidInstance(format!(
                "route {route:?} is not a permutation of 0..{}",
                self.len()
            )));
        }
        Ok(RoutingSolution {
            route: route.to_vec(),
            total_distance: self.tour_distance(route),
        })
    }
}

impl Encoding for RoutingProblem {
    type Chromosome = Vec<usize>;

    fn objective(&self) -> Objective {
        Objective::Minimize
    }

    fn chromosome_len(&self) -> usize {
        self.len()
    }

    fn random_individual<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        random_permutation(self.len(), rng)
    }

    fn fitness(&self, route: &Vec<usize>) -> f64 {
        self.tour_distance(route)
    }

    fn crossover<R: Rng>(&self, p1: &Vec<usize>, p2: &Vec<usize>, rng: &mut R) -> Vec<Vec<usize>> {
        vec![order_crossover(p1, p2, rng)]
    }

    fn mutate<R: Rng>(&self, route: &mut Vec<usize>, rng: &mut R, rate: f64) {
        if rng.random_range(0.0..1.0) < rate {
            swap_mutation(route, rng);
        }
    }
}

/// A decoded tour.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSolution {
    /// Visiting order as indices into the distance matrix.
    pub route: Vec<usize>,
    /// Closed-tour length.
    pub total_distance: f64,
}

/// Outcome of [`solve_routing`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingReport {
    pub solution: RoutingSolution,
    pub run: GaResult<Vec<usize>>,
}

/// Solves a routing instance.
///
/// # Errors
/// [`EvolveError::InvalidInstance`] for a malformed matrix and
/// [`EvolveError::InvalidConfiguration`] for a bad `config`.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::GaConfig;
/// use u_evolve::routing::solve_routing;
///
/// let matrix = vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 1.0],
///     vec![2.0, 1.0, 0.0],
/// ];
/// let config = GaConfig::routing()
///     .with_population_size(10)
///     .with_generations(5)
///     .with_seed(1);
/// let report = solve_routing(matrix, &config).unwrap();
/// assert_eq!(report.solution.total_distance, 4.0);
/// ```
pub fn solve_routing(distances: Vec<Vec<f64>>, config: &GaConfig) -> Result<RoutingReport> {
    let problem = RoutingProblem::new(distances)?;
    let run = GaRunner::run(&problem, config)?;
    let solution = problem.decode(&run.best)?;
    Ok(RoutingReport { solution, run })
}
