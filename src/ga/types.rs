//! Core trait definitions for the GA engine.
//!
//! [`Encoding`] is the contract between the generic engine and a concrete
//! chromosome representation. [`Objective`] fixes which way fitness points.

use rand::Rng;

/// Optimization direction of an encoding's fitness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Higher fitness is better (selection problems).
    Maximize,
    /// Lower fitness is better (routing problems).
    Minimize,
}

impl Objective {
    /// Returns `true` if `candidate` is strictly better than `incumbent`.
    ///
    /// Ties are never "better", so the first individual seen keeps its place.
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            Objective::Maximize => candidate > incumbent,
            Objective::Minimize => candidate < incumbent,
        }
    }

    /// Orders two scores best-first.
    pub fn compare(self, a: f64, b: f64) -> std::cmp::Ordering {
        let ord = a.partial_cmp(&b).unwrap_or(std::cmp::Ordering::Equal);
        match self {
            Objective::Maximize => ord.reverse(),
            Objective::Minimize => ord,
        }
    }
}

/// A candidate-solution representation together with its operators.
///
/// Implementors own the problem instance (item table, distance matrix) and
/// are read-only for the duration of a run.
///
/// # Mutation semantics
///
/// `mutate` receives the configured mutation rate verbatim. How the rate is
/// applied is part of the encoding's contract: the bit-string encoding
/// flips each gene with probability `rate`, the permutation encoding
/// performs at most one swap per individual with probability `rate`. These
/// produce different mutation intensities and are kept distinct.
pub trait Encoding {
    /// Chromosome type produced and consumed by the operators.
    type Chromosome: Clone + std::fmt::Debug;

    /// Direction in which [`fitness`](Encoding::fitness) improves.
    fn objective(&self) -> Objective;

    /// Number of genes in every chromosome of this instance.
    fn chromosome_len(&self) -> usize;

    /// Creates a uniformly random valid chromosome.
    fn random_individual<R: Rng>(&self, rng: &mut R) -> Self::Chromosome;

    /// Scores a chromosome. Must be pure and deterministic.
    fn fitness(&self, chromosome: &Self::Chromosome) -> f64;

    /// Recombines two parents into one or two children.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Chromosome,
        parent2: &Self::Chromosome,
        rng: &mut R,
    ) -> Vec<Self::Chromosome>;

    /// Perturbs a chromosome in place using the configured `rate`.
    fn mutate<R: Rng>(&self, chromosome: &mut Self::Chromosome, rng: &mut R, rate: f64);

    /// Whether the engine gates [`crossover`](Encoding::crossover) behind
    /// the configured crossover rate.
    ///
    /// When the gate fails the first parent is passed through unchanged.
    /// Encodings that return `false` always recombine.
    fn gates_crossover(&self) -> bool {
        true
    }
}
