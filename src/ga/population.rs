//! One generation's worth of chromosomes and their scores.

use super::types::{Encoding, Objective};
use rand::Rng;

/// An ordered, fixed-size generation of chromosomes.
///
/// Scores are stored parallel to the chromosomes: `scores()[i]` is the
/// fitness of `chromosomes()[i]`. A population is built, evaluated once,
/// and then discarded when the next generation replaces it.
#[derive(Debug, Clone)]
pub struct Population<C> {
    chromosomes: Vec<C>,
    scores: Vec<f64>,
}

impl<C: Clone> Population<C> {
    /// Creates `size` independent random chromosomes and evaluates them.
    pub fn initialize<E, R>(encoding: &E, size: usize, rng: &mut R) -> Self
    where
        E: Encoding<Chromosome = C>,
        R: Rng,
    {
        let chromosomes = (0..size)
            .map(|_| encoding.random_individual(rng))
            .collect();
        Self::evaluate(encoding, chromosomes)
    }

    /// Scores every chromosome. Nothing is cached between generations.
    pub fn evaluate<E>(encoding: &E, chromosomes: Vec<C>) -> Self
    where
        E: Encoding<Chromosome = C>,
    {
        let scores = chromosomes.iter().map(|c| encoding.fitness(c)).collect();
        Self {
            chromosomes,
            scores,
        }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    /// `true` when the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    /// Chromosomes in population order.
    pub fn chromosomes(&self) -> &[C] {
        &self.chromosomes
    }

    /// Fitness of each chromosome, index-aligned with [`chromosomes`](Self::chromosomes).
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Index of the best individual; the first one wins on ties.
    ///
    /// Returns `None` only for an empty population.
    pub fn best_index(&self, objective: Objective) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, &score) in self.scores.iter().enumerate() {
            match best {
                Some(b) if !objective.is_better(score, self.scores[b]) => {}
                _ => best = Some(i),
            }
        }
        best
    }

    /// Fitness of the best individual.
    pub fn best_fitness(&self, objective: Objective) -> Option<f64> {
        self.best_index(objective).map(|i| self.scores[i])
    }

    /// Mean fitness, or `0.0` for an empty population.
    pub fn average_fitness(&self) -> f64 {
        if self.scores.is_empty() {
            return 0.0;
        }
        self.scores.iter().sum::<f64>() / self.scores.len() as f64
    }

    /// Indices ordered best-first. The sort is stable, so equal scores keep
    /// population order.
    pub fn ranked_indices(&self, objective: Objective) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| objective.compare(self.scores[a], self.scores[b]));
        order
    }

    /// Clones of the top `count` chromosomes, best first.
    pub fn elites(&self, objective: Objective, count: usize) -> Vec<C> {
        self.ranked_indices(objective)
            .into_iter()
            .take(count)
            .map(|i| self.chromosomes[i].clone())
            .collect()
    }
}
