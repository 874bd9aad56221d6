//! GA generational loop execution.
//!
//! [`GaRunner`] drives a run through its three states:
//! initialization → generation (repeated) → completion.

use super::config::GaConfig;
use super::population::Population;
use super::selection::tournament_select;
use super::types::Encoding;
use crate::error::{EvolveError, Result};
use crate::random::rng_from_config;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};

/// Statistics for one completed generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationRecord {
    /// 0 for the initial population, then 1, 2, ... per evolutionary step.
    pub generation: usize,

    /// Best fitness within this generation.
    pub best_fitness: f64,

    /// Mean fitness within this generation.
    pub average_fitness: f64,

    /// Best fitness seen in this or any earlier generation.
    pub best_so_far: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult<C> {
    /// The best chromosome observed during the entire run.
    pub best: C,

    /// Fitness of [`best`](Self::best).
    pub best_fitness: f64,

    /// Evolutionary steps executed (excludes the initial population).
    pub generations: usize,

    /// Whether the run was stopped early by a cancellation flag.
    pub cancelled: bool,

    /// One record per generation in chronological order, starting with the
    /// initial population.
    pub history: Vec<GenerationRecord>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = KnapsackProblem::new(items, 10.0)?;
/// let config = GaConfig::knapsack().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a generator derived from `config.seed`.
    ///
    /// # Errors
    /// [`EvolveError::InvalidConfiguration`] if `config` fails validation,
    /// [`EvolveError::InvalidInstance`] if the encoding has no genes.
    pub fn run<E: Encoding>(encoding: &E, config: &GaConfig) -> Result<GaResult<E::Chromosome>> {
        Self::run_with_cancel(encoding, config, None)
    }

    /// Runs the GA with an optional cancellation flag.
    ///
    /// The flag is checked between generations only. When it is set the
    /// run returns the best-ever chromosome and the history recorded so
    /// far, with `cancelled = true`.
    pub fn run_with_cancel<E: Encoding>(
        encoding: &E,
        config: &GaConfig,
        cancel: Option<&AtomicBool>,
    ) -> Result<GaResult<E::Chromosome>> {
        let mut rng = rng_from_config(config);
        Self::run_with_rng(encoding, config, &mut rng, cancel)
    }

    /// Runs the GA drawing every random decision from `rng`.
    ///
    /// `config.seed` is ignored; two calls with identically seeded
    /// generators produce identical results.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = config.population_size,
            generations = config.generations,
            chromosome_len = encoding.chromosome_len(),
        )
    )]
    pub fn run_with_rng<E: Encoding, R: Rng>(
        encoding: &E,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<GaResult<E::Chromosome>> {
        config.validate()?;
        if encoding.chromosome_len() == 0 {
            return Err(EvolveError::InvalidInstance(
                "encoding has no genes".into(),
            ));
        }

        let objective = encoding.objective();

        // 1. Initialize and evaluate
        let mut population = Population::initialize(encoding, config.population_size, rng);
        let (mut best, mut best_fitness) = best_of(&population, objective)?;

        let mut history = Vec::with_capacity(config.generations + 1);
        history.push(GenerationRecord {
            generation: 0,
            best_fitness,
            average_fitness: population.average_fitness(),
            best_so_far: best_fitness,
        });

        let mut cancelled = false;
        let mut completed = 0usize;

        // 2. Generational loop
        for gen in 1..=config.generations {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                cancelled = true;
                break;
            }

            // Elites are cloned by value, best first.
            let mut next = population.elites(objective, config.elitism_count);

            while next.len() < config.population_size {
                let scores = population.scores();
                let p1 = tournament_select(scores, config.tournament_size, objective, rng)?;
                let p2 = tournament_select(scores, config.tournament_size, objective, rng)?;
                let parent1 = &population.chromosomes()[p1];
                let parent2 = &population.chromosomes()[p2];

                let recombine = !encoding.gates_crossover()
                    || rng.random_range(0.0..1.0) < config.crossover_rate;
                let children = if recombine {
                    encoding.crossover(parent1, parent2, rng)
                } else {
                    vec![parent1.clone()]
                };

                for mut child in children {
                    encoding.mutate(&mut child, rng, config.mutation_rate);
                    // An odd gap drops the surplus child.
                    if next.len() < config.population_size {
                        next.push(child);
                    }
                }
            }

            population = Population::evaluate(encoding, next);

            let (gen_best, gen_best_fitness) = best_of(&population, objective)?;
            if objective.is_better(gen_best_fitness, best_fitness) {
                tracing::debug!(
                    generation = gen,
                    previous = best_fitness,
                    improved = gen_best_fitness,
                    "new best-ever"
                );
                best = gen_best;
                best_fitness = gen_best_fitness;
            }

            let record = GenerationRecord {
                generation: gen,
                best_fitness: gen_best_fitness,
                average_fitness: population.average_fitness(),
                best_so_far: best_fitness,
            };
            tracing::trace!(
                generation = gen,
                best = record.best_fitness,
                average = record.average_fitness,
                best_so_far = record.best_so_far,
                "generation complete"
            );
            history.push(record);
            completed = gen;
        }

        tracing::info!(
            generations = completed,
            best_fitness,
            cancelled,
            "GA run finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: completed,
            cancelled,
            history,
        })
    }
}

/// Clone of the first best chromosome and its score.
///
/// A population can only be empty when `population_size` is 0, which
/// `GaConfig::validate` already rejects.
fn best_of<C: Clone>(
    population: &Population<C>,
    objective: super::types::Objective,
) -> Result<(C, f64)> {
    let idx = population
        .best_index(objective)
        .ok_or_else(|| EvolveError::InvalidConfiguration("population_size must be at least 1".into()))?;
    Ok((population.chromosomes()[idx].clone(), population.scores()[idx]))
}

// ============================================================================
// Tests
// ============================================================================
