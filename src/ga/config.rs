//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of the generational loop. It is
//! validated once, before the first generation, and read-only afterwards.

use crate::error::{EvolveError, Result};

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evolve::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(4)
///     .with_elitism_count(5)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of evolutionary steps after the initial population.
    ///
    /// There is no early termination: every run performs all of them.
    pub generations: usize,

    /// Probability of recombining a selected pair (0.0–1.0).
    ///
    /// Only consulted by encodings whose crossover is gated.
    pub crossover_rate: f64,

    /// Rate handed to the encoding's mutation operator (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of distinct individuals drawn per tournament.
    pub tournament_size: usize,

    /// Number of top individuals copied unchanged into the next generation.
    pub elitism_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            crossover_rate: 0.9,
            mutation_rate: 0.05,
            tournament_size: 5,
            elitism_count: 2,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the number of elites carried over each generation.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset tuned for subset-selection problems.
    ///
    /// - Population: 50, Generations: 100, Tournament: 5
    /// - Mutation: 0.05 per gene, Elitism: 2
    pub fn knapsack() -> Self {
        Self::default()
    }

    /// Preset tuned for routing problems.
    ///
    /// - Population: 100, Generations: 500, Tournament: 3
    /// - Crossover: 0.9, Mutation: 0.2 per individual, Elitism: 2
    pub fn routing() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            tournament_size: 3,
            crossover_rate: 0.9,
            mutation_rate: 0.2,
            elitism_count: 2,
            seed: None,
        }
    }

    /// Validates the configuration.
    ///
    /// Returns [`EvolveError::InvalidConfiguration`] naming the first
    /// offending parameter.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &str| -> Result<()> {
            tracing::warn!(reason, "rejecting GA configuration");
            Err(EvolveError::InvalidConfiguration(reason.into()))
        };

        if self.population_size == 0 {
            return fail("population_size must be at least 1");
        }
        if self.generations == 0 {
            return fail("generations must be at least 1");
        }
        if self.elitism_count >= self.population_size {
            return fail("elitism_count must be less than population_size");
        }
        if self.tournament_size == 0 {
            return fail("tournament_size must be at least 1");
        }
        if self.tournament_size > self.population_size {
            return fail("tournament_size must not exceed population_size");
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return fail("crossover_rate must be within [0, 1]");
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return fail("mutation_rate must be within [0, 1]");
        }
        Ok(())
    }
}

/// A partial [`GaConfig`]: only the fields that are `Some` are applied.
///
/// Used where callers supply a handful of parameters on top of a preset.
///
/// ```
/// use u_evolve::ga::{GaConfig, GaConfigOverrides};
///
/// let overrides = GaConfigOverrides {
///     generations: Some(200),
///     ..GaConfigOverrides::default()
/// };
/// let config = overrides.apply_to(GaConfig::routing());
/// assert_eq!(config.generations, 200);
/// assert_eq!(config.population_size, 100);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfigOverrides {
    pub population_size: Option<usize>,
    pub generations: Option<usize>,
    pub crossover_rate: Option<f64>,
    pub mutation_rate: Option<f64>,
    pub tournament_size: Option<usize>,
    pub elitism_count: Option<usize>,
    pub seed: Option<u64>,
}

impl GaConfigOverrides {
    /// Applies the set fields onto `base` through the `with_*` builders.
    pub fn apply_to(self, base: GaConfig) -> GaConfig {
        let mut config = base;
        if let Some(n) = self.population_size {
            config = config.with_population_size(n);
        }
        if let Some(n) = self.generations {
            config = config.with_generations(n);
        }
        if let Some(rate) = self.crossover_rate {
            config = config.with_crossover_rate(rate);
        }
        if let Some(rate) = self.mutation_rate {
            config = config.with_mutation_rate(rate);
        }
        if let Some(k) = self.tournament_size {
            config = config.with_tournament_size(k);
        }
        if let Some(n) = self.elitism_count {
            config = config.with_elitism_count(n);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }
}
