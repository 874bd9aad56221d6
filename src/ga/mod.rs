//! Generational genetic-algorithm engine.
//!
//! The engine is generic over an [`Encoding`], which supplies random
//! individuals, fitness, crossover and mutation for one chromosome shape.
//! Everything else (population bookkeeping, tournament selection, elitism,
//! best-ever tracking, per-generation history) lives here.
//!
//! # Core Traits
//!
//! - [`Encoding`]: chromosome representation and its operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation count, operator rates
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: best-ever chromosome plus [`GenerationRecord`] history
//! - [`Population`]: one generation's chromosomes and scores
//!
//! # Submodules
//!
//! - [`operators`]: bit-string and permutation crossover/mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::{GaConfig, GaConfigOverrides};
pub use population::Population;
pub use runner::{GaResult, GaRunner, GenerationRecord};
pub use selection::tournament_select;
pub use types::{Encoding, Objective};
