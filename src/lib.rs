//! Generational genetic-algorithm engine with two concrete encodings.
//!
//! - **Engine** ([`ga`]): population initialization, tournament selection,
//!   gated crossover, mutation, elitist replacement and best-ever tracking
//!   over a fixed number of generations, generic over an [`ga::Encoding`].
//! - **Knapsack** ([`knapsack`]): subset selection on a bit string; value
//!   is maximized and overweight selections score `0`.
//! - **Routing** ([`routing`]): closed-tour TSP on a permutation of
//!   location indices; tour length is minimized.
//!
//! # Determinism
//!
//! The engine draws randomness only from the generator it is handed
//! ([`ga::GaRunner::run_with_rng`]) or one built from
//! [`ga::GaConfig::seed`]. Identical configuration, instance and seed give
//! identical [`ga::GaResult`]s.
//!
//! # Example
//!
//! ```
//! use u_evolve::ga::GaConfig;
//! use u_evolve::knapsack::{solve_selection, Item};
//!
//! let items = vec![Item::new("tent", 4.0, 10.0), Item::new("stove", 2.0, 4.0)];
//! let report = solve_selection(items, 5.0, &GaConfig::knapsack().with_seed(1))?;
//! assert_eq!(report.solution.total_value, 10.0);
//! # Ok::<(), u_evolve::EvolveError>(())
//! ```

pub mod error;
pub mod ga;
pub mod knapsack;
pub mod random;
pub mod routing;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{EvolveError, Result};
