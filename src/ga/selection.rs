//! Tournament selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::types::Objective;
use crate::error::{EvolveError, Result};
use rand::seq::index;
use rand::Rng;

/// Picks a parent index by tournament.
///
/// Draws `k` **distinct** indices uniformly without replacement and returns
/// the one with the best score under `objective`. On equal scores the
/// entrant drawn first wins.
///
/// With `k == scores.len()` every individual enters, so the result is
/// always the population's best (first one on ties).
///
/// # Errors
/// [`EvolveError::InvalidConfiguration`] if `k < 1` or `k` exceeds the
/// population size.
///
/// # Complexity
/// O(k) per selection
pub fn tournament_select<R: Rng>(
    scores: &[f64],
    k: usize,
    objective: Objective,
    rng: &mut R,
) -> Result<usize> {
    let n = scores.len();
    if k == 0 || k > n {
        return Err(EvolveError::InvalidConfiguration(format!(
            "tournament size {k} out of range for population of {n}"
        )));
    }

    if k == n {
        return Ok(first_best(scores, objective));
    }

    let entrants = index::sample(rng, n, k);
    let mut winner = entrants.index(0);
    for idx in entrants.iter().skip(1) {
        if objective.is_better(scores[idx], scores[winner]) {
            winner = idx;
        }
    }
    Ok(winner)
}

fn first_best(scores: &[f64], objective: Objective) -> usize {
    let mut best = 0;
    for (i, &s) in scores.iter().enumerate().skip(1) {
        if objective.is_better(s, scores[best]) {
            best = i;
        }
    }
    best
}
