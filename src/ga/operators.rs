//! Bit-string and permutation genetic operators.
//!
//! These work on plain slices and are independent of any problem instance;
//! the encodings in [`crate::knapsack`] and [`crate::routing`] wrap them.
//!
//! # Bit-string operators
//!
//! - [`random_bits`]: one fair coin per gene
//! - [`single_point_crossover`]: swap tails after one cut, two children
//! - [`bit_flip_mutation`]: independent flip per gene
//!
//! # Permutation operators
//!
//! - [`random_permutation`]: uniform shuffle of `0..n`
//! - [`order_crossover`] (OX1): Davis (1985), one child
//! - [`swap_mutation`]: exchange two distinct positions
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Cicirello (2023), "Genetic Operators for Permutation Representation"

use rand::seq::{index, SliceRandom};
use rand::Rng;

// ============================================================================
// Bit-string operators
// ============================================================================

/// A bit string of length `n`, each gene an independent fair coin.
pub fn random_bits<R: Rng>(n: usize, rng: &mut R) -> Vec<bool> {
    (0..n).map(|_| rng.random_bool(0.5)).collect()
}

/// Single-point crossover.
///
/// Picks a cut uniformly in `1..=n-1` and returns
/// `(p1[..cut] ++ p2[cut..], p2[..cut] ++ p1[cut..])`. Genes are independent,
/// so both children are always valid. Strings shorter than two genes have
/// no interior cut and are returned as copies.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let cut = rng.random_range(1..n);
    let mut child1 = parent1[..cut].to_vec();
    child1.extend_from_slice(&parent2[cut..]);
    let mut child2 = parent2[..cut].to_vec();
    child2.extend_from_slice(&parent1[cut..]);
    (child1, child2)
}

/// Flips each gene independently with probability `rate`.
///
/// # Complexity
/// O(n), one Bernoulli trial per gene
pub fn bit_flip_mutation<R: Rng>(bits: &mut [bool], rng: &mut R, rate: f64) {
    for gene in bits.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *gene = !*gene;
        }
    }
}

// ============================================================================
// Permutation operators
// ============================================================================

/// A uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

/// Ordered crossover (OX1), producing a single child.
///
/// # Algorithm
///
/// 1. Draw two distinct positions and sort them into `a < b`
/// 2. Copy `parent1[a..=b]` into the child at the same positions
/// 3. Fill the remaining child positions left to right with `parent2`'s
///    genes in `parent2`'s order, skipping values already in the child
///
/// The child is a permutation whenever both parents are.
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    if n < 2 {
        return parent1.to_vec();
    }

    let (a, b) = distinct_pair(n, rng);
    ox_build_child(parent1, parent2, a.min(b), a.max(b))
}

/// Build one OX1 child: keep `template[start..=end]`, fill from `donor`.
fn ox_build_child(template: &[usize], donor: &[usize], start: usize, end: usize) -> Vec<usize> {
    let n = template.len();
    let mut child = vec![usize::MAX; n];
    let mut present = vec![false; n];

    for i in start..=end {
        child[i] = template[i];
        present[template[i]] = true;
    }

    let mut fill = donor.iter().copied().filter(|&v| !present[v]);
    for slot in child.iter_mut().filter(|slot| **slot == usize::MAX) {
        if let Some(v) = fill.next() {
            *slot = v;
        }
    }

    child
}

/// Swap mutation: exchange two distinct random positions.
///
/// # Complexity
/// O(1)
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let (i, j) = distinct_pair(n, rng);
    perm.swap(i, j);
}

// ============================================================================
// Helpers
// ============================================================================

/// Two distinct positions drawn uniformly from `0..n` (requires `n >= 2`).
fn distinct_pair<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let picked = index::sample(rng, n, 2);
    (picked.index(0), picked.index(1))
}

/// Returns `true` if `perm` holds each of `0..n` exactly once.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &v in perm {
        if v >= n || seen[v] {
            return false;
        }
        seen[v] = true;
    }
    true
}

// ============================================================================
// Tests
// ============================================================================
