//! Subset selection (0/1 knapsack) on a bit-string encoding.
//!
//! Gene `i` is set when item `i` is packed. Fitness is the total value of
//! the packed items, or exactly `0` if their total weight exceeds the
//! capacity: an overweight selection is indistinguishable from packing
//! nothing.
//!
//! # Operator contract
//!
//! - Crossover is single-point and **always** applied; the configured
//!   crossover rate does not gate it.
//! - Mutation flips **each gene** with probability `mutation_rate`.

use crate::error::{EvolveError, Result};
use crate::ga::operators::{bit_flip_mutation, random_bits, single_point_crossover};
use crate::ga::{Encoding, GaConfig, GaResult, GaRunner, Objective};
use rand::Rng;

/// A selectable item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub weight: f64,
    pub value: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, weight: f64, value: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            value,
        }
    }
}

/// A knapsack instance: the item table and a weight capacity.
#[derive(Debug, Clone)]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: f64,
}

impl KnapsackProblem {
    /// Builds an instance after checking its shape.
    ///
    /// # Errors
    /// [`EvolveError::InvalidInstance`] if `items` is empty, or any weight,
    /// value, or the capacity is not a finite number.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self> {
        if items.is_empty() {
            return Err(EvolveError::InvalidInstance("item list is empty".into()));
        }
        if !capacity.is_finite() {
            return Err(EvolveError::InvalidInstance(format!(
                "capacity must be finite, got {capacity}"
            )));
        }
        if let Some(item) = items
            .iter()
            .find(|it| !it.weight.is_finite() || !it.value.is_finite())
        {
            return Err(EvolveError::InvalidInstance(format!(
                "item {:?} has a non-finite weight or value",
                item.name
            )));
        }
        Ok(Self { items, capacity })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Sums weight and value over the selected genes.
    fn totals(&self, genes: &[bool]) -> (f64, f64) {
        genes
            .iter()
            .zip(&self.items)
            .filter(|(gene, _)| **gene)
            .fold((0.0, 0.0), |(w, v), (_, item)| (w + item.weight, v + item.value))
    }

    /// Decodes a chromosome into the packed items and their totals.
    ///
    /// # Errors
    /// [`EvolveError::InvalidInstance`] if the chromosome length differs
    /// from the item count.
    pub fn decode(&self, genes: &[bool]) -> Result<KnapsackSolution> {
        if genes.len() != self.items.len() {
            return Err(EvolveError::InvalidInstance(format!(
                "chromosome has {} genes for {} items",
                genes.len(),
                self.items.len()
            )));
        }
        let (total_weight, total_value) = self.totals(genes);
        let selected = genes
            .iter()
            .zip(&self.items)
            .filter(|(gene, _)| **gene)
            .map(|(_, item)| item.clone())
            .collect();
        Ok(KnapsackSolution {
            chromosome: genes.to_vec(),
            selected,
            total_weight,
            total_value,
            feasible: total_weight <= self.capacity,
        })
    }
}

impl Encoding for KnapsackProblem {
    type Chromosome = Vec<bool>;

    fn objective(&self) -> Objective {
        Objective::Maximize
    }

    fn chromosome_len(&self) -> usize {
        self.items.len()
    }

    fn random_individual<R: Rng>(&self, rng: &mut R) -> Vec<bool> {
        random_bits(self.items.len(), rng)
    }

    fn fitness(&self, genes: &Vec<bool>) -> f64 {
        let (weight, value) = self.totals(genes);
        if weight > self.capacity {
            0.0
        } else {
            value
        }
    }

    fn crossover<R: Rng>(&self, p1: &Vec<bool>, p2: &Vec<bool>, rng: &mut R) -> Vec<Vec<bool>> {
        let (c1, c2) = single_point_crossover(p1, p2, rng);
        vec![c1, c2]
    }

    fn mutate<R: Rng>(&self, genes: &mut Vec<bool>, rng: &mut R, rate: f64) {
        bit_flip_mutation(genes, rng, rate);
    }

    fn gates_crossover(&self) -> bool {
        false
    }
}

/// A decoded selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackSolution {
    pub chromosome: Vec<bool>,
    pub selected: Vec<Item>,
    pub total_weight: f64,
    /// Raw sum of the selected values. For an overweight selection this
    /// differs from the fitness, which is `0`.
    pub total_value: f64,
    /// `false` when the best chromosome found is still overweight, i.e. no
    /// feasible selection was found.
    pub feasible: bool,
}

/// Outcome of [`solve_selection`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectionReport {
    pub solution: KnapsackSolution,
    pub run: GaResult<Vec<bool>>,
}

/// Solves a knapsack instance.
///
/// # Errors
/// [`EvolveError::InvalidInstance`] for a malformed item table and
/// [`EvolveError::InvalidConfiguration`] for a bad `config`; both are
/// reported before any generation runs.
///
/// # Examples
///
/// ```
/// use u_evolve::ga::GaConfig;
/// use u_evolve::knapsack::{solve_selection, Item};
///
/// let items = vec![
///     Item::new("A", 2.0, 3.0),
///     Item::new("B", 3.0, 4.0),
///     Item::new("C", 4.0, 5.0),
///     Item::new("D", 5.0, 6.0),
/// ];
/// let report = solve_selection(items, 5.0, &GaConfig::knapsack().with_seed(7)).unwrap();
/// assert_eq!(report.solution.total_value, 7.0);
/// ```
pub fn solve_selection(items: Vec<Item>, capacity: f64, config: &GaConfig) -> Result<SelectionReport> {
    let problem = KnapsackProblem::new(items, capacity)?;
    let run = GaRunner::run(&problem, config)?;
    let solution = problem.decode(&run.best)?;
    Ok(SelectionReport { solution, run })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new("A", 2.0, 3.0),
            Item::new("B", 3.0, 4.0),
            Item::new("C", 4.0, 5.0),
            Item::new("D", 5.0, 6.0),
        ]
    }

    fn sample_problem() -> KnapsackProblem {
        KnapsackProblem::new(sample_items(), 5.0).unwrap()
    }

    #[test]
    fn test_fitness_feasible_is_value() {
        let p = sample_problem();
        assert_eq!(p.fitness(&vec![true, true, false, false]), 7.0);
        assert_eq!(p.fitness(&vec![false, false, false, true]), 6.0);
        assert_eq!(p.fitness(&vec![false; 4]), 0.0);
    }

    #[test]
    fn test_fitness_overweight_is_zero() {
        let p = sample_problem();
        assert_eq!(p.fitness(&vec![true, true, true, true]), 0.0);
        assert_eq!(p.fitness(&vec![false, true, true, false]), 0.0);
    }

    #[test]
    fn test_capacity_is_inclusive() {
        let p = KnapsackProblem::new(sample_items(), 2.0).unwrap();
        assert_eq!(p.fitness(&vec![true, false, false, false]), 3.0);
    }

    #[test]
    fn test_decode() {
        let p = sample_problem();
        let s = p.decode(&[true, true, false, false]).unwrap();
        assert_eq!(s.selected.len(), 2);
        assert_eq!(s.selected[0].name, "A");
        assert_eq!(s.selected[1].name, "B");
        assert_eq!(s.total_weight, 5.0);
        assert_eq!(s.total_value, 7.0);
        assert!(s.feasible);

        let s = p.decode(&[true, true, true, true]).unwrap();
        assert!(!s.feasible);
    }

    #[test]
    fn test_decode_length_mismatch() {
        assert!(matches!(
            sample_problem().decode(&[true, false]),
            Err(EvolveError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_rejects_empty_items() {
        assert!(matches!(
            KnapsackProblem::new(vec![], 10.0),
            Err(EvolveError::InvalidInstance(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(KnapsackProblem::new(sample_items(), f64::NAN).is_err());
        let items = vec![Item::new("X", f64::INFINITY, 1.0)];
        assert!(KnapsackProblem::new(items, 10.0).is_err());
    }

    #[test]
    fn test_operators_keep_length() {
        let p = sample_problem();
        let mut rng = create_rng(42);
        for _ in 0..50 {
            let a = p.random_individual(&mut rng);
            let b = p.random_individual(&mut rng);
            for mut child in p.crossover(&a, &b, &mut rng) {
                p.mutate(&mut child, &mut rng, 0.5);
                assert_eq!(child.len(), 4);
            }
        }
    }

    #[test]
    fn test_solve_finds_optimum() {
        let config = GaConfig::knapsack().with_seed(42);
        let report = solve_selection(sample_items(), 5.0, &config).unwrap();
        assert_eq!(report.solution.total_value, 7.0);
        assert_eq!(report.solution.total_weight, 5.0);
        assert_eq!(report.run.best_fitness, 7.0);
        assert_eq!(report.run.history.len(), config.generations + 1);
    }

    #[test]
    fn test_solve_only_empty_selection_fits_scores_zero() {
        let items = vec![Item::new("heavy", 10.0, 100.0), Item::new("heavier", 20.0, 50.0)];
        let config = GaConfig::knapsack().with_generations(10).with_seed(1);
        let report = solve_selection(items, 5.0, &config).unwrap();
        assert_eq!(report.run.best_fitness, 0.0);
        assert!(report.run.history.iter().all(|r| r.best_fitness == 0.0));
        assert_eq!(report.solution.chromosome, report.run.best);
    }

    #[test]
    fn test_solve_no_feasible_selection() {
        // Even the empty selection (weight 0) exceeds a negative capacity.
        let items = vec![Item::new("a", 1.0, 5.0), Item::new("b", 2.0, 8.0)];
        for seed in 0..5 {
            let config = GaConfig::knapsack().with_generations(10).with_seed(seed);
            let report = solve_selection(items.clone(), -1.0, &config).unwrap();
            assert_eq!(report.run.best_fitness, 0.0);
            assert!(!report.solution.feasible);
            assert!(report.solution.total_weight > -1.0);
            assert_eq!(report.solution.chromosome, report.run.best);
        }
    }

    #[test]
    fn test_decode_overweight_keeps_raw_value() {
        let s = sample_problem().decode(&[false, true, true, false]).unwrap();
        assert!(!s.feasible);
        assert_eq!(s.total_value, 9.0);
        assert_eq!(sample_problem().fitness(&vec![false, true, true, false]), 0.0);
    }

    #[test]
    fn test_solve_rejects_bad_config() {
        let config = GaConfig::knapsack().with_population_size(2);
        assert!(matches!(
            solve_selection(sample_items(), 5.0, &config),
            Err(EvolveError::InvalidConfiguration(_))
        ));
    }
}
