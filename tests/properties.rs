//! Property tests for operator invariants and whole-run guarantees.

use proptest::prelude::*;
use u_evolve::ga::operators::{
    bit_flip_mutation, is_permutation, order_crossover, random_permutation,
    single_point_crossover, swap_mutation,
};
use u_evolve::ga::{Encoding, GaConfig, GaRunner};
use u_evolve::knapsack::{Item, KnapsackProblem};
use u_evolve::random::create_rng;
use u_evolve::routing::RoutingProblem;

fn symmetric_matrix(n: usize, seed: u64) -> Vec<Vec<f64>> {
    use rand::Rng;
    let mut rng = create_rng(seed);
    let mut m = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = rng.random_range(1.0..100.0);
            m[i][j] = d;
            m[j][i] = d;
        }
    }
    m
}

proptest! {
    #[test]
    fn ox_and_swap_keep_permutation(n in 1usize..40, seed in any::<u64>()) {
        let mut rng = create_rng(seed);
        let p1 = random_permutation(n, &mut rng);
        let p2 = random_permutation(n, &mut rng);
        prop_assert!(is_permutation(&p1, n));

        let mut child = order_crossover(&p1, &p2, &mut rng);
        prop_assert!(is_permutation(&child, n));

        swap_mutation(&mut child, &mut rng);
        prop_assert!(is_permutation(&child, n));
    }

    #[test]
    fn bit_operators_keep_length(
        bits in prop::collection::vec((any::<bool>(), any::<bool>()), 1..64),
        rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let (p1, p2): (Vec<bool>, Vec<bool>) = bits.into_iter().unzip();
        let mut rng = create_rng(seed);
        let (mut c1, mut c2) = single_point_crossover(&p1, &p2, &mut rng);
        bit_flip_mutation(&mut c1, &mut rng, rate);
        bit_flip_mutation(&mut c2, &mut rng, rate);
        prop_assert_eq!(c1.len(), p1.len());
        prop_assert_eq!(c2.len(), p1.len());
    }

    #[test]
    fn overweight_selection_scores_zero(
        weights in prop::collection::vec(0.5f64..20.0, 1..16),
        value in 1.0f64..1000.0,
    ) {
        let total: f64 = weights.iter().sum();
        let items: Vec<Item> = weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Item::new(format!("item{i}"), w, value))
            .collect();
        let problem = KnapsackProblem::new(items, total - 0.25).unwrap();
        prop_assert_eq!(problem.fitness(&vec![true; weights.len()]), 0.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn routing_runs_are_reproducible_and_valid(n in 2usize..10, seed in any::<u64>()) {
        let problem = RoutingProblem::new(symmetric_matrix(n, seed)).unwrap();
        let config = GaConfig::routing()
            .with_population_size(16)
            .with_generations(15)
            .with_seed(seed);

        let a = GaRunner::run(&problem, &config).unwrap();
        let b = GaRunner::run(&problem, &config).unwrap();
        prop_assert_eq!(&a, &b);

        prop_assert!(is_permutation(&a.best, n));
        prop_assert_eq!(a.history.len(), config.generations + 1);
        prop_assert_eq!(a.best_fitness, problem.fitness(&a.best));
        for w in a.history.windows(2) {
            prop_assert!(w[1].best_so_far <= w[0].best_so_far);
        }
    }

    #[test]
    fn knapsack_best_so_far_non_decreasing(n in 1usize..12, seed in any::<u64>()) {
        use rand::Rng;
        let mut rng = create_rng(seed);
        let items: Vec<Item> = (0..n)
            .map(|i| Item::new(format!("i{i}"), rng.random_range(1.0..10.0), rng.random_range(1.0..10.0)))
            .collect();
        let capacity = rng.random_range(0.0..30.0);
        let problem = KnapsackProblem::new(items, capacity).unwrap();
        let config = GaConfig::knapsack()
            .with_population_size(12)
            .with_generations(20)
            .with_seed(seed);

        let result = GaRunner::run(&problem, &config).unwrap();
        prop_assert_eq!(result.history.len(), 21);
        prop_assert_eq!(result.best.len(), n);
        for w in result.history.windows(2) {
            prop_assert!(w[1].best_so_far >= w[0].best_so_far);
        }
    }
}
