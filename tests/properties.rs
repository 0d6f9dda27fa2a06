//! Property tests: every tour the engine produces is a valid permutation
//! whose cached length matches a fresh evaluation.

use proptest::prelude::*;
use u_tspga::distance::DistanceMatrix;
use u_tspga::ga::{union_graph_crossover, NeighborIndex, Solver, SolverConfig, Tour};
use u_tspga::random::create_rng;

fn coords_strategy() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((0.0f64..1000.0, 0.0f64..1000.0), 1..40)
}

fn assert_consistent(tour: &Tour, dm: &DistanceMatrix) {
    assert!(tour.is_valid(), "not a permutation: {tour}");
    assert_eq!(tour.len(), dm.size());
    assert_eq!(tour.length(), tour.evaluate(dm));
}

proptest! {
    #[test]
    fn random_tours_are_consistent(coords in coords_strategy(), seed in any::<u64>()) {
        let dm = DistanceMatrix::from_coords(&coords).unwrap();
        let mut rng = create_rng(seed);
        let tour = Tour::random(&dm, &mut rng);
        assert_consistent(&tour, &dm);
    }

    #[test]
    fn mutation_preserves_invariants(
        coords in coords_strategy(),
        seed in any::<u64>(),
        rounds in 1usize..30,
    ) {
        let dm = DistanceMatrix::from_coords(&coords).unwrap();
        let mut rng = create_rng(seed);
        let mut tour = Tour::random(&dm, &mut rng);
        let mut before: Vec<usize> = tour.cities().to_vec();
        before.sort_unstable();
        for _ in 0..rounds {
            tour.mutate(&dm, &mut rng);
            assert_consistent(&tour, &dm);
        }
        let mut after: Vec<usize> = tour.cities().to_vec();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn crossover_children_are_consistent(coords in coords_strategy(), seed in any::<u64>()) {
        let dm = DistanceMatrix::from_coords(&coords).unwrap();
        let index = NeighborIndex::build(&dm);
        let mut rng = create_rng(seed);
        let p1 = Tour::random(&dm, &mut rng);
        let p2 = Tour::random(&dm, &mut rng);
        let child = union_graph_crossover(&p1, &p2, &dm, &index, &mut rng);
        assert_consistent(&child, &dm);
    }

    #[test]
    fn identical_parents_keep_cost(coords in coords_strategy(), seed in any::<u64>()) {
        let dm = DistanceMatrix::from_coords(&coords).unwrap();
        let index = NeighborIndex::build(&dm);
        let mut rng = create_rng(seed);
        let parent = Tour::random(&dm, &mut rng);
        let child = union_graph_crossover(&parent, &parent, &dm, &index, &mut rng);
        prop_assert_eq!(child.length(), parent.length());
    }

    #[test]
    fn neighbor_index_ranks_every_other_city(coords in coords_strategy()) {
        let dm = DistanceMatrix::from_coords(&coords).unwrap();
        let index = NeighborIndex::build(&dm);
        for city in 0..dm.size() {
            let list = index.neighbors(city);
            prop_assert_eq!(list.len(), dm.size() - 1);
            prop_assert!(!list.contains(&city));
            prop_assert!(list.windows(2).all(|w| dm.get(city, w[0]) <= dm.get(city, w[1])));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn generations_keep_population_valid(coords in coords_strategy(), seed in any::<u64>()) {
        let dm = DistanceMatrix::from_coords(&coords).unwrap();
        let config = SolverConfig::default()
            .with_population_size(20)
            .with_max_generation(5)
            .with_mutation_rate(0.5)
            .with_seed(seed);
        let mut solver = Solver::new(dm.clone(), config).unwrap();
        solver.initialize();
        while solver.should_continue() {
            solver.step().unwrap();
            prop_assert_eq!(solver.population().len(), 20);
            for tour in solver.population() {
                assert_consistent(tour, &dm);
            }
        }
        prop_assert_eq!(solver.generation(), 6);
    }
}
