//! Tournament selection.
//!
//! Parents are chosen by drawing a small uniform sample from the population
//! (with replacement) and keeping its shortest tour. Repeating this fills the
//! parent quota; the same tour may win several tournaments.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection, and
//!   the Effects of Noise"

use super::types::Tour;
use rand::Rng;

/// Runs `count` independent tournaments of `sample_size` and returns the
/// winners' indices into `population`.
///
/// # Panics
/// Panics if `population` is empty and `count > 0`.
pub fn tournament_select<R: Rng>(
    population: &[Tour],
    sample_size: usize,
    count: usize,
    rng: &mut R,
) -> Vec<usize> {
    (0..count)
        .map(|_| tournament(population, sample_size, rng))
        .collect()
}

/// Tournament selection: draw `k` random individuals, return the shortest.
///
/// Ties keep the earliest draw.
///
/// # Complexity
/// O(k)
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Tour], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].length() < population[best_idx].length() {
            best_idx = idx;
        }
    }
    best_idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::random::create_rng;

    /// Four tours over a 4-city ring where only index 2 follows the ring.
    fn make_population() -> (DistanceMatrix, Vec<Tour>) {
        let dm = DistanceMatrix::from_rows(vec![
            vec![0, 1, 10, 1],
            vec![1, 0, 1, 10],
            vec![10, 1, 0, 1],
            vec![1, 10, 1, 0],
        ])
        .expect("valid");
        let pop = vec![
            Tour::new(vec![0, 2, 1, 3], &dm), // 22
            Tour::new(vec![0, 1, 3, 2], &dm), // 22
            Tour::new(vec![0, 1, 2, 3], &dm), // 4
            Tour::new(vec![0, 3, 1, 2], &dm), // 22
        ];
        (dm, pop)
    }

    #[test]
    fn test_tournament_favors_best() {
        let (_, pop) = make_population();
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament(&pop, 4, &mut rng)] += 1;
        }
        // P(best drawn in 4 tries) = 1 - (3/4)^4 ~ 0.68
        assert!(
            counts[2] > 6000,
            "expected best to be selected >60% of the time, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_random() {
        let (_, pop) = make_population();
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_select_count() {
        let (_, pop) = make_population();
        let mut rng = create_rng(1);
        let winners = tournament_select(&pop, 2, 50, &mut rng);
        assert_eq!(winners.len(), 50);
        assert!(winners.iter().all(|&i| i < pop.len()));
        assert!(tournament_select(&pop, 2, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_single_individual() {
        let (_, pop) = make_population();
        let mut rng = create_rng(42);
        assert_eq!(tournament(&pop[..1], 3, &mut rng), 0);
    }

    #[test]
    fn test_same_seed_same_winners() {
        let (_, pop) = make_population();
        let a = tournament_select(&pop, 2, 20, &mut create_rng(11));
        let b = tournament_select(&pop, 2, 20, &mut create_rng(11));
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Tour> = vec![];
        let mut rng = create_rng(42);
        tournament(&pop, 3, &mut rng);
    }
}
