//! Seedable random source shared by every stochastic operator.
//!
//! The solver owns exactly one generator and lends it out as `&mut R`
//! to initialization, selection, crossover and mutation, so a fixed seed
//! reproduces a whole run.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Generator type owned by [`Solver`](crate::ga::Solver).
pub type SolverRng = StdRng;

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> SolverRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh seed when `None`.
pub fn rng_from_seed(seed: Option<u64>) -> SolverRng {
    match seed {
        Some(s) => create_rng(s),
        None => create_rng(rand::random()),
    }
}

/// Shuffles a slice in place (Fisher-Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Returns a uniformly random permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    shuffle(&mut perm, rng);
    perm
}
