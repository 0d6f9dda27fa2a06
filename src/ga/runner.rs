//! Generational loop execution.
//!
//! [`Solver`] owns the population and drives it one generation at a time:
//! elitism → tournament selection → union-graph breeding → mutation sweep.
//! Termination is left to the caller through [`Solver::should_continue`];
//! [`Solver::run`] is the non-interactive loop built on top of it.

use super::config::SolverConfig;
use super::neighbors::NeighborIndex;
use super::operators::union_graph_crossover;
use super::selection::tournament_select;
use super::types::Tour;
use crate::distance::DistanceMatrix;
use crate::error::{Result, SolverError};
use crate::random::{rng_from_seed, shuffle, SolverRng};
use rand::Rng;

/// Result of a complete run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverResult {
    /// The shortest tour seen in any generation.
    pub best: Tour,

    /// Length of `best`.
    pub best_length: u64,

    /// Number of generations evolved (calls to `step`).
    pub generations: usize,

    /// Best length in the initial population and after each generation.
    pub best_history: Vec<u64>,

    /// Rounded average length, sampled alongside `best_history`.
    pub avg_history: Vec<u64>,
}

/// Genetic TSP solver: the population and everything needed to evolve it.
///
/// The solver starts uninitialized; [`initialize`](Self::initialize) seeds a
/// random population at generation 1 and every [`step`](Self::step) advances
/// one generation.
///
/// # Usage
///
/// ```
/// use u_tspga::distance::DistanceMatrix;
/// use u_tspga::ga::{Solver, SolverConfig};
///
/// let coords: Vec<(f64, f64)> = (0..20)
///     .map(|i| ((i * 37 % 100) as f64, (i * 61 % 100) as f64))
///     .collect();
/// let dm = DistanceMatrix::from_coords(&coords).unwrap();
/// let mut solver = Solver::new(dm, SolverConfig::default().with_seed(42)).unwrap();
///
/// solver.initialize();
/// while solver.should_continue() {
///     solver.step().unwrap();
/// }
/// assert_eq!(solver.generation(), 51);
/// assert!(solver.fittest_individual().unwrap().is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    distances: DistanceMatrix,
    neighbors: NeighborIndex,
    config: SolverConfig,
    rng: SolverRng,
    population: Vec<Tour>,
    generation: usize,
}

/// Creates a solver with [`SolverConfig::default`] from a raw n×n matrix.
///
/// # Errors
/// Fails if the matrix is empty or not square.
pub fn new_solver(distance_matrix: Vec<Vec<u64>>) -> Result<Solver> {
    Solver::new(
        DistanceMatrix::from_rows(distance_matrix)?,
        SolverConfig::default(),
    )
}

impl Solver {
    /// Validates `config`, builds the neighbor index and seeds the generator.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidConfig`] if `config` is invalid.
    pub fn new(distances: DistanceMatrix, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        let neighbors = NeighborIndex::build(&distances);
        let rng = rng_from_seed(config.seed);
        Ok(Self {
            distances,
            neighbors,
            config,
            rng,
            population: Vec::new(),
            generation: 0,
        })
    }

    /// Replaces the population with `population_size` random tours and sets
    /// the generation to 1.
    pub fn initialize(&mut self) {
        self.population = (0..self.config.population_size)
            .map(|_| Tour::random(&self.distances, &mut self.rng))
            .collect();
        self.generation = 1;

        log::debug!(
            "initialized {} tours over {} cities: best={} avg={}",
            self.population.len(),
            self.distances.size(),
            self.best().length(),
            self.average_length()
        );
    }

    /// Returns `true` once [`initialize`](Self::initialize) has run.
    pub fn is_initialized(&self) -> bool {
        self.generation > 0
    }

    /// Current generation number (0 before initialization).
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether the caller should keep stepping:
    /// `1 <= generation <= max_generation`.
    pub fn should_continue(&self) -> bool {
        self.is_initialized() && self.generation <= self.config.max_generation
    }

    /// The current generation's tours.
    pub fn population(&self) -> &[Tour] {
        &self.population
    }

    /// The configuration this solver was built with.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// The distance model.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// The precomputed nearest-neighbor ranking.
    pub fn neighbor_index(&self) -> &NeighborIndex {
        &self.neighbors
    }

    /// The shortest tour in the current population (first in scan order on
    /// ties), or `None` before initialization.
    pub fn fittest_individual(&self) -> Option<&Tour> {
        self.population.iter().min_by_key(|t| t.length())
    }

    /// The `k` shortest tours, ascending by length.
    ///
    /// # Errors
    /// Returns [`SolverError::NotInitialized`] before initialization and
    /// [`SolverError::InvalidArgument`] if `k` exceeds the population size.
    pub fn n_fittest(&self, k: usize) -> Result<Vec<Tour>> {
        if !self.is_initialized() {
            return Err(SolverError::NotInitialized);
        }
        if k > self.population.len() {
            return Err(SolverError::InvalidArgument(format!(
                "requested {k} fittest tours from a population of {}",
                self.population.len()
            )));
        }
        let mut order: Vec<usize> = (0..self.population.len()).collect();
        order.sort_by_key(|&i| self.population[i].length());
        Ok(order
            .into_iter()
            .take(k)
            .map(|i| self.population[i].clone())
            .collect())
    }

    /// Rounded average tour length, or `None` before initialization.
    pub fn avg_fitness(&self) -> Option<u64> {
        self.is_initialized().then(|| self.average_length())
    }

    /// Evolves the population by exactly one generation.
    ///
    /// # Errors
    /// Returns [`SolverError::NotInitialized`] before initialization.
    pub fn step(&mut self) -> Result<()> {
        if !self.is_initialized() {
            return Err(SolverError::NotInitialized);
        }
        self.advance();
        Ok(())
    }

    /// Initializes, then steps until [`should_continue`](Self::should_continue)
    /// is false, tracking the best tour ever seen.
    pub fn run(&mut self) -> SolverResult {
        self.initialize();

        let mut best = self.best().clone();
        let mut best_history = Vec::with_capacity(self.config.max_generation + 1);
        let mut avg_history = Vec::with_capacity(self.config.max_generation + 1);
        best_history.push(best.length());
        avg_history.push(self.average_length());

        let mut generations = 0usize;
        while self.should_continue() {
            self.advance();
            generations += 1;

            let gen_best = self.best();
            if gen_best.length() < best.length() {
                best = gen_best.clone();
            }
            best_history.push(gen_best.length());
            avg_history.push(self.average_length());
        }

        SolverResult {
            best_length: best.length(),
            best,
            generations,
            best_history,
            avg_history,
        }
    }

    /// One generation; the population must be initialized.
    fn advance(&mut self) {
        let n_persisters = self.config.n_persisters();
        let n_parents = self.config.n_parents();
        let n_children = self.config.n_children();

        // 1. Elitism
        let mut order: Vec<usize> = (0..self.population.len()).collect();
        order.sort_by_key(|&i| self.population[i].length());
        let mut next_gen: Vec<Tour> = order[..n_persisters]
            .iter()
            .map(|&i| self.population[i].clone())
            .collect();

        // 2. Tournament selection over the current population
        let parents = tournament_select(
            &self.population,
            self.config.sample_size,
            n_parents,
            &mut self.rng,
        );

        // 3. Breeding
        let children = breed_population(
            &self.population,
            &parents,
            n_children,
            &self.distances,
            &self.neighbors,
            &mut self.rng,
        );

        // 4. Replacement
        next_gen.extend(children);
        debug_assert_eq!(next_gen.len(), self.config.population_size);
        self.population = next_gen;

        // 5. Mutation sweep
        let mut mutated = 0usize;
        for tour in &mut self.population {
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                tour.mutate(&self.distances, &mut self.rng);
                mutated += 1;
            }
        }

        self.generation += 1;

        log::debug!(
            "generation {}: persisters={} parents={} children={} mutated={} best={} avg={}",
            self.generation,
            n_persisters,
            n_parents,
            n_children,
            mutated,
            self.best().length(),
            self.average_length()
        );
    }

    fn best(&self) -> &Tour {
        self.fittest_individual()
            .expect("population must not be empty")
    }

    /// Integer mean rounded half up; the population is never empty here.
    ///
    /// Summed in `u128` since each length may already approach `u64::MAX`.
    fn average_length(&self) -> u64 {
        let n = self.population.len() as u128;
        let total: u128 = self
            .population
            .iter()
            .map(|t| u128::from(t.length()))
            .sum();
        ((total + n / 2) / n) as u64
    }
}

/// Breeds exactly `n_children` children from the selected parents.
///
/// `parents` holds indices into `population`; repeated indices are allowed.
fn breed_population<R: Rng>(
    population: &[Tour],
    parents: &[usize],
    n_children: usize,
    distances: &DistanceMatrix,
    neighbors: &NeighborIndex,
    rng: &mut R,
) -> Vec<Tour> {
    let pool = build_breeding_pool(parents, 2 * n_children, rng);
    pool.chunks_exact(2)
        .map(|pair| {
            union_graph_crossover(
                &population[pair[0]],
                &population[pair[1]],
                distances,
                neighbors,
                &mut *rng,
            )
        })
        .collect()
}

/// Concatenates `ceil(pool_size / parents.len())` shuffled passes over
/// `parents`, truncates to `pool_size` and shuffles the result.
///
/// Across the pool, occurrence counts of any two parent slots differ by at
/// most one.
///
/// # Panics
/// Panics if `parents` is empty and `pool_size > 0`.
fn build_breeding_pool<R: Rng>(parents: &[usize], pool_size: usize, rng: &mut R) -> Vec<usize> {
    if pool_size == 0 {
        return Vec::new();
    }
    assert!(!parents.is_empty(), "cannot breed without parents");

    let passes = pool_size.div_ceil(parents.len());
    let mut pass = parents.to_vec();
    let mut pool = Vec::with_capacity(passes * parents.len());
    for _ in 0..passes {
        shuffle(&mut pass, rng);
        pool.extend_from_slice(&pass);
    }
    pool.truncate(pool_size);
    shuffle(&mut pool, rng);
    pool
}

// ============================================================================
// Tests
// ============================================================================
