//! Solver configuration.
//!
//! [`SolverConfig`] holds all parameters that control the generational loop.

use crate::error::{Result, SolverError};

/// Configuration for the genetic TSP solver.
///
/// Controls population size, persistence and parent quotas, tournament size,
/// mutation rate and the generation limit.
///
/// # Defaults
///
/// ```
/// use u_tspga::ga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generation, 50);
/// assert_eq!(config.n_persisters(), 5);
/// assert_eq!(config.n_parents(), 50);
/// assert_eq!(config.n_children(), 95);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tspga::ga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_population_size(200)
///     .with_sample_size(3)
///     .with_persist_ratio(0.1)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Number of tours in every generation.
    pub population_size: usize,

    /// Last generation number for which [`should_continue`] holds.
    ///
    /// [`should_continue`]: super::Solver::should_continue
    pub max_generation: usize,

    /// Probability that a tour is mutated during the sweep (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population selected as parents (0.0–1.0).
    pub parent_ratio: f64,

    /// Fraction of the population carried over unchanged (0.0–1.0).
    ///
    /// Persisters are still subject to the mutation sweep, so the best length
    /// is only non-increasing across generations when the persisted best
    /// escapes mutation (always the case with `mutation_rate = 0`).
    pub persist_ratio: f64,

    /// Number of tours drawn per tournament.
    ///
    /// - 2: light pressure (good for diversity)
    /// - 3-5: moderate pressure
    pub sample_size: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generation: 50,
            mutation_rate: 0.01,
            parent_ratio: 0.5,
            persist_ratio: 0.05,
            sample_size: 2,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the last generation to run.
    pub fn with_max_generation(mut self, n: usize) -> Self {
        self.max_generation = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the parent ratio.
    pub fn with_parent_ratio(mut self, ratio: f64) -> Self {
        self.parent_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the persist (elitism) ratio.
    pub fn with_persist_ratio(mut self, ratio: f64) -> Self {
        self.persist_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament sample size.
    pub fn with_sample_size(mut self, k: usize) -> Self {
        self.sample_size = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick runs on small instances.
    ///
    /// - Population: 50, Generations: 30
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generation: 30,
            ..Self::default()
        }
    }

    /// Preset for longer runs on larger instances.
    ///
    /// - Population: 200, Generations: 200, Mutation rate: 0.02
    pub fn thorough() -> Self {
        Self {
            population_size: 200,
            max_generation: 200,
            mutation_rate: 0.02,
            ..Self::default()
        }
    }

    /// Tours carried over unchanged each generation:
    /// `round(population_size * persist_ratio)`.
    pub fn n_persisters(&self) -> usize {
        (self.population_size as f64 * self.persist_ratio).round() as usize
    }

    /// Tournament winners per generation:
    /// `round(population_size * parent_ratio)`.
    pub fn n_parents(&self) -> usize {
        (self.population_size as f64 * self.parent_ratio).round() as usize
    }

    /// Children bred per generation: `population_size - n_persisters`.
    pub fn n_children(&self) -> usize {
        self.population_size.saturating_sub(self.n_persisters())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(invalid("population_size must be at least 1"));
        }
        if self.max_generation == 0 {
            return Err(invalid("max_generation must be at least 1"));
        }
        if self.sample_size == 0 {
            return Err(invalid("sample_size must be at least 1"));
        }
        for (name, value) in [
            ("mutation_rate", self.mutation_rate),
            ("parent_ratio", self.parent_ratio),
            ("persist_ratio", self.persist_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(&format!("{name} must be within [0, 1], got {value}")));
            }
        }
        if self.n_persisters() > self.population_size {
            return Err(invalid("persist_ratio selects more tours than the population holds"));
        }
        if self.n_children() > 0 && self.n_parents() == 0 {
            return Err(invalid(
                "parent_ratio yields no parents but children are required",
            ));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> SolverError {
    SolverError::InvalidConfig(msg.to_string())
}
