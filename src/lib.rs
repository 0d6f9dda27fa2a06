//! Genetic algorithm for the Traveling Salesman Problem.
//!
//! Candidate tours evolve under a generational loop whose crossover is a
//! greedy nearest-neighbor walk over the union of two parents' edges, with a
//! precomputed nearest-neighbor ranking as fallback.
//!
//! - [`distance`]: the integer distance model ([`distance::DistanceMatrix`])
//! - [`ga`]: tours, crossover, selection and the [`ga::Solver`] loop
//! - [`random`]: the seedable random source shared by all operators
//!
//! # Quick Start
//!
//! ```
//! use u_tspga::distance::DistanceMatrix;
//! use u_tspga::ga::{Solver, SolverConfig};
//!
//! let square = [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)];
//! let dm = DistanceMatrix::from_coords(&square).unwrap();
//! let mut solver = Solver::new(dm, SolverConfig::default().with_seed(7)).unwrap();
//! let result = solver.run();
//! assert_eq!(result.best_length, 4);
//! ```
//!
//! # Architecture
//!
//! Loading problem instances, drawing tours and interactive drivers live
//! outside this crate; the distance matrix is the only input.

pub mod distance;
pub mod error;
pub mod ga;
pub mod random;

pub use error::{Result, SolverError};
