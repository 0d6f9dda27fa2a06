//! Genetic algorithm for the symmetric TSP.
//!
//! Tours evolve under elitism, tournament selection, a union-graph
//! nearest-neighbor crossover and segment-reversal mutation.
//!
//! # Key Types
//!
//! - [`Tour`]: a candidate solution with its cached cycle length
//! - [`NeighborIndex`]: per-city ranking of all other cities by distance
//! - [`UnionGraph`]: the crossover substrate built from two parents
//! - [`SolverConfig`]: algorithm parameters (population, ratios, rates)
//! - [`Solver`]: the population and its generational loop
//! - [`SolverResult`]: outcome of [`Solver::run`]
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"

mod config;
mod neighbors;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::SolverConfig;
pub use neighbors::NeighborIndex;
pub use operators::{union_graph_crossover, UnionGraph};
pub use runner::{new_solver, Solver, SolverResult};
pub use types::Tour;
