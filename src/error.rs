//! Error types for the solver.
//!
//! Recoverable failures (bad input matrices, bad configuration, bad
//! arguments) surface as [`SolverError`]. Internal-consistency failures,
//! such as a crossover producing a non-permutation, are assertions and
//! panic instead.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors reported by the solver's public API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The distance matrix has no cities.
    #[error("distance matrix must contain at least one city")]
    EmptyInstance,

    /// A row of the distance matrix has the wrong width.
    #[error("distance matrix row {row} has {found} entries, expected {expected}")]
    NonSquareMatrix {
        /// Offending row index.
        row: usize,
        /// Number of cities (the required row width).
        expected: usize,
        /// Actual row width.
        found: usize,
    },

    /// Distances are large enough that a tour length could overflow `u64`.
    #[error("distance {max_distance} over {cities} cities could overflow a tour length")]
    DistanceOverflow {
        /// Largest entry in the matrix.
        max_distance: u64,
        /// Number of cities.
        cities: usize,
    },

    /// A [`SolverConfig`](crate::ga::SolverConfig) parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A caller-supplied argument violates an operation's precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A city sequence is not a permutation of `0..n`.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// The population was queried or stepped before `initialize()`.
    #[error("population has not been initialized")]
    NotInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = SolverError::NonSquareMatrix {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(
            err.to_string(),
            "distance matrix row 2 has 3 entries, expected 4"
        );
        assert_eq!(
            SolverError::NotInitialized.to_string(),
            "population has not been initialized"
        );
        assert_eq!(
            SolverError::InvalidArgument("k too large".into()).to_string(),
            "invalid argument: k too large"
        );
    }
}
