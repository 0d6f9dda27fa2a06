//! Distance model.
//!
//! Provides [`DistanceMatrix`], the dense symmetric integer cost table every
//! other component reads from.

mod matrix;

pub use matrix::DistanceMatrix;
