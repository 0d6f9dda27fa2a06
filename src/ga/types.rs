//! The [`Tour`] individual.
//!
//! A tour is a cyclic permutation of every city, closed by the implicit
//! edge from the last city back to the first. Its length is cached and
//! kept in sync across every mutation.

use super::operators::random_segment;
use crate::distance::DistanceMatrix;
use crate::error::{Result, SolverError};
use crate::random::random_permutation;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// A candidate solution: a permutation of `0..n` plus its cycle length.
///
/// Tours order by length ascending, so the "least" tour is the fittest.
/// Equal lengths fall back to comparing the city sequence.
///
/// # Examples
///
/// ```
/// use u_tspga::distance::DistanceMatrix;
/// use u_tspga::ga::Tour;
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (0.0, 3.0), (4.0, 0.0)]).unwrap();
/// let tour = Tour::new(vec![0, 1, 2], &dm);
/// assert_eq!(tour.length(), 3 + 5 + 4);
/// assert_eq!(tour.cities(), &[0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    cities: Vec<usize>,
    length: u64,
}

impl Tour {
    /// Builds a tour and computes its length.
    ///
    /// # Panics
    /// Panics if `cities` is not a permutation of `0..distances.size()`.
    /// Tours built inside the engine are always valid; a failure here means
    /// an operator is broken.
    pub fn new(cities: Vec<usize>, distances: &DistanceMatrix) -> Self {
        assert!(
            cities.len() == distances.size() && is_permutation(&cities),
            "tour is not a permutation of 0..{}: {cities:?}",
            distances.size()
        );
        let length = cycle_length(&cities, distances);
        Self { cities, length }
    }

    /// Builds a tour from externally supplied cities, such as a reference
    /// tour read from a file.
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidTour`] if `cities` is not a permutation
    /// of `0..distances.size()`.
    pub fn try_new(cities: Vec<usize>, distances: &DistanceMatrix) -> Result<Self> {
        if cities.len() != distances.size() {
            return Err(SolverError::InvalidTour(format!(
                "expected {} cities, got {}",
                distances.size(),
                cities.len()
            )));
        }
        if !is_permutation(&cities) {
            return Err(SolverError::InvalidTour(format!(
                "cities are not a permutation of 0..{}",
                distances.size()
            )));
        }
        let length = cycle_length(&cities, distances);
        Ok(Self { cities, length })
    }

    /// Creates a uniformly random tour.
    pub fn random<R: Rng>(distances: &DistanceMatrix, rng: &mut R) -> Self {
        Self::new(random_permutation(distances.size(), rng), distances)
    }

    /// Cities in visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Cached cycle length, including the closing edge.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` for the empty tour.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Recomputes the cycle length from scratch.
    ///
    /// # Complexity
    /// O(n)
    pub fn evaluate(&self, distances: &DistanceMatrix) -> u64 {
        cycle_length(&self.cities, distances)
    }

    /// Reverses the segment between two uniformly random positions
    /// (inclusive) and refreshes the cached length.
    ///
    /// The positions are drawn independently; when they coincide the tour is
    /// unchanged.
    pub fn mutate<R: Rng>(&mut self, distances: &DistanceMatrix, rng: &mut R) {
        if self.cities.is_empty() {
            return;
        }
        let (start, end) = random_segment(self.cities.len(), rng);
        self.cities[start..=end].reverse();
        self.length = cycle_length(&self.cities, distances);
    }

    /// Returns `true` if the cities form a permutation of `0..n`.
    pub fn is_valid(&self) -> bool {
        is_permutation(&self.cities)
    }
}

impl PartialOrd for Tour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tour {
    fn cmp(&self, other: &Self) -> Ordering {
        self.length
            .cmp(&other.length)
            .then_with(|| self.cities.cmp(&other.cities))
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tour {{ cities: {:?}, length: {} }}", self.cities, self.length)
    }
}

/// Sum of consecutive edge costs plus the closing edge. Zero for an empty
/// sequence.
fn cycle_length(cities: &[usize], distances: &DistanceMatrix) -> u64 {
    let (Some(&first), Some(&last)) = (cities.first(), cities.last()) else {
        return 0;
    };
    let open: u64 = cities
        .windows(2)
        .map(|w| distances.get(w[0], w[1]))
        .sum();
    open + distances.get(last, first)
}

fn is_permutation(cities: &[usize]) -> bool {
    let n = cities.len();
    let mut seen = vec![false; n];
    for &c in cities {
        if c >= n || seen[c] {
            return false;
        }
        seen[c] = true;
    }
    true
}
