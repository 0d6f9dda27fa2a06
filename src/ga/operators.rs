//! Genetic operators for tours.
//!
//! # Crossover
//!
//! - [`UnionGraph`] / [`union_graph_crossover`]: greedy nearest-neighbor walk
//!   over the union of both parents' edges, falling back to the complete
//!   graph (through [`NeighborIndex`]) at dead ends. Children strongly
//!   inherit short parental edges while staying valid permutations.
//!
//! # Mutation
//!
//! - Segment reversal (2-opt move), applied by [`Tour::mutate`]. This module
//!   only provides the segment draw.
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several Heuristics
//!   for the Traveling Salesman Problem"
//! - Whitley, Starkweather & Fuquay (1989), "Scheduling Problems and Traveling
//!   Salesmen: The Genetic Edge Recombination Operator"

use super::neighbors::{sort_by_distance, NeighborIndex};
use super::types::Tour;
use crate::distance::DistanceMatrix;
use rand::Rng;
use std::collections::BTreeSet;

// ============================================================================
// Crossover
// ============================================================================

/// Undirected graph holding every edge of two parent tours.
///
/// Each city has degree 2 to 4 (fewer when there are under three cities).
/// Neighbor sets are ordered so that the walk is reproducible under a fixed
/// seed.
#[derive(Debug, Clone)]
pub struct UnionGraph {
    edges: Vec<BTreeSet<usize>>,
}

impl UnionGraph {
    /// Builds the union of the cyclic edges of `parent1` and `parent2`.
    ///
    /// # Panics
    /// Panics if the parents have different lengths.
    pub fn new(parent1: &Tour, parent2: &Tour) -> Self {
        let n = parent1.len();
        assert_eq!(n, parent2.len(), "parents must have equal length");

        let mut edges = vec![BTreeSet::new(); n];
        for parent in [parent1, parent2] {
            let cities = parent.cities();
            for (i, &a) in cities.iter().enumerate() {
                let b = cities[(i + 1) % n];
                if a != b {
                    edges[a].insert(b);
                    edges[b].insert(a);
                }
            }
        }
        Self { edges }
    }

    /// Cities adjacent to `city` in either parent, in index order.
    pub fn neighbors(&self, city: usize) -> impl Iterator<Item = usize> + '_ {
        self.edges[city].iter().copied()
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no cities.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Builds a child tour by walking greedily from `start`.
    ///
    /// At every step the walk moves to the nearest unvisited union-graph
    /// neighbor of the current city. When all of them are visited it moves
    /// to the nearest unvisited city overall, read from `index`.
    ///
    /// # Complexity
    /// O(n) amortized per step on the union graph, O(n) per fallback.
    ///
    /// # Panics
    /// Panics if `start` is out of range, or if `index` does not list every
    /// other city (the fallback would run dry).
    pub fn nearest_neighbor_walk(
        &self,
        start: usize,
        distances: &DistanceMatrix,
        index: &NeighborIndex,
    ) -> Tour {
        let n = self.len();
        assert!(start < n, "start city {start} out of range for {n} cities");

        let mut path = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        let mut candidates: Vec<usize> = Vec::with_capacity(4);

        let mut current = start;
        path.push(current);
        visited[current] = true;

        while path.len() < n {
            candidates.clear();
            candidates.extend(self.neighbors(current));
            sort_by_distance(&mut candidates, current, distances);

            let next = match candidates.iter().copied().find(|&c| !visited[c]) {
                Some(city) => city,
                None => {
                    log::trace!("union graph dead end at city {current}, using complete graph");
                    index
                        .neighbors(current)
                        .iter()
                        .copied()
                        .find(|&c| !visited[c])
                        .unwrap_or_else(|| {
                            panic!("neighbor index exhausted at city {current} with unvisited cities left")
                        })
                }
            };

            visited[next] = true;
            path.push(next);
            current = next;
        }

        Tour::new(path, distances)
    }

    /// Builds a child tour from a uniformly random start city.
    pub fn breed<R: Rng>(
        &self,
        distances: &DistanceMatrix,
        index: &NeighborIndex,
        rng: &mut R,
    ) -> Tour {
        let start = rng.random_range(0..self.len());
        self.nearest_neighbor_walk(start, distances, index)
    }
}

/// Union-graph nearest-neighbor crossover: one child from two parents.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn union_graph_crossover<R: Rng>(
    parent1: &Tour,
    parent2: &Tour,
    distances: &DistanceMatrix,
    index: &NeighborIndex,
    rng: &mut R,
) -> Tour {
    UnionGraph::new(parent1, parent2).breed(distances, index, rng)
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
///
/// Both endpoints are drawn independently, so `start == end` is possible.
pub(crate) fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

// ============================================================================
// Tests
// ============================================================================
