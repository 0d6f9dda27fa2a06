//! Precomputed nearest-neighbor ranking.
//!
//! [`NeighborIndex`] lists, for every city, all other cities ordered by
//! ascending distance. Crossover falls back to it whenever the union graph
//! runs out of unvisited neighbors, so building it once up front keeps the
//! dead-end case cheap.

use crate::distance::DistanceMatrix;

/// For each city, every other city sorted by ascending distance.
///
/// Equal distances keep ascending city-index order.
///
/// # Examples
///
/// ```
/// use u_tspga::distance::DistanceMatrix;
/// use u_tspga::ga::NeighborIndex;
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (5.0, 0.0), (1.0, 0.0)]).unwrap();
/// let index = NeighborIndex::build(&dm);
/// assert_eq!(index.neighbors(0), &[2, 1]);
/// ```
#[derive(Debug, Clone)]
pub struct NeighborIndex {
    ranked: Vec<Vec<usize>>,
}

impl NeighborIndex {
    /// Builds the ranking for every city in `distances`.
    ///
    /// # Complexity
    /// O(n² log n)
    pub fn build(distances: &DistanceMatrix) -> Self {
        let n = distances.size();
        let ranked = (0..n)
            .map(|from| {
                let mut others: Vec<usize> = (0..n).filter(|&c| c != from).collect();
                sort_by_distance(&mut others, from, distances);
                others
            })
            .collect();
        Self { ranked }
    }

    /// Other cities ordered by distance from `city`.
    ///
    /// # Panics
    /// Panics if `city` is out of range.
    pub fn neighbors(&self, city: usize) -> &[usize] {
        &self.ranked[city]
    }

    /// Number of cities indexed.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    /// Returns `true` if no cities are indexed.
    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }
}

/// Stable sort of `cities` by ascending distance from `from`.
///
/// Uses a three-way comparison on the raw distances, so large values cannot
/// overflow or misorder.
pub(crate) fn sort_by_distance(cities: &mut [usize], from: usize, distances: &DistanceMatrix) {
    cities.sort_by(|&a, &b| distances.get(from, a).cmp(&distances.get(from, b)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_list_has_all_other_cities() {
        let coords: Vec<(f64, f64)> = (0..12)
            .map(|i| ((i * 7 % 11) as f64, (i * 3 % 5) as f64))
            .collect();
        let dm = DistanceMatrix::from_coords(&coords).expect("non-empty");
        let index = NeighborIndex::build(&dm);

        assert_eq!(index.len(), 12);
        for city in 0..12 {
            let list = index.neighbors(city);
            assert_eq!(list.len(), 11);
            assert!(!list.contains(&city));
            let mut sorted = list.to_vec();
            sorted.sort_unstable();
            let expected: Vec<usize> = (0..12).filter(|&c| c != city).collect();
            assert_eq!(sorted, expected);
        }
    }

    #[test]
    fn test_lists_are_ascending() {
        let coords = vec![(0.0, 0.0), (10.0, 0.0), (3.0, 0.0), (7.0, 1.0), (1.0, 9.0)];
        let dm = DistanceMatrix::from_coords(&coords).expect("non-empty");
        let index = NeighborIndex::build(&dm);

        for city in 0..coords.len() {
            let dists: Vec<u64> = index
                .neighbors(city)
                .iter()
                .map(|&c| dm.get(city, c))
                .collect();
            assert!(dists.windows(2).all(|w| w[0] <= w[1]), "city {city}: {dists:?}");
        }
    }

    #[test]
    fn test_ties_keep_index_order() {
        // All off-diagonal distances equal
        let dm = DistanceMatrix::from_rows(vec![
            vec![0, 3, 3, 3],
            vec![3, 0, 3, 3],
            vec![3, 3, 0, 3],
            vec![3, 3, 3, 0],
        ])
        .expect("valid");
        let index = NeighborIndex::build(&dm);
        assert_eq!(index.neighbors(2), &[0, 1, 3]);
    }

    #[test]
    fn test_large_distances_do_not_misorder() {
        let big = u64::MAX / 3;
        let dm = DistanceMatrix::from_rows(vec![
            vec![0, big, 1],
            vec![big, 0, 2],
            vec![1, 2, 0],
        ])
        .expect("valid");
        let index = NeighborIndex::build(&dm);
        assert_eq!(index.neighbors(0), &[2, 1]);
        assert_eq!(index.neighbors(1), &[2, 0]);
    }

    #[test]
    fn test_single_city() {
        let dm = DistanceMatrix::from_rows(vec![vec![0]]).expect("valid");
        let index = NeighborIndex::build(&dm);
        assert_eq!(index.len(), 1);
        assert!(index.neighbors(0).is_empty());
    }
}
