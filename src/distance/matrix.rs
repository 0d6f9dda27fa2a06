//! Dense integer distance matrix.

use crate::error::{Result, SolverError};

/// A dense n×n integer distance matrix stored in row-major order.
///
/// Distances are non-negative integers, following the TSPLIB convention of
/// rounding Euclidean distances to the nearest integer.
///
/// # Examples
///
/// ```
/// use u_tspga::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 4.0), (6.0, 8.0)]).unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.get(0, 2), 10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyInstance`] for zero rows and
    /// [`SolverError::NonSquareMatrix`] if any row width differs from the
    /// row count, and [`SolverError::DistanceOverflow`] if `n` edges of the
    /// largest entry would not fit in a `u64` tour length. An asymmetric
    /// matrix is accepted with a warning.
    pub fn from_rows(rows: Vec<Vec<u64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(SolverError::EmptyInstance);
        }
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(SolverError::NonSquareMatrix {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            data.extend(values);
        }
        let dm = Self { data, size };
        dm.check_length_bound()?;
        if !dm.is_symmetric() {
            log::warn!("distance matrix with {size} cities is not symmetric");
        }
        Ok(dm)
    }

    /// Computes a rounded Euclidean (TSPLIB `EUC_2D`) matrix from planar
    /// coordinates.
    ///
    /// Coordinates are used as given and only the final distance is rounded.
    /// Loaders that want integer coordinates (rounding each coordinate
    /// before measuring) must round them before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::EmptyInstance`] if `coords` is empty and
    /// [`SolverError::DistanceOverflow`] if the coordinates are spread so far
    /// apart that a tour length could overflow.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        let size = coords.len();
        if size == 0 {
            return Err(SolverError::EmptyInstance);
        }
        let mut data = vec![0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = euc_2d(coords[i], coords[j]);
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        let dm = Self { data, size };
        dm.check_length_bound()?;
        Ok(dm)
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }
}

impl DistanceMatrix {
    /// Every tour has `size` edges, so `size * max` bounds any tour length.
    fn check_length_bound(&self) -> Result<()> {
        let max_distance = self.data.iter().copied().max().unwrap_or(0);
        if max_distance.checked_mul(self.size as u64).is_none() {
            return Err(SolverError::DistanceOverflow {
                max_distance,
                cities: self.size,
            });
        }
        Ok(())
    }
}

/// TSPLIB nearest-integer Euclidean distance.
fn euc_2d(a: (f64, f64), b: (f64, f64)) -> u64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt().round() as u64
}
