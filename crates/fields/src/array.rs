//! Flat column-major array containers for field data and meshes

use crate::coordinates::Axis;
use crate::error::{Error, Result};

/// A 3D array stored flat in column-major (Fortran) order
///
/// Snapshot files are written with x varying fastest, so the value at grid
/// cell `(i, j, k)` sits at flat index `i + j*nx + k*nx*ny`. Keeping the
/// storage flat makes the reshape a bookkeeping exercise rather than a copy,
/// and flattening is guaranteed to reproduce the raw file order.
///
/// ```rust
/// # use htools_fields::Array3;
/// let values: Vec<f64> = (0..24).map(f64::from).collect();
/// let data = Array3::from_flat(values, (2, 3, 4)).unwrap();
///
/// assert_eq!(data.get(0, 0, 0), 0.0);
/// assert_eq!(data.get(1, 0, 0), 1.0);   // x varies fastest
/// assert_eq!(data.get(0, 1, 0), 2.0);
/// assert_eq!(data.get(0, 0, 1), 6.0);
/// assert_eq!(data.flatten()[7], 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Array3 {
    values: Vec<f64>,
    shape: (usize, usize, usize),
}

impl Array3 {
    /// Reshape a flat value array to `(nx, ny, nz)` without copying
    ///
    /// Fails if the value count disagrees with the product of the extents.
    pub fn from_flat(values: Vec<f64>, shape: (usize, usize, usize)) -> Result<Self> {
        let expected = shape.0 * shape.1 * shape.2;
        if values.len() != expected {
            return Err(Error::UnexpectedDataLength {
                expected,
                found: values.len(),
            });
        }
        Ok(Self { values, shape })
    }

    /// Per-axis extents as `(nx, ny, nz)`
    pub fn shape(&self) -> (usize, usize, usize) {
        self.shape
    }

    /// Value at grid cell `(i, j, k)`
    pub fn get(&self, i: usize, j: usize, k: usize) -> f64 {
        let (nx, ny, _) = self.shape;
        self.values[i + j * nx + k * nx * ny]
    }

    /// The backing values in raw file order
    pub fn flatten(&self) -> &[f64] {
        &self.values
    }

    /// Extent along one axis
    pub fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.shape.0,
            Axis::Y => self.shape.1,
            Axis::Z => self.shape.2,
        }
    }

    /// The 2D plane perpendicular to `normal` at `index`
    ///
    /// Rows and columns of the result follow the two remaining axes in
    /// natural order.
    pub fn plane(&self, normal: Axis, index: usize) -> Result<Array2> {
        self.check_index(normal, index)?;
        let (nx, ny, nz) = self.shape;
        Ok(match normal {
            Axis::Z => Array2::from_fn(nx, ny, |i, j| self.get(i, j, index)),
            Axis::Y => Array2::from_fn(nx, nz, |i, k| self.get(i, index, k)),
            Axis::X => Array2::from_fn(ny, nz, |j, k| self.get(index, j, k)),
        })
    }

    /// The 1D lane along `axis` with the remaining axes fixed
    ///
    /// The fixed indices are given in natural axis order, e.g. a lane along y
    /// takes `(i, k)`.
    pub fn lane(&self, along: Axis, fixed: (usize, usize)) -> Result<Vec<f64>> {
        let (a, b) = fixed;
        Ok(match along {
            Axis::X => {
                self.check_index(Axis::Y, a)?;
                self.check_index(Axis::Z, b)?;
                (0..self.shape.0).map(|i| self.get(i, a, b)).collect()
            }
            Axis::Y => {
                self.check_index(Axis::X, a)?;
                self.check_index(Axis::Z, b)?;
                (0..self.shape.1).map(|j| self.get(a, j, b)).collect()
            }
            Axis::Z => {
                self.check_index(Axis::X, a)?;
                self.check_index(Axis::Y, b)?;
                (0..self.shape.2).map(|k| self.get(a, b, k)).collect()
            }
        })
    }

    fn check_index(&self, axis: Axis, index: usize) -> Result<()> {
        let extent = self.extent(axis);
        if index >= extent {
            return Err(Error::IndexOutOfBounds {
                minimum: 0,
                maximum: extent - 1,
                actual: index,
            });
        }
        Ok(())
    }
}

/// A 2D companion to [Array3] used for data planes and coordinate meshes
///
/// Stored flat in the same column-major convention, indexed `(i, j)` with i
/// along the rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Array2 {
    values: Vec<f64>,
    shape: (usize, usize),
}

impl Array2 {
    /// Build an `(ni, nj)` array by evaluating `f` at every index pair
    ///
    /// ```rust
    /// # use htools_fields::Array2;
    /// let mesh = Array2::from_fn(2, 3, |i, j| (i + 10 * j) as f64);
    /// assert_eq!(mesh.get(1, 2), 21.0);
    /// assert_eq!(mesh.shape(), (2, 3));
    /// ```
    pub fn from_fn(ni: usize, nj: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let mut values = Vec::with_capacity(ni * nj);
        for j in 0..nj {
            for i in 0..ni {
                values.push(f(i, j));
            }
        }
        Self {
            values,
            shape: (ni, nj),
        }
    }

    /// Per-axis extents as `(ni, nj)`
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Value at `(i, j)`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i + j * self.shape.0]
    }

    /// The backing values in column-major order
    pub fn flatten(&self) -> &[f64] {
        &self.values
    }

    /// The transposed array, swapping rows for columns
    pub fn transpose(&self) -> Array2 {
        Array2::from_fn(self.shape.1, self.shape.0, |i, j| self.get(j, i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(shape: (usize, usize, usize)) -> Array3 {
        let n = shape.0 * shape.1 * shape.2;
        Array3::from_flat((0..n).map(|v| v as f64).collect(), shape).unwrap()
    }

    #[test]
    fn from_flat_rejects_wrong_length() {
        let result = Array3::from_flat(vec![0.0; 5], (2, 3, 1));
        assert!(matches!(
            result,
            Err(Error::UnexpectedDataLength {
                expected: 6,
                found: 5
            })
        ));
    }

    #[test]
    fn planes_follow_remaining_axes() {
        let data = counting((2, 3, 4));

        let xy = data.plane(Axis::Z, 1).unwrap();
        assert_eq!(xy.shape(), (2, 3));
        assert_eq!(xy.get(1, 2), data.get(1, 2, 1));

        let xz = data.plane(Axis::Y, 0).unwrap();
        assert_eq!(xz.shape(), (2, 4));
        assert_eq!(xz.get(0, 3), data.get(0, 0, 3));

        let yz = data.plane(Axis::X, 1).unwrap();
        assert_eq!(yz.shape(), (3, 4));
        assert_eq!(yz.get(2, 2), data.get(1, 2, 2));
    }

    #[test]
    fn lanes_follow_fixed_axis_order() {
        let data = counting((2, 3, 4));

        assert_eq!(
            data.lane(Axis::X, (2, 3)).unwrap(),
            vec![data.get(0, 2, 3), data.get(1, 2, 3)]
        );
        assert_eq!(
            data.lane(Axis::Y, (1, 2)).unwrap(),
            (0..3).map(|j| data.get(1, j, 2)).collect::<Vec<f64>>()
        );
        assert_eq!(
            data.lane(Axis::Z, (0, 1)).unwrap(),
            (0..4).map(|k| data.get(0, 1, k)).collect::<Vec<f64>>()
        );
    }

    #[test]
    fn out_of_bounds_indices_are_rejected() {
        let data = counting((2, 3, 4));
        assert!(data.plane(Axis::Z, 4).is_err());
        assert!(data.lane(Axis::X, (3, 0)).is_err());
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let mesh = Array2::from_fn(2, 3, |i, j| (i + 10 * j) as f64);
        let t = mesh.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.get(2, 1), mesh.get(1, 2));
    }
}
