//! Simulation output descriptor and field factory

// standard library
use std::path::PathBuf;

// crate modules
use crate::coordinates::{Axis, CoordinateSystem};
use crate::error::{Error, Result};
use crate::fields::{Density, Energy, MagneticField, Velocity};

// htools modules
use htools_utils::{f, SliceExt, ValueExt};

/// Describes one simulation run's grid and snapshot location
///
/// The descriptor holds everything the surrounding tooling has parsed from
/// the run metadata (`variables.par`, domain files): cell counts, ghost-cell
/// counts, the cell-edge coordinates per axis, and the coordinate system the
/// grid was defined in. Fields are public so the struct can be filled in
/// directly; consistency is checked by [validate](Output::validate), which
/// every field constructor calls before touching a file.
///
/// Domain edge arrays include ghost cells, so each must hold
/// `n + 2*ngh + 1` monotonic values for its axis.
///
/// ```rust
/// # use htools_fields::Output;
/// let output = Output {
///     nx: 4,
///     ny: 3,
///     nz: 1,
///     nghy: 3,
///     xdomain: vec![-3.14, -1.57, 0.0, 1.57, 3.14],
///     ydomain: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
///     zdomain: vec![0.0, 0.0],
///     coordinate_system: "cylindrical".parse().unwrap(),
///     ..Default::default()
/// };
/// assert!(output.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    /// Directory containing the snapshot files
    pub directory: PathBuf,
    /// Number of cells along x
    pub nx: usize,
    /// Number of cells along y
    pub ny: usize,
    /// Number of cells along z
    pub nz: usize,
    /// Ghost cells at each end of the x axis
    pub nghx: usize,
    /// Ghost cells at each end of the y axis
    pub nghy: usize,
    /// Ghost cells at each end of the z axis
    pub nghz: usize,
    /// Cell-edge coordinates along x, ghost cells included
    pub xdomain: Vec<f64>,
    /// Cell-edge coordinates along y, ghost cells included
    pub ydomain: Vec<f64>,
    /// Cell-edge coordinates along z, ghost cells included
    pub zdomain: Vec<f64>,
    /// Coordinate system the grid was defined in
    pub coordinate_system: CoordinateSystem,
}

impl Output {
    /// Check the descriptor for internal consistency
    ///
    /// Each axis must have at least one cell and an edge array of
    /// `n + 2*ngh + 1` monotonically non-decreasing values. Collapsed axes
    /// in 2D runs (a single pair of identical edges) pass.
    pub fn validate(&self) -> Result<()> {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let cells = self.axis_cells(axis);
            let edges = self.axis_edges(axis);
            let expected = cells + 2 * self.axis_ghosts(axis) + 1;

            if cells == 0 {
                return Err(Error::EmptyAxis {
                    axis: axis.as_char(),
                });
            }
            if edges.len() != expected {
                return Err(Error::InconsistentDomain {
                    axis: axis.as_char(),
                    expected,
                    found: edges.len(),
                });
            }
            if !edges.is_monotonic() {
                return Err(Error::UnsortedDomain {
                    axis: axis.as_char(),
                });
            }
        }
        Ok(())
    }

    /// Resolve the path of snapshot `num` for a field file prefix
    ///
    /// ```rust
    /// # use htools_fields::Output;
    /// # use std::path::PathBuf;
    /// let output = Output {
    ///     directory: "/data/run42/outputs".into(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     output.snapshot_path("gasdens", 50),
    ///     PathBuf::from("/data/run42/outputs/gasdens50.dat")
    /// );
    /// ```
    pub fn snapshot_path(&self, prefix: &str, num: usize) -> PathBuf {
        self.directory.join(f!("{prefix}{num}.dat"))
    }

    /// Load the gas density field for snapshot `num`
    pub fn density(&self, num: usize) -> Result<Density> {
        Density::new(self, num)
    }

    /// Load the gas energy field for snapshot `num`
    pub fn energy(&self, num: usize) -> Result<Energy> {
        Energy::new(self, num)
    }

    /// Load one component of the gas velocity field for snapshot `num`
    pub fn velocity(&self, component: Axis, num: usize) -> Result<Velocity> {
        Velocity::new(self, component, num)
    }

    /// Load one component of the magnetic field for snapshot `num`
    pub fn magnetic_field(&self, component: Axis, num: usize) -> Result<MagneticField> {
        MagneticField::new(self, component, num)
    }

    /// Grid shape as `(nx, ny, nz)`
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Total number of cells, i.e. values per snapshot file
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    pub(crate) fn axis_cells(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nx,
            Axis::Y => self.ny,
            Axis::Z => self.nz,
        }
    }

    pub(crate) fn axis_edges(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.xdomain,
            Axis::Y => &self.ydomain,
            Axis::Z => &self.zdomain,
        }
    }

    pub(crate) fn axis_ghosts(&self, axis: Axis) -> usize {
        match axis {
            Axis::X => self.nghx,
            Axis::Y => self.nghy,
            Axis::Z => self.nghz,
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            nx: 1,
            ny: 1,
            nz: 1,
            nghx: 0,
            nghy: 0,
            nghz: 0,
            xdomain: vec![0.0, 1.0],
            ydomain: vec![0.0, 1.0],
            zdomain: vec![0.0, 1.0],
            coordinate_system: CoordinateSystem::Cartesian,
        }
    }
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let head = f!(
            " > Output {} [{}, {} axes]",
            self.directory.display(),
            self.coordinate_system,
            self.coordinate_system.axes_name()
        );
        let mut s = f!("{}\n{}\n{}\n", "-".repeat(40), head, "-".repeat(40));

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let edges = self.axis_edges(axis);
            if edges.is_empty() {
                continue;
            }
            s += &f!(
                "{}domain : {:>12} - {:>12} ({} cells, {} ghosts)\n",
                axis,
                edges[0].sci(3, 2),
                edges[edges.len() - 1].sci(3, 2),
                self.axis_cells(axis),
                self.axis_ghosts(axis)
            );
        }
        write!(f, "{}", s)
    }
}
