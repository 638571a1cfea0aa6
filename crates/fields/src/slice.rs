//! Coordinate-aware slice extraction shared by every field variant
//!
//! The transform matrix is the same for all field kinds, so it lives here
//! once, parametrised by the native coordinate system, the requested
//! projection, and the field's own colorbar label. Variants differ only in
//! where their values sit on the staggered grid, which is already baked into
//! their coordinate arrays by the time a slice is taken.
//!
//! Projection onto cartesian axes uses the standard relations. Cylindrical
//! (φ, r, z) grids:
//!
//! ```text
//!     x = r cos(φ)        y = r sin(φ)        z = z
//! ```
//!
//! Spherical (φ, r, θ) grids:
//!
//! ```text
//!     x = r cos(φ) sin(θ)     y = r sin(φ) sin(θ)     z = r cos(θ)
//! ```
//!
//! A 2D plane holds one of the three native coordinates fixed, so its value
//! is substituted from the slice index before applying the relations; a 1D
//! lane fixes two.
//!
//! 2D coordinate meshes are built from the ghost-trimmed cell-edge arrays,
//! one value longer than the data in each direction, so every data value
//! maps onto the quadrilateral between its four corners (the flat-shading
//! convention plotting libraries expect). The fixed coordinate of a plane is
//! likewise its edge value at the slice index. Staggering does not move the
//! cells, so the meshes are identical for every field variant. 1D lanes plot
//! value against position, so they use the field's own centre coordinates
//! instead, fixed values included.

// crate modules
use crate::array::Array2;
use crate::coordinates::{Axis, CoordinateSystem, Plane, Projection};
use crate::error::{Error, Result};
use crate::field::Field;

// htools modules
use htools_utils::f;

/// A 2D data plane with coordinate meshes and display labels
///
/// `x` and `y` hold the display coordinate of every cell corner in the
/// plane, one value larger than `values` in each direction, so that
/// `values.get(i, j)` fills the quadrilateral with corners `(i, j)` to
/// `(i + 1, j + 1)`. Labels are LaTeX source ready for a plotting front end.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice2D {
    /// Display abscissa of every cell
    pub x: Array2,
    /// Display ordinate of every cell
    pub y: Array2,
    /// Field values over the plane
    pub values: Array2,
    /// Abscissa label
    pub xlabel: String,
    /// Ordinate label
    pub ylabel: String,
    /// Colorbar label
    pub clabel: String,
}

impl Slice2D {
    /// Reorient for display with the axes swapped
    fn transposed(self) -> Slice2D {
        Slice2D {
            x: self.y.transpose(),
            y: self.x.transpose(),
            values: self.values.transpose(),
            xlabel: self.ylabel,
            ylabel: self.xlabel,
            clabel: self.clabel,
        }
    }
}

/// A 1D data lane with its coordinate array and display labels
#[derive(Debug, Clone, PartialEq)]
pub struct Slice1D {
    /// Display coordinate of every cell
    pub x: Vec<f64>,
    /// Field values along the lane
    pub values: Vec<f64>,
    /// Abscissa label
    pub xlabel: String,
    /// Ordinate label, i.e. the field's own label
    pub ylabel: String,
}

pub(crate) fn extract_2d<F: Field + ?Sized>(
    field: &F,
    projection: Projection,
    plane: Plane,
    index: usize,
) -> Result<Slice2D> {
    let canonical = plane.canonical();
    let (a, b) = (canonical.abscissa, canonical.ordinate);
    let normal = canonical.normal();

    // meshes come from the cell edges, one value longer than the data
    let ca = field.edges(a);
    let cb = field.edges(b);
    let (ni, nj) = (ca.len(), cb.len());
    let values = field.data().plane(normal, index)?;

    let native = field.native();
    let (x, y) = match projection {
        Projection::Polar => {
            if native == CoordinateSystem::Cartesian {
                return Err(Error::UnsupportedProjection {
                    native,
                    target: projection,
                });
            }
            (
                Array2::from_fn(ni, nj, |i, _| ca[i]),
                Array2::from_fn(ni, nj, |_, j| cb[j]),
            )
        }
        Projection::Cartesian => match native {
            CoordinateSystem::Cartesian => (
                Array2::from_fn(ni, nj, |i, _| ca[i]),
                Array2::from_fn(ni, nj, |_, j| cb[j]),
            ),
            CoordinateSystem::Cylindrical => cylindrical_plane(field, normal, ca, cb, index),
            CoordinateSystem::Spherical => spherical_plane(field, normal, ca, cb, index),
        },
    };

    let slice = Slice2D {
        x,
        y,
        values,
        xlabel: axis_label(native, projection, a),
        ylabel: axis_label(native, projection, b),
        clabel: field.field_label(projection),
    };

    Ok(if plane.is_reversed() {
        slice.transposed()
    } else {
        slice
    })
}

pub(crate) fn extract_1d<F: Field + ?Sized>(
    field: &F,
    projection: Projection,
    axis: Axis,
    fixed: (usize, usize),
) -> Result<Slice1D> {
    // the lane lookup bounds-checks `fixed` against the remaining axes
    let values = field.data().lane(axis, fixed)?;
    let coords = axis_coords(field, axis);

    let native = field.native();
    let x = match projection {
        Projection::Polar => {
            if native == CoordinateSystem::Cartesian {
                return Err(Error::UnsupportedProjection {
                    native,
                    target: projection,
                });
            }
            coords.to_vec()
        }
        Projection::Cartesian => match native {
            CoordinateSystem::Cartesian => coords.to_vec(),
            CoordinateSystem::Cylindrical => match axis {
                // r is fixed; project the varying azimuth onto x
                Axis::X => {
                    let r = field.y()[fixed.0];
                    coords.iter().map(|phi| r * phi.cos()).collect()
                }
                // φ is fixed; project the varying radius onto y
                Axis::Y => {
                    let phi = field.x()[fixed.0];
                    coords.iter().map(|r| r * phi.sin()).collect()
                }
                Axis::Z => coords.to_vec(),
            },
            CoordinateSystem::Spherical => match axis {
                Axis::X => {
                    let r = field.y()[fixed.0];
                    let theta = field.z()[fixed.1];
                    coords
                        .iter()
                        .map(|phi| r * phi.cos() * theta.sin())
                        .collect()
                }
                Axis::Y => {
                    let phi = field.x()[fixed.0];
                    let theta = field.z()[fixed.1];
                    coords
                        .iter()
                        .map(|r| r * phi.sin() * theta.sin())
                        .collect()
                }
                Axis::Z => {
                    let r = field.y()[fixed.1];
                    coords.iter().map(|theta| r * theta.cos()).collect()
                }
            },
        },
    };

    Ok(Slice1D {
        x,
        values,
        xlabel: axis_label(native, projection, axis),
        ylabel: field.field_label(projection),
    })
}

/// Cartesian meshes for a plane of a cylindrical (φ, r, z) grid
///
/// The relations only involve φ and r, so the z-normal plane projects both
/// display axes while the side-on planes keep z as the ordinate and project
/// the annulus edge onto the remaining cartesian axis.
fn cylindrical_plane<F: Field + ?Sized>(
    field: &F,
    normal: Axis,
    ca: &[f64],
    cb: &[f64],
    index: usize,
) -> (Array2, Array2) {
    let (ni, nj) = (ca.len(), cb.len());
    match normal {
        // plane (φ, r): x = r cos(φ), y = r sin(φ)
        Axis::Z => (
            Array2::from_fn(ni, nj, |i, j| cb[j] * ca[i].cos()),
            Array2::from_fn(ni, nj, |i, j| cb[j] * ca[i].sin()),
        ),
        // plane (φ, z) at fixed r: x = r cos(φ), y = z
        Axis::Y => {
            let r = field.edges(Axis::Y)[index];
            (
                Array2::from_fn(ni, nj, |i, _| r * ca[i].cos()),
                Array2::from_fn(ni, nj, |_, j| cb[j]),
            )
        }
        // plane (r, z) at fixed φ: x = r sin(φ), y = z
        Axis::X => {
            let phi = field.edges(Axis::X)[index];
            (
                Array2::from_fn(ni, nj, |i, _| ca[i] * phi.sin()),
                Array2::from_fn(ni, nj, |_, j| cb[j]),
            )
        }
    }
}

/// Cartesian meshes for a plane of a spherical (φ, r, θ) grid
fn spherical_plane<F: Field + ?Sized>(
    field: &F,
    normal: Axis,
    ca: &[f64],
    cb: &[f64],
    index: usize,
) -> (Array2, Array2) {
    let (ni, nj) = (ca.len(), cb.len());
    match normal {
        // plane (φ, r) at fixed θ: x = r cos(φ) sin(θ), y = r sin(φ) sin(θ)
        Axis::Z => {
            let theta = field.edges(Axis::Z)[index];
            (
                Array2::from_fn(ni, nj, |i, j| cb[j] * ca[i].cos() * theta.sin()),
                Array2::from_fn(ni, nj, |i, j| cb[j] * ca[i].sin() * theta.sin()),
            )
        }
        // plane (φ, θ) at fixed r: x = r cos(φ) sin(θ), y = r cos(θ)
        Axis::Y => {
            let r = field.edges(Axis::Y)[index];
            (
                Array2::from_fn(ni, nj, |i, j| r * ca[i].cos() * cb[j].sin()),
                Array2::from_fn(ni, nj, |_, j| r * cb[j].cos()),
            )
        }
        // plane (r, θ) at fixed φ: x = r sin(φ) sin(θ), y = r cos(θ)
        Axis::X => {
            let phi = field.edges(Axis::X)[index];
            (
                Array2::from_fn(ni, nj, |i, j| ca[i] * phi.sin() * cb[j].sin()),
                Array2::from_fn(ni, nj, |i, j| ca[i] * cb[j].cos()),
            )
        }
    }
}

fn axis_coords<'a, F: Field + ?Sized>(field: &'a F, axis: Axis) -> &'a [f64] {
    match axis {
        Axis::X => field.x(),
        Axis::Y => field.y(),
        Axis::Z => field.z(),
    }
}

/// Display label for a grid axis under a projection
///
/// The polar vocabulary follows the native system (φ, r, z for cylindrical
/// and φ, r, θ for spherical); cartesian display always labels x, y, z.
fn axis_label(native: CoordinateSystem, projection: Projection, axis: Axis) -> String {
    match projection {
        Projection::Polar => f!("${}$", native.axis_symbol(axis)),
        Projection::Cartesian => f!("${}$", axis),
    }
}
