//! The gas density field

// crate modules
use super::{build_parts, Centering, FieldParts};
use crate::array::Array3;
use crate::coordinates::{Axis, CoordinateSystem, Projection};
use crate::error::Result;
use crate::field::{Field, FieldData};
use crate::output::Output;

/// A gas density snapshot (`gasdens<n>.dat`)
///
/// One scalar per cell, centred on all three axes. In 2D runs this is the
/// surface density, which is what the colorbar label Σ_g reflects.
///
/// ```rust, no_run
/// # use htools_fields::{FieldData, Output};
/// # fn demo(output: &Output) -> htools_fields::Result<()> {
/// let density = output.density(50)?;
/// assert_eq!(density.raw().len(), output.n_cells());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Density {
    native: CoordinateSystem,
    parts: FieldParts,
}

impl Density {
    /// Read the density snapshot `num` for an output
    pub fn new(output: &Output, num: usize) -> Result<Self> {
        let parts = build_parts(output, "gasdens", num, [Centering::Cell; 3])?;
        Ok(Self {
            native: output.coordinate_system,
            parts,
        })
    }
}

impl FieldData for Density {
    fn x(&self) -> &[f64] {
        &self.parts.xdata
    }

    fn y(&self) -> &[f64] {
        &self.parts.ydata
    }

    fn z(&self) -> &[f64] {
        &self.parts.zdata
    }

    fn raw(&self) -> &[f64] {
        &self.parts.raw
    }

    fn data(&self) -> &Array3 {
        &self.parts.data
    }
}

impl Field for Density {
    fn native(&self) -> CoordinateSystem {
        self.native
    }

    fn edges(&self, axis: Axis) -> &[f64] {
        self.parts.edges(axis)
    }

    fn field_label(&self, _projection: Projection) -> String {
        r"$\mathit{\Sigma}_\mathrm{g}$".to_string()
    }
}
