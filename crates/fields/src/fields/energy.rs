//! The gas energy field

// crate modules
use super::{build_parts, Centering, FieldParts};
use crate::array::Array3;
use crate::coordinates::{Axis, CoordinateSystem, Projection};
use crate::error::Result;
use crate::field::{Field, FieldData};
use crate::output::Output;

/// A gas energy snapshot (`gasenergy<n>.dat`)
///
/// One scalar per cell, centred on all three axes like [Density](super::Density);
/// only the colorbar label differs. Depending on the equation of state this
/// holds the internal energy or the sound speed, which is the caller's
/// business to know.
#[derive(Debug, Clone, PartialEq)]
pub struct Energy {
    native: CoordinateSystem,
    parts: FieldParts,
}

impl Energy {
    /// Read the energy snapshot `num` for an output
    pub fn new(output: &Output, num: usize) -> Result<Self> {
        let parts = build_parts(output, "gasenergy", num, [Centering::Cell; 3])?;
        Ok(Self {
            native: output.coordinate_system,
            parts,
        })
    }
}

impl FieldData for Energy {
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

impl Field for Energy {
    fn native(&self) -> CoordinateSystem {
        self.native
    }

    fn edges(&self, axis: Axis) -> &[f64] {
        self.parts.edges(axis)
    }

    fn field_label(&self, _projection: Projection) -> String {
        "$e$".to_string()
    }
}
