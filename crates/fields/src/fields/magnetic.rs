//! Magnetic field components

// crate modules
use super::{build_parts, component_centering, FieldParts};
use crate::array::Array3;
use crate::coordinates::{Axis, CoordinateSystem, Projection};
use crate::error::Result;
use crate::field::{Field, FieldData};
use crate::output::Output;

// htools modules
use htools_utils::f;

/// One component of the magnetic field (`b{x,y,z}<n>.dat`)
///
/// Staggered exactly like [Velocity](super::Velocity), face-centred along
/// its own axis and cell-centred along the others. Snapshots only exist for
/// MHD runs, so [new()](MagneticField::new) for a hydro-only output fails
/// with [Error::IOError](crate::Error::IOError).
#[derive(Debug, Clone, PartialEq)]
pub struct MagneticField {
    native: CoordinateSystem,
    component: Axis,
    parts: FieldParts,
}

impl MagneticField {
    /// Read the `component` magnetic field snapshot `num` for an output
    pub fn new(output: &Output, component: Axis, num: usize) -> Result<Self> {
        let prefix = f!("b{component}");
        let parts = build_parts(output, &prefix, num, component_centering(component))?;
        Ok(Self {
            native: output.coordinate_system,
            component,
            parts,
        })
    }

    /// Axis this component lies along
    pub fn component(&self) -> Axis {
        self.component
    }
}

impl FieldData for MagneticField {
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

impl Field for MagneticField {
    fn native(&self) -> CoordinateSystem {
        self.native
    }

    fn edges(&self, axis: Axis) -> &[f64] {
        self.parts.edges(axis)
    }

    fn field_label(&self, projection: Projection) -> String {
        match projection {
            Projection::Polar => f!("$B_{}$", self.native.axis_symbol(self.component)),
            Projection::Cartesian => f!("$B_{}$", self.component),
        }
    }
}
