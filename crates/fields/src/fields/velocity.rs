//! Gas velocity components

// crate modules
use super::{build_parts, component_centering, FieldParts};
use crate::array::Array3;
use crate::coordinates::{Axis, CoordinateSystem, Projection};
use crate::error::Result;
use crate::field::{Field, FieldData};
use crate::output::Output;

// htools modules
use htools_utils::f;

/// One component of the gas velocity (`gasv{x,y,z}<n>.dat`)
///
/// Velocity components are staggered onto cell faces along their own axis
/// and cell-centred along the other two. The coordinate arrays returned by
/// [x()](FieldData::x), [y()](FieldData::y), and [z()](FieldData::z)
/// already account for this.
#[derive(Debug, Clone, PartialEq)]
pub struct Velocity {
    native: CoordinateSystem,
    component: Axis,
    parts: FieldParts,
}

impl Velocity {
    /// Read the `component` velocity snapshot `num` for an output
    pub fn new(output: &Output, component: Axis, num: usize) -> Result<Self> {
        let prefix = f!("gasv{component}");
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

impl FieldData for Velocity {
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

impl Field for Velocity {
    fn native(&self) -> CoordinateSystem {
        self.native
    }

    fn edges(&self, axis: Axis) -> &[f64] {
        self.parts.edges(axis)
    }

    fn field_label(&self, projection: Projection) -> String {
        match projection {
            Projection::Polar => f!("$v_{}$", self.native.axis_symbol(self.component)),
            Projection::Cartesian => f!("$v_{}$", self.component),
        }
    }
}
