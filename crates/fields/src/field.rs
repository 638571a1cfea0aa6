//! The common field contract and arithmetic between same-grid fields

// crate modules
use crate::array::Array3;
use crate::coordinates::{Axis, CoordinateSystem, Dims, Plane, Projection};
use crate::error::{Error, Result};
use crate::slice::{self, Slice1D, Slice2D};

/// Access to a field's values and the coordinates they are defined at
///
/// This is the data half of the field contract: every loaded field, and every
/// result of field arithmetic, exposes its raw flat values, the shaped 3D
/// view, and the per-axis coordinate arrays. Coordinate lengths always match
/// the data extents.
///
/// Arithmetic is provided for all implementors. Two fields combine only when
/// their coordinate grids are identical, compared exactly rather than with a
/// tolerance, since same-run snapshots are byte-identical on disk. Mixing
/// staggered grids (say, density with a face-centred velocity component) is
/// rejected.
pub trait FieldData {
    /// Coordinates the values are defined at along x
    fn x(&self) -> &[f64];

    /// Coordinates the values are defined at along y
    fn y(&self) -> &[f64];

    /// Coordinates the values are defined at along z
    fn z(&self) -> &[f64];

    /// The raw, unshaped values in file order
    fn raw(&self) -> &[f64];

    /// The values shaped to the grid
    fn data(&self) -> &Array3;

    /// Elementwise sum of two same-grid fields
    fn try_add<R: FieldData + ?Sized>(&self, rhs: &R) -> Result<DerivedField>
    where
        Self: Sized,
    {
        combine(self, rhs, "add", |a, b| a + b)
    }

    /// Elementwise difference of two same-grid fields
    fn try_sub<R: FieldData + ?Sized>(&self, rhs: &R) -> Result<DerivedField>
    where
        Self: Sized,
    {
        combine(self, rhs, "subtract", |a, b| a - b)
    }

    /// Elementwise product of two same-grid fields
    fn try_mul<R: FieldData + ?Sized>(&self, rhs: &R) -> Result<DerivedField>
    where
        Self: Sized,
    {
        combine(self, rhs, "multiply", |a, b| a * b)
    }

    /// Elementwise quotient of two same-grid fields
    fn try_div<R: FieldData + ?Sized>(&self, rhs: &R) -> Result<DerivedField>
    where
        Self: Sized,
    {
        combine(self, rhs, "divide", |a, b| a / b)
    }

    /// Raise every value to `exponent`
    ///
    /// A scalar exponent cannot disagree with the grid, so this is
    /// infallible.
    fn powf(&self, exponent: f64) -> DerivedField
    where
        Self: Sized,
    {
        let raw: Vec<f64> = self.raw().iter().map(|v| v.powf(exponent)).collect();
        // the shape is unchanged, so the reshape cannot fail
        let data = Array3::from_flat(raw.clone(), self.data().shape()).unwrap();
        DerivedField {
            xdata: self.x().to_vec(),
            ydata: self.y().to_vec(),
            zdata: self.z().to_vec(),
            raw,
            data,
        }
    }
}

/// The plottable field contract
///
/// Adds what slice extraction needs on top of [FieldData]: the native
/// coordinate system and the field's own colorbar label. The slice
/// operations themselves are provided, shared by every variant.
pub trait Field: FieldData {
    /// The coordinate system the field's grid was defined in
    fn native(&self) -> CoordinateSystem;

    /// Ghost-trimmed cell-edge coordinates along one axis
    ///
    /// One value longer than the matching centre array and independent of
    /// the field's staggering. Plane meshes are built from these so that
    /// every data value maps onto the quadrilateral between its corners.
    fn edges(&self, axis: Axis) -> &[f64];

    /// Colorbar label as LaTeX source, e.g. `$v_\phi$` under [Projection::Polar]
    fn field_label(&self, projection: Projection) -> String;

    /// Extract a 2D plane with coordinate meshes and display labels
    ///
    /// `index` fixes the axis perpendicular to the plane. A reversed plane
    /// (`yx`, `zx`, `zy`) selects the same data transposed for display.
    fn slice_2d(&self, projection: Projection, plane: Plane, index: usize) -> Result<Slice2D>
    where
        Self: Sized,
    {
        slice::extract_2d(self, projection, plane, index)
    }

    /// Extract a 1D lane with its coordinate array and display labels
    ///
    /// `fixed` gives the indices held constant on the two remaining axes, in
    /// natural axis order.
    fn slice_1d(
        &self,
        projection: Projection,
        axis: Axis,
        fixed: (usize, usize),
    ) -> Result<Slice1D>
    where
        Self: Sized,
    {
        slice::extract_1d(self, projection, axis, fixed)
    }

    /// String-driven slice dispatcher for plotting front ends
    ///
    /// `csys` selects the display axes (`"polar"` or `"cartesian"`), `dims`
    /// selects a lane (`"x"`, `"y"`, `"z"`) or a plane (`"xy"`, `"zx"`, ...),
    /// and `indices` holds the fixed indices the slice arity calls for: one
    /// for a plane, two for a lane.
    fn plot(&self, csys: &str, dims: &str, indices: &[usize]) -> Result<SliceData>
    where
        Self: Sized,
    {
        let projection: Projection = csys.parse()?;

        match dims.parse::<Dims>()? {
            Dims::Plane(plane) => {
                check_indices(dims, 1, indices)?;
                Ok(SliceData::TwoD(self.slice_2d(
                    projection,
                    plane,
                    indices[0],
                )?))
            }
            Dims::Lane(axis) => {
                check_indices(dims, 2, indices)?;
                Ok(SliceData::OneD(self.slice_1d(
                    projection,
                    axis,
                    (indices[0], indices[1]),
                )?))
            }
        }
    }
}

/// Renderable slice data of either arity
#[derive(Debug, Clone, PartialEq)]
pub enum SliceData {
    /// A lane through the grid
    OneD(Slice1D),
    /// A plane through the grid
    TwoD(Slice2D),
}

/// The result of arithmetic between fields
///
/// A minimal field-like value: it carries the combined values and the shared
/// coordinate arrays, supports further arithmetic, but has no snapshot
/// identity and no labels, so it cannot be sliced for plotting directly.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedField {
    xdata: Vec<f64>,
    ydata: Vec<f64>,
    zdata: Vec<f64>,
    raw: Vec<f64>,
    data: Array3,
}

impl FieldData for DerivedField {
    fn x(&self) -> &[f64] {
        &self.xdata
    }

    fn y(&self) -> &[f64] {
        &self.ydata
    }

    fn z(&self) -> &[f64] {
        &self.zdata
    }

    fn raw(&self) -> &[f64] {
        &self.raw
    }

    fn data(&self) -> &Array3 {
        &self.data
    }
}

fn combine<L, R>(
    lhs: &L,
    rhs: &R,
    operation: &'static str,
    op: impl Fn(f64, f64) -> f64,
) -> Result<DerivedField>
where
    L: FieldData + ?Sized,
    R: FieldData + ?Sized,
{
    if lhs.x() != rhs.x() || lhs.y() != rhs.y() || lhs.z() != rhs.z() {
        return Err(Error::IncompatibleGrids { operation });
    }

    let raw: Vec<f64> = lhs
        .raw()
        .iter()
        .zip(rhs.raw())
        .map(|(a, b)| op(*a, *b))
        .collect();
    // equal grids imply equal shapes, so the reshape cannot fail
    let data = Array3::from_flat(raw.clone(), lhs.data().shape()).unwrap();

    Ok(DerivedField {
        xdata: lhs.x().to_vec(),
        ydata: lhs.y().to_vec(),
        zdata: lhs.z().to_vec(),
        raw,
        data,
    })
}

fn check_indices(dims: &str, expected: usize, indices: &[usize]) -> Result<()> {
    if indices.len() != expected {
        return Err(Error::UnexpectedNumberOfIndices {
            dims: dims.to_string(),
            expected,
            found: indices.len(),
        });
    }
    Ok(())
}
