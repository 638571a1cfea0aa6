//! Concrete field variants and their staggering rules
//!
//! Every variant follows the same lifecycle: read the raw snapshot, build
//! the coordinate arrays its values are defined at, reshape to the grid.
//! What distinguishes the variants is *where* on the staggered grid their
//! values live:
//!
//! | Field           | x axis | y axis | z axis |
//! | --------------- | ------ | ------ | ------ |
//! | [Density]       | cell   | cell   | cell   |
//! | [Energy]        | cell   | cell   | cell   |
//! | [Velocity]      | face along its component, cell elsewhere |||
//! | [MagneticField] | face along its component, cell elsewhere |||
//!
//! Cell-centred coordinates are edge midpoints; face-centred coordinates use
//! the lower edges directly, dropping the final edge. Ghost cells are then
//! trimmed from both ends of each axis that carries them.

// Split into subfiles for development, but anything important is re-exported
mod density;
mod energy;
mod magnetic;
mod velocity;

pub use density::Density;
pub use energy::Energy;
pub use magnetic::MagneticField;
pub use velocity::Velocity;

// crate modules
use crate::array::Array3;
use crate::coordinates::Axis;
use crate::error::Result;
use crate::output::Output;
use crate::reader::read_snapshot;

// htools modules
use htools_utils::SliceExt;

/// Where a field's values sit along one axis of the staggered grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Centering {
    /// At cell centres, i.e. edge midpoints
    Cell,
    /// At the lower cell faces, i.e. the left edges
    Face,
}

/// The arrays every variant carries once constructed
///
/// The edge arrays are the ghost-trimmed cell edges, one value longer than
/// the matching centre array. They are the same for every variant since
/// staggering moves the centres, not the cells.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FieldParts {
    pub(crate) xdata: Vec<f64>,
    pub(crate) ydata: Vec<f64>,
    pub(crate) zdata: Vec<f64>,
    pub(crate) xedges: Vec<f64>,
    pub(crate) yedges: Vec<f64>,
    pub(crate) zedges: Vec<f64>,
    pub(crate) raw: Vec<f64>,
    pub(crate) data: Array3,
}

impl FieldParts {
    pub(crate) fn edges(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.xedges,
            Axis::Y => &self.yedges,
            Axis::Z => &self.zedges,
        }
    }
}

/// Load and shape one snapshot file against a validated descriptor
///
/// Construction is atomic: any failure here leaves no partial field behind.
pub(crate) fn build_parts(
    output: &Output,
    prefix: &str,
    num: usize,
    centering: [Centering; 3],
) -> Result<FieldParts> {
    output.validate()?;

    let raw = read_snapshot(output.snapshot_path(prefix, num), output.n_cells())?;
    let data = Array3::from_flat(raw.clone(), output.shape())?;

    let [x, y, z] = [Axis::X, Axis::Y, Axis::Z];
    Ok(FieldParts {
        xdata: axis_coordinates(output, x, centering[0]),
        ydata: axis_coordinates(output, y, centering[1]),
        zdata: axis_coordinates(output, z, centering[2]),
        xedges: trimmed_edges(output, x),
        yedges: trimmed_edges(output, y),
        zedges: trimmed_edges(output, z),
        raw,
        data,
    })
}

/// Coordinates a quantity is defined at along one axis, ghost cells trimmed
///
/// Both centerings produce exactly `n` coordinates for an axis of `n` cells:
/// an edge array of `n + 2*ngh + 1` values yields `n + 2*ngh` midpoints or
/// lower edges, and trimming `ngh` from each end leaves `n`.
fn axis_coordinates(output: &Output, axis: Axis, centering: Centering) -> Vec<f64> {
    let edges = output.axis_edges(axis);
    let coords = match centering {
        Centering::Cell => edges.midpoints(),
        Centering::Face => edges.lower_edges(),
    };

    let ngh = output.axis_ghosts(axis);
    if ngh > 0 {
        coords[ngh..coords.len() - ngh].to_vec()
    } else {
        coords
    }
}

/// Cell-edge coordinates along one axis with ghost cells trimmed
///
/// An axis of `n` cells keeps `n + 1` edges. Unlike the centre arrays this
/// does not depend on centering.
fn trimmed_edges(output: &Output, axis: Axis) -> Vec<f64> {
    let edges = output.axis_edges(axis);
    let ngh = output.axis_ghosts(axis);
    edges[ngh..edges.len() - ngh].to_vec()
}

/// Centering per axis for a vector component: face along itself, cell elsewhere
pub(crate) fn component_centering(component: Axis) -> [Centering; 3] {
    let mut centering = [Centering::Cell; 3];
    match component {
        Axis::X => centering[0] = Centering::Face,
        Axis::Y => centering[1] = Centering::Face,
        Axis::Z => centering[2] = Centering::Face,
    }
    centering
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::CoordinateSystem;

    fn descriptor() -> Output {
        Output {
            nx: 2,
            ny: 3,
            nz: 1,
            nghx: 1,
            nghy: 3,
            nghz: 1,
            xdomain: vec![-3.14, -1.57, 0.0, 1.57, 3.14],
            ydomain: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0],
            zdomain: vec![-0.75, -0.25, 0.25, 0.75],
            coordinate_system: CoordinateSystem::Cylindrical,
            ..Default::default()
        }
    }

    #[test]
    fn cell_centred_coordinates_are_trimmed_midpoints() {
        let output = descriptor();
        assert_eq!(
            axis_coordinates(&output, Axis::X, Centering::Cell),
            vec![-0.785, 0.785]
        );
        assert_eq!(
            axis_coordinates(&output, Axis::Y, Centering::Cell),
            vec![4.5, 5.5, 6.5]
        );
        assert_eq!(
            axis_coordinates(&output, Axis::Z, Centering::Cell),
            vec![0.0]
        );
    }

    #[test]
    fn face_centred_coordinates_are_trimmed_lower_edges() {
        let output = descriptor();
        assert_eq!(
            axis_coordinates(&output, Axis::X, Centering::Face),
            vec![-1.57, 0.0]
        );
        assert_eq!(
            axis_coordinates(&output, Axis::Z, Centering::Face),
            vec![-0.25]
        );
    }

    #[test]
    fn collapsed_axes_fall_back_to_the_single_midpoint() {
        let output = Output {
            nghz: 0,
            zdomain: vec![0.0, 0.0],
            ..descriptor()
        };
        assert_eq!(
            axis_coordinates(&output, Axis::Z, Centering::Cell),
            vec![0.0]
        );
        assert_eq!(
            axis_coordinates(&output, Axis::Z, Centering::Face),
            vec![0.0]
        );
    }

    #[test]
    fn edge_arrays_are_trimmed_but_not_staggered() {
        let output = descriptor();
        assert_eq!(trimmed_edges(&output, Axis::X), vec![-1.57, 0.0, 1.57]);
        assert_eq!(
            trimmed_edges(&output, Axis::Y),
            vec![4.0, 5.0, 6.0, 7.0]
        );
        assert_eq!(trimmed_edges(&output, Axis::Z), vec![-0.25, 0.25]);
    }

    #[test]
    fn components_stagger_only_their_own_axis() {
        assert_eq!(
            component_centering(Axis::Y),
            [Centering::Cell, Centering::Face, Centering::Cell]
        );
    }
}
