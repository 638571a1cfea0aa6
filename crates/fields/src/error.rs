//! Result and Error types for htools-fields

use crate::coordinates::{CoordinateSystem, Projection};

/// Type alias for `Result<T, fields::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `htools-fields` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// Coordinate system string is not one of the known names
    #[error("unknown coordinate system \"{0}\"")]
    UnknownCoordinateSystem(String),

    /// Requested projection cannot be applied to the native grid
    #[error("cannot project {native} data onto {target} axes")]
    UnsupportedProjection {
        /// The coordinate system the grid was defined in
        native: CoordinateSystem,
        /// The axes requested for display
        target: Projection,
    },

    /// Slice dims string is not an axis or an ordered pair of distinct axes
    #[error("cannot interpret slice dims \"{0}\"")]
    InvalidDims(String),

    /// Wrong number of fixed indices for the requested slice arity
    #[error("dims \"{dims}\" needs {expected} fixed indices, found {found}")]
    UnexpectedNumberOfIndices {
        /// The dims string requested
        dims: String,
        /// Fixed index count the slice needs
        expected: usize,
        /// Fixed index count provided
        found: usize,
    },

    /// Fixed slice index beyond the axis extent
    #[error("index out of bounds (minimum {minimum:?}, maximum {maximum:?}, actual {actual:?})")]
    IndexOutOfBounds {
        /// Smallest valid index
        minimum: usize,
        /// Largest valid index
        maximum: usize,
        /// The index requested
        actual: usize,
    },

    /// Arithmetic between fields defined on different coordinate grids
    #[error("fields are on different grids (cannot {operation})")]
    IncompatibleGrids {
        /// Name of the attempted operation
        operation: &'static str,
    },

    /// Snapshot file content disagrees with the grid extent
    #[error("unexpected data length (expected {expected:?}, found {found:?})")]
    UnexpectedDataLength {
        /// Number of values the grid calls for
        expected: usize,
        /// Number of values actually read
        found: usize,
    },

    /// Domain edge array length disagrees with cell and ghost counts
    #[error("inconsistent {axis} domain (expected {expected:?} edges, found {found:?})")]
    InconsistentDomain {
        /// Axis the edge array belongs to
        axis: char,
        /// Edge count implied by cells + ghosts
        expected: usize,
        /// Edge count actually given
        found: usize,
    },

    /// Domain edge array with decreasing values
    #[error("domain edges on {axis} axis are not monotonic")]
    UnsortedDomain {
        /// Axis the edge array belongs to
        axis: char,
    },

    /// Grid descriptor with no cells on an axis
    #[error("grid has no cells on {axis} axis")]
    EmptyAxis {
        /// Axis with a zero cell count
        axis: char,
    },
}
