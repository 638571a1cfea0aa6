//! Simulation output descriptors, field snapshots, and slice extraction
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod array;
mod coordinates;
mod error;
mod field;
mod output;
mod slice;

pub mod fields;
pub mod reader;

// inline the important modules for a nice public API
#[doc(inline)]
pub use output::Output;

#[doc(inline)]
pub use fields::{Density, Energy, MagneticField, Velocity};

#[doc(inline)]
pub use field::{DerivedField, Field, FieldData, SliceData};

#[doc(inline)]
pub use slice::{Slice1D, Slice2D};

#[doc(inline)]
pub use coordinates::{Axis, CoordinateSystem, Dims, Plane, Projection};

#[doc(inline)]
pub use array::{Array2, Array3};

#[doc(inline)]
pub use error::{Error, Result};
