//! Read operations for binary snapshot files
//!
//! Snapshots are a single contiguous sequence of native-endian
//! double-precision floats with no header, one value per grid cell in
//! column-major order. The grid descriptor decides how many values a file
//! must contain, so the length is checked here rather than trusted.

// standard library
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

// crate modules
use crate::error::{Error, Result};

// external crates
use log::debug;

/// Read a flat sequence of `expected` native-endian doubles
///
/// Fails if the file is missing or unreadable, or if its length disagrees
/// with the grid extent. The data source is static simulation output, so
/// there is no retry.
///
/// ```rust, no_run
/// # use htools_fields::reader::read_snapshot;
/// let raw = read_snapshot("/data/run42/outputs/gasdens50.dat", 384 * 128).unwrap();
/// assert_eq!(raw.len(), 384 * 128);
/// ```
pub fn read_snapshot<P: AsRef<Path>>(path: P, expected: usize) -> Result<Vec<f64>> {
    let file = File::open(&path)?;
    let mut bytes = Vec::with_capacity(expected * std::mem::size_of::<f64>());
    BufReader::new(file).read_to_end(&mut bytes)?;

    if bytes.len() != expected * std::mem::size_of::<f64>() {
        // report in whole values, rounding truncated trailing bytes down
        return Err(Error::UnexpectedDataLength {
            expected,
            found: bytes.len() / std::mem::size_of::<f64>(),
        });
    }

    let values: Vec<f64> = bytes
        .chunks_exact(std::mem::size_of::<f64>())
        // chunks_exact guarantees 8-byte slices, so the conversion cannot fail
        .map(|chunk| f64::from_ne_bytes(chunk.try_into().unwrap()))
        .collect();

    debug!(
        "read {} values from {}",
        values.len(),
        path.as_ref().display()
    );
    Ok(values)
}
