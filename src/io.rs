//! Reading, writing and rendering the dense binary value format.
//!
//! An input file is a headerless sequence of native-endian `f64` values, so
//! the element count is simply the file length divided by [`ELEMENT_WIDTH`].
//! None of this touches the communication layer; rank 0 is the only caller.

use std::fs;
use std::mem;
use std::path::Path;

use itertools::Itertools;

use crate::types::{Error, Result};

/// Width in bytes of one stored element.
pub const ELEMENT_WIDTH: usize = mem::size_of::<f64>();

/// Byte length of the file at `path`.
pub fn size_of<P: AsRef<Path>>(path: P) -> Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Read `count` values from the file at `path`.
///
/// Trailing bytes that do not form a whole element are ignored, but a file
/// holding fewer than `count` whole elements is an error rather than a
/// silently short result.
pub fn read_all<P: AsRef<Path>>(path: P, count: usize) -> Result<Vec<f64>> {
    let bytes = fs::read(path)?;

    let available = bytes.len() / ELEMENT_WIDTH;
    if available < count {
        return Err(Error::Truncated {
            expected: count,
            available,
        });
    }

    let values = bytes
        .chunks_exact(ELEMENT_WIDTH)
        .take(count)
        .map(|chunk| f64::from_ne_bytes(chunk.try_into().unwrap()))
        .collect();
    Ok(values)
}

/// Write `values` to `path` in the binary input format.
pub fn write_all<P: AsRef<Path>>(path: P, values: &[f64]) -> Result<()> {
    let mut bytes = Vec::with_capacity(values.len() * ELEMENT_WIDTH);
    for value in values {
        bytes.extend_from_slice(&value.to_ne_bytes());
    }
    fs::write(path, bytes)?;
    Ok(())
}

/// Render values as a brace-wrapped, space-separated list with two decimals,
/// e.g. `{ 1.00 2.00 3.00 4.00 }`.
pub fn render(values: &[f64]) -> String {
    if values.is_empty() {
        return String::from("{ }");
    }
    format!(
        "{{ {} }}",
        values.iter().map(|value| format!("{value:.2}")).join(" ")
    )
}
