//! End-to-end transform of one file.
//!
//! Read the whole file, encode it to its natural number, apply the net
//! shift, decode back, and rewrite the file in place. Every fallible step
//! runs before the write, so a failed invocation never touches the file.

use crate::enumeration::{decode, encode};
use crate::errors::TransformError;
use crate::shift::apply_shift;
use num_bigint::BigInt;
use std::fs;
use std::path::Path;

/// Rewrite `path` in place, shifted by `shift` along the enumeration.
///
/// `verbose` traces the intermediate values to stderr; it has no effect on
/// the result.
pub fn transform_file(path: &Path, shift: &BigInt, verbose: bool) -> Result<(), TransformError> {
    let bytes = fs::read(path).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if verbose {
        eprintln!("read {} byte(s) from '{}'", bytes.len(), path.display());
    }

    let number = encode(&bytes);
    if verbose {
        eprintln!("encoded value: {}", number);
    }

    let shifted = apply_shift(&number, shift)?;
    if verbose {
        eprintln!("shifted value: {}", shifted);
    }

    let result = decode(&shifted);
    if verbose {
        eprintln!("writing {} byte(s)", result.len());
    }

    fs::write(path, &result).map_err(|source| TransformError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}
