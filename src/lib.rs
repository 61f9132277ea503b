mod enumeration;
mod errors;
mod shift;
mod transform;

pub use enumeration::{decode, encode, size_class_start};
pub use errors::{ParseShiftError, ShiftError, TransformError};
pub use shift::{apply_shift, parse_shift};
pub use transform::transform_file;

#[cfg(test)]
mod tests;
