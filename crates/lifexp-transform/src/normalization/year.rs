//! Year-header normalization.

use crate::error::{Result, TransformError};

/// Convert a year column header to an integer.
///
/// Trims surrounding whitespace and parses base-10. Unlike value cleaning,
/// a failure here is a hard error: year headers are assumed well-formed
/// upstream, so a bad one means the input schema is broken.
pub fn clean_year(label: &str) -> Result<i32> {
    label
        .trim()
        .parse::<i32>()
        .map_err(|_| TransformError::MalformedYear {
            header: label.to_string(),
        })
}
