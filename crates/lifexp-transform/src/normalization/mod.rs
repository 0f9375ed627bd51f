//! Field-level normalization helpers used by the transform pipeline.

pub mod numeric;
pub mod year;

pub use numeric::{clean_value, format_numeric, parse_f64};
pub use year::clean_year;
