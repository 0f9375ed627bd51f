pub mod error;
pub mod normalization;
pub mod pipeline;

pub use error::{Result, TransformError};
pub use normalization::{clean_value, clean_year, format_numeric, parse_f64};
pub use pipeline::transform;
