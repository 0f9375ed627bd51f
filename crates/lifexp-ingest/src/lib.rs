pub mod error;
pub mod tsv;

pub use error::{IngestError, Result};
pub use tsv::read_tsv_table;
