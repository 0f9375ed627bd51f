use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    /// A composite key did not split into exactly four fields.
    #[error("malformed composite key at row {row}: expected 4 fields, found {found} in '{key}'")]
    MalformedKey {
        row: usize,
        found: usize,
        key: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;
