use thiserror::Error;

use lifexp_model::ModelError;

#[derive(Debug, Error)]
pub enum TransformError {
    /// Composite-key split failed (wrong field count).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A year header did not parse as an integer after trimming.
    #[error("malformed year header: '{header}'")]
    MalformedYear { header: String },
}

pub type Result<T> = std::result::Result<T, TransformError>;
