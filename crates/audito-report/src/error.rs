use thiserror::Error;

/// Failure inside the document encoder. Never caused by audit content.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("font setup failed: {0}")]
    Font(String),

    #[error("document encoding failed: {0}")]
    Encoding(String),
}
