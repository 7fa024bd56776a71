use thiserror::Error;

/// Everything that can go wrong while fulfilling a turn.
///
/// The caller never sees these: `Concierge::handle` logs the error and
/// replaces it with the fixed failure reply. The variants only make the
/// logs readable.
#[derive(Debug, Error)]
pub enum ConciergeError {
    #[error("Malformed event: {0}")]
    MalformedEvent(String),

    #[error("Entity extraction failed: {0}")]
    Extraction(String),

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("Malformed generation response: {0}")]
    MalformedResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
