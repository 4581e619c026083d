//! Error types

use thiserror::Error;

/// Cursor geometry contract violation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Offset past the end of the buffer. Out-of-range offsets would
    /// silently produce wrong geometry, so they are rejected instead of
    /// clamped.
    #[error("offset {offset} out of range for buffer of {len} characters")]
    OffsetOutOfRange { offset: usize, len: usize },
}

/// What a failing completion provider reports.
///
/// Never escapes the engine: `CompletionEngine::collect_candidates` logs it
/// and moves on to the next provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Provider-reported failure message
    #[error("provider failed: {0}")]
    Failed(String),

    /// Underlying cause forwarded by the provider
    #[error("provider failed: {0}")]
    Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ProviderError {
    /// Convenience for providers that fail with a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}
