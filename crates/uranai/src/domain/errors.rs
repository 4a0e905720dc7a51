//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Why today's ranking could not be fetched.
///
/// Consumed by [`crate::resolve_ranking`], which swaps in the fallback
/// dataset; it never reaches the command surface.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Parse error: {0}")]
    Parse(String),
}
