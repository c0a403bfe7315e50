//! Error types for the Mangle library.
//!
//! Load-time problems (missing resource, unreadable resource, oversized
//! resource) are reported through [`LoadStatus`](crate::load::LoadStatus)
//! rather than through this enum; the catalog loader never fails hard.
//! `MangleError` covers the query/iterate tier.

use thiserror::Error;

/// Main error type for Mangle operations.
#[derive(Debug, Error)]
pub enum MangleError {
    /// No prototype with the requested id exists in the catalog.
    /// Long ids are abbreviated for diagnostics.
    #[error("no such fuzzer in the catalog: '{id}'")]
    NotFound {
        id: String,
    },

    /// The prototype has no payload fragments, so no combination
    /// can ever be produced.
    #[error("prototype '{id}' has no payloads")]
    NoPayloads {
        id: String,
    },

    /// Requested output length must be at least 1.
    #[error("invalid fuzzer length {length}, must be >= 1")]
    InvalidLength {
        length: usize,
    },

    /// The combinatorial space does not fit the native-width counter.
    #[error(
        "combination space {payloads}^{length} exceeds the 64-bit counter, \
         use the big-integer fuzzer variant"
    )]
    SpaceTooLarge {
        payloads: usize,
        length: usize,
    },
}

/// Result type alias for Mangle operations.
pub type Result<T> = std::result::Result<T, MangleError>;

/// Shorten an id for error messages, appending `...` when truncated.
pub(crate) fn abbreviate(id: &str, max: usize) -> String {
    if id.chars().count() <= max {
        id.to_string()
    } else {
        let head: String = id.chars().take(max.saturating_sub(3)).collect();
        format!("{head}...")
    }
}
