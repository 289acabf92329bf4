//! Error types for host identity input.
//!
//! Detection itself is total and never fails. These errors only come from the
//! adapters that turn raw host data (a JSON navigator snapshot, a `Sec-CH-UA`
//! header) into typed input.

use thiserror::Error;

/// Errors that can occur while reading host identity data.
///
/// # Example
///
/// ```rust
/// use browser_detect::HostIdentity;
///
/// let err = HostIdentity::from_json("{not json").unwrap_err();
/// eprintln!("{} ({})", err, err.description());
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IdentityError {
    /// The navigator snapshot is not valid JSON or has the wrong shape.
    #[error("Invalid identity snapshot: {source}")]
    InvalidSnapshot {
        #[source]
        source: serde_json::Error,
    },

    /// The `Sec-CH-UA` header is not a list of quoted brand strings.
    #[error("Malformed Sec-CH-UA header at byte {position}: {header:?}")]
    MalformedClientHints {
        /// The header value as received.
        header: String,
        /// Byte offset of the first member that failed to parse.
        position: usize,
    },
}

impl IdentityError {
    /// Short human-readable description of the error kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidSnapshot { .. } => "Invalid identity snapshot",
            Self::MalformedClientHints { .. } => "Malformed client hints header",
        }
    }
}

impl From<serde_json::Error> for IdentityError {
    fn from(source: serde_json::Error) -> Self {
        Self::InvalidSnapshot { source }
    }
}
