//! Error types for descriptor names.

use thiserror::Error;

/// Error type for fully-qualified name parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// Name is empty.
    #[error("fully-qualified name is empty")]
    Empty,

    /// A dot-separated segment is empty.
    #[error("empty segment in fully-qualified name '{name}'")]
    EmptySegment {
        /// The offending name.
        name: String,
    },

    /// A segment is not a valid identifier.
    #[error("invalid segment '{segment}' in fully-qualified name '{name}'")]
    InvalidSegment {
        /// The offending name.
        name: String,
        /// The invalid segment.
        segment: String,
    },
}
