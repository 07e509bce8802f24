//! Error types for WIT generation.

use protowit_schema::FullName;
use thiserror::Error;

/// Error type for WIT generation operations.
///
/// Generation itself is infallible once underway: unrecognized field kinds
/// degrade to the `unknown` sentinel and dangling references are logged
/// and skipped. The only failures are at the run boundary, when the root
/// entity cannot serve as a starting record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// Root entity not present in the schema set.
    #[error("root entity '{name}' not found in schema set")]
    UnknownRoot {
        /// The missing root name.
        name: FullName,
    },

    /// Root entity resolved to an enum rather than a message.
    #[error("root entity '{name}' is not a message")]
    NotAMessage {
        /// The offending root name.
        name: FullName,
    },
}
