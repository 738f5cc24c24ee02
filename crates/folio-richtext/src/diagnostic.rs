//! Non-fatal rendering diagnostics.
//!
//! Rendering never fails. Anything the renderer had to degrade is reported
//! here and returned with the result, leaving it to the caller whether to log.

use std::fmt;

/// Something the renderer degraded instead of rendering as authored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// The field value matched no known shape and was rendered as a string.
    UnrecognizedContent { found: &'static str },
    /// A child entry was not a node object and was skipped.
    MalformedNode { key: String, found: &'static str },
    /// The tree nested deeper than the configured limit; the subtree at `key` was dropped.
    DepthExceeded { key: String, max_depth: usize },
}

impl Diagnostic {
    /// Emit the diagnostic through `tracing`.
    pub fn log(&self) {
        match self {
            Self::UnrecognizedContent { found } => {
                tracing::warn!(found, "Unknown content format, rendering as string");
            }
            Self::MalformedNode { key, found } => {
                tracing::debug!(key = %key, found, "Skipping malformed rich text node");
            }
            Self::DepthExceeded { key, max_depth } => {
                tracing::warn!(key = %key, max_depth, "Rich text nesting too deep, truncating");
            }
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedContent { found } => {
                write!(f, "unknown content format ({found}), rendered as string")
            }
            Self::MalformedNode { key, found } => {
                write!(f, "skipped malformed node at {key} ({found})")
            }
            Self::DepthExceeded { key, max_depth } => {
                write!(f, "nesting exceeds {max_depth} levels at {key}, subtree dropped")
            }
        }
    }
}
