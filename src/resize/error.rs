//! Error types for offset resizing

use thiserror::Error;

/// Message shown when nothing resizable is selected
pub const EMPTY_SELECTION_MESSAGE: &str = "Select at least one frame or component first";

/// Message shown for offsets that are not non-negative integers
pub const INVALID_OFFSET_MESSAGE: &str = "Try entering a positive number";

/// Errors that stop a resize before any node is mutated
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResizeError {
    /// No container in the selection
    #[error("{}", EMPTY_SELECTION_MESSAGE)]
    EmptySelection,

    /// Offset input that is not a non-negative integer
    #[error("invalid offset '{input}': {reason}")]
    InvalidOffset { input: String, reason: String },
}

impl ResizeError {
    /// Create an invalid offset error
    pub fn invalid_offset(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOffset {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Short message suitable for an interactive prompt
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptySelection => EMPTY_SELECTION_MESSAGE,
            Self::InvalidOffset { .. } => INVALID_OFFSET_MESSAGE,
        }
    }
}
