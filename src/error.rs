//! Error types for roster and analytics operations.
//!
//! Every variant is recoverable: the menu prints the message and
//! re-prompts. The `Display` text is the message shown to the user.

use thiserror::Error;

/// Errors reported by the roster store, the analytics queries and the
/// menu input boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradebookError {
    /// A student with this id is already on the roster.
    #[error("Student with ID {0} already exists!")]
    DuplicateId(String),

    /// No student with this id is on the roster.
    #[error("Student with ID {0} not found!")]
    NotFound(String),

    /// Score outside the inclusive 0..=100 range (or not a number).
    #[error("Grade must be between 0 and 100!")]
    InvalidRange(f64),

    /// Nothing to report on.
    #[error("{0}")]
    NoData(String),

    /// Score text that does not parse as a number.
    #[error("Please enter a valid number for grade!")]
    InvalidNumber(String),
}

/// Convenience alias used throughout the core.
pub type Result<T> = std::result::Result<T, GradebookError>;
