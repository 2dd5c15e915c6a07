//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or editing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the configured character limit.
    #[error("task title is {actual} characters, maximum is {max}")]
    TitleTooLong {
        /// Configured maximum.
        max: usize,
        /// Observed length in characters.
        actual: usize,
    },

    /// The task description exceeds the configured character limit.
    #[error("task description is {actual} characters, maximum is {max}")]
    DescriptionTooLong {
        /// Configured maximum.
        max: usize,
        /// Observed length in characters.
        actual: usize,
    },
}

/// Error returned while parsing priority codes from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}, expected one of High, Med, Low")]
pub struct ParsePriorityError(pub String);
