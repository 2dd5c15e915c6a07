//! Validation limits applied by the task store.

use crate::task::domain::{TaskDomainError, TaskTitle};

/// Configuration for task field validation.
///
/// # Examples
///
/// ```
/// use taskboard::task::services::TaskValidationConfig;
///
/// let config = TaskValidationConfig::default();
/// assert_eq!(config.max_title_chars, 200);
///
/// let strict = TaskValidationConfig::strict();
/// assert!(strict.max_title_chars < config.max_title_chars);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskValidationConfig {
    /// Maximum title length in characters.
    pub max_title_chars: usize,
    /// Maximum description length in characters.
    pub max_description_chars: usize,
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self {
            max_title_chars: 200,
            max_description_chars: 2_000,
        }
    }
}

impl TaskValidationConfig {
    /// Creates a strict configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_chars: 80,
            max_description_chars: 500,
        }
    }

    /// Creates a lenient configuration that only rejects blank titles.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_title_chars: usize::MAX,
            max_description_chars: usize::MAX,
        }
    }

    pub(crate) fn check_title(&self, title: &TaskTitle) -> Result<(), TaskDomainError> {
        let actual = title.char_count();
        if actual > self.max_title_chars {
            return Err(TaskDomainError::TitleTooLong {
                max: self.max_title_chars,
                actual,
            });
        }
        Ok(())
    }

    pub(crate) fn check_description(&self, description: &str) -> Result<(), TaskDomainError> {
        let actual = description.chars().count();
        if actual > self.max_description_chars {
            return Err(TaskDomainError::DescriptionTooLong {
                max: self.max_description_chars,
                actual,
            });
        }
        Ok(())
    }
}
