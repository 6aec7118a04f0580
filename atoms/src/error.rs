use thiserror::Error;

/// Result alias used across the rescue domain.
pub type Result<T> = std::result::Result<T, RescueError>;

/// Every way a rescue operation can fail.
///
/// A rejected photo is not in here: "no animal detected" is a normal
/// `invalid_image` case, not an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RescueError {
    /// The caller sent something unusable. Nothing was attempted.
    #[error("{0}")]
    Validation(String),

    /// The requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A store or the classifier failed. The message is surfaced to the caller.
    #[error("{0}")]
    Collaborator(String),
}

impl RescueError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn collaborator(message: impl Into<String>) -> Self {
        Self::Collaborator(message.into())
    }

    /// Client faults are validation and not-found; everything else is ours.
    pub fn is_client_fault(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::NotFound(_))
    }
}
