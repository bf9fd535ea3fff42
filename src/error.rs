//! Error types for authentication, the user directory, and configuration.
//!
//! ERROR HANDLING
//! ==============
//! Only [`AuthError::CredentialRejected`] is ever shown to a person; its
//! message is rendered verbatim on the form. Corrupt persisted state is
//! recovered by clearing storage and never surfaced.

/// Failures of the sign-in / sign-up flow and of session restore.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    CredentialRejected(String),
    #[error("persisted session is corrupt: {0}")]
    CorruptPersistedState(#[from] serde_json::Error),
}

impl AuthError {
    /// Message suitable for the inline form error slot.
    pub fn user_message(&self) -> String {
        match self {
            Self::CredentialRejected(message) => message.clone(),
            Self::CorruptPersistedState(_) => String::new(),
        }
    }
}

/// Failures of the mock user directory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DirectoryError {
    #[error("user not found: {0}")]
    UserNotFound(String),
    #[error("user directory unavailable")]
    Unavailable,
}

impl DirectoryError {
    /// Message shown in the directory's error banner.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "Failed to fetch user. Please try again.",
            Self::Unavailable => "Failed to fetch users. Please try again.",
        }
    }
}

/// Invalid build-time configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid latency value '{0}' (expected milliseconds)")]
    InvalidLatency(String),
}
