//! Account and credential DTOs shared by the auth service, session state,
//! and persisted session record.
//!
//! DESIGN
//! ======
//! Field names serialize as camelCase so the `user` slot written to
//! `localStorage` keeps the same JSON shape the dashboard has always stored.
//! Parsing a persisted record goes through [`User::from_persisted`], which
//! rejects structurally valid JSON that still cannot describe an account.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Access level attached to an account.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    User,
}

impl UserRole {
    /// Human-readable label used by tables and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Manager => "Manager",
            Self::User => "User",
        }
    }
}

/// A dashboard account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Account identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Sign-in email address.
    pub email: String,
    /// Access level.
    pub role: UserRole,
    /// Avatar image URL, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
    /// Last modification time.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Display name combining first and last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }

    /// Two-letter initials for avatar placeholders.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Parse the JSON text of a persisted `user` slot.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CorruptPersistedState`] when the text is not JSON,
    /// does not match the account shape, or names an account without an id
    /// or email.
    pub fn from_persisted(raw: &str) -> Result<Self, AuthError> {
        let user: Self = serde_json::from_str(raw)?;
        if user.id.trim().is_empty() || user.email.trim().is_empty() {
            return Err(AuthError::CorruptPersistedState(serde::de::Error::custom(
                "persisted user is missing id or email",
            )));
        }
        Ok(user)
    }
}

/// Sign-in form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
    /// Accepted and carried through, but it does not change how long the
    /// session is persisted.
    #[serde(default)]
    pub remember_me: bool,
}

/// Sign-up form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCredentials {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Result of a successful sign-in or sign-up: the account plus its token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthGrant {
    pub user: User,
    pub token: String,
}
