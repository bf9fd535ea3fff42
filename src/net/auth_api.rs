//! Mock sign-in / sign-up service.
//!
//! There is no backend: each call waits for the configured latency and then
//! fabricates an account and a constant token. Any well-formed submission
//! is accepted.
//!
//! ERROR HANDLING
//! ==============
//! The only failure is [`AuthError::CredentialRejected`], produced when the
//! service is built with [`MockAuthService::rejecting`] (used to exercise
//! the failure path). Its message reaches the form unchanged.

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use std::time::Duration;

use chrono::Utc;

use super::types::{AuthGrant, LoginCredentials, RegisterCredentials, User, UserRole};
use crate::config::AppConfig;
use crate::error::AuthError;
use crate::util::delay::simulate_latency;

/// Token issued for every mocked session.
pub const MOCK_TOKEN: &str = "mock-jwt-token";

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const REGISTER_FAILED_MESSAGE: &str = "Registration failed. Please try again.";

/// Identity fabricated for every sign-in; only the email comes from the form.
const MOCK_LOGIN_ID: &str = "1";
const MOCK_LOGIN_FIRST_NAME: &str = "John";
const MOCK_LOGIN_LAST_NAME: &str = "Doe";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockAuthService {
    latency: Duration,
    rejecting: bool,
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new(AppConfig::default().auth_latency)
    }
}

impl MockAuthService {
    pub fn new(latency: Duration) -> Self {
        Self { latency, rejecting: false }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.auth_latency)
    }

    /// A service that rejects every submission.
    pub fn rejecting(latency: Duration) -> Self {
        Self { latency, rejecting: true }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Sign in. The account is always the admin "John Doe" carrying the
    /// submitted email. `remember_me` has no effect on the result.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialRejected`] when the service is rejecting.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthGrant, AuthError> {
        simulate_latency(self.latency).await;
        if self.rejecting {
            return Err(AuthError::CredentialRejected(LOGIN_FAILED_MESSAGE.to_owned()));
        }
        log::debug!("auth: login accepted (remember_me={})", credentials.remember_me);

        let now = Utc::now();
        let user = User {
            id: MOCK_LOGIN_ID.to_owned(),
            first_name: MOCK_LOGIN_FIRST_NAME.to_owned(),
            last_name: MOCK_LOGIN_LAST_NAME.to_owned(),
            email: credentials.email.trim().to_owned(),
            role: UserRole::Admin,
            avatar: None,
            created_at: now,
            updated_at: now,
        };
        Ok(AuthGrant { user, token: MOCK_TOKEN.to_owned() })
    }

    /// Create an account from the submitted names and email with the
    /// default role.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::CredentialRejected`] when the service is rejecting.
    pub async fn register(&self, credentials: &RegisterCredentials) -> Result<AuthGrant, AuthError> {
        simulate_latency(self.latency).await;
        if self.rejecting {
            return Err(AuthError::CredentialRejected(REGISTER_FAILED_MESSAGE.to_owned()));
        }

        let now = Utc::now();
        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            first_name: credentials.first_name.trim().to_owned(),
            last_name: credentials.last_name.trim().to_owned(),
            email: credentials.email.trim().to_owned(),
            role: UserRole::default(),
            avatar: None,
            created_at: now,
            updated_at: now,
        };
        Ok(AuthGrant { user, token: MOCK_TOKEN.to_owned() })
    }
}
