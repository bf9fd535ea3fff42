//! Mock user directory backing the Users page.
//!
//! Lookups wait for the configured latency and answer from a fixed fixture.

#[cfg(test)]
#[path = "users_api_test.rs"]
mod users_api_test;

use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};

use super::types::{User, UserRole};
use crate::error::DirectoryError;
use crate::util::delay::simulate_latency;

/// The five accounts the directory always returns.
pub fn mock_users() -> Vec<User> {
    vec![
        fixture_user("1", "John", "Doe", UserRole::Admin, (2023, 1, 15, 9, 30), (2023, 4, 20, 14, 20)),
        fixture_user("2", "Jane", "Smith", UserRole::Manager, (2023, 2, 10, 10, 15), (2023, 5, 5, 11, 45)),
        fixture_user("3", "Robert", "Johnson", UserRole::User, (2023, 3, 5, 15, 20), (2023, 4, 25, 9, 10)),
        fixture_user("4", "Emily", "Davis", UserRole::User, (2023, 3, 20, 12, 30), (2023, 5, 10, 16, 40)),
        fixture_user("5", "Michael", "Wilson", UserRole::Manager, (2023, 1, 25, 8, 45), (2023, 4, 15, 13, 15)),
    ]
}

type Stamp = (i32, u32, u32, u32, u32);

fn fixture_user(id: &str, first: &str, last: &str, role: UserRole, created: Stamp, updated: Stamp) -> User {
    User {
        id: id.to_owned(),
        first_name: first.to_owned(),
        last_name: last.to_owned(),
        email: format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
        role,
        avatar: Some(format!("https://i.pravatar.cc/150?img={id}")),
        created_at: timestamp(created),
        updated_at: timestamp(updated),
    }
}

fn timestamp((year, month, day, hour, min): Stamp) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, min, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDirectory {
    latency: Duration,
}

impl UserDirectory {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Fetch every account.
    ///
    /// # Errors
    ///
    /// The fixture directory never fails; the signature matches a real one.
    pub async fn fetch_users(&self) -> Result<Vec<User>, DirectoryError> {
        simulate_latency(self.latency).await;
        Ok(mock_users())
    }

    /// Fetch one account by id.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::UserNotFound`] for unknown ids.
    pub async fn fetch_user_by_id(&self, user_id: &str) -> Result<User, DirectoryError> {
        simulate_latency(self.latency).await;
        mock_users()
            .into_iter()
            .find(|user| user.id == user_id)
            .ok_or_else(|| DirectoryError::UserNotFound(user_id.to_owned()))
    }
}
