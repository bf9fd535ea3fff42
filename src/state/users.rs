//! User directory state for the Users page: list, selection, and search.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use crate::error::DirectoryError;
use crate::net::types::{User, UserRole};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UsersState {
    pub users: Vec<User>,
    pub selected: Option<User>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl UsersState {
    pub fn begin_fetch(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn finish_fetch(&mut self, result: Result<Vec<User>, DirectoryError>) {
        self.is_loading = false;
        match result {
            Ok(users) => self.users = users,
            Err(e) => self.error = Some(e.user_message().to_owned()),
        }
    }

    pub fn finish_fetch_one(&mut self, result: Result<User, DirectoryError>) {
        self.is_loading = false;
        match result {
            Ok(user) => self.selected = Some(user),
            Err(e) => self.error = Some(e.user_message().to_owned()),
        }
    }

    pub fn select(&mut self, user: Option<User>) {
        self.selected = user;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Users whose name or email contains `query` (case-insensitive),
    /// optionally restricted to one role.
    pub fn filtered(&self, query: &str, role: Option<UserRole>) -> Vec<User> {
        filter_users(&self.users, query, role)
    }
}

pub fn filter_users(users: &[User], query: &str, role: Option<UserRole>) -> Vec<User> {
    let needle = query.trim().to_lowercase();
    users
        .iter()
        .filter(|user| role.is_none_or(|r| user.role == r))
        .filter(|user| {
            needle.is_empty()
                || user.full_name().to_lowercase().contains(&needle)
                || user.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Parse the role filter `<select>` value; anything unrecognised means "all".
pub fn parse_role_filter(raw: &str) -> Option<UserRole> {
    match raw {
        "admin" => Some(UserRole::Admin),
        "manager" => Some(UserRole::Manager),
        "user" => Some(UserRole::User),
        _ => None,
    }
}
