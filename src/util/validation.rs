//! Field validation for the sign-in and sign-up forms.
//!
//! Messages are shown under the offending input. Validation runs before
//! anything reaches the session container, so an invalid form never starts
//! an attempt.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::net::types::{LoginCredentials, RegisterCredentials};

pub const LOGIN_PASSWORD_MIN_LEN: usize = 6;
pub const REGISTER_PASSWORD_MIN_LEN: usize = 8;
const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Per-field errors for the sign-in form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Per-field errors for the sign-up form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
    pub terms: Option<&'static str>,
}

impl RegisterErrors {
    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Raw sign-up form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

/// `local@domain.tld`, case-insensitive, TLD of two or more letters.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty()
        && local.chars().all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
        && !host.is_empty()
        && host.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        && tld.len() >= 2
        && tld.chars().all(|c| c.is_ascii_alphabetic())
}

fn email_error(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Invalid email address")
    } else {
        None
    }
}

/// At least one lowercase, uppercase, digit, and special; nothing else.
pub fn is_strong_password(password: &str) -> bool {
    let allowed = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));
    allowed
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

/// Validate the sign-in form.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_login(email: &str, password: &str, remember_me: bool) -> Result<LoginCredentials, LoginErrors> {
    let email = email.trim();
    let errors = LoginErrors {
        email: email_error(email),
        password: if password.is_empty() {
            Some("Password is required")
        } else if password.chars().count() < LOGIN_PASSWORD_MIN_LEN {
            Some("Password must be at least 6 characters")
        } else {
            None
        },
    };
    if errors != LoginErrors::default() {
        return Err(errors);
    }
    Ok(LoginCredentials { email: email.to_owned(), password: password.to_owned(), remember_me })
}

/// Validate the sign-up form.
///
/// # Errors
///
/// Returns the per-field messages when any field is invalid.
pub fn validate_register(form: &RegisterForm) -> Result<RegisterCredentials, RegisterErrors> {
    let first_name = form.first_name.trim();
    let last_name = form.last_name.trim();
    let email = form.email.trim();
    let errors = RegisterErrors {
        first_name: first_name.is_empty().then_some("First name is required"),
        last_name: last_name.is_empty().then_some("Last name is required"),
        email: email_error(email),
        password: if form.password.is_empty() {
            Some("Password is required")
        } else if form.password.chars().count() < REGISTER_PASSWORD_MIN_LEN {
            Some("Password must be at least 8 characters")
        } else if !is_strong_password(&form.password) {
            Some(
                "Password must include at least one uppercase letter, one lowercase letter, one number, and one special character",
            )
        } else {
            None
        },
        confirm_password: if form.confirm_password.is_empty() {
            Some("Please confirm your password")
        } else if form.confirm_password != form.password {
            Some("The passwords do not match")
        } else {
            None
        },
        terms: (!form.accept_terms).then_some("You must accept the Terms of Service and Privacy Policy"),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(RegisterCredentials {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
    })
}
