//! Mock service layer and shared data types.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth_api` simulates sign-in and sign-up, `users_api` serves the user
//! directory fixture, and `types` defines the records both exchange with
//! state and storage.

pub mod auth_api;
pub mod types;
pub mod users_api;
