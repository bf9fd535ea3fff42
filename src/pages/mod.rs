//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps its body in `RouteGate` and delegates chrome to
//! `components`.

pub mod analytics;
pub mod dashboard;
pub mod landing;
pub mod login;
pub mod public;
pub mod register;
pub mod settings;
pub mod users;
