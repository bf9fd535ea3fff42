//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `theme`, `users`) so components depend
//! on small focused models held in `RwSignal` contexts.

pub mod auth;
pub mod theme;
pub mod users;
