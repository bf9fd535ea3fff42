//! Utility helpers shared across UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, the document
//! element) from page and state logic so the latter stays testable natively.

pub mod auth;
pub mod dark_mode;
pub mod delay;
pub mod session_store;
pub mod validation;
