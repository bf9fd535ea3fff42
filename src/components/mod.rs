//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and guard surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod protected_layout;
pub mod route_gate;
pub mod stat_card;
