//! Plain state structs shared through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! State modules hold data and transitions only; rendering reads them through
//! `RwSignal` handles so every transition stays unit testable without a DOM.

pub mod auth_form;
pub mod ui;
