//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form controls while reading/writing
//! shared state from Leptos context providers or caller-owned signals.

pub mod password_input;
pub mod theme_toggle;
