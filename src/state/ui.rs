//! Local UI chrome state (theme).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the form controller so the
//! theme toggle can evolve independently of credential handling.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared across pages and chrome components.
///
/// Provided via context as an `RwSignal` so the theme toggle and any
/// theme-aware component read and write one source of truth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
