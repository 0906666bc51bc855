//! Dark mode initialization and toggle.
//!
//! Stores `"dark"` or `"light"` in `localStorage` under the well-known
//! `theme` key and mirrors the choice as a `data-theme` attribute on the
//! `<html>` element. When no preference is stored, the system
//! `prefers-color-scheme` query decides the initial mode.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and test paths
//! safely no-op so rendering stays deterministic off the browser.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "theme";

/// Read the stored theme preference, if any.
#[cfg(feature = "hydrate")]
fn stored_preference(window: &web_sys::Window) -> Option<bool> {
    let storage = window.local_storage().ok().flatten()?;
    let value = storage.get_item(STORAGE_KEY).ok().flatten()?;
    Some(value == "dark")
}

/// Whether the system currently prefers a dark color scheme.
#[cfg(feature = "hydrate")]
fn system_prefers_dark(window: &web_sys::Window) -> bool {
    window
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map_or(false, |mq| mq.matches())
}

/// Read the dark mode preference.
///
/// A stored preference wins; otherwise the system preference decides.
/// Always `false` outside a browser environment.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        stored_preference(&window).unwrap_or_else(|| system_prefers_dark(&window))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if next { "dark" } else { "light" });
            }
        }
    }
    next
}
