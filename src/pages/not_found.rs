//! 404 screen for unmatched routes.

use leptos::prelude::*;

/// Fallback page shown when no route matches.
///
/// Logs the offending path on mount so broken links surface in the console,
/// then offers a way back home.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(path) = window.location().pathname() {
                log::warn!("no route matches {path}, rendering 404");
            }
        }
    }

    view! {
        <div class="not-found-page">
            <div class="not-found-page__card">
                <h1>"404"</h1>
                <p class="not-found-page__subtitle">"Oops! Page not found"</p>
                <a class="not-found-page__home" href="/">
                    "Go back home"
                </a>
            </div>
        </div>
    }
}
