//! Application shell: routing, theme bootstrap, and shared context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides the `UiState` context, applies the persisted theme before
//! the user interacts, and mounts the two routes: the auth screen and the
//! 404 fallback.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::theme_toggle::ThemeToggle;
use crate::pages::auth::AuthPage;
use crate::pages::not_found::NotFoundPage;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML document shell used by the SSR integration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Root component: provides shared state and mounts the router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Apply the stored theme preference before first interaction.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/sos-client.css" />
        <Title text="SOS Assistant" />
        <Router>
            <ThemeToggle />
            <main class="app">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("") view=AuthPage />
                </Routes>
            </main>
        </Router>
    }
}
