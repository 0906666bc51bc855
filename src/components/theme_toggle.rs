//! Floating theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Fixed-position button that flips dark mode and persists the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = dark_mode::toggle(ui.get().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };

    view! {
        <button
            class="theme-toggle"
            on:click=on_toggle
            title=move || {
                if ui.get().dark_mode { "Switch to light mode" } else { "Switch to dark mode" }
            }
        >
            {move || if ui.get().dark_mode { "☀" } else { "☾" }}
        </button>
    }
}
