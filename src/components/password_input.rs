//! Labelled password field with an in-field reveal toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The password and confirm-password rows are identical apart from their
//! labels and which reveal flag they address, so both render through this
//! component. The caller owns the value and the reveal flag.

#[cfg(test)]
#[path = "password_input_test.rs"]
mod password_input_test;

use leptos::prelude::*;

/// Password field whose masking follows a caller-owned reveal flag.
#[component]
pub fn PasswordInput(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    revealed: Signal<bool>,
    on_input: Callback<String>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="auth-form__field">
            <label class="auth-form__label" for=id>
                {label}
            </label>
            <div class="auth-form__password-wrap">
                <input
                    class="auth-form__input auth-form__input--password"
                    id=id
                    type=move || input_type(revealed.get())
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                />
                <button
                    class="auth-form__reveal"
                    type="button"
                    title=move || reveal_title(revealed.get())
                    on:click=move |_| on_toggle.run(())
                >
                    {move || reveal_glyph(revealed.get())}
                </button>
            </div>
        </div>
    }
}

fn input_type(revealed: bool) -> &'static str {
    if revealed { "text" } else { "password" }
}

fn reveal_glyph(revealed: bool) -> &'static str {
    if revealed { "◉" } else { "◎" }
}

fn reveal_title(revealed: bool) -> &'static str {
    if revealed { "Hide password" } else { "Show password" }
}
