//! Sign-in/sign-up page with tabbed mode switching and federated login.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It owns the form controller state, surfaces
//! validation outcomes inline, and hands successful submissions to the
//! authentication collaborator seam in `net::api`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::password_input::PasswordInput;
use crate::net::api;
use crate::state::auth_form::{AuthFormState, FieldName, FormMode, RevealField, ValidationError};

/// Quotes rotated on the hero panel while the page is mounted.
const HERO_QUOTES: [&str; 4] = [
    "Streamline your workflow and collaborate seamlessly.",
    "Tools designed for the next generation.",
    "Achieve more than ever before.",
    "Secure, private, and always free.",
];

/// How often the hero quote advances.
#[cfg(feature = "hydrate")]
const QUOTE_INTERVAL_SECS: u64 = 8;

/// Sign-in/sign-up page.
#[component]
pub fn AuthPage() -> impl IntoView {
    let form = RwSignal::new(AuthFormState::default());
    let error = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let quote_index = RwSignal::new(0usize);

    // Advance the hero quote on a fixed cadence until the page unmounts.
    #[cfg(feature = "hydrate")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(QUOTE_INTERVAL_SECS))
                    .await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                quote_index.update(|i| *i = (*i + 1) % HERO_QUOTES.len());
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let mode = move || form.get().mode;
    let is_sign_up = move || mode() == FormMode::SignUp;

    // Mode switches keep entered values but drop stale feedback.
    let select_mode = move |next: FormMode| {
        form.update(|f| f.set_mode(next));
        error.set(String::new());
        info.set(String::new());
    };

    let on_google = move |_| {
        api::initiate_google_login();
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.get().submit() {
            Ok(payload) => {
                error.set(String::new());
                info.set(submit_confirmation(payload.mode).to_owned());
                api::submit_credentials(&payload);
            }
            Err(failure) => {
                info.set(String::new());
                error.set(validation_message(failure));
            }
        }
    };

    let password_value = Signal::derive(move || form.with(|f| f.form.password.clone()));
    let password_revealed = Signal::derive(move || form.with(|f| f.visibility.password_revealed));
    let on_password = Callback::new(move |value: String| {
        form.update(|f| f.update_field(FieldName::Password, value));
    });
    let on_password_toggle =
        Callback::new(move |()| form.update(|f| f.toggle_reveal(RevealField::Password)));

    let confirm_value = Signal::derive(move || form.with(|f| f.form.confirm_password.clone()));
    let confirm_revealed =
        Signal::derive(move || form.with(|f| f.visibility.confirm_password_revealed));
    let on_confirm = Callback::new(move |value: String| {
        form.update(|f| f.update_field(FieldName::ConfirmPassword, value));
    });
    let on_confirm_toggle =
        Callback::new(move |()| form.update(|f| f.toggle_reveal(RevealField::ConfirmPassword)));

    view! {
        <div class="auth-page">
            <div class="auth-page__panel auth-page__panel--form">
                <div class="auth-card">
                    <header class="auth-card__header">
                        <h1>{move || heading(mode())}</h1>
                        <p class="auth-card__subtitle">{move || subheading(mode())}</p>
                    </header>

                    <div class="auth-tabs">
                        <button
                            class="auth-tabs__tab"
                            class=("auth-tabs__tab--active", move || !is_sign_up())
                            on:click=move |_| select_mode(FormMode::SignIn)
                        >
                            "Sign In"
                        </button>
                        <button
                            class="auth-tabs__tab"
                            class=("auth-tabs__tab--active", is_sign_up)
                            on:click=move |_| select_mode(FormMode::SignUp)
                        >
                            "Sign Up"
                        </button>
                    </div>

                    <button class="btn auth-card__google" on:click=on_google>
                        <span class="auth-card__google-mark" aria-hidden="true">"G"</span>
                        "Continue with Google"
                    </button>

                    <div class="auth-card__divider">
                        <span>"or continue with email"</span>
                    </div>

                    <form class="auth-form" on:submit=on_submit>
                        <Show when=is_sign_up>
                            <div class="auth-form__field">
                                <label class="auth-form__label" for="name">
                                    "Full Name"
                                </label>
                                <input
                                    class="auth-form__input"
                                    id="name"
                                    type="text"
                                    placeholder="Enter your full name"
                                    prop:value=move || form.with(|f| f.form.name.clone())
                                    on:input=move |ev| {
                                        form.update(|f| {
                                            f.update_field(FieldName::Name, event_target_value(&ev));
                                        });
                                    }
                                />
                            </div>
                        </Show>

                        <div class="auth-form__field">
                            <label class="auth-form__label" for="email">
                                "Email Address"
                            </label>
                            <input
                                class="auth-form__input"
                                id="email"
                                type="email"
                                placeholder="Enter your email"
                                prop:value=move || form.with(|f| f.form.email.clone())
                                on:input=move |ev| {
                                    form.update(|f| {
                                        f.update_field(FieldName::Email, event_target_value(&ev));
                                    });
                                }
                            />
                        </div>

                        <PasswordInput
                            id="password"
                            label="Password"
                            placeholder="Enter your password"
                            value=password_value
                            revealed=password_revealed
                            on_input=on_password
                            on_toggle=on_password_toggle
                        />

                        <Show when=is_sign_up>
                            <PasswordInput
                                id="confirm-password"
                                label="Confirm Password"
                                placeholder="Confirm your password"
                                value=confirm_value
                                revealed=confirm_revealed
                                on_input=on_confirm
                                on_toggle=on_confirm_toggle
                            />
                        </Show>

                        <Show when=move || !is_sign_up()>
                            <div class="auth-form__forgot">
                                <button class="auth-form__forgot-link" type="button">
                                    "Forgot Password?"
                                </button>
                            </div>
                        </Show>

                        <Show when=move || !error.get().is_empty()>
                            <p class="auth-form__message auth-form__message--error">
                                {move || error.get()}
                            </p>
                        </Show>
                        <Show when=move || !info.get().is_empty()>
                            <p class="auth-form__message">{move || info.get()}</p>
                        </Show>

                        <button class="btn btn--primary auth-form__submit" type="submit">
                            {move || submit_label(mode())}
                        </button>
                    </form>

                    <footer class="auth-card__footer">
                        <p>
                            {move || footer_prompt(mode())}
                            " "
                            <button
                                class="auth-card__footer-link"
                                on:click=move |_| select_mode(opposite(mode()))
                            >
                                {move || footer_action(mode())}
                            </button>
                        </p>
                    </footer>
                </div>
            </div>

            <div class="auth-page__panel auth-page__panel--hero">
                <div class="auth-hero">
                    <p class="auth-hero__greeting">{greeting_for_hour(current_hour())}</p>
                    <h2>"Join the Future of Productivity"</h2>
                    <p class="auth-hero__pitch">
                        "Discover tools designed for the next generation. Streamline your \
                         workflow, collaborate seamlessly, and achieve more than ever before."
                    </p>
                    <p class="auth-hero__quote">
                        {move || HERO_QUOTES[quote_index.get() % HERO_QUOTES.len()]}
                    </p>
                    <div class="auth-hero__badges">
                        <span class="auth-hero__badge">"Secure & Private"</span>
                        <span class="auth-hero__badge">"Always Free"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn heading(mode: FormMode) -> &'static str {
    match mode {
        FormMode::SignIn => "Welcome back!",
        FormMode::SignUp => "Create account",
    }
}

fn subheading(mode: FormMode) -> &'static str {
    match mode {
        FormMode::SignIn => "Sign in to your account to continue",
        FormMode::SignUp => "Join us and start your journey",
    }
}

fn submit_label(mode: FormMode) -> &'static str {
    match mode {
        FormMode::SignIn => "Sign In",
        FormMode::SignUp => "Create Account",
    }
}

fn submit_confirmation(mode: FormMode) -> &'static str {
    match mode {
        FormMode::SignIn => "Signing you in...",
        FormMode::SignUp => "Creating your account...",
    }
}

fn footer_prompt(mode: FormMode) -> &'static str {
    match mode {
        FormMode::SignIn => "Don't have an account?",
        FormMode::SignUp => "Already have an account?",
    }
}

fn footer_action(mode: FormMode) -> &'static str {
    match mode {
        FormMode::SignIn => "Sign up here",
        FormMode::SignUp => "Sign in here",
    }
}

fn opposite(mode: FormMode) -> FormMode {
    match mode {
        FormMode::SignIn => FormMode::SignUp,
        FormMode::SignUp => FormMode::SignIn,
    }
}

/// Human-readable message for the field that failed validation.
fn validation_message(failure: ValidationError) -> String {
    match failure {
        ValidationError::MissingField(field) => {
            format!("Enter your {} first.", field_label(field))
        }
        ValidationError::InvalidEmail => "That email address does not look right.".to_owned(),
        ValidationError::PasswordMismatch => "Passwords do not match.".to_owned(),
    }
}

fn field_label(field: FieldName) -> &'static str {
    match field {
        FieldName::Name => "full name",
        FieldName::Email => "email",
        FieldName::Password => "password",
        FieldName::ConfirmPassword => "password confirmation",
    }
}

/// Greeting shown on the hero panel for the local hour.
fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=11 => "Good morning",
        12..=17 => "Good afternoon",
        18..=21 => "Good evening",
        _ => "Burning the midnight oil?",
    }
}

fn current_hour() -> u32 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().get_hours()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        12
    }
}
