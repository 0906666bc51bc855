use super::*;

// =============================================================
// Mode-dependent copy
// =============================================================

#[test]
fn heading_changes_with_mode() {
    assert_eq!(heading(FormMode::SignIn), "Welcome back!");
    assert_eq!(heading(FormMode::SignUp), "Create account");
}

#[test]
fn subheading_changes_with_mode() {
    assert_ne!(subheading(FormMode::SignIn), subheading(FormMode::SignUp));
}

#[test]
fn submit_label_changes_with_mode() {
    assert_eq!(submit_label(FormMode::SignIn), "Sign In");
    assert_eq!(submit_label(FormMode::SignUp), "Create Account");
}

#[test]
fn submit_confirmation_changes_with_mode() {
    assert_ne!(
        submit_confirmation(FormMode::SignIn),
        submit_confirmation(FormMode::SignUp)
    );
}

#[test]
fn footer_copy_invites_the_other_mode() {
    assert_eq!(footer_prompt(FormMode::SignIn), "Don't have an account?");
    assert_eq!(footer_action(FormMode::SignIn), "Sign up here");
    assert_eq!(footer_prompt(FormMode::SignUp), "Already have an account?");
    assert_eq!(footer_action(FormMode::SignUp), "Sign in here");
}

#[test]
fn opposite_is_an_involution() {
    for mode in [FormMode::SignIn, FormMode::SignUp] {
        assert_ne!(opposite(mode), mode);
        assert_eq!(opposite(opposite(mode)), mode);
    }
}

// =============================================================
// Validation messages
// =============================================================

#[test]
fn validation_message_names_the_missing_field() {
    assert_eq!(
        validation_message(ValidationError::MissingField(FieldName::Email)),
        "Enter your email first."
    );
    assert_eq!(
        validation_message(ValidationError::MissingField(FieldName::Name)),
        "Enter your full name first."
    );
    assert_eq!(
        validation_message(ValidationError::MissingField(FieldName::Password)),
        "Enter your password first."
    );
}

#[test]
fn validation_message_covers_every_kind() {
    assert_eq!(
        validation_message(ValidationError::PasswordMismatch),
        "Passwords do not match."
    );
    assert!(!validation_message(ValidationError::InvalidEmail).is_empty());
    assert!(
        !validation_message(ValidationError::MissingField(FieldName::ConfirmPassword)).is_empty()
    );
}

// =============================================================
// Hero panel helpers
// =============================================================

#[test]
fn greeting_covers_the_whole_day() {
    assert_eq!(greeting_for_hour(5), "Good morning");
    assert_eq!(greeting_for_hour(11), "Good morning");
    assert_eq!(greeting_for_hour(12), "Good afternoon");
    assert_eq!(greeting_for_hour(17), "Good afternoon");
    assert_eq!(greeting_for_hour(18), "Good evening");
    assert_eq!(greeting_for_hour(21), "Good evening");
    assert_eq!(greeting_for_hour(23), "Burning the midnight oil?");
    assert_eq!(greeting_for_hour(0), "Burning the midnight oil?");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_hour_defaults_to_midday_off_the_browser() {
    assert_eq!(current_hour(), 12);
}

#[test]
fn hero_quotes_are_distinct() {
    for (i, a) in HERO_QUOTES.iter().enumerate() {
        for b in HERO_QUOTES.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
