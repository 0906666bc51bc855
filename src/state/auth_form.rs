//! Sign-in/sign-up form state and submission validation.
//!
//! DESIGN
//! ======
//! The controller owns the active mode, the raw field values, and the reveal
//! flags as plain data so pages stay thin and every transition is unit
//! testable. Validation runs only at submission time; the payload handed to
//! the authentication collaborator never includes the confirmation field.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use serde::Serialize;

/// Which of the two form variants is currently active.
///
/// Switching modes changes which fields are rendered and required; it never
/// clears values the user has already entered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormMode {
    #[default]
    SignIn,
    SignUp,
}

/// Form fields addressable through [`AuthFormState::update_field`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldName {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// Raw field values exactly as typed. Nothing is validated on keystrokes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Reveal flags for the two maskable fields.
///
/// Purely presentational; validation never consults these.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityState {
    pub password_revealed: bool,
    pub confirm_password_revealed: bool,
}

/// The maskable fields a reveal toggle can address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealField {
    Password,
    ConfirmPassword,
}

/// Expected, user-correctable submission failures.
///
/// These are ordinary return values, never panics; malformed input is a
/// normal outcome of `submit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field for the current mode is empty.
    MissingField(FieldName),
    /// The email value does not look like an address.
    InvalidEmail,
    /// Sign-up password and confirmation differ.
    PasswordMismatch,
}

/// Normalized payload handed to the authentication collaborator.
///
/// `name` is only present in sign-up mode. The confirmation value is checked
/// during validation and then dropped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CredentialPayload {
    pub mode: FormMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Controller state for the sign-in/sign-up screen.
///
/// Pages hold this in an `RwSignal` and route every interaction through the
/// methods below.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: FormMode,
    pub form: CredentialForm,
    pub visibility: VisibilityState,
}

impl AuthFormState {
    /// Switch the active mode. Entered field values are retained.
    pub fn set_mode(&mut self, mode: FormMode) {
        self.mode = mode;
    }

    /// Set one field's raw value. Validation is deferred to [`Self::submit`].
    pub fn update_field(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.form.name = value,
            FieldName::Email => self.form.email = value,
            FieldName::Password => self.form.password = value,
            FieldName::ConfirmPassword => self.form.confirm_password = value,
        }
    }

    /// Flip the reveal flag for `which`.
    pub fn toggle_reveal(&mut self, which: RevealField) {
        match which {
            RevealField::Password => {
                self.visibility.password_revealed = !self.visibility.password_revealed;
            }
            RevealField::ConfirmPassword => {
                self.visibility.confirm_password_revealed = !self.visibility.confirm_password_revealed;
            }
        }
    }

    /// Validate the current values and build the collaborator payload.
    ///
    /// Checks run in field order and the first failure wins: email present,
    /// email plausible, password present, then (sign-up only) name present
    /// and password confirmation matching. Name and email are trimmed on the
    /// way out; passwords are forwarded verbatim.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a [`ValidationError`]. Nothing is
    /// mutated on either path, and the collaborator is never contacted from
    /// here.
    pub fn submit(&self) -> Result<CredentialPayload, ValidationError> {
        let email = self.form.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField(FieldName::Email));
        }
        if !plausible_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if self.form.password.is_empty() {
            return Err(ValidationError::MissingField(FieldName::Password));
        }

        let name = match self.mode {
            FormMode::SignIn => None,
            FormMode::SignUp => {
                let name = self.form.name.trim();
                if name.is_empty() {
                    return Err(ValidationError::MissingField(FieldName::Name));
                }
                if self.form.password != self.form.confirm_password {
                    return Err(ValidationError::PasswordMismatch);
                }
                Some(name.to_owned())
            }
        };

        Ok(CredentialPayload {
            mode: self.mode,
            name,
            email: email.to_owned(),
            password: self.form.password.clone(),
        })
    }
}

/// Minimal plausibility check: a non-empty local part, one `@`, and a dotted
/// domain with no empty labels. Anything stricter belongs to the
/// authentication collaborator.
fn plausible_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    domain.contains('.') && !domain.split('.').any(str::is_empty)
}
