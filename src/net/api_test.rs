use super::*;
use crate::state::auth_form::FormMode;

fn sign_up_payload() -> CredentialPayload {
    CredentialPayload {
        mode: FormMode::SignUp,
        name: Some("Jane".to_owned()),
        email: "jane@example.com".to_owned(),
        password: "x".to_owned(),
    }
}

#[test]
fn payload_serializes_mode_as_lowercase_tag() {
    let value = serde_json::to_value(sign_up_payload()).expect("json");
    assert_eq!(value["mode"], "signup");
    assert_eq!(value["name"], "Jane");
    assert_eq!(value["email"], "jane@example.com");
    assert_eq!(value["password"], "x");
}

#[test]
fn payload_never_contains_confirmation_field() {
    let value = serde_json::to_value(sign_up_payload()).expect("json");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 4);
    assert!(object.get("confirm_password").is_none());
    assert!(object.get("confirmPassword").is_none());
}

#[test]
fn sign_in_payload_omits_name_entirely() {
    let payload = CredentialPayload {
        mode: FormMode::SignIn,
        name: None,
        email: "jane@example.com".to_owned(),
        password: "x".to_owned(),
    };
    let value = serde_json::to_value(payload).expect("json");
    assert_eq!(value["mode"], "signin");
    assert!(value.as_object().expect("object").get("name").is_none());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn collaborator_stubs_are_noops_off_the_browser() {
    submit_credentials(&sign_up_payload());
    initiate_google_login();
}
