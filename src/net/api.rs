//! Seams for the out-of-scope authentication collaborators.
//!
//! Client-side (hydrate): serialize and log the hand-off, matching the
//! observed submit behavior of the product today.
//! Server-side (SSR): stubs that do nothing, since these hand-offs are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here returns errors to callers; once validation has passed the
//! hand-off is fire-and-forget, and any failure a future real collaborator
//! reports is relayed to the UI as an opaque message, not interpreted here.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::state::auth_form::CredentialPayload;

/// Hand a validated credential payload to the authentication collaborator.
///
/// The confirmation field never reaches this seam; `submit` drops it during
/// normalization.
pub fn submit_credentials(payload: &CredentialPayload) {
    #[cfg(feature = "hydrate")]
    {
        match serde_json::to_string(payload) {
            Ok(body) => log::info!("credentials submitted: {body}"),
            Err(e) => log::warn!("credential payload did not serialize: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
    }
}

/// Kick off the federated Google sign-in flow.
///
/// Zero-argument by contract: the controller passes nothing along.
pub fn initiate_google_login() {
    #[cfg(feature = "hydrate")]
    {
        log::info!("google login requested");
    }
}
