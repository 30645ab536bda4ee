//! Thin wrapper around the identity provider's REST token surface.
//! The provider itself is an external collaborator; all this module knows
//! is how to trade an email and password for an id token, which the backend
//! then exchanges for a session cookie.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Base of the provider's account endpoints. Configurable at build time so
/// deployments can point at the real provider; defaults to a same-origin
/// proxy path.
fn endpoint(action: &str) -> String {
    let base = option_env!("IDENTITY_ENDPOINT").unwrap_or("/identity/v1/accounts");
    format!("{base}:{action}")
}

#[derive(Serialize)]
struct PasswordGrant<'a> {
    email: &'a str,
    password: &'a str,
    #[serde(rename = "returnSecureToken")]
    return_secure_token: bool,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(rename = "idToken")]
    id_token: String,
}

async fn token_request(action: &str, email: &str, password: &str) -> Result<String, ApiError> {
    let response = Request::post(&endpoint(action))
        .json(&PasswordGrant {
            email,
            password,
            return_secure_token: true,
        })?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status(), response.status_text()));
    }
    let token: TokenResponse = response.json().await?;
    Ok(token.id_token)
}

pub async fn sign_in(email: &str, password: &str) -> Result<String, ApiError> {
    token_request("signInWithPassword", email, password).await
}

pub async fn sign_up(email: &str, password: &str) -> Result<String, ApiError> {
    token_request("signUp", email, password).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_appends_the_action() {
        assert!(endpoint("signUp").ends_with(":signUp"));
        assert!(endpoint("signInWithPassword").ends_with(":signInWithPassword"));
    }

    #[test]
    fn password_grant_uses_provider_field_spelling() {
        let body = serde_json::to_value(PasswordGrant {
            email: "ada@example.com",
            password: "hunter2",
            return_secure_token: true,
        })
        .unwrap();
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body["returnSecureToken"], true);
    }
}
