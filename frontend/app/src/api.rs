//! Client for the marketplace backend. All paths are same-origin;
//! endpoints that need the session send the cookie along.

use std::fmt;

use communication::{
    profile::ProfileEnvelope, ApiMessage, Artwork, SessionLoginRequest, UploadResponse,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use web_sys::{FormData, RequestCredentials};

#[derive(Debug)]
pub enum ApiError {
    /// Transport failure, or a response body that was not the expected JSON.
    Net(gloo_net::Error),
    /// The server answered, but not with a success status.
    Status(u16, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Net(why) => write!(f, "network error: {why}"),
            ApiError::Status(code, text) => write!(f, "server answered {code} {text}"),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(why: gloo_net::Error) -> Self {
        ApiError::Net(why)
    }
}

fn checked(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Status(response.status(), response.status_text()))
    }
}

pub fn artworks_url(page: u32) -> String {
    format!("/artworks?page={page}")
}

/// One page of the public listing. An empty array is a normal answer and
/// means the feed is exhausted.
pub async fn fetch_artworks(page: u32) -> Result<Vec<Artwork>, ApiError> {
    let response = checked(Request::get(&artworks_url(page)).send().await?)?;
    Ok(response.json().await?)
}

/// The session user's profile plus their uploads. Fails with a status error
/// when no session cookie is set, which is how the session context finds
/// out nobody is signed in.
pub async fn fetch_profile() -> Result<ProfileEnvelope, ApiError> {
    let response = checked(
        Request::get("/getprofile")
            .credentials(RequestCredentials::Include)
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}

pub async fn update_profile(form: FormData) -> Result<ApiMessage, ApiError> {
    let response = checked(
        Request::post("/updateprofile")
            .credentials(RequestCredentials::Include)
            .body(form)?
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}

pub async fn upload_artwork(form: FormData, id_token: &str) -> Result<UploadResponse, ApiError> {
    let response = checked(
        Request::post("/artworks/upload")
            .header("Authorization", &format!("Bearer {id_token}"))
            .body(form)?
            .send()
            .await?,
    )?;
    Ok(response.json().await?)
}

/// Trade the identity provider's token for a session cookie.
pub async fn session_login(id_token: &str) -> Result<(), ApiError> {
    checked(
        Request::post("/sessionLogin")
            .credentials(RequestCredentials::Include)
            .json(&SessionLoginRequest {
                token: id_token.to_owned(),
            })?
            .send()
            .await?,
    )?;
    Ok(())
}

pub async fn session_logout() -> Result<(), ApiError> {
    checked(
        Request::post("/sessionLogout")
            .credentials(RequestCredentials::Include)
            .send()
            .await?,
    )?;
    Ok(())
}

#[derive(Serialize)]
struct OrderRequest<'a> {
    #[serde(rename = "artworkId")]
    artwork_id: &'a str,
}

pub async fn create_order(artwork_id: &str) -> Result<(), ApiError> {
    checked(
        Request::post("/orders")
            .credentials(RequestCredentials::Include)
            .json(&OrderRequest { artwork_id })?
            .send()
            .await?,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_url_carries_the_page_number() {
        assert_eq!(artworks_url(1), "/artworks?page=1");
        assert_eq!(artworks_url(17), "/artworks?page=17");
    }

    #[test]
    fn order_request_uses_backend_field_spelling() {
        let body = serde_json::to_value(OrderRequest { artwork_id: "a1" }).unwrap();
        assert_eq!(body["artworkId"], "a1");
    }
}
