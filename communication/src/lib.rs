use serde::{Deserialize, Serialize};

pub mod profile;

pub use profile::UserProfile;

/// Display-only; the client never does arithmetic on it.
pub type Price = f64;

/// One artwork record as the listing endpoint returns it.
///
/// Field names on the wire are the backend's camelCase spelling.
/// `created_at` is opaque to the client: it is carried through untouched and
/// never parsed or compared.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Artwork {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "artistID")]
    pub artist_id: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blurhash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

/// Body for `POST /sessionLogin`: the identity provider's token,
/// to be exchanged for a session cookie.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SessionLoginRequest {
    pub token: String,
}

/// Success/error envelope the session and profile endpoints answer with.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /artworks/upload`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct UploadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_with_all_fields_parses() {
        let json = r#"{
            "id": "a1",
            "title": "Sunset",
            "description": "Oil on canvas",
            "imageUrl": "https://img.example/a1.jpg",
            "artistID": "artist-7",
            "createdAt": {"seconds": 1700000000, "nanos": 0},
            "blurhash": "LEHV6nWB2yk8pyo0adR*.7kCMdnj",
            "price": 120.0
        }"#;
        let art: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(art.id, "a1");
        assert_eq!(art.description.as_deref(), Some("Oil on canvas"));
        assert_eq!(art.artist_id, "artist-7");
        assert_eq!(art.price, Some(120.0));
        // The timestamp is opaque; whatever shape the backend sends survives.
        assert!(art.created_at.is_object());
    }

    #[test]
    fn artwork_without_optional_fields_parses() {
        let json = r#"{
            "id": "a2",
            "title": "Untitled",
            "imageUrl": "https://img.example/a2.jpg",
            "artistID": "artist-9"
        }"#;
        let art: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(art.description, None);
        assert_eq!(art.blurhash, None);
        assert_eq!(art.price, None);
        assert!(art.created_at.is_null());
    }

    #[test]
    fn created_at_accepts_string_timestamps() {
        let json = r#"{
            "id": "a3",
            "title": "Dawn",
            "imageUrl": "https://img.example/a3.jpg",
            "artistID": "artist-1",
            "createdAt": "2024-05-01T10:00:00Z"
        }"#;
        let art: Artwork = serde_json::from_str(json).unwrap();
        assert_eq!(art.created_at, serde_json::json!("2024-05-01T10:00:00Z"));
    }

    #[test]
    fn listing_page_decodes_as_array() {
        let body = br#"[
            {"id": "a1", "title": "One", "imageUrl": "u1", "artistID": "x"},
            {"id": "a2", "title": "Two", "imageUrl": "u2", "artistID": "x"}
        ]"#;
        let page: Vec<Artwork> = serde_json::from_slice(body).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[1].title, "Two");
    }

    #[test]
    fn empty_listing_page_decodes() {
        let page: Vec<Artwork> = serde_json::from_slice(b"[]").unwrap();
        assert!(page.is_empty());
    }

    #[test]
    fn session_login_request_encodes_token_field() {
        let value = serde_json::to_value(SessionLoginRequest {
            token: "id-token".into(),
        })
        .unwrap();
        assert_eq!(value["token"], "id-token");
    }
}
