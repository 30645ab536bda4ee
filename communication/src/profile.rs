use serde::{Deserialize, Serialize};

use crate::Artwork;

/// A user's public profile as `/getprofile` and `/profile/view` return it.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, Default)]
pub struct UserProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: String,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(
        rename = "backgroundUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub background_url: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Envelope of `GET /getprofile`: the session user plus their uploads.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct ProfileEnvelope {
    pub user: UserProfile,
    #[serde(default)]
    pub artworks: Vec<Artwork>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_with_missing_artworks_parses() {
        let json = r#"{"user": {"name": "Ada", "email": "ada@example.com"}}"#;
        let envelope: ProfileEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.user.name, "Ada");
        assert!(envelope.artworks.is_empty());
        assert!(envelope.user.roles.is_empty());
    }

    #[test]
    fn profile_roles_and_urls_parse() {
        let json = r#"{
            "name": "Ada",
            "email": "ada@example.com",
            "dateOfBirth": "1990-01-31",
            "avatarUrl": "https://img.example/ada.png",
            "roles": ["artist", "printshop"]
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.date_of_birth, "1990-01-31");
        assert_eq!(profile.avatar_url.as_deref(), Some("https://img.example/ada.png"));
        assert_eq!(profile.roles, vec!["artist", "printshop"]);
        assert_eq!(profile.background_url, None);
    }
}
