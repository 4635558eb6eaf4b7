//! Data Transfer Objects - request/response types for the API.
//!
//! Field names follow the JSON the browser clients already speak:
//! camelCase keys and `_id` for the post identifier.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::date;

/// A blog post as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub category: String,
    pub date: DateTime<Utc>,
    pub read_time: String,
    pub author: String,
    pub image: String,
    pub tags: Vec<String>,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/posts` and `PUT /api/posts/{id}`.
///
/// Every field is optional on the wire; the server decides what a create
/// requires. Unknown fields such as a client-computed `slug` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(
        default,
        deserialize_with = "date::deserialize_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Query string of `GET /api/posts`.
///
/// Values stay as raw strings so that a malformed `limit` or an unknown
/// `sort` degrade to defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListPostsQuery {
    pub fn featured_only(&self) -> bool {
        self.featured.as_deref() == Some("true")
    }

    pub fn limit(&self) -> Option<u64> {
        self.limit.as_deref().and_then(|l| l.trim().parse().ok())
    }
}

/// Query string of `GET /api/posts/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Request to obtain an admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Response containing an admin token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_accepts_admin_form_body() {
        let raw = r#"{
            "title": "Marketing for Developers",
            "category": "marketing",
            "readTime": "7 min",
            "excerpt": "Reach your audience",
            "tags": ["SEO", "Growth"],
            "image": "https://placehold.co/600x400",
            "featured": false,
            "author": "Edwin Tsembegano",
            "date": "2025-02-01T10:30:00.000Z",
            "slug": "ignored-by-the-server"
        }"#;

        let payload: PostPayload = serde_json::from_str(raw).unwrap();
        assert_eq!(payload.read_time.as_deref(), Some("7 min"));
        assert_eq!(payload.tags.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            payload.date.unwrap().to_rfc3339(),
            "2025-02-01T10:30:00+00:00"
        );
    }

    #[test]
    fn test_payload_accepts_bare_date() {
        let payload: PostPayload = serde_json::from_str(r#"{"date":"2025-01-15"}"#).unwrap();
        assert_eq!(
            payload.date.unwrap().to_rfc3339(),
            "2025-01-15T00:00:00+00:00"
        );
    }

    #[test]
    fn test_post_response_uses_underscore_id() {
        let now = Utc::now();
        let post = PostResponse {
            id: "abc".to_string(),
            title: "T".to_string(),
            slug: "t".to_string(),
            excerpt: "E".to_string(),
            category: "tips".to_string(),
            date: now,
            read_time: "1 min".to_string(),
            author: "A".to_string(),
            image: "http://x".to_string(),
            tags: vec![],
            featured: false,
            content: None,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["_id"], "abc");
        assert_eq!(json["readTime"], "1 min");
        assert!(json.get("content").is_none());
        assert!(json.get("updatedAt").is_some());
    }

    #[test]
    fn test_list_query_helpers() {
        let query = ListPostsQuery {
            featured: Some("true".to_string()),
            limit: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(query.featured_only());
        assert_eq!(query.limit(), None);

        let query = ListPostsQuery {
            featured: Some("yes".to_string()),
            limit: Some("3".to_string()),
            ..Default::default()
        };
        assert!(!query.featured_only());
        assert_eq!(query.limit(), Some(3));
    }
}
