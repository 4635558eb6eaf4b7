//! Standardized API response envelope.
//!
//! Every body carries `success`. Successful bodies add `data` (and `count`
//! for lists) or a `message`; failures carry `error`.

use serde::{Deserialize, Serialize};

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            message: None,
            error: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// A list body with its `count`.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            count: Some(items.len()),
            ..Self::ok(items)
        }
    }
}

impl ApiResponse<()> {
    /// A body with only a confirmation message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: None,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }
}

/// Failure body: `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_includes_count() {
        let body = serde_json::to_value(ApiResponse::list(vec![1, 2, 3])).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 3);
        assert_eq!(body["data"], serde_json::json!([1, 2, 3]));
        assert!(body.get("error").is_none());
    }

    #[test]
    fn test_message_only_body() {
        let body = serde_json::to_value(ApiResponse::message("Post deleted successfully")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"success": true, "message": "Post deleted successfully"})
        );
    }

    #[test]
    fn test_error_body_parses_as_failed_envelope() {
        let raw = serde_json::to_string(&ErrorResponse::new("Post not found")).unwrap();
        let parsed: ApiResponse<Vec<u8>> = serde_json::from_str(&raw).unwrap();
        assert!(!parsed.success);
        assert!(parsed.data.is_none());
        assert_eq!(parsed.error.as_deref(), Some("Post not found"));
    }
}
