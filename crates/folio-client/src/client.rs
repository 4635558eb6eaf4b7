//! Blog API HTTP client.

use reqwest::{Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;

use folio_shared::dto::{AuthResponse, ListPostsQuery, LoginRequest, PostPayload, PostResponse};
use folio_shared::{ApiResponse, ErrorResponse};

use crate::error::ClientError;

/// Async client for the `/api` routes.
///
/// Write calls carry the bearer token obtained from [`login`](Self::login)
/// or supplied through [`with_token`](Self::with_token); reads never do.
#[derive(Clone)]
pub struct BlogApiClient {
    base_url: Url,
    token: Option<String>,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for BlogApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlogApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "<REDACTED>"))
            .finish()
    }
}

impl BlogApiClient {
    /// `base_url` is the server origin, e.g. `http://localhost:5000`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{base_url} cannot be a base URL"
            )));
        }

        Ok(Self {
            base_url,
            token: None,
            http_client: reqwest::Client::new(),
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Use your own `reqwest::Client`.
    pub fn with_custom_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = client;
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// `/api/` followed by `segments`, each percent-encoded as one segment.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("api").extend(segments);
        }
        url
    }

    fn request(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        self.http_client.request(method, self.url(segments))
    }

    fn authorized(&self, method: Method, segments: &[&str]) -> RequestBuilder {
        let builder = self.request(method, segments);
        match self.token.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiResponse<T>, ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        decode_envelope(status, &body)
    }

    async fn send_data<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ClientError> {
        self.send::<T>(builder)
            .await?
            .data
            .ok_or_else(|| ClientError::Decode("missing data".to_string()))
    }

    /// GET /api/posts
    pub async fn list_posts(&self, query: &ListPostsQuery) -> Result<Vec<PostResponse>, ClientError> {
        self.send_data(self.request(Method::GET, &["posts"]).query(query))
            .await
    }

    /// GET /api/posts/search?q=
    pub async fn search_posts(&self, q: &str) -> Result<Vec<PostResponse>, ClientError> {
        self.send_data(self.request(Method::GET, &["posts", "search"]).query(&[("q", q)]))
            .await
    }

    /// GET /api/posts/{id}
    pub async fn get_post(&self, id: &str) -> Result<PostResponse, ClientError> {
        self.send_data(self.request(Method::GET, &["posts", id]))
            .await
    }

    /// GET /api/posts/slug/{slug}
    pub async fn get_post_by_slug(&self, slug: &str) -> Result<PostResponse, ClientError> {
        self.send_data(self.request(Method::GET, &["posts", "slug", slug]))
            .await
    }

    /// GET /api/posts/category/{category}
    pub async fn posts_by_category(&self, category: &str) -> Result<Vec<PostResponse>, ClientError> {
        self.send_data(self.request(Method::GET, &["posts", "category", category]))
            .await
    }

    /// POST /api/posts
    pub async fn create_post(&self, payload: &PostPayload) -> Result<PostResponse, ClientError> {
        tracing::debug!(title = ?payload.title, "Creating post");
        self.send_data(self.authorized(Method::POST, &["posts"]).json(payload))
            .await
    }

    /// PUT /api/posts/{id}
    pub async fn update_post(
        &self,
        id: &str,
        payload: &PostPayload,
    ) -> Result<PostResponse, ClientError> {
        self.send_data(self.authorized(Method::PUT, &["posts", id]).json(payload))
            .await
    }

    /// DELETE /api/posts/{id}, returning the server's confirmation message.
    pub async fn delete_post(&self, id: &str) -> Result<String, ClientError> {
        let envelope = self
            .send::<serde_json::Value>(self.authorized(Method::DELETE, &["posts", id]))
            .await?;
        Ok(envelope.message.unwrap_or_default())
    }

    /// POST /api/auth/login. The returned token is kept for later writes.
    pub async fn login(&mut self, password: &str) -> Result<AuthResponse, ClientError> {
        let body = LoginRequest {
            password: password.to_string(),
        };
        let auth: AuthResponse = self
            .send_data(self.request(Method::POST, &["auth", "login"]).json(&body))
            .await?;
        self.token = Some(auth.access_token.clone());
        Ok(auth)
    }
}

fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> Result<ApiResponse<T>, ClientError> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .map(|e| e.error)
            .unwrap_or_else(|_| status.canonical_reason().unwrap_or("Request failed").to_string());
        return Err(match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        });
    }

    let envelope: ApiResponse<T> =
        serde_json::from_str(body).map_err(|e| ClientError::Decode(e.to_string()))?;
    if !envelope.success {
        let message = envelope
            .error
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(ClientError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_segments() {
        let client = BlogApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.url(&["posts"]).as_str(),
            "http://localhost:5000/api/posts"
        );
        assert_eq!(
            client.url(&["posts", "search"]).as_str(),
            "http://localhost:5000/api/posts/search"
        );

        let nested = BlogApiClient::new("https://example.com/blog").unwrap();
        assert_eq!(
            nested.url(&["auth", "login"]).as_str(),
            "https://example.com/blog/api/auth/login"
        );
    }

    #[test]
    fn test_url_encodes_each_segment() {
        let client = BlogApiClient::new("http://localhost:5000").unwrap();
        assert_eq!(
            client.url(&["posts", "slug", "a b/c?d"]).as_str(),
            "http://localhost:5000/api/posts/slug/a%20b%2Fc%3Fd"
        );
    }

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            BlogApiClient::new("not a url"),
            Err(ClientError::InvalidUrl(_))
        ));
        assert!(matches!(
            BlogApiClient::new("mailto:admin@example.com"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = BlogApiClient::new("http://localhost")
            .unwrap()
            .with_token("secret-token");
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret-token"));
        assert_eq!(client.token(), Some("secret-token"));
    }

    #[test]
    fn test_decode_list_envelope() {
        let body = r#"{"success":true,"count":1,"data":[{
            "_id":"6f1c","title":"T","slug":"t","excerpt":"e","category":"tips",
            "date":"2024-01-01T00:00:00Z","readTime":"1 min","author":"A",
            "image":"i","tags":[],"featured":false,
            "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}]}"#;

        let envelope: ApiResponse<Vec<PostResponse>> =
            decode_envelope(StatusCode::OK, body).unwrap();

        assert_eq!(envelope.count, Some(1));
        assert_eq!(envelope.data.unwrap()[0].id, "6f1c");
    }

    #[test]
    fn test_decode_error_envelopes() {
        let err = decode_envelope::<PostResponse>(
            StatusCode::NOT_FOUND,
            r#"{"success":false,"error":"Post not found"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::NotFound(ref m) if m == "Post not found"));

        let err = decode_envelope::<PostResponse>(
            StatusCode::BAD_REQUEST,
            r#"{"success":false,"error":"title is required"}"#,
        )
        .unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "API error (400): title is required");

        let err = decode_envelope::<PostResponse>(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 502, ref message } if message == "Bad Gateway"));
    }

    #[test]
    fn test_decode_rejects_garbage_success_body() {
        let err = decode_envelope::<PostResponse>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, ClientError::Decode(_)));
    }
}
