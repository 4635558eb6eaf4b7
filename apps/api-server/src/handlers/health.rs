//! Health check and service banner.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub store: &'static str,
    pub timestamp: String,
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let (status, store) = store_status(&state).await;

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        store,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}

#[cfg(feature = "postgres")]
async fn store_status(state: &AppState) -> (&'static str, &'static str) {
    let Some(db) = state.db.as_ref() else {
        return ("ok", "memory");
    };

    match db.ping().await {
        Ok(()) => ("ok", "postgres"),
        Err(e) => {
            tracing::error!("Database ping failed: {}", e);
            ("degraded", "postgres")
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn store_status(_state: &AppState) -> (&'static str, &'static str) {
    ("ok", "memory")
}

/// GET / - service banner listing the endpoints.
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Folio blog API is running",
        "endpoints": {
            "getAllPosts": "GET /api/posts",
            "searchPosts": "GET /api/posts/search?q=",
            "getPostById": "GET /api/posts/:id",
            "getPostBySlug": "GET /api/posts/slug/:slug",
            "getPostsByCategory": "GET /api/posts/category/:category",
            "createPost": "POST /api/posts",
            "updatePost": "PUT /api/posts/:id",
            "deletePost": "DELETE /api/posts/:id",
            "login": "POST /api/auth/login",
            "health": "GET /api/health"
        }
    }))
}
