//! Admin authorization extractor for the post write routes.

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use std::future::{Ready, ready};

use folio_core::ports::{AuthError, TokenClaims};

use crate::middleware::error::AppError;
use crate::state::AppState;

/// Role an admin token must carry.
pub const ADMIN_ROLE: &str = "admin";

/// Proof that the caller may modify posts.
///
/// When admin auth is not configured every request is let through as
/// `Open`; otherwise a valid bearer token with the admin role is required.
/// ```ignore
/// async fn delete_post(_admin: AdminAccess, ...) -> AppResult<HttpResponse> { ... }
/// ```
#[derive(Debug, Clone)]
pub enum AdminAccess {
    Open,
    Token(TokenClaims),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InsufficientPermissions => AppError::Forbidden,
            AuthError::HashingError(msg) => AppError::Internal(msg),
            AuthError::MissingAuth => AppError::Unauthorized(
                "Please provide a valid Bearer token in the Authorization header.".to_string(),
            ),
            AuthError::TokenExpired => AppError::Unauthorized(
                "Your authentication token has expired. Please login again.".to_string(),
            ),
            other => AppError::Unauthorized(other.to_string()),
        }
    }
}

fn bearer_token(req: &HttpRequest) -> Result<&str, AuthError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingAuth)?;
    let value = value
        .to_str()
        .map_err(|_| AuthError::InvalidToken("Invalid authorization header".to_string()))?;

    value
        .strip_prefix("Bearer ")
        .map(str::trim)
        .ok_or_else(|| AuthError::InvalidToken("Expected Bearer token".to_string()))
}

fn authorize(req: &HttpRequest) -> Result<AdminAccess, AppError> {
    let Some(state) = req.app_data::<web::Data<AppState>>() else {
        tracing::error!("AppState not found in app data");
        return Err(AppError::Internal("Server configuration error".to_string()));
    };

    let Some(admin) = state.admin.as_ref() else {
        return Ok(AdminAccess::Open);
    };

    let claims = admin.tokens.validate_token(bearer_token(req)?)?;
    if !claims.has_role(ADMIN_ROLE) {
        return Err(AuthError::InsufficientPermissions.into());
    }

    Ok(AdminAccess::Token(claims))
}

impl FromRequest for AdminAccess {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = authorize(req);
        if let Err(e) = &result {
            tracing::warn!(path = %req.path(), error = %e, "Rejected admin request");
        }
        ready(result)
    }
}
