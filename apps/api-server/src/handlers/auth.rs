//! Admin login.

use actix_web::{HttpResponse, web};

use folio_core::ports::AuthError;
use folio_shared::ApiResponse;
use folio_shared::dto::{AuthResponse, LoginRequest};

use crate::middleware::auth::ADMIN_ROLE;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let Some(admin) = state.admin.as_ref() else {
        return Err(AppError::NotFound("Admin login is not enabled".to_string()));
    };

    if !admin.passwords.verify(&body.password, &admin.password_hash)? {
        tracing::warn!("Admin login failed");
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = admin
        .tokens
        .generate_token(ADMIN_ROLE, vec![ADMIN_ROLE.to_string()])?;

    tracing::info!("Admin logged in");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(AuthResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: u64::try_from(admin.tokens.expiration_seconds()).unwrap_or(0),
    })))
}
