//! CORS middleware.

use actix_cors::Cors;
use actix_web::http::{Method, header};

/// Any origin when `origins` is empty, otherwise only the listed ones.
pub fn cors_middleware(origins: &[String]) -> Cors {
    if origins.is_empty() {
        return Cors::permissive();
    }

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([crate::observability::REQUEST_ID_HEADER])
        .max_age(60 * 60)
}
