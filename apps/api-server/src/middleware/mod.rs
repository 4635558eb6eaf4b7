//! Request guards, CORS and error mapping.

pub mod auth;
pub mod cors;
pub mod error;
