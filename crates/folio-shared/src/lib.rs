//! # Folio Shared
//!
//! Wire types shared by the API server and its clients.

pub mod date;
pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
