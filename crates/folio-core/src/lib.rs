//! # Folio Core
//!
//! The domain layer of the Folio blog API.
//! This crate contains the blog post model, slug rules and the post service,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::PostService;
