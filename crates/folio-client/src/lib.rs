//! # Folio Client
//!
//! Consumers of the blog API: an HTTP client that unwraps the response
//! envelope, and an in-memory catalog that the admin and public pages
//! query after fetching.

mod catalog;
mod client;
mod error;

pub use catalog::{CatalogStats, PostCatalog};
pub use client::BlogApiClient;
pub use error::ClientError;
