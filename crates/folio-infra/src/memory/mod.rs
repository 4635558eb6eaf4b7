//! In-memory store - used when no database is configured.

mod post_repo;

pub use post_repo::InMemoryPostRepository;
