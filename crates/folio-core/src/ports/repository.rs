use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, PostQuery};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity. Unique constraint violations surface as
    /// `RepoError::Constraint`.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Replace an existing entity. Fails with `RepoError::NotFound` when the
    /// entity is gone.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository - the blog post store.
///
/// Implementations must enforce slug uniqueness on `insert` and `update`.
#[async_trait]
pub trait PostRepository: BaseRepository<BlogPost, Uuid> {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError>;

    /// Posts matching `query`, ordered by `date`.
    async fn find(&self, query: &PostQuery) -> Result<Vec<BlogPost>, RepoError>;

    /// Case-insensitive literal substring match on title, excerpt or any tag,
    /// newest first.
    async fn search(&self, text: &str) -> Result<Vec<BlogPost>, RepoError>;
}
