//! In-memory post repository.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use folio_core::domain::{BlogPost, PostQuery, SortOrder};
use folio_core::error::RepoError;
use folio_core::ports::{BaseRepository, PostRepository};

/// Post store backed by a HashMap behind an async RwLock.
///
/// Slug uniqueness is checked under the write lock, so concurrent inserts
/// of the same slug cannot both succeed.
/// Note: Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    fn slug_taken(store: &HashMap<Uuid, BlogPost>, slug: &str, except: Uuid) -> bool {
        store.values().any(|p| p.slug == slug && p.id != except)
    }

    fn sort_by_date(posts: &mut [BlogPost], order: SortOrder) {
        match order {
            SortOrder::Newest => posts.sort_by(|a, b| b.date.cmp(&a.date)),
            SortOrder::Oldest => posts.sort_by(|a, b| a.date.cmp(&b.date)),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&post.id) {
            return Err(RepoError::Constraint(format!("duplicate id {}", post.id)));
        }
        if Self::slug_taken(&store, &post.slug, post.id) {
            return Err(RepoError::Constraint(format!("duplicate slug {}", post.slug)));
        }

        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;

        if !store.contains_key(&post.id) {
            return Err(RepoError::NotFound);
        }
        if Self::slug_taken(&store, &post.slug, post.id) {
            return Err(RepoError::Constraint(format!("duplicate slug {}", post.slug)));
        }

        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|p| p.slug == slug).cloned())
    }

    async fn find(&self, query: &PostQuery) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;

        let mut posts: Vec<BlogPost> = store
            .values()
            .filter(|p| query.category.is_none_or(|c| p.category == c))
            .filter(|p| !query.featured_only || p.featured)
            .cloned()
            .collect();
        drop(store);

        Self::sort_by_date(&mut posts, query.sort);
        if let Some(limit) = query.limit {
            posts.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(posts)
    }

    async fn search(&self, text: &str) -> Result<Vec<BlogPost>, RepoError> {
        let needle = text.to_lowercase();
        let store = self.store.read().await;

        let mut posts: Vec<BlogPost> = store
            .values()
            .filter(|p| p.matches(&needle))
            .cloned()
            .collect();
        drop(store);

        Self::sort_by_date(&mut posts, SortOrder::Newest);
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use folio_core::domain::Category;

    fn post(slug: &str, category: Category, day: u32, featured: bool) -> BlogPost {
        let date = Utc.with_ymd_and_hms(2025, 1, day, 0, 0, 0).unwrap();
        BlogPost {
            id: Uuid::new_v4(),
            title: slug.replace('-', " "),
            slug: slug.to_string(),
            excerpt: "excerpt".to_string(),
            category,
            date,
            read_time: "3 min".to_string(),
            author: "Edwin Tsembegano".to_string(),
            image: "https://placehold.co/600x400".to_string(),
            tags: vec![],
            featured,
            content: None,
            created_at: date,
            updated_at: date,
        }
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_slug() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("same", Category::Tips, 1, false))
            .await
            .unwrap();

        let err = repo
            .insert(post("same", Category::Guide, 2, false))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Constraint(_)));
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let err = repo
            .update(post("ghost", Category::Tips, 1, false))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn test_find_filters_sorts_and_limits() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post("a", Category::Tutorial, 1, true)).await.unwrap();
        repo.insert(post("b", Category::Tutorial, 3, false)).await.unwrap();
        repo.insert(post("c", Category::Tips, 2, true)).await.unwrap();

        let tutorials = repo
            .find(&PostQuery {
                category: Some(Category::Tutorial),
                ..Default::default()
            })
            .await
            .unwrap();
        let slugs: Vec<_> = tutorials.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["b", "a"]);

        let oldest_featured = repo
            .find(&PostQuery {
                featured_only: true,
                limit: Some(1),
                sort: SortOrder::Oldest,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(oldest_featured.len(), 1);
        assert_eq!(oldest_featured[0].slug, "a");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("x", Category::Tips, 1, false)).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert!(matches!(repo.delete(saved.id).await, Err(RepoError::NotFound)));
    }
}
