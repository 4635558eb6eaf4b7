//! Post service - validation, slug derivation and queries over the post store.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    BlogPost, Category, DEFAULT_AUTHOR, PostFilter, PostInput, PostQuery, SortOrder, slugify,
};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;

/// Mediates all access to the post store and enforces the post invariants.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
    default_author: String,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            repo,
            default_author: DEFAULT_AUTHOR.to_string(),
        }
    }

    /// Override the author stamped on posts that omit one.
    pub fn with_default_author(mut self, author: impl Into<String>) -> Self {
        self.default_author = author.into();
        self
    }

    /// Validate `input`, derive the slug and persist a new post.
    pub async fn create(&self, input: PostInput) -> Result<BlogPost, DomainError> {
        let title = required(input.title, "title")?.trim().to_string();
        let slug = derive_slug(&title)?;
        let excerpt = required(input.excerpt, "excerpt")?;
        let category: Category = required(input.category, "category")?.parse()?;
        let read_time = required(input.read_time, "readTime")?;
        let image = required(input.image, "image")?;

        if self.repo.find_by_slug(&slug).await?.is_some() {
            return Err(slug_conflict(&slug));
        }

        let now = Utc::now();
        let post = BlogPost {
            id: Uuid::new_v4(),
            title,
            slug,
            excerpt,
            category,
            date: input.date.unwrap_or(now),
            read_time,
            author: self.author_or_default(input.author),
            image,
            tags: input.tags.unwrap_or_default(),
            featured: input.featured.unwrap_or(false),
            content: input.content,
            created_at: now,
            updated_at: now,
        };

        let slug = post.slug.clone();
        let saved = self
            .repo
            .insert(post)
            .await
            .map_err(|e| on_write_error(e, &slug))?;

        tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post created");
        Ok(saved)
    }

    /// Merge the supplied fields into an existing post.
    ///
    /// The slug is re-derived only when `title` is part of the input.
    pub async fn update(&self, id: Uuid, input: PostInput) -> Result<BlogPost, DomainError> {
        let mut post = self.get_by_id(id).await?;

        if let Some(title) = input.title {
            let title = required(Some(title), "title")?.trim().to_string();
            let slug = derive_slug(&title)?;
            if slug != post.slug {
                if let Some(other) = self.repo.find_by_slug(&slug).await? {
                    if other.id != id {
                        return Err(slug_conflict(&slug));
                    }
                }
            }
            post.title = title;
            post.slug = slug;
        }
        if let Some(excerpt) = input.excerpt {
            post.excerpt = required(Some(excerpt), "excerpt")?;
        }
        if let Some(category) = input.category {
            post.category = category.parse()?;
        }
        if let Some(date) = input.date {
            post.date = date;
        }
        if let Some(read_time) = input.read_time {
            post.read_time = required(Some(read_time), "readTime")?;
        }
        if input.author.is_some() {
            post.author = self.author_or_default(input.author);
        }
        if let Some(image) = input.image {
            post.image = required(Some(image), "image")?;
        }
        if let Some(tags) = input.tags {
            post.tags = tags;
        }
        if let Some(featured) = input.featured {
            post.featured = featured;
        }
        if input.content.is_some() {
            post.content = input.content;
        }
        post.updated_at = Utc::now();

        let slug = post.slug.clone();
        let saved = self.repo.update(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id.to_string()),
            other => on_write_error(other, &slug),
        })?;

        tracing::info!(post_id = %saved.id, slug = %saved.slug, "Post updated");
        Ok(saved)
    }

    /// Hard-delete a post.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.repo.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id.to_string()),
            other => other.into(),
        })?;

        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BlogPost, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id.to_string()))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<BlogPost, DomainError> {
        self.repo
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::post_not_found(slug))
    }

    /// List posts matching `filter`. An unknown category matches nothing.
    pub async fn list(&self, filter: &PostFilter) -> Result<Vec<BlogPost>, DomainError> {
        let category = match filter.category.as_deref() {
            None | Some("all") => None,
            Some(name) => match name.parse::<Category>() {
                Ok(category) => Some(category),
                Err(_) => {
                    tracing::debug!(category = name, "Unknown category filter");
                    return Ok(Vec::new());
                }
            },
        };

        let query = PostQuery {
            category,
            featured_only: filter.featured_only,
            limit: filter.effective_limit(),
            sort: filter.sort,
        };

        Ok(self.repo.find(&query).await?)
    }

    /// All posts in `category`, newest first.
    pub async fn list_by_category(&self, category: &str) -> Result<Vec<BlogPost>, DomainError> {
        if category == "all" {
            return Ok(Vec::new());
        }
        self.list(&PostFilter::default().category(category).sort(SortOrder::Newest))
            .await
    }

    /// Case-insensitive substring search over title, excerpt and tags.
    pub async fn search(&self, query: &str) -> Result<Vec<BlogPost>, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::validation("Search query required"));
        }

        Ok(self.repo.search(query).await?)
    }

    fn author_or_default(&self, author: Option<String>) -> String {
        author
            .filter(|a| !a.trim().is_empty())
            .unwrap_or_else(|| self.default_author.clone())
    }
}

/// A present, non-blank string field.
fn required(value: Option<String>, field: &str) -> Result<String, DomainError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| DomainError::validation(format!("{field} is required")))
}

fn derive_slug(title: &str) -> Result<String, DomainError> {
    let slug = slugify(title);
    if slug.is_empty() {
        return Err(DomainError::validation(
            "title must contain at least one letter or digit",
        ));
    }
    Ok(slug)
}

fn slug_conflict(slug: &str) -> DomainError {
    DomainError::Conflict(format!("A post with slug '{slug}' already exists"))
}

fn on_write_error(err: RepoError, slug: &str) -> DomainError {
    match err {
        RepoError::Constraint(_) => slug_conflict(slug),
        other => other.into(),
    }
}
