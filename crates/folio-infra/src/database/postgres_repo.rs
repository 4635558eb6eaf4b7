//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, Order, QueryFilter, QueryOrder, QuerySelect,
};

use folio_core::domain::{BlogPost, MAX_LIMIT, PostQuery, SortOrder};
use folio_core::error::RepoError;
use folio_core::ports::PostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<BlogPostEntity>;

/// Escape `%`, `_` and `\` so user text is matched literally by ILIKE.
fn like_pattern(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len() + 2);
    escaped.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn order_of(sort: SortOrder) -> Order {
    match sort {
        SortOrder::Newest => Order::Desc,
        SortOrder::Oldest => Order::Asc,
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, RepoError> {
        tracing::debug!(slug, "Finding post by slug");

        let result = BlogPostEntity::find()
            .filter(blog_post::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.map(Into::into))
    }

    async fn find(&self, query: &PostQuery) -> Result<Vec<BlogPost>, RepoError> {
        let mut select = BlogPostEntity::find();

        if let Some(category) = query.category {
            select = select.filter(blog_post::Column::Category.eq(category.as_str()));
        }
        if query.featured_only {
            select = select.filter(blog_post::Column::Featured.eq(true));
        }
        select = select.order_by(blog_post::Column::Date, order_of(query.sort));
        if let Some(limit) = query.limit {
            select = select.limit(limit.min(MAX_LIMIT));
        }

        let result = select.all(&self.db).await.map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn search(&self, text: &str) -> Result<Vec<BlogPost>, RepoError> {
        let pattern = like_pattern(text);
        tracing::debug!(pattern = %pattern, "Searching posts");

        let matches = Condition::any()
            .add(Expr::col(blog_post::Column::Title).ilike(pattern.as_str()))
            .add(Expr::col(blog_post::Column::Excerpt).ilike(pattern.as_str()))
            .add(Expr::cust_with_values(
                "EXISTS (SELECT 1 FROM jsonb_array_elements_text(tags) AS tag WHERE tag ILIKE $1)",
                [pattern],
            ));

        let result = BlogPostEntity::find()
            .filter(matches)
            .order_by_desc(blog_post::Column::Date)
            .all(&self.db)
            .await
            .map_err(repo_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}
