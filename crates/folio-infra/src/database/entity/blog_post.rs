//! Blog post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use folio_core::domain::{BlogPost, Category};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    pub category: String,
    pub date: DateTimeWithTimeZone,
    pub read_time: String,
    pub author: String,
    pub image: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    pub featured: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to domain BlogPost.
///
/// Rows are only ever written through the domain type, so an unknown
/// category or malformed tag list means the table was edited by hand;
/// those fall back to `tips` and an empty list rather than failing reads.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        let category = model.category.parse().unwrap_or_else(|_| {
            tracing::warn!(post_id = %model.id, category = %model.category, "Unknown stored category");
            Category::Tips
        });

        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            excerpt: model.excerpt,
            category,
            date: model.date.into(),
            read_time: model.read_time,
            author: model.author,
            image: model.image,
            tags: serde_json::from_value(model.tags).unwrap_or_default(),
            featured: model.featured,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from domain BlogPost to SeaORM ActiveModel.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            slug: Set(post.slug),
            excerpt: Set(post.excerpt),
            category: Set(post.category.as_str().to_string()),
            date: Set(post.date.into()),
            read_time: Set(post.read_time),
            author: Set(post.author),
            image: Set(post.image),
            tags: Set(serde_json::Value::from(post.tags)),
            featured: Set(post.featured),
            content: Set(post.content),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
