//! Domain entities - the core business objects.

mod post;
mod query;
pub mod slug;

pub use post::{BlogPost, Category, DEFAULT_AUTHOR, PostInput};
pub use query::{MAX_LIMIT, PostFilter, PostQuery, SortOrder};
pub use slug::slugify;
