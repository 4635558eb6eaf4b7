use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author used when a post does not name one.
pub const DEFAULT_AUTHOR: &str = "Edwin Tsembegano";

/// Blog post entity - the only document the store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub category: Category,
    pub date: DateTime<Utc>,
    pub read_time: String,
    pub author: String,
    pub image: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Whether the post matches a lower-cased search needle on title,
    /// excerpt or any tag.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.excerpt.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

/// Post category. Anything outside this set is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tutorial,
    Guide,
    Marketing,
    Tips,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tutorial,
        Category::Guide,
        Category::Marketing,
        Category::Tips,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tutorial => "tutorial",
            Category::Guide => "guide",
            Category::Marketing => "marketing",
            Category::Tips => "tips",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "Invalid category '{s}': expected one of tutorial, guide, marketing, tips"
                ))
            })
    }
}

/// Caller-supplied post fields, used for both create and partial update.
///
/// Every field is optional here; `PostService` decides which ones are
/// required for the operation at hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostInput {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub read_time: Option<String>,
    pub author: Option<String>,
    pub image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BlogPost {
        let now = Utc::now();
        BlogPost {
            id: Uuid::new_v4(),
            title: "10 React Best Practices".to_string(),
            slug: "10-react-best-practices".to_string(),
            excerpt: "Component composition and memoization".to_string(),
            category: Category::Tutorial,
            date: now,
            read_time: "5 min".to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            image: "https://placehold.co/600x400".to_string(),
            tags: vec!["JavaScript".to_string(), "Best Practices".to_string()],
            featured: true,
            content: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_rejects_unknown_and_wrong_case() {
        assert!(matches!(
            "news".parse::<Category>(),
            Err(DomainError::Validation(_))
        ));
        assert!("Tutorial".parse::<Category>().is_err());
    }

    #[test]
    fn test_matches_title_excerpt_and_tags() {
        let post = sample();
        assert!(post.matches("react"));
        assert!(post.matches("memoization"));
        assert!(post.matches("javascript"));
        assert!(post.matches("best prac"));
        assert!(!post.matches("typescript"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["readTime"], "5 min");
        assert_eq!(json["category"], "tutorial");
        assert!(json.get("createdAt").is_some());
    }
}
