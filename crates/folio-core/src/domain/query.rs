//! Listing options for posts.

use std::str::FromStr;

use super::Category;

/// Largest cap a SQL `LIMIT` accepts.
pub const MAX_LIMIT: u64 = i64::MAX as u64;

/// Ordering by publication `date`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl FromStr for SortOrder {
    type Err = std::convert::Infallible;

    /// Only `oldest` flips the order; anything else means newest first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "oldest" {
            SortOrder::Oldest
        } else {
            SortOrder::Newest
        })
    }
}

/// Filter applied by `PostService::list`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostFilter {
    /// Exact category match; `"all"` or `None` means unrestricted.
    pub category: Option<String>,
    pub featured_only: bool,
    /// Ignored when zero.
    pub limit: Option<u64>,
    pub sort: SortOrder,
}

impl PostFilter {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn featured_only(mut self) -> Self {
        self.featured_only = true;
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// The positive result cap, if any, clamped to [`MAX_LIMIT`].
    pub fn effective_limit(&self) -> Option<u64> {
        self.limit.filter(|l| *l > 0).map(|l| l.min(MAX_LIMIT))
    }
}

/// A resolved filter as handed to the repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostQuery {
    pub category: Option<Category>,
    pub featured_only: bool,
    pub limit: Option<u64>,
    pub sort: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parsing() {
        assert_eq!("oldest".parse::<SortOrder>().unwrap(), SortOrder::Oldest);
        assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!("sideways".parse::<SortOrder>().unwrap(), SortOrder::Newest);
    }

    #[test]
    fn test_zero_limit_is_ignored() {
        assert_eq!(PostFilter::default().limit(0).effective_limit(), None);
        assert_eq!(PostFilter::default().limit(3).effective_limit(), Some(3));
    }

    #[test]
    fn test_huge_limit_is_clamped() {
        assert_eq!(
            PostFilter::default().limit(u64::MAX).effective_limit(),
            Some(MAX_LIMIT)
        );
        assert_eq!(MAX_LIMIT, 9_223_372_036_854_775_807);
    }
}
