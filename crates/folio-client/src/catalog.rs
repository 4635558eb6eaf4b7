//! Client-side post catalog.

use chrono::{DateTime, Duration, Utc};

use folio_shared::dto::PostResponse;

/// Window counted as "recent" on the admin dashboard.
const RECENT_WINDOW_DAYS: i64 = 30;

/// Dashboard counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    pub featured: usize,
    /// Posts dated within the last 30 days of `now`.
    pub recent: usize,
}

/// Posts fetched from the API, kept for the listing pages to query
/// without another round trip.
#[derive(Debug, Clone, Default)]
pub struct PostCatalog {
    posts: Vec<PostResponse>,
}

impl PostCatalog {
    pub fn new(posts: Vec<PostResponse>) -> Self {
        let mut catalog = Self::default();
        catalog.replace_all(posts);
        catalog
    }

    /// Replace the whole catalog, e.g. after `GET /api/posts`.
    pub fn replace_all(&mut self, posts: Vec<PostResponse>) {
        self.posts = posts;
        self.sort_newest_first();
    }

    /// Insert a post or replace the one with the same id.
    pub fn upsert(&mut self, post: PostResponse) {
        match self.posts.iter_mut().find(|p| p.id == post.id) {
            Some(existing) => *existing = post,
            None => self.posts.push(post),
        }
        self.sort_newest_first();
    }

    /// Returns the removed post, if it was present.
    pub fn remove(&mut self, id: &str) -> Option<PostResponse> {
        let index = self.posts.iter().position(|p| p.id == id)?;
        Some(self.posts.remove(index))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Newest first.
    pub fn all(&self) -> &[PostResponse] {
        &self.posts
    }

    /// `"all"` returns every post.
    pub fn by_category(&self, category: &str) -> Vec<&PostResponse> {
        self.posts
            .iter()
            .filter(|p| category == "all" || p.category == category)
            .collect()
    }

    pub fn featured(&self, limit: usize) -> Vec<&PostResponse> {
        self.posts.iter().filter(|p| p.featured).take(limit).collect()
    }

    pub fn latest(&self, limit: usize) -> Vec<&PostResponse> {
        self.posts.iter().take(limit).collect()
    }

    pub fn find_by_id(&self, id: &str) -> Option<&PostResponse> {
        self.posts.iter().find(|p| p.id == id)
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&PostResponse> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Case-insensitive substring match over title, excerpt and tags.
    /// A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&PostResponse> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.posts
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.excerpt.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Admin table filter: case-insensitive match on title, excerpt or
    /// category. An empty term keeps every post.
    pub fn admin_filter(&self, term: &str) -> Vec<&PostResponse> {
        let needle = term.to_lowercase();
        self.posts
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.title.to_lowercase().contains(&needle)
                    || p.excerpt.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    pub fn stats(&self, now: DateTime<Utc>) -> CatalogStats {
        let since = now - Duration::days(RECENT_WINDOW_DAYS);
        CatalogStats {
            total: self.posts.len(),
            featured: self.posts.iter().filter(|p| p.featured).count(),
            recent: self.posts.iter().filter(|p| p.date >= since).count(),
        }
    }

    fn sort_newest_first(&mut self) {
        self.posts.sort_by(|a, b| b.date.cmp(&a.date));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(id: &str, title: &str, category: &str, day: u32, featured: bool) -> PostResponse {
        let date = Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap();
        PostResponse {
            id: id.to_string(),
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            excerpt: format!("All about {title}"),
            category: category.to_string(),
            date,
            read_time: "3 min".to_string(),
            author: "Edwin Tsembegano".to_string(),
            image: "/img.png".to_string(),
            tags: vec!["Web".to_string()],
            featured,
            content: None,
            created_at: date,
            updated_at: date,
        }
    }

    fn catalog() -> PostCatalog {
        PostCatalog::new(vec![
            post("1", "Rust Basics", "tutorial", 1, true),
            post("2", "SEO Tricks", "marketing", 3, false),
            post("3", "Deploy Guide", "guide", 2, true),
        ])
    }

    #[test]
    fn test_latest_is_newest_first() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.latest(2).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn test_by_category() {
        let catalog = catalog();
        assert_eq!(catalog.by_category("all").len(), 3);
        assert_eq!(catalog.by_category("guide")[0].id, "3");
        assert!(catalog.by_category("tips").is_empty());
    }

    #[test]
    fn test_featured_respects_limit() {
        let catalog = catalog();
        let featured = catalog.featured(1);
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, "3");
        assert_eq!(catalog.featured(10).len(), 2);
    }

    #[test]
    fn test_search_matches_title_excerpt_and_tags() {
        let catalog = catalog();
        assert_eq!(catalog.search("seo")[0].id, "2");
        assert_eq!(catalog.search("ALL ABOUT").len(), 3);
        assert_eq!(catalog.search("web").len(), 3);
        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search("kotlin").is_empty());
    }

    #[test]
    fn test_upsert_and_remove() {
        let mut catalog = catalog();

        let mut edited = post("1", "Rust Basics", "tutorial", 9, false);
        edited.title = "Rust Basics, Revised".to_string();
        catalog.upsert(edited);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.latest(1)[0].title, "Rust Basics, Revised");

        catalog.upsert(post("4", "New Tip", "tips", 4, false));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.find_by_slug("new-tip").map(|p| p.id.as_str()), Some("4"));

        assert!(catalog.remove("2").is_some());
        assert!(catalog.remove("2").is_none());
        assert!(catalog.find_by_id("2").is_none());
    }

    #[test]
    fn test_stats_counts_recent_window() {
        let catalog = catalog();
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap();

        let stats = catalog.stats(now);
        assert_eq!(
            stats,
            CatalogStats {
                total: 3,
                featured: 2,
                recent: 2,
            }
        );

        let later = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(catalog.stats(later).recent, 0);
        assert_eq!(PostCatalog::default().stats(now), CatalogStats::default());
    }

    #[test]
    fn test_admin_filter_matches_category() {
        let catalog = catalog();
        assert_eq!(catalog.admin_filter("").len(), 3);
        assert_eq!(catalog.admin_filter("MARKET")[0].id, "2");
        assert_eq!(catalog.admin_filter("deploy")[0].id, "3");
        assert!(catalog.admin_filter("web").is_empty());
    }
}
