//! Slug derivation for post titles.

/// Derive a URL slug from a title.
///
/// Lower-cases the title, collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, then strips a leading and a trailing `-`.
/// Returns an empty string when the title has no ASCII alphanumerics.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_gap = false;

    for c in title.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            slug.push(c);
            in_gap = false;
        } else if !in_gap {
            slug.push('-');
            in_gap = true;
        }
    }

    let slug = slug.strip_prefix('-').unwrap_or(&slug);
    let slug = slug.strip_suffix('-').unwrap_or(slug);
    slug.to_string()
}

/// Whether `slug` is lowercase kebab-case: `^[a-z0-9]+(-[a-z0-9]+)*$`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_collapses() {
        assert_eq!(slugify("Hello, World! 2024"), "hello-world-2024");
    }

    #[test]
    fn test_leading_and_trailing_separators_stripped() {
        assert_eq!(slugify("  --Rust & Actix!!  "), "rust-actix");
        assert_eq!(slugify("...Ready?"), "ready");
    }

    #[test]
    fn test_real_titles() {
        assert_eq!(
            slugify("10 React Best Practices Every Developer Should Know"),
            "10-react-best-practices-every-developer-should-know"
        );
        assert_eq!(
            slugify("TypeScript: The Complete Guide (2025)"),
            "typescript-the-complete-guide-2025"
        );
    }

    #[test]
    fn test_non_ascii_becomes_separator() {
        assert_eq!(slugify("Café Über Straße"), "caf-ber-stra-e");
    }

    #[test]
    fn test_empty_when_no_alphanumerics() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!! ???"), "");
        assert_eq!(slugify("日本語"), "");
    }

    #[test]
    fn test_output_is_always_kebab_case() {
        let titles = [
            "A",
            "a--b",
            "SEO Tips & Tricks: 2025 Edition",
            " tabs\tand\nnewlines ",
            "--x--",
            "Ünïcödé 42",
        ];
        for title in titles {
            let slug = slugify(title);
            assert!(is_valid_slug(&slug), "{title:?} -> {slug:?}");
        }
    }

    #[test]
    fn test_deterministic() {
        let title = "Marketing for Developers";
        assert_eq!(slugify(title), slugify(title));
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("hello-world-2024"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-hello"));
        assert!(!is_valid_slug("hello--world"));
        assert!(!is_valid_slug("Hello"));
    }
}
