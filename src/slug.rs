//! Title-to-slug mapping for public post URLs.
//!
//! The slug is computed once at creation time and becomes the post's
//! permanent lookup key, so the mapping must stay deterministic.

const MAX_SLUG_LEN: usize = 80;

/// Turn a post title into a URL-safe slug.
///
/// Lowercase ASCII alphanumerics are kept; every other run of ASCII
/// characters collapses to a single hyphen. Non-ASCII characters are
/// skipped entirely. The result carries no leading or trailing hyphen
/// and is capped at [`MAX_SLUG_LEN`] bytes.
///
/// A title with no ASCII alphanumerics maps to the empty string; the
/// store's uniqueness constraint handles that case like any other slug.
pub fn slugify(input: &str) -> String {
    let mut slug = String::new();
    let mut last_was_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_dash = false;
        } else if ch.is_ascii() {
            if !slug.is_empty() && !last_was_dash {
                slug.push('-');
                last_was_dash = true;
            }
        }
        // Non-ASCII characters are skipped entirely.
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    slug
}
