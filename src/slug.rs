//! Title to file-name slug conversion

/// Slug used when a title has no alphanumeric characters at all.
pub const FALLBACK_SLUG: &str = "untitled-note";

/// Convert a title to a filesystem-safe slug
///
/// - Converts to lowercase
/// - Collapses every run of non `[a-z0-9]` characters into one hyphen
/// - Trims leading/trailing hyphens
///
/// Returns an empty string when nothing alphanumeric is left; callers pick
/// their own fallback (see [`slug_or_fallback`]).
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // Start true to trim leading hyphens

    for c in title.trim().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    if slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Slugify `title`, substituting [`FALLBACK_SLUG`] for an empty result.
pub fn slug_or_fallback(title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}
