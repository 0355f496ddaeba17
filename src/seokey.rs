//! Seokey extraction from browse URLs and bare identifiers.

use std::sync::LazyLock;

use regex::Regex;

/// Matches browse URLs for the four supported resource kinds, with or
/// without scheme and `www`, tolerating trailing query strings or
/// fragments after the captured segment.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:www\.)?gaana\.com/(song|album|artist|playlist)/([a-zA-Z0-9-]+)")
        .expect("invalid seokey URL pattern")
});

/// Extracts the seokey from a browse URL, or returns the input itself if
/// it is already a bare seokey.
///
/// Returns `None` only for empty or whitespace-only input. Pure and
/// deterministic; never touches the network.
///
/// # Example
///
/// ```
/// use rustaana::seokey::extract_seokey;
///
/// assert_eq!(
///     extract_seokey("https://gaana.com/song/tune-ka-mathabhar").as_deref(),
///     Some("tune-ka-mathabhar")
/// );
/// assert_eq!(extract_seokey("tune-ka-mathabhar").as_deref(), Some("tune-ka-mathabhar"));
/// ```
pub fn extract_seokey(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = URL_PATTERN.captures(trimmed) {
        return Some(caps[2].to_string());
    }

    // Not a recognized URL shape; treat as a bare seokey with any trailing
    // query string or fragment stripped.
    let bare = trimmed
        .split('?')
        .next()
        .unwrap_or(trimmed)
        .split('#')
        .next()
        .unwrap_or(trimmed);

    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}
