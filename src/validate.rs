//! Input validation for all externally supplied parameters.
//!
//! Every rule here runs before any network call; a failed validation never
//! reaches the transport layer.

use crate::error::{GatewayError, Result};

/// Maximum length for identifier-like inputs (seokeys and browse URLs).
const SEOKEY_MAX_LEN: usize = 500;

/// Maximum length for free-text search queries.
const QUERY_MAX_LEN: usize = 200;

/// Maximum length for language codes.
const LANGUAGE_MAX_LEN: usize = 50;

/// Characters rejected in identifier-like inputs.
const FORBIDDEN_CHARS: &[char] = &['<', '>', '\'', '"', '&'];

/// Limit tiers. Broad listings accept up to 100 results; fan-out search is
/// capped lower because every hit triggers a secondary detail fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitTier {
    Listing,
    Search,
}

impl LimitTier {
    fn max(self) -> u32 {
        match self {
            LimitTier::Listing => 100,
            LimitTier::Search => 25,
        }
    }
}

/// Validates an identifier-like input (a seokey or a full browse URL).
pub fn validate_seokey(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::InvalidInput("Seokey is required".to_string()));
    }
    if input.len() > SEOKEY_MAX_LEN {
        return Err(GatewayError::InvalidInput("Seokey is too long".to_string()));
    }
    if input.contains(FORBIDDEN_CHARS) {
        return Err(GatewayError::InvalidInput(
            "Seokey contains invalid characters".to_string(),
        ));
    }
    if input.contains("javascript:") || input.contains("data:") {
        return Err(GatewayError::InvalidInput(
            "Seokey contains unsafe content".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Validates a free-text search query.
pub fn validate_query(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GatewayError::InvalidInput(
            "Search query is required".to_string(),
        ));
    }
    if input.len() > QUERY_MAX_LEN {
        return Err(GatewayError::InvalidInput(
            "Search query is too long".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

/// Parses an optional limit parameter against a tier.
///
/// A missing or non-numeric value falls back to `default`; an explicit
/// numeric value outside the tier's range is rejected.
pub fn parse_limit(value: Option<&str>, default: u32, tier: LimitTier) -> Result<u32> {
    let Some(raw) = value else {
        return Ok(default);
    };
    let Ok(parsed) = raw.trim().parse::<i64>() else {
        return Ok(default);
    };
    if parsed < 1 {
        return Err(GatewayError::InvalidInput(
            "Limit must be at least 1".to_string(),
        ));
    }
    if parsed > i64::from(tier.max()) {
        return Err(GatewayError::InvalidInput(format!(
            "Limit cannot exceed {}",
            tier.max()
        )));
    }
    Ok(parsed as u32)
}

/// Validates an optional language code.
pub fn validate_language(value: Option<&str>) -> Result<Option<String>> {
    match value {
        None => Ok(None),
        Some(lang) => {
            if lang.len() > LANGUAGE_MAX_LEN {
                return Err(GatewayError::InvalidInput(
                    "Language code is too long".to_string(),
                ));
            }
            Ok(Some(lang.to_string()))
        }
    }
}

/// Validates that a track id is purely numeric.
pub fn validate_track_id(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(GatewayError::InvalidInput(
            "Track ID is required".to_string(),
        ));
    }
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GatewayError::InvalidInput(
            "Track ID must be numeric".to_string(),
        ));
    }
    Ok(input.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seokey_accepts_urls_and_slugs() {
        assert!(validate_seokey("tune-ka-mathabhar").is_ok());
        assert!(validate_seokey("https://gaana.com/song/tune-ka-mathabhar").is_ok());
    }

    #[test]
    fn test_seokey_rejects_forbidden_chars() {
        for input in ["<script>", "a>b", "it's", "say \"hi\"", "a&b"] {
            let err = validate_seokey(input).unwrap_err();
            assert!(
                matches!(err, GatewayError::InvalidInput(_)),
                "input: {input}"
            );
        }
    }

    #[test]
    fn test_seokey_rejects_unsafe_schemes() {
        assert!(validate_seokey("javascript:alert(1)").is_err());
        assert!(validate_seokey("data:text/html;base64,xyz").is_err());
    }

    #[test]
    fn test_seokey_rejects_empty_and_oversized() {
        assert!(validate_seokey("").is_err());
        assert!(validate_seokey("   ").is_err());
        assert!(validate_seokey(&"a".repeat(501)).is_err());
        assert!(validate_seokey(&"a".repeat(500)).is_ok());
    }

    #[test]
    fn test_query_rules() {
        assert!(validate_query("despacito").is_ok());
        assert!(validate_query("").is_err());
        assert!(validate_query("  ").is_err());
        assert!(validate_query(&"q".repeat(201)).is_err());
        assert_eq!(
            validate_query("").unwrap_err().to_string(),
            "Search query is required"
        );
    }

    #[test]
    fn test_limit_defaults() {
        assert_eq!(parse_limit(None, 10, LimitTier::Search).unwrap(), 10);
        assert_eq!(parse_limit(Some("abc"), 10, LimitTier::Search).unwrap(), 10);
        assert_eq!(parse_limit(Some("20"), 10, LimitTier::Search).unwrap(), 20);
    }

    #[test]
    fn test_limit_tiers() {
        assert!(parse_limit(Some("100"), 10, LimitTier::Listing).is_ok());
        assert!(parse_limit(Some("101"), 10, LimitTier::Listing).is_err());
        assert!(parse_limit(Some("25"), 10, LimitTier::Search).is_ok());
        assert!(parse_limit(Some("26"), 10, LimitTier::Search).is_err());
        assert!(parse_limit(Some("0"), 10, LimitTier::Search).is_err());
        assert!(parse_limit(Some("-5"), 10, LimitTier::Search).is_err());
    }

    #[test]
    fn test_language() {
        assert_eq!(validate_language(None).unwrap(), None);
        assert_eq!(
            validate_language(Some("hi")).unwrap(),
            Some("hi".to_string())
        );
        assert!(validate_language(Some(&"x".repeat(51))).is_err());
    }

    #[test]
    fn test_track_id_numeric_only() {
        assert!(validate_track_id("29797868").is_ok());
        assert!(validate_track_id("").is_err());
        assert!(validate_track_id("29a7").is_err());
        assert!(validate_track_id("-1").is_err());
    }
}
