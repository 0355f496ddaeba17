//! Route handlers.

pub mod browse;
pub mod details;
pub mod health;
pub mod search;
pub mod stream;

use serde::Deserialize;

use crate::seokey::extract_seokey;
use crate::validate;

use super::error::AppError;

/// Query parameters accepted by the resource detail endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub url: Option<String>,
    pub seokey: Option<String>,
}

/// Resolves the identifier for a detail request: path segment first,
/// then `url`, then `seokey`. The input is validated before any URL
/// parsing happens, so hostile inputs never reach the extractor.
pub fn resolve_seokey(path: Option<String>, query: &DetailQuery) -> Result<String, AppError> {
    let input = path
        .or_else(|| query.url.clone())
        .or_else(|| query.seokey.clone())
        .ok_or_else(|| AppError::bad_request("Seokey or URL is required"))?;

    let input = validate::validate_seokey(&input)?;
    extract_seokey(&input).ok_or_else(|| AppError::bad_request("Missing or invalid seokey."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_wins_over_query() {
        let query = DetailQuery {
            url: Some("https://gaana.com/song/other".to_string()),
            seokey: None,
        };
        let seokey = resolve_seokey(Some("tum-hi-ho".to_string()), &query).unwrap();
        assert_eq!(seokey, "tum-hi-ho");
    }

    #[test]
    fn test_url_query_extracts_seokey() {
        let query = DetailQuery {
            url: Some("https://gaana.com/album/aashiqui-2".to_string()),
            seokey: None,
        };
        assert_eq!(resolve_seokey(None, &query).unwrap(), "aashiqui-2");
    }

    #[test]
    fn test_missing_identifier_rejected() {
        assert!(resolve_seokey(None, &DetailQuery::default()).is_err());
    }

    #[test]
    fn test_hostile_input_rejected_before_extraction() {
        let query = DetailQuery {
            url: None,
            seokey: Some("<script>alert(1)</script>".to_string()),
        };
        assert!(resolve_seokey(None, &query).is_err());
    }
}
