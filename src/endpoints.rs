//! Upstream endpoint URL construction.
//!
//! All upstream URLs are built here so the rest of the crate never
//! concatenates query strings by hand. The two hosts are configurable to
//! let tests point at a stub server.

use url::Url;

use crate::config::GatewayConfig;

/// Which search vertical to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    Track,
    Album,
    Playlist,
    Artist,
}

impl SearchKind {
    fn sec_type(self) -> &'static str {
        match self {
            SearchKind::Track => "track",
            SearchKind::Album => "album",
            SearchKind::Playlist => "playlist",
            SearchKind::Artist => "artist",
        }
    }
}

/// Builder for upstream catalog endpoint URLs.
#[derive(Debug, Clone)]
pub struct Endpoints {
    web_base: String,
    api_base: String,
}

impl Endpoints {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            web_base: config.web_base.clone(),
            api_base: config.api_base.clone(),
        }
    }

    fn apiv2(&self, params: &[(&str, &str)]) -> String {
        let mut url = Url::parse(&self.web_base).expect("invalid web base URL");
        url.set_path("/apiv2");
        url.query_pairs_mut().extend_pairs(params);
        url.to_string()
    }

    /// Song detail lookup by seokey.
    pub fn song_detail(&self, seokey: &str) -> String {
        self.apiv2(&[("type", "songDetail"), ("seokey", seokey)])
    }

    /// Album detail lookup by seokey.
    pub fn album_detail(&self, seokey: &str) -> String {
        self.apiv2(&[("type", "albumDetail"), ("seokey", seokey)])
    }

    /// Playlist detail lookup by seokey.
    pub fn playlist_detail(&self, seokey: &str) -> String {
        self.apiv2(&[("type", "playlistDetail"), ("seokey", seokey)])
    }

    /// Artist detail lookup by seokey.
    pub fn artist_detail(&self, seokey: &str) -> String {
        self.apiv2(&[("type", "artistDetail"), ("seokey", seokey)])
    }

    /// Artist top tracks, keyed by the internal numeric artist id (distinct
    /// from the public seokey).
    pub fn artist_top_tracks(&self, artist_id: &str) -> String {
        self.apiv2(&[
            ("language", ""),
            ("order", "0"),
            ("page", "0"),
            ("sortBy", "popularity"),
            ("type", "artistTrackList"),
            ("id", artist_id),
        ])
    }

    /// Search within one vertical.
    pub fn search(&self, kind: SearchKind, query: &str) -> String {
        self.apiv2(&[
            ("country", "IN"),
            ("page", "0"),
            ("secType", kind.sec_type()),
            ("type", "search"),
            ("keyword", query),
        ])
    }

    /// Trending tracks for a language.
    pub fn trending(&self, language: &str, limit: u32) -> String {
        self.apiv2(&[
            ("type", "miscTrendingSongs"),
            ("language", language),
            ("n", &limit.to_string()),
        ])
    }

    /// New releases for a language.
    pub fn new_releases(&self, language: &str) -> String {
        self.apiv2(&[
            ("page", "0"),
            ("type", "miscNewRelease"),
            ("language", language),
        ])
    }

    /// Top charts listing.
    pub fn charts(&self, limit: u32) -> String {
        let mut url = Url::parse(&self.api_base).expect("invalid api base URL");
        url.set_path("/home/playlist/top-charts");
        url.query_pairs_mut()
            .append_pair("view", "all")
            .append_pair("limit", &format!("0,{limit}"));
        url.to_string()
    }

    /// Stream metadata lookup by numeric track id. The response carries the
    /// encrypted stream messages per quality tier.
    pub fn stream_detail(&self, track_id: &str) -> String {
        self.apiv2(&[("type", "streamDetail"), ("track_id", track_id)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Endpoints {
        Endpoints::new(&GatewayConfig::default())
    }

    #[test]
    fn test_song_detail_url() {
        let url = endpoints().song_detail("tune-ka-mathabhar");
        assert_eq!(
            url,
            "https://gaana.com/apiv2?type=songDetail&seokey=tune-ka-mathabhar"
        );
    }

    #[test]
    fn test_search_url_encodes_query() {
        let url = endpoints().search(SearchKind::Track, "tum hi ho");
        assert!(url.contains("secType=track"));
        assert!(url.contains("keyword=tum+hi+ho"));
    }

    #[test]
    fn test_charts_uses_api_host() {
        let url = endpoints().charts(30);
        assert!(url.starts_with("https://apiv2.gaana.com/home/playlist/top-charts"));
        assert!(url.contains("limit=0%2C30") || url.contains("limit=0,30"));
    }

    #[test]
    fn test_stub_base_override() {
        let config = GatewayConfig::with_base("http://127.0.0.1:4545");
        let url = Endpoints::new(&config).album_detail("thriller");
        assert!(url.starts_with("http://127.0.0.1:4545/apiv2?"));
    }
}
