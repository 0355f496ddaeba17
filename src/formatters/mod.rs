//! Response formatters.
//!
//! The upstream API is undocumented and its payloads are inconsistent:
//! field names differ between search and detail responses, numbers arrive
//! as strings or numbers interchangeably, and artist credits appear in
//! three different shapes. Everything in this module takes a raw
//! [`Value`] and produces one of the normalized model types, so the rest
//! of the crate never touches upstream field names.

use serde_json::Value;

use crate::error::{GatewayError, Result};
use crate::models::{
    Album, AlbumRef, Artist, ArtistRef, ChartEntry, Playlist, PlaylistHit, Track,
};

const WEB_BASE: &str = "https://gaana.com";

/// Reads a string field, accepting numeric values as well since the
/// upstream mixes both for identifiers.
fn get_str(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Reads an unsigned integer field that may arrive as a number or a
/// numeric string.
fn get_u64(value: &Value, key: &str) -> u64 {
    match value.get(key) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn get_u32(value: &Value, key: &str) -> u32 {
    get_u64(value, key).min(u32::MAX as u64) as u32
}

/// `parental_warning` is 1 for explicit content; anything else,
/// including absence, means clean.
fn is_explicit(value: &Value, key: &str) -> bool {
    get_u64(value, key) == 1
}

/// Upgrades a sized artwork URL to its large variant when the upstream
/// handed out a small or medium one.
fn rewrite_artwork(url: &str) -> String {
    if url.contains("size_s.jpg") {
        url.replace("size_s.jpg", "size_l.jpg")
    } else if url.contains("size_m.jpg") {
        url.replace("size_m.jpg", "size_l.jpg")
    } else {
        url.to_string()
    }
}

/// Picks the best artwork from a detail payload: the dedicated large
/// field, then the web field, then the base field upgraded in place.
fn artwork_from(value: &Value) -> String {
    let large = get_str(value, "artwork_large");
    if !large.is_empty() {
        return large;
    }
    let web = get_str(value, "artwork_web");
    if !web.is_empty() {
        return web;
    }
    rewrite_artwork(&get_str(value, "artwork"))
}

/// Extracts artist credits with the upstream's fallback chain: the
/// structured `artist` list when present, otherwise `artist_detail`
/// filtered to singer roles, otherwise the free-text credit string
/// that search-shaped payloads carry.
fn artists_from(value: &Value) -> Vec<ArtistRef> {
    if let Some(list) = value.get("artist").and_then(Value::as_array) {
        if !list.is_empty() {
            return list
                .iter()
                .map(|a| {
                    let id = {
                        let artist_id = get_str(a, "artist_id");
                        if artist_id.is_empty() {
                            get_str(a, "id")
                        } else {
                            artist_id
                        }
                    };
                    ArtistRef::new(get_str(a, "name"), get_str(a, "seokey"), id)
                })
                .collect();
        }
    }

    if let Some(details) = value.get("artist_detail").and_then(Value::as_array) {
        return details
            .iter()
            .filter(|a| get_str(a, "role").contains("Singer"))
            .map(|a| {
                ArtistRef::new(get_str(a, "name"), get_str(a, "seokey"), get_str(a, "artist_id"))
            })
            .collect();
    }

    let text = {
        let sti = get_str(value, "sti");
        if sti.is_empty() {
            get_str(value, "alist")
        } else {
            sti
        }
    };
    // The `alist` form sometimes arrives bracketed: "[A,B]".
    text.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| ArtistRef::new(name, "", ""))
        .collect()
}

/// Formats one track object from a song or playlist detail payload.
///
/// The same schema comes out whether the track arrived standalone or
/// embedded in a playlist. A track without a seokey is rejected.
pub fn song_detail(track: &Value) -> Result<Track> {
    let seokey = get_str(track, "seokey");
    if seokey.is_empty() {
        return Err(GatewayError::invalid_seokey());
    }

    let album_seokey = get_str(track, "albumseokey");
    let album_title = get_str(track, "album_title");
    let album_id = get_str(track, "album_id");
    let album = if album_seokey.is_empty() && album_title.is_empty() && album_id.is_empty() {
        None
    } else {
        Some(AlbumRef {
            album_id,
            title: album_title,
            seokey: album_seokey,
        })
    };

    let isrc = {
        let raw = get_str(track, "isrc");
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    };

    Ok(Track {
        song_url: format!("{WEB_BASE}/song/{seokey}"),
        track_id: get_str(track, "track_id"),
        title: get_str(track, "track_title"),
        duration: get_u64(track, "duration"),
        isrc,
        explicit: is_explicit(track, "parental_warning"),
        language: get_str(track, "language"),
        album,
        artists: artists_from(track),
        artwork_url: artwork_from(track),
        seokey,
    })
}

/// Formats an album detail payload.
///
/// Album-level credits are preferred; when the upstream omits them the
/// credits of the first child track stand in. The embedded track list
/// is left empty here and populated by the caller when requested.
pub fn album_detail(results: &Value, with_tracks: bool) -> Result<Album> {
    let album = results.get("album").ok_or_else(GatewayError::no_results)?;
    let seokey = get_str(album, "seokey");
    if seokey.is_empty() {
        return Err(GatewayError::no_results());
    }

    let artists = {
        let own = artists_from(album);
        if own.is_empty() {
            results
                .get("tracks")
                .and_then(Value::as_array)
                .and_then(|tracks| tracks.first())
                .map(artists_from)
                .unwrap_or_default()
        } else {
            own
        }
    };

    let release_date = {
        let raw = get_str(album, "release_date");
        if raw.is_empty() {
            None
        } else {
            Some(raw)
        }
    };

    Ok(Album {
        album_url: format!("{WEB_BASE}/album/{seokey}"),
        album_id: get_str(album, "album_id"),
        title: get_str(album, "title"),
        artists,
        duration: get_u64(album, "duration"),
        explicit: is_explicit(album, "parental_warning"),
        language: get_str(album, "language"),
        label: get_str(album, "recordlevel"),
        track_count: get_u32(album, "trackcount"),
        release_date,
        play_count: get_u64(album, "al_play_ct"),
        favorite_count: get_u64(album, "favorite_count"),
        artwork_url: rewrite_artwork(&get_str(album, "artwork")),
        tracks: if with_tracks { Some(Vec::new()) } else { None },
        seokey,
    })
}

/// Child track seokeys of an album detail payload, in upstream order.
pub fn album_track_seokeys(results: &Value) -> Vec<String> {
    results
        .get("tracks")
        .and_then(Value::as_array)
        .map(|tracks| {
            tracks
                .iter()
                .map(|t| get_str(t, "seokey"))
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Formats a playlist detail payload, including its embedded tracks.
///
/// Playlist payloads carry full track objects inline; tracks that fail
/// to format are dropped without failing the playlist.
pub fn playlist_detail(results: &Value) -> Result<Playlist> {
    let playlist = results
        .get("playlist")
        .ok_or_else(GatewayError::no_results)?;
    let seokey = get_str(playlist, "seokey");
    if seokey.is_empty() {
        return Err(GatewayError::no_results());
    }

    let count = get_u64(results, "count") as usize;
    let tracks = results
        .get("tracks")
        .and_then(Value::as_array)
        .map(|raw| {
            let cap = if count == 0 { raw.len() } else { count.min(raw.len()) };
            raw[..cap]
                .iter()
                .filter_map(|t| song_detail(t).ok())
                .collect()
        })
        .unwrap_or_default();

    Ok(Playlist {
        playlist_url: format!("{WEB_BASE}/playlist/{seokey}"),
        playlist_id: get_str(playlist, "playlist_id"),
        title: get_str(playlist, "title"),
        artwork_url: artwork_from(playlist),
        description: get_str(playlist, "detailed_description"),
        author: get_str(playlist, "createdby"),
        track_count: get_u32(playlist, "trackcount"),
        favorite_count: get_str(playlist, "favorite_count"),
        language: get_str(playlist, "language"),
        created_on: get_str(playlist, "created_on"),
        modified_on: get_str(playlist, "modified_on"),
        tracks,
        seokey,
    })
}

/// Formats a playlist search payload into thin playlist summaries.
/// Entries without a seokey are skipped.
pub fn playlist_search(results: &Value, limit: usize) -> Vec<PlaylistHit> {
    search_group(results)
        .iter()
        .take(limit)
        .filter_map(|p| {
            let seokey = get_str(p, "seo");
            if seokey.is_empty() {
                return None;
            }
            Some(PlaylistHit {
                playlist_url: format!("{WEB_BASE}/playlist/{seokey}"),
                playlist_id: get_str(p, "id"),
                title: get_str(p, "ti"),
                artists: get_str(p, "sti"),
                language: get_str(p, "language"),
                artwork_url: rewrite_artwork(&get_str(p, "aw")),
                seokey,
            })
        })
        .collect()
}

/// Formats an artist search payload. Hits carry no top-track data.
pub fn artist_search(results: &Value, limit: usize) -> Vec<Artist> {
    search_group(results)
        .iter()
        .take(limit)
        .filter_map(|a| {
            let seokey = get_str(a, "seo");
            if seokey.is_empty() {
                return None;
            }
            Some(Artist {
                artist_url: format!("{WEB_BASE}/artist/{seokey}"),
                artist_id: get_str(a, "id"),
                name: get_str(a, "ti"),
                artwork_url: rewrite_artwork(&get_str(a, "aw")),
                top_tracks: Vec::new(),
                seokey,
            })
        })
        .collect()
}

/// Formats an artist detail payload. The upstream returns a one-element
/// `artist` array; an empty array means the seokey resolved to nothing.
pub fn artist_info(results: &Value) -> Result<Artist> {
    let artist = results
        .get("artist")
        .and_then(Value::as_array)
        .and_then(|a| a.first())
        .ok_or_else(GatewayError::no_results)?;

    let seokey = get_str(artist, "seokey");
    let artwork = {
        let sized = get_str(artist, "artwork_175x175");
        if sized.is_empty() {
            get_str(artist, "artwork")
        } else {
            sized
        }
    };

    Ok(Artist {
        artist_url: format!("{WEB_BASE}/artist/{seokey}"),
        artist_id: get_str(artist, "artist_id"),
        name: get_str(artist, "name"),
        artwork_url: artwork,
        top_tracks: Vec::new(),
        seokey,
    })
}

/// Formats an artist top-tracks payload.
///
/// Top-track entities spread their fields across a key/value
/// `entity_info` list instead of using the detail schema; this
/// flattens them back into the unified track shape. Entities without
/// a seokey are skipped.
pub fn artist_top_tracks(results: &Value) -> Vec<Track> {
    let entities = match results.get("entities").and_then(Value::as_array) {
        Some(entities) => entities,
        None => return Vec::new(),
    };

    entities
        .iter()
        .filter_map(|entity| {
            let seokey = get_str(entity, "seokey");
            if seokey.is_empty() {
                return None;
            }

            let duration = entity_info(entity, "duration")
                .map(|v| match v {
                    Value::Number(n) => n.as_u64().unwrap_or(0),
                    Value::String(s) => s.trim().parse().unwrap_or(0),
                    _ => 0,
                })
                .unwrap_or(0);

            let isrc = entity_info(entity, "isrc")
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string);

            let album = entity_info(entity, "album")
                .and_then(Value::as_array)
                .and_then(|a| a.first())
                .map(|a| AlbumRef {
                    album_id: get_str(a, "album_id"),
                    title: get_str(a, "name"),
                    seokey: get_str(a, "album_seokey"),
                });

            let artists = entity_info(entity, "artist")
                .and_then(Value::as_array)
                .map(|list| {
                    list.iter()
                        .map(|a| {
                            ArtistRef::new(
                                get_str(a, "name"),
                                get_str(a, "seokey"),
                                get_str(a, "artist_id"),
                            )
                        })
                        .collect()
                })
                .unwrap_or_default();

            let artwork = {
                let large = get_str(entity, "artwork_large");
                let web = get_str(entity, "artwork_web");
                if !large.is_empty() {
                    large
                } else if !web.is_empty() {
                    web
                } else {
                    let medium = get_str(entity, "artwork_medium");
                    if medium.is_empty() {
                        rewrite_artwork(&get_str(entity, "artwork"))
                    } else {
                        rewrite_artwork(&medium)
                    }
                }
            };

            Some(Track {
                song_url: format!("{WEB_BASE}/song/{seokey}"),
                track_id: get_str(entity, "entity_id"),
                title: get_str(entity, "name"),
                duration,
                isrc,
                explicit: false,
                language: get_str(entity, "language"),
                album,
                artists,
                artwork_url: artwork,
                seokey,
            })
        })
        .collect()
}

/// Looks up one key in an entity's key/value info list.
fn entity_info<'a>(entity: &'a Value, key: &str) -> Option<&'a Value> {
    entity
        .get("entity_info")
        .and_then(Value::as_array)?
        .iter()
        .find(|info| info.get("key").and_then(Value::as_str) == Some(key))
        .and_then(|info| info.get("value"))
}

/// Formats one top-charts entity.
///
/// The explicit flag sits at a fixed position in `entity_info` and the
/// play count is always the final element.
pub fn chart_entry(entity: &Value) -> Result<ChartEntry> {
    let seokey = get_str(entity, "seokey");
    if seokey.is_empty() {
        return Err(GatewayError::no_results());
    }

    let info = entity
        .get("entity_info")
        .and_then(Value::as_array)
        .ok_or_else(GatewayError::no_results)?;

    let info_value = |idx: usize| -> u64 {
        info.get(idx)
            .and_then(|v| v.get("value"))
            .map(|v| match v {
                Value::Number(n) => n.as_u64().unwrap_or(0),
                Value::String(s) => s.trim().parse().unwrap_or(0),
                _ => 0,
            })
            .unwrap_or(0)
    };

    Ok(ChartEntry {
        playlist_url: format!("{WEB_BASE}/playlist/{seokey}"),
        playlist_id: get_str(entity, "entity_id"),
        title: get_str(entity, "name"),
        language: get_str(entity, "language"),
        favorite_count: get_u64(entity, "favorite_count"),
        explicit: info_value(6) == 1,
        play_count: info_value(info.len().saturating_sub(1)),
        artwork_url: rewrite_artwork(&get_str(entity, "atw")),
        seokey,
    })
}

/// Track seokeys from a trending payload, in upstream order.
pub fn trending_seokeys(results: &Value) -> Result<Vec<String>> {
    let seokeys: Vec<String> = results
        .get("entities")
        .and_then(Value::as_array)
        .map(|entities| {
            entities
                .iter()
                .map(|e| get_str(e, "seokey"))
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    if seokeys.is_empty() {
        return Err(GatewayError::no_results());
    }
    Ok(seokeys)
}

/// Splits a new-releases payload into track and album seokeys by
/// entity type (`TR` / `AL`). Errors when neither list has entries.
pub fn new_release_seokeys(results: &Value) -> Result<(Vec<String>, Vec<String>)> {
    let mut track_seokeys = Vec::new();
    let mut album_seokeys = Vec::new();

    if let Some(entities) = results.get("entities").and_then(Value::as_array) {
        for entity in entities {
            let seokey = get_str(entity, "seokey");
            if seokey.is_empty() {
                continue;
            }
            match get_str(entity, "entity_type").as_str() {
                "TR" => track_seokeys.push(seokey),
                "AL" => album_seokeys.push(seokey),
                _ => {}
            }
        }
    }

    if track_seokeys.is_empty() && album_seokeys.is_empty() {
        return Err(GatewayError::no_results());
    }
    Ok((track_seokeys, album_seokeys))
}

/// Seokeys from a search payload's first result group, in order,
/// capped at `limit`.
pub fn search_seokeys(results: &Value, limit: usize) -> Vec<String> {
    search_group(results)
        .iter()
        .take(limit)
        .map(|hit| get_str(hit, "seo"))
        .filter(|s| !s.is_empty())
        .collect()
}

/// The hit list of a search payload: `gr[0].gd`, empty when absent.
fn search_group(results: &Value) -> &[Value] {
    results
        .get("gr")
        .and_then(Value::as_array)
        .and_then(|gr| gr.first())
        .and_then(|g| g.get("gd"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_track() -> Value {
        json!({
            "seokey": "tum-hi-ho",
            "track_id": "29797868",
            "track_title": "Tum Hi Ho",
            "isrc": "INH101301205",
            "duration": "262",
            "albumseokey": "aashiqui-2",
            "album_title": "Aashiqui 2",
            "album_id": "1236584",
            "artist": [
                {"name": "Arijit Singh", "seokey": "arijit-singh", "artist_id": "14426"}
            ],
            "artist_detail": [
                {"name": "Arijit Singh", "role": "Singer", "seokey": "arijit-singh", "artist_id": "14426"},
                {"name": "Mithoon", "role": "Composer", "seokey": "mithoon", "artist_id": "655"}
            ],
            "artwork": "https://a10.gaanacdn.com/images/albums/84/1236584/crop_480x480_1236584.jpg",
            "parental_warning": 0,
            "language": "Hindi"
        })
    }

    #[test]
    fn test_song_detail_normalizes_fields() {
        let track = song_detail(&sample_track()).unwrap();
        assert_eq!(track.seokey, "tum-hi-ho");
        assert_eq!(track.track_id, "29797868");
        assert_eq!(track.title, "Tum Hi Ho");
        assert_eq!(track.duration, 262);
        assert_eq!(track.isrc.as_deref(), Some("INH101301205"));
        assert!(!track.explicit);
        assert_eq!(track.language, "Hindi");
        assert_eq!(track.song_url, "https://gaana.com/song/tum-hi-ho");

        let album = track.album.unwrap();
        assert_eq!(album.seokey, "aashiqui-2");
        assert_eq!(album.title, "Aashiqui 2");

        assert_eq!(track.artists.len(), 1);
        assert_eq!(track.artists[0].name, "Arijit Singh");
    }

    #[test]
    fn test_song_detail_requires_seokey() {
        let err = song_detail(&json!({"track_id": "1"})).unwrap_err();
        assert_eq!(err.to_string(), "Missing or invalid seokey.");
    }

    #[test]
    fn test_song_detail_falls_back_to_singers() {
        let mut raw = sample_track();
        raw["artist"] = json!([]);
        let track = song_detail(&raw).unwrap();
        // Composer filtered out, singer kept.
        assert_eq!(track.artists.len(), 1);
        assert_eq!(track.artists[0].name, "Arijit Singh");
    }

    #[test]
    fn test_artists_free_text_fallback() {
        let bracketed = json!({"alist": "[Arijit Singh,Shreya Ghoshal]"});
        let names: Vec<String> = artists_from(&bracketed)
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["Arijit Singh", "Shreya Ghoshal"]);

        let plain = json!({"sti": "Arijit Singh, Mithoon"});
        assert_eq!(artists_from(&plain).len(), 2);

        assert!(artists_from(&json!({})).is_empty());
    }

    #[test]
    fn test_song_detail_explicit_flag() {
        let mut raw = sample_track();
        raw["parental_warning"] = json!(1);
        assert!(song_detail(&raw).unwrap().explicit);
    }

    #[test]
    fn test_artwork_priority_and_rewrite() {
        let mut raw = sample_track();
        raw["artwork"] = json!("https://cdn.example/img/size_s.jpg");
        let track = song_detail(&raw).unwrap();
        assert_eq!(track.artwork_url, "https://cdn.example/img/size_l.jpg");

        raw["artwork_web"] = json!("https://cdn.example/web.jpg");
        let track = song_detail(&raw).unwrap();
        assert_eq!(track.artwork_url, "https://cdn.example/web.jpg");

        raw["artwork_large"] = json!("https://cdn.example/large.jpg");
        let track = song_detail(&raw).unwrap();
        assert_eq!(track.artwork_url, "https://cdn.example/large.jpg");
    }

    #[test]
    fn test_album_detail() {
        let raw = json!({
            "album": {
                "seokey": "aashiqui-2",
                "album_id": "1236584",
                "title": "Aashiqui 2",
                "artist": [{"name": "Mithoon", "seokey": "mithoon", "artist_id": "655"}],
                "parental_warning": 0,
                "language": "Hindi",
                "recordlevel": "T-Series",
                "trackcount": 11,
                "duration": 3093,
                "release_date": "2013-04-06",
                "al_play_ct": 420000000u64,
                "favorite_count": 900000,
                "artwork": "https://cdn.example/crop_175x175.jpg"
            },
            "tracks": [sample_track()]
        });

        let album = album_detail(&raw, true).unwrap();
        assert_eq!(album.seokey, "aashiqui-2");
        assert_eq!(album.label, "T-Series");
        assert_eq!(album.track_count, 11);
        assert_eq!(album.release_date.as_deref(), Some("2013-04-06"));
        assert_eq!(album.artists[0].name, "Mithoon");
        assert_eq!(album.tracks, Some(Vec::new()));
        assert_eq!(album.album_url, "https://gaana.com/album/aashiqui-2");

        let without = album_detail(&raw, false).unwrap();
        assert!(without.tracks.is_none());
    }

    #[test]
    fn test_album_detail_artist_fallback_to_first_track() {
        let raw = json!({
            "album": {
                "seokey": "aashiqui-2",
                "album_id": "1236584",
                "title": "Aashiqui 2",
                "artist": [],
                "trackcount": 11,
                "duration": 3093,
                "artwork": ""
            },
            "tracks": [sample_track()]
        });
        let album = album_detail(&raw, false).unwrap();
        assert_eq!(album.artists[0].name, "Arijit Singh");
    }

    #[test]
    fn test_album_detail_without_album_object() {
        let err = album_detail(&json!({"tracks": []}), false).unwrap_err();
        assert_eq!(err.to_string(), "Unable to find any results!");
    }

    #[test]
    fn test_album_track_seokeys_in_order() {
        let raw = json!({
            "tracks": [
                {"seokey": "one"},
                {"seokey": ""},
                {"seokey": "three"}
            ]
        });
        assert_eq!(album_track_seokeys(&raw), vec!["one", "three"]);
    }

    #[test]
    fn test_playlist_detail_embeds_tracks_and_drops_invalid() {
        let mut bad_track = sample_track();
        bad_track["seokey"] = json!("");
        let raw = json!({
            "playlist": {
                "seokey": "bollywood-top-50",
                "playlist_id": "1234",
                "title": "Bollywood Top 50",
                "artwork": "https://cdn.example/size_m.jpg",
                "detailed_description": "The biggest hits.",
                "createdby": "Gaana",
                "trackcount": 50,
                "favorite_count": "1.2M",
                "language": "Hindi",
                "created_on": "2020-01-01",
                "modified_on": "2024-06-01"
            },
            "tracks": [sample_track(), bad_track, sample_track()],
            "count": 3
        });

        let playlist = playlist_detail(&raw).unwrap();
        assert_eq!(playlist.seokey, "bollywood-top-50");
        assert_eq!(playlist.author, "Gaana");
        assert_eq!(playlist.favorite_count, "1.2M");
        assert_eq!(playlist.tracks.len(), 2);
        assert_eq!(
            playlist.playlist_url,
            "https://gaana.com/playlist/bollywood-top-50"
        );
    }

    #[test]
    fn test_playlist_track_identical_to_standalone() {
        let raw = json!({
            "playlist": {"seokey": "p", "playlist_id": "1", "title": "P", "trackcount": 1},
            "tracks": [sample_track()],
            "count": 1
        });
        let embedded = playlist_detail(&raw).unwrap().tracks.remove(0);
        let standalone = song_detail(&sample_track()).unwrap();
        assert_eq!(embedded, standalone);
    }

    #[test]
    fn test_playlist_search_skips_missing_seokeys() {
        let raw = json!({
            "gr": [{"gd": [
                {"seo": "first", "id": "1", "ti": "First", "sti": "Various", "aw": "https://cdn.example/size_s.jpg"},
                {"id": "2", "ti": "No Seokey"},
                {"seo": "third", "id": "3", "ti": "Third"}
            ]}]
        });
        let hits = playlist_search(&raw, 10);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].seokey, "first");
        assert_eq!(hits[0].artwork_url, "https://cdn.example/size_l.jpg");
        assert_eq!(hits[1].seokey, "third");
    }

    #[test]
    fn test_artist_search_and_info() {
        let search = json!({
            "gr": [{"gd": [
                {"seo": "arijit-singh", "id": "14426", "ti": "Arijit Singh", "aw": "https://cdn.example/a.jpg"}
            ]}]
        });
        let hits = artist_search(&search, 5);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Arijit Singh");
        assert_eq!(hits[0].artist_url, "https://gaana.com/artist/arijit-singh");

        let detail = json!({
            "artist": [{
                "artist_id": "14426",
                "seokey": "arijit-singh",
                "name": "Arijit Singh",
                "artwork_175x175": "https://cdn.example/175.jpg",
                "artwork": "https://cdn.example/base.jpg"
            }]
        });
        let artist = artist_info(&detail).unwrap();
        assert_eq!(artist.artwork_url, "https://cdn.example/175.jpg");

        let empty = json!({"artist": []});
        assert!(artist_info(&empty).is_err());
    }

    #[test]
    fn test_artist_top_tracks_entity_info() {
        let raw = json!({
            "entities": [{
                "seokey": "tum-hi-ho",
                "entity_id": "29797868",
                "name": "Tum Hi Ho",
                "language": "Hindi",
                "artwork_medium": "https://cdn.example/size_m.jpg",
                "entity_info": [
                    {"key": "duration", "value": "262"},
                    {"key": "isrc", "value": "INH101301205"},
                    {"key": "album", "value": [{"album_id": "1236584", "name": "Aashiqui 2", "album_seokey": "aashiqui-2"}]},
                    {"key": "artist", "value": [{"artist_id": "14426", "name": "Arijit Singh", "seokey": "arijit-singh"}]}
                ]
            }, {
                "name": "no seokey, skipped"
            }]
        });

        let tracks = artist_top_tracks(&raw);
        assert_eq!(tracks.len(), 1);
        let track = &tracks[0];
        assert_eq!(track.duration, 262);
        assert_eq!(track.isrc.as_deref(), Some("INH101301205"));
        assert_eq!(track.album.as_ref().unwrap().seokey, "aashiqui-2");
        assert_eq!(track.artists[0].name, "Arijit Singh");
        assert_eq!(track.artwork_url, "https://cdn.example/size_l.jpg");
    }

    #[test]
    fn test_chart_entry() {
        let info: Vec<Value> = (0..8)
            .map(|i| json!({"key": format!("k{i}"), "value": if i == 6 { 1 } else { i * 100 }}))
            .collect();
        let raw = json!({
            "seokey": "gaana-top-50",
            "entity_id": "9999",
            "name": "Gaana Top 50",
            "language": "Hindi",
            "favorite_count": 123456,
            "entity_info": info,
            "atw": "https://cdn.example/size_m.jpg"
        });

        let entry = chart_entry(&raw).unwrap();
        assert_eq!(entry.playlist_id, "9999");
        assert!(entry.explicit);
        assert_eq!(entry.play_count, 700);
        assert_eq!(entry.artwork_url, "https://cdn.example/size_l.jpg");
    }

    #[test]
    fn test_trending_and_new_release_seokeys() {
        let trending = json!({"entities": [{"seokey": "a"}, {"seokey": "b"}]});
        assert_eq!(trending_seokeys(&trending).unwrap(), vec!["a", "b"]);
        assert!(trending_seokeys(&json!({"entities": []})).is_err());

        let releases = json!({"entities": [
            {"entity_type": "TR", "seokey": "t1"},
            {"entity_type": "AL", "seokey": "a1"},
            {"entity_type": "PL", "seokey": "ignored"},
            {"entity_type": "TR", "seokey": "t2"}
        ]});
        let (tracks, albums) = new_release_seokeys(&releases).unwrap();
        assert_eq!(tracks, vec!["t1", "t2"]);
        assert_eq!(albums, vec!["a1"]);
        assert!(new_release_seokeys(&json!({"entities": []})).is_err());
    }

    #[test]
    fn test_search_seokeys_caps_at_limit() {
        let raw = json!({
            "gr": [{"gd": [{"seo": "a"}, {"seo": "b"}, {"seo": "c"}]}]
        });
        assert_eq!(search_seokeys(&raw, 2), vec!["a", "b"]);
        assert!(search_seokeys(&json!({}), 2).is_empty());
    }
}
