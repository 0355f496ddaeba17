//! Normalized output models.
//!
//! Every entity here is a read-only value derived from an upstream
//! response at request time; nothing is persisted. Full-detail and
//! summary lookups for the same resource kind converge on the same
//! struct so callers can treat them interchangeably.

pub mod album;
pub mod artist;
pub mod common;
pub mod playlist;
pub mod track;

pub use album::Album;
pub use artist::Artist;
pub use common::{AlbumRef, ArtistRef, Quality, StreamTarget};
pub use playlist::{ChartEntry, Playlist, PlaylistHit};
pub use track::Track;
