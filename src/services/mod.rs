//! Catalog services.
//!
//! Each service owns one slice of the gateway's behavior: detail lookups,
//! search fan-out, curated browse lists, and stream resolution. All of
//! them are stateless beyond a shared [`Transport`] and are cheap to
//! clone.
//!
//! [`Transport`]: crate::api::Transport

pub mod browse;
pub mod details;
pub mod search;
pub mod stream;

pub use browse::{BrowseService, NewReleases};
pub use details::DetailsService;
pub use search::{SearchResults, SearchService};
pub use stream::StreamResolver;
