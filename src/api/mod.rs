//! Upstream API access.

pub mod transport;

pub use transport::Transport;
