//! Rustaana is a REST gateway over the undocumented Gaana music catalog
//! API.
//!
//! It validates inputs before anything touches the network, resolves
//! seokeys out of pasted browse URLs, normalizes the upstream's unstable
//! payload schemas into fixed models, and decrypts stream URLs on
//! demand. The HTTP surface is a thin [`axum`] router over the service
//! layer; the services can also be used directly as a library.
//!
//! # Example
//!
//! ```no_run
//! use rustaana::{build_router, AppContext, GatewayConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let ctx = AppContext::new(GatewayConfig::default(), "development");
//!     let app = build_router(ctx);
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod crypto;
pub mod endpoints;
pub mod error;
pub mod formatters;
pub mod models;
pub mod seokey;
pub mod server;
pub mod services;
pub mod validate;

pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use seokey::extract_seokey;
pub use server::{build_router, AppContext};
