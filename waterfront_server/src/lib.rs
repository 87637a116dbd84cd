//! # waterfront_server - HTTP JSON service for the screening models
//!
//! Exposes each `waterfront_core` model as a POST endpoint plus reference
//! data (state profiles, the equation registry).
//!
//! ```no_run
//! use waterfront_server::{create_router, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let listener = tokio::net::TcpListener::bind(config.socket_addr()?).await?;
//!     axum::serve(listener, create_router()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;

pub use api::create_router;
pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ErrorBody};
