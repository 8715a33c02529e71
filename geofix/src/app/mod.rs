//! Application bootstrap.
//!
//! `GeofixApp` wires the durable store, the device source adapters, the
//! location provider, and the viewport controller together, owns the tokio
//! runtime they run on, and exposes blocking accessors for synchronous
//! callers such as the CLI.

mod bootstrap;
mod config;
mod error;

pub use bootstrap::GeofixApp;
pub use config::{AppConfig, LocationAppConfig, StoreAppConfig};
pub use error::AppError;
