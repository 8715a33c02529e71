//! Device location acquisition.
//!
//! This module implements the single-shot location flow: request foreground
//! permission, fetch the current position once, publish the outcome, and
//! persist the last successful fix. There is no retry, no polling, and no
//! refresh operation; one acquisition happens per activation.
//!
//! # Architecture
//!
//! ```text
//! PermissionSource ──► LocationProvider ──► watch::Receiver<LocationState>
//! PositionSource  ──►        │
//!                            └──► Store (fire-and-forget persist)
//! ```
//!
//! External device APIs enter through the [`PermissionSource`] and
//! [`PositionSource`] seams; the provider owns sequencing and state.
//!
//! # Example
//!
//! ```ignore
//! use geofix::location::{LocationProvider, StaticPermissionSource, FixedPositionSource};
//! use geofix::store::MemoryStore;
//! use std::sync::Arc;
//!
//! let provider = LocationProvider::new(
//!     Arc::new(StaticPermissionSource::granted()),
//!     Arc::new(FixedPositionSource::new(37.0, -122.0)),
//!     Arc::new(MemoryStore::new()),
//! );
//!
//! let mut updates = provider.subscribe();
//! let state = provider.acquire().await;
//! ```

mod error;
mod persisted;
mod provider;
mod sources;
mod state;

pub use error::LocationError;
pub use persisted::{PersistedLocation, LOCATION_KEY, PERSISTED_LOCATION_ID, PERSISTED_LOCATION_TITLE};
pub use provider::LocationProvider;
pub use sources::{
    FixedPositionSource, PermissionSource, PermissionStatus, Position, PositionError,
    PositionSource, StaticPermissionSource, UnavailablePositionSource,
};
pub use state::LocationState;
