//! Geofix - device location fixes and map viewport state.
//!
//! This library implements the headless core of a map screen: acquire the
//! device position once (permission request, then a single fetch), persist
//! the last successful fix, and maintain the map viewport derived from it.
//! Rendering is someone else's job; consumers subscribe to committed state
//! and invoke viewport operations in response to user gestures.
//!
//! # Architecture
//!
//! ```text
//! PermissionSource ─┐
//! PositionSource  ─┼─► LocationProvider ─► LocationState ─► ViewportController
//! Store (persist) ─┘                                              │
//!                                                                 ▼
//!                                                        ViewportSnapshot ─► rendering layer
//! ```
//!
//! [`app::GeofixApp`] wires the pieces together for embedders that want the
//! whole flow; the components compose individually for everyone else.

pub mod app;
pub mod config;
pub mod coord;
pub mod location;
pub mod log;
pub mod region;
pub mod store;
pub mod viewport;

pub use coord::Coordinates;
pub use location::{LocationError, LocationState};
pub use region::MapRegion;
pub use viewport::{ViewportController, ViewportSnapshot};

/// Crate version, for banners and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_is_not_empty() {
        assert!(!super::VERSION.is_empty());
    }
}
