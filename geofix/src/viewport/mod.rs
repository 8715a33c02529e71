//! Map viewport state.
//!
//! The [`ViewportController`] owns the current [`crate::region::MapRegion`]
//! as the sole source of truth and applies the zoom and recenter operations
//! invoked by user gestures. Rendering layers consume a one-way projection
//! of committed state (a watch channel of [`ViewportSnapshot`]s) and never
//! feed a region back, so consecutive operations always compound on the
//! last committed region even when rendering lags.
//!
//! # Zoom policy
//!
//! Zooming in either direction preserves the current region center; the
//! view only moves to the tracked device coordinates on an explicit
//! [`recenter`](ViewportController::recenter).
//!
//! # Example
//!
//! ```ignore
//! use geofix::viewport::{ViewportConfig, ViewportController};
//!
//! let viewport = ViewportController::new(ViewportConfig::default());
//! let mut frames = viewport.subscribe();
//!
//! viewport.initialize(fix);
//! viewport.zoom_in();
//! viewport.recenter();
//! ```

mod controller;

pub use controller::{
    ViewportConfig, ViewportController, ViewportSnapshot, DEFAULT_SETTLE_DELAY,
};
