//! Map region arithmetic.
//!
//! A `MapRegion` describes the visible map viewport: a center point plus the
//! angular span (delta, in degrees) visible on each axis. Smaller deltas mean
//! a closer zoom. All zoom math lives here as pure functions on the value
//! type; stateful sequencing belongs to [`crate::viewport`].
//!
//! # Delta band
//!
//! Deltas are constrained to `MIN_DELTA..=MAX_DELTA`. A zoom step that would
//! leave the band is rejected (`None`) rather than clamped, so the region
//! saturates at the last legal step and repeated zooming never walks a delta
//! out of the band.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinates;

/// Smallest permitted delta on either axis (tightest zoom).
pub const MIN_DELTA: f64 = 0.0001;

/// Largest permitted delta on either axis (widest zoom).
pub const MAX_DELTA: f64 = 50.0;

/// Delta applied on both axes when a region is built from a fix.
pub const DEFAULT_DELTA: f64 = 0.01;

/// Multiplicative step applied per zoom operation.
pub const ZOOM_STEP: f64 = 1.5;

/// The visible map viewport: center point plus zoom span per axis.
///
/// Invariant: both deltas lie within `MIN_DELTA..=MAX_DELTA`. Constructors
/// and zoom operations preserve it; a region never escapes the band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    /// Center latitude in degrees.
    pub latitude: f64,
    /// Center longitude in degrees.
    pub longitude: f64,
    /// Visible latitude span in degrees.
    pub latitude_delta: f64,
    /// Visible longitude span in degrees.
    pub longitude_delta: f64,
}

impl MapRegion {
    /// Build a region centered on the given coordinates with default deltas.
    pub fn centered_at(coords: Coordinates) -> Self {
        Self {
            latitude: coords.latitude,
            longitude: coords.longitude,
            latitude_delta: DEFAULT_DELTA,
            longitude_delta: DEFAULT_DELTA,
        }
    }

    /// The viewport shown before any fix is available: the origin with
    /// default deltas.
    pub fn unlocated() -> Self {
        Self::centered_at(Coordinates::origin())
    }

    /// The region center as coordinates.
    pub fn center(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    /// One zoom step closer: both deltas divided by [`ZOOM_STEP`].
    ///
    /// Returns `None` if either shrunk delta would reach or cross
    /// [`MIN_DELTA`]; the caller treats that as a no-op. The center is
    /// unchanged.
    pub fn zoomed_in(&self) -> Option<Self> {
        let latitude_delta = self.latitude_delta / ZOOM_STEP;
        let longitude_delta = self.longitude_delta / ZOOM_STEP;

        if latitude_delta > MIN_DELTA && longitude_delta > MIN_DELTA {
            Some(Self {
                latitude_delta,
                longitude_delta,
                ..*self
            })
        } else {
            None
        }
    }

    /// One zoom step wider: both deltas multiplied by [`ZOOM_STEP`].
    ///
    /// Returns `None` if either grown delta would reach or cross
    /// [`MAX_DELTA`]; the caller treats that as a no-op. The center is
    /// unchanged.
    pub fn zoomed_out(&self) -> Option<Self> {
        let latitude_delta = self.latitude_delta * ZOOM_STEP;
        let longitude_delta = self.longitude_delta * ZOOM_STEP;

        if latitude_delta < MAX_DELTA && longitude_delta < MAX_DELTA {
            Some(Self {
                latitude_delta,
                longitude_delta,
                ..*self
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for MapRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "center {:.6}, {:.6} span {:.4}×{:.4}",
            self.latitude, self.longitude, self.latitude_delta, self.longitude_delta
        )
    }
}
