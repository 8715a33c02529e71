//! Location acquisition error surface.

use thiserror::Error;

/// The two failure outcomes of a location acquisition.
///
/// Both are terminal for the single fetch attempt. The display strings are
/// the user-facing reason shown by the rendering layer; no further structure
/// or root-cause detail is exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Foreground location permission was not granted. No position fetch
    /// was attempted.
    #[error("Permission to access location was denied")]
    PermissionDenied,

    /// The position fetch failed: API error, permission revoked mid-flight,
    /// timeout, hardware unavailability, or an unusable reading.
    #[error("Error getting location")]
    FetchFailed,
}
