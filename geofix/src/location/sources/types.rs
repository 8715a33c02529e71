//! Source traits and raw reading types.

use thiserror::Error;

use crate::store::BoxFuture;

/// Outcome of a foreground permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermissionStatus {
    /// Whether the user granted foreground location access.
    pub granted: bool,
}

impl PermissionStatus {
    /// A granted status.
    pub const fn granted() -> Self {
        Self { granted: true }
    }

    /// A denied status.
    pub const fn denied() -> Self {
        Self { granted: false }
    }
}

/// A raw position reading as reported by a device API.
///
/// Unvalidated; the provider converts readings into
/// [`crate::coord::Coordinates`] and treats out-of-range values as a failed
/// fetch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Reported latitude in degrees.
    pub latitude: f64,
    /// Reported longitude in degrees.
    pub longitude: f64,
}

/// Errors a position source can report.
///
/// All variants collapse to the same generic fetch failure at the provider
/// surface; the distinction exists for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PositionError {
    /// Access was denied after permission appeared granted.
    #[error("Position access denied")]
    Denied,

    /// The reading did not arrive in time.
    #[error("Position request timed out")]
    Timeout,

    /// Positioning hardware or service is unavailable.
    #[error("Position unavailable: {0}")]
    Unavailable(String),
}

/// Foreground location permission API.
///
/// Implementations must be `Send + Sync`; the trait uses boxed futures so
/// sources can be held as `Arc<dyn PermissionSource>` trait objects.
pub trait PermissionSource: Send + Sync {
    /// Request foreground location permission from the user.
    ///
    /// A request never fails; it resolves to granted or denied.
    fn request_foreground(&self) -> BoxFuture<'_, PermissionStatus>;
}

/// Device position API.
///
/// Implementations must be `Send + Sync`; the trait uses boxed futures so
/// sources can be held as `Arc<dyn PositionSource>` trait objects.
pub trait PositionSource: Send + Sync {
    /// Fetch the current device position once.
    fn current_position(&self) -> BoxFuture<'_, Result<Position, PositionError>>;
}
