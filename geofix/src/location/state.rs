//! Published location state.

use crate::coord::Coordinates;
use crate::location::LocationError;

/// The externally observable state of the location acquisition.
///
/// Exactly one of a fix or an error is ever meaningful; `Pending` covers the
/// bounded window before the single acquisition completes. Encoding the
/// outcomes as an enum makes the fix/error mutual exclusion structural.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocationState {
    /// Acquisition has not completed yet.
    Pending,
    /// A fix was obtained; these are the current device coordinates.
    Available(Coordinates),
    /// Acquisition failed; no coordinates are available.
    Failed(LocationError),
}

impl LocationState {
    /// The current coordinates, if a fix was obtained.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            LocationState::Available(coords) => Some(*coords),
            _ => None,
        }
    }

    /// The failure reason, if acquisition failed.
    pub fn error(&self) -> Option<LocationError> {
        match self {
            LocationState::Failed(e) => Some(*e),
            _ => None,
        }
    }

    /// Whether the acquisition is still in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, LocationState::Pending)
    }
}
