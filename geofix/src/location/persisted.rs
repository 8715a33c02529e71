//! Last-known-location persistence record.

use serde::{Deserialize, Serialize};

use crate::coord::Coordinates;
use crate::region::DEFAULT_DELTA;

/// Fixed store key for the last successful fix.
pub const LOCATION_KEY: &str = "location";

/// Fixed identifier carried in every persisted record.
pub const PERSISTED_LOCATION_ID: u32 = 442;

/// Fixed marker title carried in every persisted record.
pub const PERSISTED_LOCATION_TITLE: &str = "Your Current Location";

/// The record written to durable storage after each successful fix.
///
/// Overwritten on every successful fetch; write-only in the acquisition
/// flow. It exists so a later activation can fall back to the last known
/// viewport on cold start (the CLI `last` command reads it today).
///
/// Field names serialize in camelCase to stay compatible with records
/// written by earlier clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedLocation {
    /// Fixed identifier ([`PERSISTED_LOCATION_ID`]).
    pub id: u32,
    /// Fixed marker title ([`PERSISTED_LOCATION_TITLE`]).
    pub title: String,
    /// Latitude of the fix in degrees.
    pub latitude: f64,
    /// Longitude of the fix in degrees.
    pub longitude: f64,
    /// Default viewport latitude span.
    pub latitude_delta: f64,
    /// Default viewport longitude span.
    pub longitude_delta: f64,
}

impl PersistedLocation {
    /// Build the record for a fix, with the fixed identifier, title, and
    /// default deltas.
    pub fn from_fix(coords: Coordinates) -> Self {
        Self {
            id: PERSISTED_LOCATION_ID,
            title: PERSISTED_LOCATION_TITLE.to_string(),
            latitude: coords.latitude,
            longitude: coords.longitude,
            latitude_delta: DEFAULT_DELTA,
            longitude_delta: DEFAULT_DELTA,
        }
    }

    /// The recorded fix as coordinates.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::new(self.latitude, self.longitude).ok()
    }
}
