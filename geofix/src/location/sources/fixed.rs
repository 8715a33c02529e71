//! Position sources with predetermined behavior.

use crate::location::sources::{Position, PositionError, PositionSource};
use crate::store::BoxFuture;

/// Position source that always reports the same configured reading.
///
/// This is what the CLI wires up from the `[location]` section of the
/// config file, standing in for device GPS on machines that have none.
#[derive(Debug, Clone, Copy)]
pub struct FixedPositionSource {
    latitude: f64,
    longitude: f64,
}

impl FixedPositionSource {
    /// Create a source reporting the given reading.
    ///
    /// Values are deliberately not validated here; the provider validates
    /// readings like it would any device report.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl PositionSource for FixedPositionSource {
    fn current_position(&self) -> BoxFuture<'_, Result<Position, PositionError>> {
        let position = Position {
            latitude: self.latitude,
            longitude: self.longitude,
        };
        Box::pin(async move { Ok(position) })
    }
}

/// Position source that always fails.
#[derive(Debug, Clone, Default)]
pub struct UnavailablePositionSource {
    reason: Option<String>,
}

impl UnavailablePositionSource {
    /// Create a source that fails with a generic reason.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a source that fails with the given reason.
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl PositionSource for UnavailablePositionSource {
    fn current_position(&self) -> BoxFuture<'_, Result<Position, PositionError>> {
        let reason = self
            .reason
            .clone()
            .unwrap_or_else(|| "no positioning service".to_string());
        Box::pin(async move { Err(PositionError::Unavailable(reason)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_source_reports_configured_reading() {
        let source = FixedPositionSource::new(37.0, -122.0);
        let position = source.current_position().await.unwrap();
        assert_eq!(position.latitude, 37.0);
        assert_eq!(position.longitude, -122.0);
    }

    #[tokio::test]
    async fn test_unavailable_source_fails() {
        let source = UnavailablePositionSource::with_reason("no gps chip");
        let err = source.current_position().await.unwrap_err();
        assert_eq!(err, PositionError::Unavailable("no gps chip".to_string()));
    }
}
