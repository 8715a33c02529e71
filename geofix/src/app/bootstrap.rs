//! GeofixApp - wiring and lifecycle.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::app::{AppConfig, AppError};
use crate::location::{
    FixedPositionSource, LocationProvider, LocationState, PersistedLocation,
    StaticPermissionSource, LOCATION_KEY,
};
use crate::store::{DiskStore, Store};
use crate::viewport::ViewportController;

/// How long `shutdown` waits for background tasks to wind down.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(1);

/// The assembled application.
///
/// Owns the tokio runtime all background work runs on (the acquisition
/// task, the detached persist write, viewport settle timers), so
/// synchronous callers like the CLI never need a runtime of their own.
/// Acquisition starts immediately on `start()`; there is one acquisition
/// per app instance.
pub struct GeofixApp {
    runtime: Runtime,
    provider: Arc<LocationProvider>,
    viewport: ViewportController,
    store: Arc<dyn Store>,
    cancellation: CancellationToken,
}

impl GeofixApp {
    /// Build the component graph and kick off the location acquisition.
    pub fn start(config: AppConfig) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;

        info!("Starting geofix");

        let store: Arc<dyn Store> = Arc::new(DiskStore::new(config.store.directory.clone()));
        let permission = if config.location.allow {
            StaticPermissionSource::granted()
        } else {
            StaticPermissionSource::denied()
        };
        let position =
            FixedPositionSource::new(config.location.latitude, config.location.longitude);

        let provider = Arc::new(LocationProvider::new(
            Arc::new(permission),
            Arc::new(position),
            Arc::clone(&store),
        ));
        let viewport = ViewportController::new(config.viewport.clone());

        let cancellation = CancellationToken::new();
        {
            let provider = Arc::clone(&provider);
            let viewport = viewport.clone();
            let cancelled = cancellation.clone();
            runtime.spawn(async move {
                tokio::select! {
                    _ = cancelled.cancelled() => {
                        debug!("Acquisition cancelled before completion");
                    }
                    state = provider.acquire() => {
                        if let Some(coords) = state.coordinates() {
                            viewport.initialize(coords);
                        }
                    }
                }
            });
        }

        Ok(Self {
            runtime,
            provider,
            viewport,
            store,
            cancellation,
        })
    }

    /// Block until the acquisition resolves or the timeout elapses.
    ///
    /// Returns the state at that moment - still `Pending` on timeout.
    pub fn wait_for_fix(&self, timeout: Duration) -> LocationState {
        let mut updates = self.provider.subscribe();
        let resolved = self.runtime.block_on(async move {
            tokio::time::timeout(timeout, updates.wait_for(|s| !s.is_pending()))
                .await
                .ok()
                .and_then(|outcome| outcome.ok().map(|state| *state))
        });
        resolved.unwrap_or_else(|| self.provider.state())
    }

    /// The most recently published location state.
    pub fn location_state(&self) -> LocationState {
        self.provider.state()
    }

    /// Subscribe to location state updates.
    pub fn subscribe_location(&self) -> watch::Receiver<LocationState> {
        self.provider.subscribe()
    }

    /// The viewport controller (cheap clone; shares state with the app).
    ///
    /// Operations that spawn timers (`recenter`) must run within the app
    /// runtime; wrap calls with [`enter`](Self::enter) from synchronous
    /// code.
    pub fn viewport(&self) -> ViewportController {
        self.viewport.clone()
    }

    /// Enter the app runtime from synchronous code.
    pub fn enter(&self) -> tokio::runtime::EnterGuard<'_> {
        self.runtime.enter()
    }

    /// Read the last persisted fix, if any activation ever stored one.
    pub fn last_persisted(&self) -> Result<Option<PersistedLocation>, AppError> {
        let store = Arc::clone(&self.store);
        self.runtime.block_on(async move {
            let Some(bytes) = store.get(LOCATION_KEY).await? else {
                return Ok(None);
            };
            let record = serde_json::from_slice(&bytes)
                .map_err(crate::store::StoreError::Serialization)?;
            Ok(Some(record))
        })
    }

    /// Read the last persisted fix from a store directory without starting
    /// an application (and so without triggering a new acquisition).
    ///
    /// This is the cold-start read path over the record
    /// [`LocationProvider`] writes.
    pub fn read_last_persisted(
        store_directory: &std::path::Path,
    ) -> Result<Option<PersistedLocation>, AppError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        let store = DiskStore::new(store_directory);
        runtime.block_on(async move {
            let Some(bytes) = store.get(LOCATION_KEY).await? else {
                return Ok(None);
            };
            let record = serde_json::from_slice(&bytes)
                .map_err(crate::store::StoreError::Serialization)?;
            Ok(Some(record))
        })
    }

    /// Cancel background work and tear down the runtime.
    pub fn shutdown(self) {
        info!("Shutting down geofix");
        self.cancellation.cancel();
        self.runtime.shutdown_timeout(SHUTDOWN_TIMEOUT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    use crate::app::{LocationAppConfig, StoreAppConfig};
    use crate::location::LocationError;
    use crate::viewport::ViewportConfig;

    fn test_config(dir: &TempDir, allow: bool) -> AppConfig {
        AppConfig {
            store: StoreAppConfig {
                directory: dir.path().to_path_buf(),
            },
            location: LocationAppConfig {
                latitude: 37.0,
                longitude: -122.0,
                allow,
            },
            viewport: ViewportConfig::default()
                .with_settle_delay(Duration::from_millis(20)),
        }
    }

    fn wait_until<F: Fn() -> bool>(condition: F) {
        for _ in 0..200 {
            if condition() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("condition not reached within deadline");
    }

    #[test]
    fn test_start_acquires_and_initializes_viewport() {
        let dir = TempDir::new().unwrap();
        let app = GeofixApp::start(test_config(&dir, true)).unwrap();

        let state = app.wait_for_fix(Duration::from_secs(2));
        let coords = state.coordinates().expect("fix should be available");
        assert_eq!(coords.latitude, 37.0);
        assert_eq!(coords.longitude, -122.0);

        // Viewport initialization follows publication on the app task.
        wait_until(|| app.viewport().region().is_some());
        let region = app.viewport().region().unwrap();
        assert_eq!(region.latitude, 37.0);
        assert_eq!(region.longitude, -122.0);

        app.shutdown();
    }

    #[test]
    fn test_denied_permission_leaves_viewport_unlocated() {
        let dir = TempDir::new().unwrap();
        let app = GeofixApp::start(test_config(&dir, false)).unwrap();

        let state = app.wait_for_fix(Duration::from_secs(2));
        assert_eq!(
            state,
            LocationState::Failed(LocationError::PermissionDenied)
        );
        assert!(app.viewport().region().is_none());
        assert_eq!(
            app.viewport().snapshot().region,
            crate::region::MapRegion::unlocated()
        );

        app.shutdown();
    }

    #[test]
    fn test_fix_is_persisted_and_readable() {
        let dir = TempDir::new().unwrap();
        let app = GeofixApp::start(test_config(&dir, true)).unwrap();

        app.wait_for_fix(Duration::from_secs(2));
        wait_until(|| matches!(app.last_persisted(), Ok(Some(_))));

        let record = app.last_persisted().unwrap().unwrap();
        assert_eq!(record.id, 442);
        assert_eq!(record.latitude, 37.0);
        assert_eq!(record.longitude, -122.0);

        app.shutdown();
    }

    #[test]
    fn test_last_persisted_none_on_fresh_store() {
        let dir = TempDir::new().unwrap();
        let app = GeofixApp::start(test_config(&dir, false)).unwrap();

        app.wait_for_fix(Duration::from_secs(2));
        assert!(app.last_persisted().unwrap().is_none());

        app.shutdown();
    }

    #[test]
    fn test_read_last_persisted_without_app() {
        let dir = TempDir::new().unwrap();
        assert!(GeofixApp::read_last_persisted(dir.path())
            .unwrap()
            .is_none());

        let app = GeofixApp::start(test_config(&dir, true)).unwrap();
        app.wait_for_fix(Duration::from_secs(2));
        wait_until(|| matches!(app.last_persisted(), Ok(Some(_))));
        app.shutdown();

        let record = GeofixApp::read_last_persisted(dir.path())
            .unwrap()
            .unwrap();
        assert_eq!(record.title, "Your Current Location");
        assert_eq!(record.latitude, 37.0);
    }

    #[test]
    fn test_recenter_within_app_runtime() {
        let dir = TempDir::new().unwrap();
        let app = GeofixApp::start(test_config(&dir, true)).unwrap();
        app.wait_for_fix(Duration::from_secs(2));
        wait_until(|| app.viewport().region().is_some());

        let viewport = app.viewport();
        {
            let _guard = app.enter();
            viewport.recenter();
        }
        assert!(viewport.is_loading());
        wait_until(|| !viewport.is_loading());

        app.shutdown();
    }
}
