//! Location provider - sequencing and publication.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::coord::Coordinates;
use crate::location::{
    LocationError, LocationState, PermissionSource, PersistedLocation, PositionSource,
    LOCATION_KEY,
};
use crate::store::Store;

/// Acquires the device location once and publishes the outcome.
///
/// On [`acquire`](LocationProvider::acquire) the provider runs the sequence
/// exactly once: request foreground permission, fetch the current position,
/// publish the result, and persist the fix. Permission denial short-circuits
/// the fetch. There is no retry and no refresh; callers wanting a new fix
/// create a new activation.
///
/// Subscribers observe state transitions through a watch channel. They see
/// [`LocationState::Pending`] until the single acquisition resolves to
/// `Available` or `Failed`, never both a fix and an error.
pub struct LocationProvider {
    permission: Arc<dyn PermissionSource>,
    position: Arc<dyn PositionSource>,
    store: Arc<dyn Store>,
    state_tx: watch::Sender<LocationState>,
    acquired: AtomicBool,
}

impl LocationProvider {
    /// Create a provider over the given device seams and store.
    pub fn new(
        permission: Arc<dyn PermissionSource>,
        position: Arc<dyn PositionSource>,
        store: Arc<dyn Store>,
    ) -> Self {
        let (state_tx, _) = watch::channel(LocationState::Pending);
        Self {
            permission,
            position,
            store,
            state_tx,
            acquired: AtomicBool::new(false),
        }
    }

    /// Subscribe to location state updates.
    ///
    /// The receiver starts at the current state ([`LocationState::Pending`]
    /// before the first acquisition) and sees the single transition out of
    /// it.
    pub fn subscribe(&self) -> watch::Receiver<LocationState> {
        self.state_tx.subscribe()
    }

    /// The most recently published state.
    pub fn state(&self) -> LocationState {
        *self.state_tx.borrow()
    }

    /// Run the acquisition sequence once and return the final state.
    ///
    /// The sequence runs at most once per provider; later calls return the
    /// already-published state without touching the device APIs again.
    /// The persisted-location write is fire-and-forget: it runs on a
    /// detached task, nothing awaits it, and its failure is logged but not
    /// surfaced (not distinguishable from a fetch failure by observers).
    pub async fn acquire(&self) -> LocationState {
        if self.acquired.swap(true, Ordering::SeqCst) {
            debug!("Acquisition already ran; returning published state");
            return self.state();
        }

        let status = self.permission.request_foreground().await;
        if !status.granted {
            info!("Location permission denied");
            return self.publish(LocationState::Failed(LocationError::PermissionDenied));
        }

        let position = match self.position.current_position().await {
            Ok(position) => position,
            Err(e) => {
                warn!(error = %e, "Position fetch failed");
                return self.publish(LocationState::Failed(LocationError::FetchFailed));
            }
        };

        let coords = match Coordinates::new(position.latitude, position.longitude) {
            Ok(coords) => coords,
            Err(e) => {
                warn!(error = %e, "Position source returned unusable reading");
                return self.publish(LocationState::Failed(LocationError::FetchFailed));
            }
        };

        info!(%coords, "Acquired location fix");
        self.persist(coords);
        self.publish(LocationState::Available(coords))
    }

    fn publish(&self, state: LocationState) -> LocationState {
        self.state_tx.send_replace(state);
        state
    }

    /// Spawn the detached last-fix write.
    fn persist(&self, coords: Coordinates) {
        let store = Arc::clone(&self.store);
        let record = PersistedLocation::from_fix(coords);
        tokio::spawn(async move {
            let bytes = match serde_json::to_vec(&record) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(error = %e, "Failed to serialize last fix");
                    return;
                }
            };
            match store.set(LOCATION_KEY, bytes).await {
                Ok(()) => debug!("Persisted last fix"),
                Err(e) => warn!(error = %e, "Failed to persist last fix"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use crate::location::{
        FixedPositionSource, Position, PositionError, StaticPermissionSource,
        UnavailablePositionSource,
    };
    use crate::store::{BoxFuture, MemoryStore, StoreError};

    /// Position source that counts fetches before delegating.
    struct CountingPositionSource {
        calls: AtomicUsize,
        result: Result<Position, PositionError>,
    }

    impl CountingPositionSource {
        fn ok(latitude: f64, longitude: f64) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                result: Ok(Position {
                    latitude,
                    longitude,
                }),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl crate::location::PositionSource for CountingPositionSource {
        fn current_position(&self) -> BoxFuture<'_, Result<Position, PositionError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let result = self.result.clone();
            Box::pin(async move { result })
        }
    }

    /// Store whose writes always fail, for the swallowed-failure path.
    struct FailingStore;

    impl Store for FailingStore {
        fn set(&self, _key: &str, _value: Vec<u8>) -> BoxFuture<'_, Result<(), StoreError>> {
            Box::pin(async {
                Err(StoreError::Io(std::io::Error::other("disk full")))
            })
        }

        fn get(&self, _key: &str) -> BoxFuture<'_, Result<Option<Vec<u8>>, StoreError>> {
            Box::pin(async { Ok(None) })
        }

        fn delete(&self, _key: &str) -> BoxFuture<'_, Result<bool, StoreError>> {
            Box::pin(async { Ok(false) })
        }
    }

    async fn wait_for_persisted(store: &MemoryStore) -> Vec<u8> {
        // The persist task is detached; poll briefly until it lands.
        for _ in 0..200 {
            if let Some(bytes) = store.get(LOCATION_KEY).await.unwrap() {
                return bytes;
            }
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        panic!("last fix was never persisted");
    }

    #[tokio::test]
    async fn test_denied_permission_skips_fetch() {
        let position = Arc::new(CountingPositionSource::ok(37.0, -122.0));
        let store = Arc::new(MemoryStore::new());
        let provider = LocationProvider::new(
            Arc::new(StaticPermissionSource::denied()),
            position.clone(),
            store.clone(),
        );

        let state = provider.acquire().await;

        assert_eq!(
            state,
            LocationState::Failed(LocationError::PermissionDenied)
        );
        assert_eq!(position.call_count(), 0);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_granted_permission_publishes_fix() {
        let provider = LocationProvider::new(
            Arc::new(StaticPermissionSource::granted()),
            Arc::new(FixedPositionSource::new(37.0, -122.0)),
            Arc::new(MemoryStore::new()),
        );

        let state = provider.acquire().await;

        let coords = state.coordinates().expect("fix should be available");
        assert_eq!(coords.latitude, 37.0);
        assert_eq!(coords.longitude, -122.0);
        assert_eq!(provider.state(), state);
    }

    #[tokio::test]
    async fn test_successful_fix_is_persisted() {
        let store = Arc::new(MemoryStore::new());
        let provider = LocationProvider::new(
            Arc::new(StaticPermissionSource::granted()),
            Arc::new(FixedPositionSource::new(37.0, -122.0)),
            store.clone(),
        );

        provider.acquire().await;

        let bytes = wait_for_persisted(&store).await;
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["id"], 442);
        assert_eq!(json["title"], "Your Current Location");
        assert_eq!(json["latitude"], 37.0);
        assert_eq!(json["longitude"], -122.0);
        assert_eq!(json["latitudeDelta"], 0.01);
        assert_eq!(json["longitudeDelta"], 0.01);
    }

    #[tokio::test]
    async fn test_fetch_failure_publishes_fetch_failed() {
        let store = Arc::new(MemoryStore::new());
        let provider = LocationProvider::new(
            Arc::new(StaticPermissionSource::granted()),
            Arc::new(UnavailablePositionSource::new()),
            store.clone(),
        );

        let state = provider.acquire().await;

        assert_eq!(state, LocationState::Failed(LocationError::FetchFailed));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_out_of_range_reading_publishes_fetch_failed() {
        let provider = LocationProvider::new(
            Arc::new(StaticPermissionSource::granted()),
            Arc::new(FixedPositionSource::new(91.0, 0.0)),
            Arc::new(MemoryStore::new()),
        );

        let state = provider.acquire().await;

        assert_eq!(state, LocationState::Failed(LocationError::FetchFailed));
    }

    #[tokio::test]
    async fn test_store_failure_does_not_change_published_state() {
        let provider = LocationProvider::new(
            Arc::new(StaticPermissionSource::granted()),
            Arc::new(FixedPositionSource::new(37.0, -122.0)),
            Arc::new(FailingStore),
        );

        let state = provider.acquire().await;

        // Give the detached write time to fail.
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(state.coordinates().is_some());
        assert_eq!(provider.state(), state);
    }

    #[tokio::test]
    async fn test_second_acquire_does_not_refetch() {
        let position = Arc::new(CountingPositionSource::ok(37.0, -122.0));
        let provider = LocationProvider::new(
            Arc::new(StaticPermissionSource::granted()),
            position.clone(),
            Arc::new(MemoryStore::new()),
        );

        let first = provider.acquire().await;
        let second = provider.acquire().await;

        assert_eq!(first, second);
        assert_eq!(position.call_count(), 1);
    }

    #[tokio::test]
    async fn test_subscriber_observes_transition() {
        let provider = LocationProvider::new(
            Arc::new(StaticPermissionSource::granted()),
            Arc::new(FixedPositionSource::new(10.0, 20.0)),
            Arc::new(MemoryStore::new()),
        );
        let mut updates = provider.subscribe();
        assert!(updates.borrow().is_pending());

        provider.acquire().await;

        updates.changed().await.unwrap();
        let coords = updates.borrow().coordinates().unwrap();
        assert_eq!(coords.latitude, 10.0);
        assert_eq!(coords.longitude, 20.0);
    }
}
