//! Viewport controller - region state and gesture operations.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tracing::debug;

use crate::coord::Coordinates;
use crate::region::MapRegion;

/// Default settle delay after a recenter (approximates the rendering
/// transition; not a completion signal).
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(2000);

/// Configuration for the viewport controller.
#[derive(Debug, Clone)]
pub struct ViewportConfig {
    /// How long the loading flag stays set after a recenter.
    pub settle_delay: Duration,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
        }
    }
}

impl ViewportConfig {
    /// Set the settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

/// Point-in-time copy of viewport state for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSnapshot {
    /// The region to display. Defaults to the origin with default deltas
    /// until a fix initializes the viewport.
    pub region: MapRegion,
    /// The tracked device coordinates, if a fix exists (marker position).
    pub tracked: Option<Coordinates>,
    /// Whether a recenter transition indicator should be shown.
    pub loading: bool,
}

/// Internal mutable state, guarded by a single mutex.
#[derive(Debug)]
struct ViewportState {
    region: Option<MapRegion>,
    tracked: Option<Coordinates>,
    loading: bool,
    /// Bumped on every recenter so an older settle timer cannot clear the
    /// flag set by a newer one.
    settle_generation: u64,
}

impl ViewportState {
    fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot {
            region: self.region.unwrap_or_else(MapRegion::unlocated),
            tracked: self.tracked,
            loading: self.loading,
        }
    }
}

/// Owns the current map region and applies zoom/recenter operations.
///
/// Cheap to clone; clones share state. Operations are synchronous, safe to
/// invoke in rapid succession, and saturate silently at the zoom bounds -
/// there is no way to report "already at min/max zoom" to a caller, by
/// contract. Any operation invoked before a region exists is a no-op.
///
/// [`recenter`](Self::recenter) spawns the settle timer on the ambient
/// tokio runtime and therefore must be called from within one.
#[derive(Clone)]
pub struct ViewportController {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<ViewportState>,
    snapshot_tx: watch::Sender<ViewportSnapshot>,
    config: ViewportConfig,
}

impl ViewportController {
    /// Create a controller with no region yet.
    pub fn new(config: ViewportConfig) -> Self {
        let state = ViewportState {
            region: None,
            tracked: None,
            loading: false,
            settle_generation: 0,
        };
        let (snapshot_tx, _) = watch::channel(state.snapshot());
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                snapshot_tx,
                config,
            }),
        }
    }

    /// Anchor the viewport to a fix: tracked coordinates plus a region
    /// centered on them with default deltas.
    pub fn initialize(&self, coords: Coordinates) {
        let mut state = self.inner.state.lock();
        state.tracked = Some(coords);
        state.region = Some(MapRegion::centered_at(coords));
        debug!(%coords, "Viewport initialized");
        self.publish(&state);
    }

    /// One zoom step closer, keeping the current center.
    ///
    /// No-op when no region exists or when the step would leave the legal
    /// delta band.
    pub fn zoom_in(&self) {
        let mut state = self.inner.state.lock();
        let Some(region) = state.region else {
            return;
        };
        if let Some(zoomed) = region.zoomed_in() {
            state.region = Some(zoomed);
            self.publish(&state);
        }
    }

    /// One zoom step wider, keeping the current center.
    ///
    /// No-op when no region exists or when the step would leave the legal
    /// delta band.
    pub fn zoom_out(&self) {
        let mut state = self.inner.state.lock();
        let Some(region) = state.region else {
            return;
        };
        if let Some(zoomed) = region.zoomed_out() {
            state.region = Some(zoomed);
            self.publish(&state);
        }
    }

    /// Reset the region to the tracked coordinates with default deltas and
    /// raise the loading flag for the configured settle delay.
    ///
    /// No-op when no fix has been tracked. The flag clears on a detached
    /// timer after a fixed delay regardless of rendering progress.
    pub fn recenter(&self) {
        let generation = {
            let mut state = self.inner.state.lock();
            let Some(tracked) = state.tracked else {
                return;
            };
            state.region = Some(MapRegion::centered_at(tracked));
            state.loading = true;
            state.settle_generation += 1;
            self.publish(&state);
            state.settle_generation
        };

        let controller = self.clone();
        let delay = self.inner.config.settle_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            controller.clear_loading(generation);
        });
    }

    /// The current region, if one has been committed.
    pub fn region(&self) -> Option<MapRegion> {
        self.inner.state.lock().region
    }

    /// Whether the recenter transition indicator is active.
    pub fn is_loading(&self) -> bool {
        self.inner.state.lock().loading
    }

    /// Point-in-time copy of the current viewport state.
    pub fn snapshot(&self) -> ViewportSnapshot {
        self.inner.state.lock().snapshot()
    }

    /// Subscribe to committed viewport changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewportSnapshot> {
        self.inner.snapshot_tx.subscribe()
    }

    fn clear_loading(&self, generation: u64) {
        let mut state = self.inner.state.lock();
        if state.settle_generation != generation {
            // A newer recenter owns the flag now.
            return;
        }
        state.loading = false;
        self.publish(&state);
    }

    fn publish(&self, state: &ViewportState) {
        self.inner.snapshot_tx.send_replace(state.snapshot());
    }
}
