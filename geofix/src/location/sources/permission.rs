//! Permission sources with predetermined behavior.

use crate::location::sources::{PermissionSource, PermissionStatus};
use crate::store::BoxFuture;

/// Permission source that resolves to a fixed answer without prompting.
///
/// Headless environments have no permission dialog; the CLI grants by
/// default and denies when configured to, which also makes the denial path
/// reproducible.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermissionSource {
    status: PermissionStatus,
}

impl StaticPermissionSource {
    /// A source that always grants.
    pub const fn granted() -> Self {
        Self {
            status: PermissionStatus::granted(),
        }
    }

    /// A source that always denies.
    pub const fn denied() -> Self {
        Self {
            status: PermissionStatus::denied(),
        }
    }
}

impl PermissionSource for StaticPermissionSource {
    fn request_foreground(&self) -> BoxFuture<'_, PermissionStatus> {
        let status = self.status;
        Box::pin(async move { status })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_granted_source() {
        let status = StaticPermissionSource::granted().request_foreground().await;
        assert!(status.granted);
    }

    #[tokio::test]
    async fn test_denied_source() {
        let status = StaticPermissionSource::denied().request_foreground().await;
        assert!(!status.granted);
    }
}
