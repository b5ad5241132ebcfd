use lifeline::impl_storage_clone;
use std::{
    fmt,
    sync::{Arc, Mutex},
};
use tabtwin_api::snapshot::Snapshot;

/// Captures the tabs currently open in the host.
///
/// Tabs the host cannot resolve to a document should be reported as `TabInput::Other`,
/// or omitted.
pub trait SnapshotProvider: Send + Sync {
    fn snapshot(&self) -> Snapshot;
}

impl<F> SnapshotProvider for F
where
    F: Fn() -> Snapshot + Send + Sync,
{
    fn snapshot(&self) -> Snapshot {
        (self)()
    }
}

/// A snapshot provider, stored on the DecorationBus
#[derive(Clone)]
pub struct SnapshotResource(Arc<dyn SnapshotProvider>);

impl SnapshotResource {
    pub fn new(provider: impl SnapshotProvider + 'static) -> Self {
        Self(Arc::new(provider))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.0.snapshot()
    }
}

impl fmt::Debug for SnapshotResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SnapshotResource").finish()
    }
}

impl_storage_clone!(SnapshotResource);

/// A snapshot the host replaces whenever its tabs change
#[derive(Debug, Clone, Default)]
pub struct SharedSnapshot {
    current: Arc<Mutex<Snapshot>>,
}

impl SharedSnapshot {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            current: Arc::new(Mutex::new(snapshot)),
        }
    }

    pub fn replace(&self, snapshot: Snapshot) {
        // a poisoned lock still holds a complete snapshot, as replacement is a single move
        let mut current = self.current.lock().unwrap_or_else(|err| err.into_inner());
        *current = snapshot;
    }
}

impl SnapshotProvider for SharedSnapshot {
    fn snapshot(&self) -> Snapshot {
        self.current
            .lock()
            .unwrap_or_else(|err| err.into_inner())
            .clone()
    }
}
