use crate::{
    message::decoration::{ActiveTabChanged, DecorationsChanged, DetectorShutdown},
    prelude::*,
    resource::snapshot::{SnapshotProvider, SnapshotResource},
    service::detector::DetectorService,
    state::decoration::{ChangeSet, DecorationState},
};
use anyhow::Context;
use lifeline::dyn_bus::DynBus;
use postage::{broadcast, mpsc, watch};
use tabtwin_api::{config::MarkerConfig, marker::Marker, tab::TabIdentity};

/// Answers `decoration_for` queries from the rendering layer.
///
/// Cheap to clone, and always reflects the most recent recompute.
#[derive(Clone)]
pub struct DecorationReader {
    rx_state: watch::Receiver<DecorationState>,
    markers: MarkerConfig,
}

impl DecorationReader {
    pub fn decoration_for(&self, identity: &TabIdentity) -> Option<Marker> {
        let kind = self.rx_state.borrow().decoration_for(identity)?;
        Some(self.markers.marker(kind))
    }

    pub fn state(&self) -> DecorationState {
        self.rx_state.borrow().clone()
    }
}

/// The host's connection to a running DetectorService
pub struct DetectorHandle {
    tx: mpsc::Sender<ActiveTabChanged>,
    tx_shutdown: mpsc::Sender<DetectorShutdown>,
    rx_changes: broadcast::Receiver<DecorationsChanged>,
    reader: DecorationReader,
    bus: DecorationBus,
    _service: DetectorService,
}

impl DetectorHandle {
    /// Starts the detector, and performs the startup recompute with the given focus
    pub async fn spawn(
        provider: impl SnapshotProvider + 'static,
        markers: MarkerConfig,
        active: Option<TabIdentity>,
    ) -> anyhow::Result<Self> {
        let bus = DecorationBus::default();
        bus.capacity::<ActiveTabChanged>(64)?;
        bus.capacity::<DecorationsChanged>(64)?;
        bus.store_resource(SnapshotResource::new(provider));

        let rx_changes = bus.rx::<DecorationsChanged>()?;
        let rx_state = bus.rx::<DecorationState>()?;
        let tx = bus.tx::<ActiveTabChanged>()?;
        let tx_shutdown = bus.tx::<DetectorShutdown>()?;

        info!("Launching DetectorService");
        let _service = DetectorService::spawn(&bus)?;

        let mut handle = Self {
            tx,
            tx_shutdown,
            rx_changes,
            reader: DecorationReader { rx_state, markers },
            bus,
            _service,
        };

        handle.active_tab_changed(active).await?;

        Ok(handle)
    }

    /// Must be called whenever the focused tab changes
    pub async fn active_tab_changed(&mut self, active: Option<TabIdentity>) -> anyhow::Result<()> {
        self.tx
            .send(ActiveTabChanged(active))
            .await
            .context("tx ActiveTabChanged")?;

        Ok(())
    }

    /// Waits for the next recompute, and returns the identities that need re-rendering
    pub async fn next_changes(&mut self) -> Option<ChangeSet> {
        self.rx_changes.recv().await.map(|changed| changed.0)
    }

    /// An additional subscription to change notifications, e.g. for a separate render task
    pub fn subscribe(&self) -> anyhow::Result<broadcast::Receiver<DecorationsChanged>> {
        let rx = self.bus.rx::<DecorationsChanged>()?;
        Ok(rx)
    }

    pub fn decoration_for(&self, identity: &TabIdentity) -> Option<Marker> {
        self.reader.decoration_for(identity)
    }

    pub fn reader(&self) -> DecorationReader {
        self.reader.clone()
    }

    /// Stops the detector.  Focus changes sent afterwards are ignored.
    pub async fn shutdown(mut self) -> anyhow::Result<()> {
        self.tx_shutdown
            .send(DetectorShutdown {})
            .await
            .context("tx DetectorShutdown")?;

        Ok(())
    }
}
