use crate::{
    detector::DuplicateDetector,
    message::decoration::{ActiveTabChanged, DecorationsChanged, DetectorShutdown},
    prelude::*,
    resource::snapshot::SnapshotResource,
    state::decoration::DecorationState,
};
use postage::sink::TrySendError;
use tokio::select;

/// Owns the DuplicateDetector, and recomputes decorations each time the focused tab changes.
///
/// Focus changes are handled one at a time.  The new DecorationState is published
/// before the matching DecorationsChanged message.  Change sets are dropped rather than
/// waiting on a subscriber that is not reading them.
pub struct DetectorService {
    _recompute: Lifeline,
}

impl Service for DetectorService {
    type Bus = DecorationBus;
    type Lifeline = anyhow::Result<Self>;

    fn spawn(bus: &Self::Bus) -> Self::Lifeline {
        let snapshots = bus.resource::<SnapshotResource>()?;

        let mut rx = bus.rx::<ActiveTabChanged>()?;
        let mut rx_shutdown = bus.rx::<DetectorShutdown>()?;
        let mut tx_state = bus.tx::<DecorationState>()?;
        let mut tx_changes = bus.tx::<DecorationsChanged>()?;

        let _recompute = Self::try_task("recompute", async move {
            let mut detector = DuplicateDetector::new();

            loop {
                let active = select! {
                    biased;

                    Some(_) = rx_shutdown.recv() => {
                        info!("detector shutdown requested");
                        break;
                    }
                    msg = rx.recv() => match msg {
                        Some(ActiveTabChanged(active)) => active,
                        None => break,
                    },
                };

                let snapshot = snapshots.snapshot();
                let previous = detector.state().clone();
                let changes = detector.recompute(&snapshot, active.as_ref());

                debug!(
                    "recomputed {} groups, active {:?}: {} active / {} other duplicates, {} changed, {} notified",
                    snapshot.groups.len(),
                    active.as_ref().map(|id| id.as_str()),
                    detector.state().active_duplicates.len(),
                    detector.state().other_duplicates.len(),
                    detector.state().diff(&previous).len(),
                    changes.len()
                );

                tx_state.send(detector.state().clone()).await?;

                // subscribers with a full buffer miss this notification, the watch state stays current
                let notify = tx_changes.try_send(DecorationsChanged(changes));
                if let Err(TrySendError::Pending(_)) = notify {
                    debug!("a change subscriber is full, dropping the change set");
                }
            }

            Ok(())
        });

        Ok(Self { _recompute })
    }
}

#[cfg(test)]
mod tests {
    use super::DetectorService;
    use crate::{
        message::decoration::{ActiveTabChanged, DecorationsChanged, DetectorShutdown},
        prelude::*,
        resource::snapshot::{SharedSnapshot, SnapshotResource},
        state::decoration::{ChangeSet, DecorationState},
    };
    use lifeline::{assert_completes, assert_times_out, dyn_bus::DynBus};
    use maplit::btreeset;
    use pretty_assertions::assert_eq;
    use std::time::Duration;
    use tabtwin_api::{
        snapshot::{Snapshot, TabGroup},
        tab::TabIdentity,
    };

    fn id(locator: &str) -> TabIdentity {
        TabIdentity::from(locator)
    }

    fn split_bus() -> (DecorationBus, SharedSnapshot) {
        let shared = SharedSnapshot::new(Snapshot::new(vec![
            TabGroup::documents(vec!["/left/a.txt"]),
            TabGroup::documents(vec!["/right/a.txt", "/right/b.txt"]),
        ]));

        let bus = DecorationBus::default();
        bus.store_resource(SnapshotResource::new(shared.clone()));

        (bus, shared)
    }

    #[tokio::test]
    async fn publishes_state_and_changes() -> anyhow::Result<()> {
        let (bus, _shared) = split_bus();
        let _service = DetectorService::spawn(&bus)?;

        let mut tx = bus.tx::<ActiveTabChanged>()?;
        let mut rx = bus.rx::<DecorationsChanged>()?;
        let rx_state = bus.rx::<DecorationState>()?;

        tx.send(ActiveTabChanged(Some(id("/right/a.txt")))).await?;

        assert_completes!(async move {
            let msg = rx.recv().await;
            assert_eq!(
                Some(DecorationsChanged(ChangeSet(
                    btreeset! { id("/left/a.txt"), id("/right/a.txt") }
                ))),
                msg
            );

            assert_eq!(
                DecorationState {
                    active_duplicates: btreeset! { id("/right/a.txt") },
                    other_duplicates: btreeset! { id("/left/a.txt") },
                },
                *rx_state.borrow()
            );
        });

        Ok(())
    }

    #[tokio::test]
    async fn recaptures_snapshot() -> anyhow::Result<()> {
        let (bus, shared) = split_bus();
        let _service = DetectorService::spawn(&bus)?;

        let mut tx = bus.tx::<ActiveTabChanged>()?;
        let mut rx = bus.rx::<DecorationsChanged>()?;

        tx.send(ActiveTabChanged(None)).await?;
        assert_completes!(async {
            let msg = rx.recv().await;
            assert_eq!(
                Some(DecorationsChanged(ChangeSet(
                    btreeset! { id("/left/a.txt"), id("/right/a.txt") }
                ))),
                msg
            );
        });

        // the right group closes its copy of a.txt
        shared.replace(Snapshot::new(vec![
            TabGroup::documents(vec!["/left/a.txt"]),
            TabGroup::documents(vec!["/right/b.txt"]),
        ]));

        tx.send(ActiveTabChanged(Some(id("/right/b.txt")))).await?;
        assert_completes!(async {
            let msg = rx.recv().await;
            assert_eq!(
                Some(DecorationsChanged(ChangeSet(
                    btreeset! { id("/left/a.txt"), id("/right/a.txt") }
                ))),
                msg
            );
        });

        Ok(())
    }

    #[tokio::test]
    async fn undrained_subscriber_does_not_stall() -> anyhow::Result<()> {
        let (bus, _shared) = split_bus();
        let _service = DetectorService::spawn(&bus)?;

        let mut tx = bus.tx::<ActiveTabChanged>()?;
        let _rx = bus.rx::<DecorationsChanged>()?;
        let rx_state = bus.rx::<DecorationState>()?;

        for i in 0..200 {
            let active = if i % 2 == 0 { "/right/a.txt" } else { "/left/a.txt" };
            assert_completes!(async {
                tx.send(ActiveTabChanged(Some(id(active)))).await.ok();
            });
        }

        tx.send(ActiveTabChanged(Some(id("/right/b.txt")))).await?;

        let expected = DecorationState {
            active_duplicates: btreeset! {},
            other_duplicates: btreeset! { id("/left/a.txt"), id("/right/a.txt") },
        };

        assert_completes!(
            async {
                while *rx_state.borrow() != expected {
                    tokio::time::sleep(Duration::from_millis(1)).await;
                }
            },
            1000
        );

        Ok(())
    }

    #[tokio::test]
    async fn shutdown() -> anyhow::Result<()> {
        let (bus, _shared) = split_bus();
        let _service = DetectorService::spawn(&bus)?;

        let mut tx = bus.tx::<ActiveTabChanged>()?;
        let mut tx_shutdown = bus.tx::<DetectorShutdown>()?;
        let mut rx = bus.rx::<DecorationsChanged>()?;

        tx_shutdown.send(DetectorShutdown {}).await?;
        tx.send(ActiveTabChanged(None)).await.ok();

        assert_times_out!(async {
            rx.recv().await;
        });

        Ok(())
    }
}
