use crate::{
    message::decoration::{ActiveTabChanged, DecorationsChanged, DetectorShutdown},
    resource::snapshot::SnapshotResource,
    state::decoration::DecorationState,
};
use lifeline::prelude::*;
use postage::{broadcast, mpsc, watch};

lifeline_bus!(pub struct DecorationBus);

/// Focus changes are queued, so recomputes never overlap
impl Message<DecorationBus> for ActiveTabChanged {
    type Channel = mpsc::Sender<Self>;
}

impl Message<DecorationBus> for DecorationState {
    type Channel = watch::Sender<Self>;
}

impl Message<DecorationBus> for DecorationsChanged {
    type Channel = broadcast::Sender<Self>;
}

impl Message<DecorationBus> for DetectorShutdown {
    type Channel = mpsc::Sender<Self>;
}

impl Resource<DecorationBus> for SnapshotResource {}
