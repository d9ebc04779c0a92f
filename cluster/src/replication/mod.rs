pub mod error;
pub mod local;

use vabridge_shared::{NodeId, PlayAction, Tick};

use crate::{replication::error::ReplicationError, signal_source::SourceKey};

/// State delta fanned out by the node that observed or caused it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplicationEvent {
    /// Latest known play action of an audiofile signal source
    PlayAction { source: SourceKey, action: PlayAction },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplicationMessage {
    pub sender: NodeId,
    /// Tick of the sender at the time of sending
    pub tick: Tick,
    pub event: ReplicationEvent,
}

/// Reliable broadcast to every cluster node, the sender included.
///
/// Messages from one sender arrive in the order they were sent. Delivery is
/// never synchronous: a node only sees messages when it drains its inbox at
/// the start of a tick.
pub trait ClusterTransport: Send {
    fn local_id(&self) -> NodeId;

    fn broadcast(&self, message: ReplicationMessage) -> Result<(), ReplicationError>;

    /// Takes every message delivered so far, in arrival order
    fn drain(&mut self) -> Vec<ReplicationMessage>;
}
