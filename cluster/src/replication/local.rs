use std::{collections::BTreeMap, sync::Arc};

use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use log::{debug, warn};
use parking_lot::RwLock;

use vabridge_shared::NodeId;

use super::{error::ReplicationError, ClusterTransport, ReplicationMessage};

#[derive(Default)]
struct Members {
    next_id: u16,
    inboxes: BTreeMap<NodeId, Sender<ReplicationMessage>>,
}

/// In-process cluster: every joined node owns one FIFO inbox and a
/// broadcast is pushed into each of them.
#[derive(Clone, Default)]
pub struct LocalCluster {
    members: Arc<RwLock<Members>>,
}

impl LocalCluster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its transport endpoint. The node leaves the
    /// cluster when the endpoint is dropped.
    pub fn join(&self) -> LocalEndpoint {
        let (sender, receiver) = unbounded();
        let mut members = self.members.write();
        let id = NodeId(members.next_id);
        members.next_id = members.next_id.wrapping_add(1);
        members.inboxes.insert(id, sender);
        debug!("Cluster node {:?} joined", id);

        LocalEndpoint {
            id,
            cluster: self.clone(),
            inbox: receiver,
        }
    }

    pub fn node_ids(&self) -> Vec<NodeId> {
        self.members.read().inboxes.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.members.read().inboxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.read().inboxes.is_empty()
    }

    fn leave(&self, id: NodeId) {
        if self.members.write().inboxes.remove(&id).is_some() {
            debug!("Cluster node {:?} left", id);
        }
    }
}

/// One node's connection to a [`LocalCluster`]
pub struct LocalEndpoint {
    id: NodeId,
    cluster: LocalCluster,
    inbox: Receiver<ReplicationMessage>,
}

impl ClusterTransport for LocalEndpoint {
    fn local_id(&self) -> NodeId {
        self.id
    }

    fn broadcast(&self, message: ReplicationMessage) -> Result<(), ReplicationError> {
        // Held for the whole fan-out, so a broadcast reaches every inbox
        // before the next one from this node starts.
        let members = self.cluster.members.read();
        if !members.inboxes.contains_key(&self.id) {
            return Err(ReplicationError::NotAMember { node: self.id });
        }

        let mut result = Ok(());
        for (node, inbox) in members.inboxes.iter() {
            if inbox.send(message).is_err() {
                warn!("Dropping replication message for node {:?}, inbox closed", node);
                result = Err(ReplicationError::InboxClosed { node: *node });
            }
        }
        result
    }

    fn drain(&mut self) -> Vec<ReplicationMessage> {
        let mut output = Vec::new();
        loop {
            match self.inbox.try_recv() {
                Ok(message) => output.push(message),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return output,
            }
        }
    }
}

impl Drop for LocalEndpoint {
    fn drop(&mut self) {
        self.cluster.leave(self.id);
    }
}
