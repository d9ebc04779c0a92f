use thiserror::Error;

use vabridge_shared::NodeId;

/// Errors that can occur while broadcasting to the cluster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationError {
    /// The inbox of a member node was dropped without leaving the cluster
    #[error("Inbox of cluster node {node:?} is closed")]
    InboxClosed { node: NodeId },

    /// The sender is no longer a member of the cluster
    #[error("Cluster node {node:?} is not a member of the cluster")]
    NotAMember { node: NodeId },
}
