pub mod audio_input;
pub mod audiofile;
pub mod audiofile_manager;
pub mod config;
pub mod error;

use log::{debug, warn};

use vabridge_shared::{AudioServer, NodeId, PlayAction, RoleGate, Tick};

use crate::{
    events::ClusterEvents,
    replication::{ClusterTransport, ReplicationEvent, ReplicationMessage},
    signal_source::{audiofile_manager::AudiofileManager, error::SignalSourceError},
};

/// Identifies a signal source on every node of the cluster.
///
/// Keys are handed out in creation order, so nodes that create their
/// sources in the same order agree on them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceKey(pub u32);

/// Everything a signal source operation may touch besides the source
/// itself, borrowed from the owning node for the duration of one call
pub(crate) struct SourceContext<'a> {
    pub(crate) key: SourceKey,
    pub(crate) node_id: NodeId,
    pub(crate) tick: Tick,
    pub(crate) role: &'a dyn RoleGate,
    pub(crate) server: &'a mut dyn AudioServer,
    pub(crate) transport: &'a dyn ClusterTransport,
    pub(crate) audiofiles: &'a mut AudiofileManager,
    pub(crate) events: &'a mut ClusterEvents,
}

impl<'a> SourceContext<'a> {
    pub(crate) fn is_authoritative(&self) -> bool {
        self.role.is_authoritative()
    }

    pub(crate) fn check_authoritative(&self) -> Result<(), SignalSourceError> {
        if self.is_authoritative() {
            Ok(())
        } else {
            debug!("Signal source {:?}: operation skipped, not the master", self.key);
            Err(SignalSourceError::NotAuthoritative)
        }
    }

    /// Sends `action` to every node, this one included. A failed broadcast
    /// is logged and otherwise ignored; the next update supersedes it.
    pub(crate) fn replicate_play_action(&self, action: PlayAction) {
        let message = ReplicationMessage {
            sender: self.node_id,
            tick: self.tick,
            event: ReplicationEvent::PlayAction {
                source: self.key,
                action,
            },
        };
        if let Err(error) = self.transport.broadcast(message) {
            warn!(
                "Signal source {:?}: could not replicate play action {}: {}",
                self.key, action, error
            );
        }
    }
}
