use std::sync::Arc;

use parking_lot::Mutex;

use vabridge_cluster::{
    AudiofileSourceConfig, ClusterConfig, ClusterNode, ClusterTransport, DetachedAudioServer,
    ReplicationError, ReplicationEvent, ReplicationMessage, SourceKey,
};
use vabridge_shared::{NodeId, NodeRole, PlayAction, Tick};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Transport whose inbox is filled by the test, in any order
#[derive(Clone, Default)]
struct HandFedTransport {
    inbox: Arc<Mutex<Vec<ReplicationMessage>>>,
}

impl HandFedTransport {
    fn deliver(&self, sender: NodeId, tick: Tick, action: PlayAction) {
        self.inbox.lock().push(ReplicationMessage {
            sender,
            tick,
            event: ReplicationEvent::PlayAction {
                source: SourceKey(0),
                action,
            },
        });
    }
}

impl ClusterTransport for HandFedTransport {
    fn local_id(&self) -> NodeId {
        NodeId(1)
    }

    fn broadcast(&self, _message: ReplicationMessage) -> Result<(), ReplicationError> {
        Ok(())
    }

    fn drain(&mut self) -> Vec<ReplicationMessage> {
        std::mem::take(&mut *self.inbox.lock())
    }
}

fn slave_node(transport: HandFedTransport) -> ClusterNode {
    let mut node = ClusterNode::new(
        ClusterConfig::default(),
        NodeRole::Slave,
        transport,
        DetachedAudioServer,
    );
    node.add_audiofile_source(AudiofileSourceConfig::default());
    node
}

#[test]
fn stale_message_is_applied_but_not_tracked() {
    init_logging();
    let transport = HandFedTransport::default();
    let mut node = slave_node(transport.clone());
    let master = NodeId(0);

    transport.deliver(master, 10, PlayAction::Play);
    transport.deliver(master, 8, PlayAction::Pause);
    node.tick();

    assert_eq!(
        node.audiofile_source(&SourceKey(0)).unwrap().last_play_action(),
        Some(PlayAction::Pause)
    );
    assert_eq!(node.last_sender_tick(master), Some(10));
}

#[test]
fn sender_tick_follows_wraparound() {
    init_logging();
    let transport = HandFedTransport::default();
    let mut node = slave_node(transport.clone());
    let master = NodeId(0);

    transport.deliver(master, 65535, PlayAction::Play);
    transport.deliver(master, 2, PlayAction::Stop);
    node.tick();

    assert_eq!(node.last_sender_tick(master), Some(2));
    assert_eq!(node.last_sender_tick(NodeId(5)), None);
}
