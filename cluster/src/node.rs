use std::{collections::HashMap, mem};

use log::{debug, info, warn};

use vabridge_client::SearchPaths;
use vabridge_shared::{tick_diff, AudioServer, NodeId, RoleGate, Tick};

use crate::{
    config::ClusterConfig,
    error::ClusterError,
    events::ClusterEvents,
    replication::{ClusterTransport, ReplicationEvent, ReplicationMessage},
    signal_source::{
        audio_input::AudioInputSignalSource,
        audiofile::{AudiofileSignalSource, AudiofileSourceMut},
        audiofile_manager::AudiofileManager,
        config::AudiofileSourceConfig,
        SourceContext, SourceKey,
    },
};

/// One node of the rendering cluster.
///
/// Every node holds the same set of signal sources. Commands may be issued
/// on any node, but only the master (as decided by the role gate on each
/// call) forwards them to the audio server. Play actions are broadcast to
/// all nodes and applied at the next [`ClusterNode::tick`].
pub struct ClusterNode {
    config: ClusterConfig,
    role: Box<dyn RoleGate>,
    transport: Box<dyn ClusterTransport>,
    server: Box<dyn AudioServer>,
    audiofiles: AudiofileManager,
    audiofile_sources: HashMap<SourceKey, AudiofileSignalSource>,
    audio_input_sources: HashMap<SourceKey, AudioInputSignalSource>,
    next_key: u32,
    tick: Tick,
    last_sender_ticks: HashMap<NodeId, Tick>,
    incoming_events: ClusterEvents,
}

impl ClusterNode {
    /// Nodes which never hold an audio server connection can pass a
    /// [`DetachedAudioServer`](crate::DetachedAudioServer).
    pub fn new<R, T, S>(config: ClusterConfig, role: R, transport: T, server: S) -> Self
    where
        R: RoleGate + 'static,
        T: ClusterTransport + 'static,
        S: AudioServer + 'static,
    {
        info!(
            "Cluster node '{}' started as {:?}",
            config.node_name,
            transport.local_id()
        );

        Self {
            config,
            role: Box::new(role),
            transport: Box::new(transport),
            server: Box::new(server),
            audiofiles: AudiofileManager::new(),
            audiofile_sources: HashMap::new(),
            audio_input_sources: HashMap::new(),
            next_key: 0,
            tick: 0,
            last_sender_ticks: HashMap::new(),
            incoming_events: ClusterEvents::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.transport.local_id()
    }

    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    pub fn is_master(&self) -> bool {
        self.role.is_authoritative()
    }

    pub fn current_tick(&self) -> Tick {
        self.tick
    }

    /// Newest sender tick received from `sender`
    pub fn last_sender_tick(&self, sender: NodeId) -> Option<Tick> {
        self.last_sender_ticks.get(&sender).copied()
    }

    /// Advances the node by one tick: applies every replicated message that
    /// arrived since the last tick, in arrival order, and returns the
    /// events collected since then.
    pub fn tick(&mut self) -> ClusterEvents {
        for message in self.transport.drain() {
            self.receive_message(message);
        }

        self.tick = self.tick.wrapping_add(1);
        self.incoming_events.push_tick(self.tick);

        mem::take(&mut self.incoming_events)
    }

    // Signal sources

    /// Registers an audiofile signal source. Nodes must add their sources
    /// in the same order to agree on the keys.
    pub fn add_audiofile_source(&mut self, config: AudiofileSourceConfig) -> SourceKey {
        let key = self.next_source_key();
        self.audiofile_sources
            .insert(key, AudiofileSignalSource::new(config));
        key
    }

    /// Registers a signal source for live input `channel` (1-based)
    pub fn add_audio_input_source(&mut self, channel: u32) -> SourceKey {
        let key = self.next_source_key();
        self.audio_input_sources
            .insert(key, AudioInputSignalSource::new(channel));
        key
    }

    /// Returns whether a source was registered under `key`
    pub fn remove_source(&mut self, key: &SourceKey) -> bool {
        self.audiofile_sources.remove(key).is_some()
            || self.audio_input_sources.remove(key).is_some()
    }

    pub fn audiofile_source(&self, key: &SourceKey) -> Option<&AudiofileSignalSource> {
        self.audiofile_sources.get(key)
    }

    pub fn audiofile_source_mut(&mut self, key: &SourceKey) -> Option<AudiofileSourceMut<'_>> {
        let source = self.audiofile_sources.get_mut(key)?;
        let ctx = SourceContext {
            key: *key,
            node_id: self.transport.local_id(),
            tick: self.tick,
            role: &*self.role,
            server: &mut *self.server,
            transport: &*self.transport,
            audiofiles: &mut self.audiofiles,
            events: &mut self.incoming_events,
        };
        Some(AudiofileSourceMut::new(source, ctx))
    }

    pub fn audio_input_source(&self, key: &SourceKey) -> Option<&AudioInputSignalSource> {
        self.audio_input_sources.get(key)
    }

    pub fn initialize_audio_input(&mut self, key: &SourceKey) -> Result<(), ClusterError> {
        let source = self
            .audio_input_sources
            .get_mut(key)
            .ok_or(ClusterError::UnknownSource { key: *key })?;
        let mut ctx = SourceContext {
            key: *key,
            node_id: self.transport.local_id(),
            tick: self.tick,
            role: &*self.role,
            server: &mut *self.server,
            transport: &*self.transport,
            audiofiles: &mut self.audiofiles,
            events: &mut self.incoming_events,
        };
        source.initialize(&mut ctx)?;
        Ok(())
    }

    /// Signal sources of every audiofile this node has bound or preloaded
    pub fn audiofiles(&self) -> &AudiofileManager {
        &self.audiofiles
    }

    // Search paths

    /// Forwards search paths registered by launcher uploads to the audio
    /// server and returns how many were forwarded. On a server error every
    /// known path is queued again.
    pub fn apply_search_paths(
        &mut self,
        search_paths: &mut SearchPaths,
    ) -> Result<usize, ClusterError> {
        if !self.role.is_authoritative() {
            debug!("Search paths not forwarded, this node is not the master");
            return Err(ClusterError::NotAuthoritative);
        }

        let pending = search_paths.take_pending();
        for path in pending.iter() {
            if let Err(error) = self.server.add_search_path(path) {
                warn!("Could not add search path {} to the audio server: {}", path, error);
                search_paths.requeue_all();
                return Err(error.into());
            }
            info!("Added search path {}", path);
        }
        Ok(pending.len())
    }

    // Private

    fn next_source_key(&mut self) -> SourceKey {
        let key = SourceKey(self.next_key);
        self.next_key = self.next_key.wrapping_add(1);
        key
    }

    fn receive_message(&mut self, message: ReplicationMessage) {
        let ReplicationMessage {
            sender,
            tick,
            event,
        } = message;

        // Positive when the message was sent before the newest one seen
        let behind = self
            .last_sender_ticks
            .get(&sender)
            .map_or(0, |last| tick_diff(tick, *last));
        if behind > 0 {
            if self.config.warn_on_tick_regression {
                warn!(
                    "Node '{}': message from {:?} sent at tick {} arrived {} ticks behind",
                    self.config.node_name, sender, tick, behind
                );
            }
        } else {
            self.last_sender_ticks.insert(sender, tick);
        }

        match event {
            ReplicationEvent::PlayAction { source, action } => {
                let Some(state) = self.audiofile_sources.get_mut(&source) else {
                    debug!(
                        "Node '{}': dropping play action for unknown source {:?}",
                        self.config.node_name, source
                    );
                    return;
                };
                state.apply_replicated_play_action(action);
                self.incoming_events.push_play_action(sender, source, action);
            }
        }
    }
}
