//! # vabridge Cluster
//! Keeps the playback state of signal sources consistent across the nodes
//! of a synchronized rendering cluster. The master node forwards commands
//! to the audio server and every node mirrors the replicated play state.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

mod config;
mod detached_server;
mod error;
mod events;
mod node;
mod replication;
mod signal_source;

pub use config::ClusterConfig;
pub use detached_server::DetachedAudioServer;
pub use error::ClusterError;
pub use events::{
    AudiofileChangedEvent, ClusterEvent, ClusterEvents, PlayActionReplicatedEvent, TickEvent,
};
pub use node::ClusterNode;
pub use replication::{
    error::ReplicationError,
    local::{LocalCluster, LocalEndpoint},
    ClusterTransport, ReplicationEvent, ReplicationMessage,
};
pub use signal_source::{
    audio_input::AudioInputSignalSource,
    audiofile::{AudiofileSignalSource, AudiofileSourceMut},
    audiofile_manager::AudiofileManager,
    config::AudiofileSourceConfig,
    error::SignalSourceError,
    SourceKey,
};
