//! # vabridge Shared
//! Common functionality shared between vabridge-client & vabridge-cluster
//! crates: the launcher wire vocabulary, the role gate and the audio server
//! collaborator interface.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod audio_server;
mod play_action;
mod role;
mod types;
mod wire;
mod wrapping_number;

pub use audio_server::{
    error::AudioServerError, signal_source_id::SignalSourceId, AudioServer,
};
pub use play_action::PlayAction;
pub use role::{RoleGate, SharedRole};
pub use types::{NodeId, NodeRole, Tick};
pub use wire::{
    codec::{decode_text, encode_text},
    error::MetadataParseError,
    file_metadata::FileMetadata,
    reply::{is_ack, MetadataReply, ACK_REPLY, EXISTS_REPLY},
    reproduction::ReproductionMode,
    status::StatusCode,
    FILE_CHUNK_SIZE,
};
pub use wrapping_number::{tick_diff, tick_greater_than, tick_less_than};
