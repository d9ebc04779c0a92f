pub mod error;
pub mod signal_source_id;

use crate::{play_action::PlayAction, AudioServerError, SignalSourceId};

/// The external audio rendering server, as seen by the authoritative node.
///
/// Only the cluster master may hold a live connection; callers gate every
/// call through a [`RoleGate`](crate::RoleGate) first.
pub trait AudioServer {
    /// Creates (or looks up) a buffer signal source playing `filename`
    fn create_audiofile_signal_source(
        &mut self,
        filename: &str,
    ) -> Result<SignalSourceId, AudioServerError>;

    /// Returns the signal source fed by live input `channel` (1-based)
    fn audio_input_signal_source(
        &mut self,
        channel: u32,
    ) -> Result<SignalSourceId, AudioServerError>;

    fn set_looping(&mut self, id: &SignalSourceId, looping: bool)
        -> Result<(), AudioServerError>;

    fn set_play_action(
        &mut self,
        id: &SignalSourceId,
        action: PlayAction,
    ) -> Result<(), AudioServerError>;

    fn play_action(&mut self, id: &SignalSourceId) -> Result<PlayAction, AudioServerError>;

    fn set_playback_position(
        &mut self,
        id: &SignalSourceId,
        seconds: f32,
    ) -> Result<(), AudioServerError>;

    /// Adds a directory the server searches for assets. Adding the same
    /// path twice is harmless.
    fn add_search_path(&mut self, path: &str) -> Result<(), AudioServerError>;
}
