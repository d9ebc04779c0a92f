use std::default::Default;

use vabridge_shared::PlayAction;

/// Contains the starting state of an audiofile signal source
#[derive(Clone, Debug, PartialEq)]
pub struct AudiofileSourceConfig {
    /// Audio file to bind at initialization; sub folders are allowed
    /// (e.g. "folder/soundfile.wav"). Empty leaves the source unbound.
    pub filename: String,
    /// Play action set on the server when the file is first bound
    pub starting_play_action: PlayAction,
    /// Playback position in seconds set when the file is first bound
    pub starting_time: f32,
    /// Whether the file is played back in a loop
    pub looping: bool,
}

impl Default for AudiofileSourceConfig {
    fn default() -> Self {
        Self {
            filename: String::new(),
            starting_play_action: PlayAction::Stop,
            starting_time: 0.0,
            looping: false,
        }
    }
}
