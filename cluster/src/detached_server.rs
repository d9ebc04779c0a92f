use vabridge_shared::{AudioServer, AudioServerError, PlayAction, SignalSourceId};

const NO_SERVER: &str = "this node holds no audio server connection";

/// Stand-in for nodes that never talk to the audio server. Every call
/// fails with [`AudioServerError::Unreachable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedAudioServer;

fn unreachable_server<T>() -> Result<T, AudioServerError> {
    Err(AudioServerError::Unreachable {
        reason: NO_SERVER.to_string(),
    })
}

impl AudioServer for DetachedAudioServer {
    fn create_audiofile_signal_source(
        &mut self,
        _filename: &str,
    ) -> Result<SignalSourceId, AudioServerError> {
        unreachable_server()
    }

    fn audio_input_signal_source(
        &mut self,
        _channel: u32,
    ) -> Result<SignalSourceId, AudioServerError> {
        unreachable_server()
    }

    fn set_looping(
        &mut self,
        _id: &SignalSourceId,
        _looping: bool,
    ) -> Result<(), AudioServerError> {
        unreachable_server()
    }

    fn set_play_action(
        &mut self,
        _id: &SignalSourceId,
        _action: PlayAction,
    ) -> Result<(), AudioServerError> {
        unreachable_server()
    }

    fn play_action(&mut self, _id: &SignalSourceId) -> Result<PlayAction, AudioServerError> {
        unreachable_server()
    }

    fn set_playback_position(
        &mut self,
        _id: &SignalSourceId,
        _seconds: f32,
    ) -> Result<(), AudioServerError> {
        unreachable_server()
    }

    fn add_search_path(&mut self, _path: &str) -> Result<(), AudioServerError> {
        unreachable_server()
    }
}
