use thiserror::Error;

use vabridge_shared::AudioServerError;

/// Errors returned by signal source operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignalSourceError {
    /// Only the cluster master may contact the audio server
    #[error("Operation denied, this node is not the cluster master")]
    NotAuthoritative,

    /// The signal source has not been initialized yet
    #[error("Signal source is not initialized")]
    NotInitialized,

    /// No server-side signal source is bound yet
    #[error("Signal source has no valid id, bind an audiofile or input first")]
    NotBound,

    /// The server returned no valid id for an audiofile
    #[error("Audiofile '{filename}' was loaded incorrectly, no valid signal source id")]
    InvalidAudiofile { filename: String },

    /// The server returned no valid id for an input channel
    #[error("Audio input channel {channel} has no valid signal source id")]
    InvalidAudioInput { channel: u32 },

    /// The audio server reported an error
    #[error("Audio server error: {0}")]
    Server(#[from] AudioServerError),
}
