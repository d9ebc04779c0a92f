use thiserror::Error;

/// Errors reported by an audio server connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioServerError {
    /// The audio server is not connected or stopped answering
    #[error("Audio server is unreachable: {reason}")]
    Unreachable { reason: String },

    /// The server does not know the given signal source
    #[error("Audio server does not know signal source '{id}'")]
    UnknownSignalSource { id: String },

    /// The server refused the operation
    #[error("Audio server rejected '{operation}': {reason}")]
    Rejected {
        operation: &'static str,
        reason: String,
    },
}
