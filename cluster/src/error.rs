use thiserror::Error;

use vabridge_shared::AudioServerError;

use crate::signal_source::{error::SignalSourceError, SourceKey};

/// Errors returned by [`ClusterNode`](crate::ClusterNode) operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClusterError {
    /// Only the cluster master may contact the audio server
    #[error("Operation denied, this node is not the cluster master")]
    NotAuthoritative,

    /// No signal source of the requested kind is registered under the key
    #[error("No signal source registered under {key:?}")]
    UnknownSource { key: SourceKey },

    /// The signal source operation failed
    #[error(transparent)]
    SignalSource(#[from] SignalSourceError),

    /// The audio server reported an error
    #[error("Audio server error: {0}")]
    Server(#[from] AudioServerError),
}
