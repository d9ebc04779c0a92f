use thiserror::Error;

use crate::connection::error::ConnectionError;

/// Errors that can occur while transferring one file to the launcher
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileTransferError {
    /// The declared length does not match the payload (caller bug)
    #[error("File metadata declares {declared} bytes but the payload holds {actual} bytes")]
    LengthMismatch { declared: u64, actual: u64 },

    /// The launcher answered the metadata record with something other than
    /// `ack` or `exists`
    #[error("Launcher does not want to receive the file, answer: '{reply}'")]
    Rejected { reply: String },

    /// The launcher did not answer the metadata record
    #[error("Launcher does not want to receive the file, no answer: {source}")]
    NoReply { source: ConnectionError },

    /// The launcher did not confirm the streamed payload
    #[error("File was NOT received by the launcher, answer: '{reply}'")]
    FinalAckMissing { reply: String },

    /// The connection failed while streaming or awaiting confirmation
    #[error("Connection failed during file transfer: {0}")]
    Connection(#[from] ConnectionError),
}
