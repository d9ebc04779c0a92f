use std::io;

use thiserror::Error;

/// Errors raised by I/O on an open launcher connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// The launcher closed the stream
    #[error("Launcher closed the connection")]
    PeerClosed,

    /// The transport reported an I/O error
    #[error("Launcher connection I/O error ({kind:?}): {message}")]
    Io {
        kind: io::ErrorKind,
        message: String,
    },
}

impl From<io::Error> for ConnectionError {
    fn from(error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::WriteZero
            | io::ErrorKind::UnexpectedEof
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe => ConnectionError::PeerClosed,
            kind => ConnectionError::Io {
                kind,
                message: error.to_string(),
            },
        }
    }
}
