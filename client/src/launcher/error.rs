use std::{io, net::SocketAddr};

use thiserror::Error;

use vabridge_shared::{ReproductionMode, StatusCode};

use crate::{connection::error::ConnectionError, transfer::error::FileTransferError};

/// Errors returned by the LauncherClient
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LauncherError {
    /// Only the cluster master may talk to the launcher
    #[error("Operation denied, this node is not the cluster master")]
    NotAuthoritative,

    /// The host could not be parsed as an IP address
    #[error("Launcher host '{host}' cannot be parsed as an IP address")]
    InvalidAddress { host: String },

    /// Opening the stream to the launcher failed
    #[error("Cannot connect to launcher at {address} ({kind:?}): {message}")]
    ConnectFailed {
        address: SocketAddr,
        kind: io::ErrorKind,
        message: String,
    },

    /// The operation needs an open launcher connection
    #[error("No connection to the launcher")]
    NotConnected,

    /// A version was already started over the open connection
    #[error("A server was already launched over this connection")]
    AlreadyLaunched,

    /// I/O on the open connection failed
    #[error("Launcher connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// The launch answer was not exactly one status byte
    #[error("Expected a single status byte from the launcher, received {len} bytes: {received:?}", len = .received.len())]
    ShortStatusReply { received: Vec<u8> },

    /// The launcher answered the launch request with a non-go status
    #[error("Launching version '{version}' failed: {status}")]
    LaunchRejected { version: String, status: StatusCode },

    /// The launcher did not accept the reproduction mode
    #[error("Reproduction mode '{mode}' not accepted by the launcher, answer: '{reply}'")]
    ReproductionModeRejected {
        mode: ReproductionMode,
        reply: String,
    },

    /// Copying files over the network is disabled in the LauncherConfig
    #[error("Sending files to the launcher is disabled, not sending '{path}'")]
    CopyFilesDisabled { path: String },

    /// The file to send does not exist in the project
    #[error("File to send ({path}) could not be found")]
    FileNotFound { path: String },

    /// The file to send exists but could not be read
    #[error("File to send ({path}) could not be read: {message}")]
    FileUnreadable { path: String, message: String },

    /// The file transfer failed
    #[error("File transfer failed: {0}")]
    Transfer(#[from] FileTransferError),

    /// The launcher script was not found below the launcher directory
    #[error("Launcher script not found at {path}")]
    LauncherScriptNotFound { path: String },

    /// Neither candidate Python interpreter could be run
    #[error("Launcher cannot be started, no Python interpreter found (tried {tried})")]
    NoPythonInterpreter { tried: String },

    /// Spawning the launcher script failed
    #[error("Spawning the launcher script with '{interpreter}' failed: {message}")]
    SpawnFailed {
        interpreter: String,
        message: String,
    },
}
