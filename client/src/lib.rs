//! # vabridge Client
//! Client for the remote launcher service that starts the audio server:
//! connects over TCP, uploads renderer configuration files, negotiates the
//! reproduction mode and requests a server version.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

#[macro_use]
extern crate cfg_if;

pub mod transport;

mod connection;
mod files;
mod launcher;
mod process;
mod search_paths;
mod transfer;

pub use connection::{connection::Connection, error::ConnectionError};
pub use files::{ContentDir, ProjectFile, ProjectFiles};
pub use launcher::{
    config::LauncherConfig, error::LauncherError, LauncherClient, STATUS_BUFFER_SIZE,
};
pub use process::LauncherProcess;
pub use search_paths::SearchPaths;
pub use transfer::{
    error::FileTransferError, FileTransferSession, TransferCompletion, TransferState,
    REPLY_BUFFER_SIZE,
};
