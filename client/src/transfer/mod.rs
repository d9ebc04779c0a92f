pub mod error;

use log::{debug, info, warn};

use vabridge_shared::{decode_text, is_ack, FileMetadata, MetadataReply, FILE_CHUNK_SIZE};

use crate::{connection::connection::Connection, transfer::error::FileTransferError};

/// Upper bound for a single text reply read from the launcher
pub const REPLY_BUFFER_SIZE: usize = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferState {
    Idle,
    MetaSent,
    AwaitingAck,
    Streaming,
    AwaitingFinalAck,
    Done,
    Failed,
}

/// How a successful transfer ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferCompletion {
    /// The payload was streamed and confirmed
    Uploaded { bytes: u64 },
    /// The launcher already had an identical-size copy; nothing was streamed
    AlreadyExists,
}

/// Drives the transfer of one file over an open launcher connection:
/// metadata handshake, existence short-circuit, chunked payload and final
/// confirmation.
///
/// Role, connection, copy-files policy and file existence are checked by
/// the caller before a session is built.
pub struct FileTransferSession<'a> {
    metadata: FileMetadata,
    payload: &'a [u8],
    state: TransferState,
    bytes_streamed: u64,
}

impl<'a> FileTransferSession<'a> {
    /// Fails with [`FileTransferError::LengthMismatch`] if `metadata`
    /// does not describe exactly `payload.len()` bytes
    pub fn new(metadata: FileMetadata, payload: &'a [u8]) -> Result<Self, FileTransferError> {
        let actual = payload.len() as u64;
        if metadata.byte_length != actual {
            return Err(FileTransferError::LengthMismatch {
                declared: metadata.byte_length,
                actual,
            });
        }
        Ok(Self {
            metadata,
            payload,
            state: TransferState::Idle,
            bytes_streamed: 0,
        })
    }

    pub fn metadata(&self) -> &FileMetadata {
        &self.metadata
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    pub fn bytes_streamed(&self) -> u64 {
        self.bytes_streamed
    }

    /// Runs the session to completion, leaving it in `Done` or `Failed`
    pub fn run(
        &mut self,
        connection: &mut Connection,
    ) -> Result<TransferCompletion, FileTransferError> {
        let result = self.run_inner(connection);
        self.state = match result {
            Ok(_) => TransferState::Done,
            Err(_) => TransferState::Failed,
        };
        result
    }

    fn run_inner(
        &mut self,
        connection: &mut Connection,
    ) -> Result<TransferCompletion, FileTransferError> {
        connection.send_all(&self.metadata.to_bytes())?;
        self.state = TransferState::MetaSent;

        self.state = TransferState::AwaitingAck;
        let reply = connection
            .receive(REPLY_BUFFER_SIZE)
            .map_err(|source| FileTransferError::NoReply { source })?;

        match MetadataReply::from_bytes(&reply) {
            MetadataReply::Acknowledged => {}
            MetadataReply::AlreadyExists => {
                info!(
                    "File {} already exists with the same size on the launcher, not sending it again",
                    self.metadata.relative_path
                );
                return Ok(TransferCompletion::AlreadyExists);
            }
            MetadataReply::Rejected(reply) => {
                return Err(FileTransferError::Rejected { reply });
            }
        }

        self.state = TransferState::Streaming;
        self.stream_payload(connection)?;
        info!("Entire file ({}) sent", self.metadata.relative_path);

        self.state = TransferState::AwaitingFinalAck;
        let reply = connection.receive(REPLY_BUFFER_SIZE)?;
        if !is_ack(&reply) {
            return Err(FileTransferError::FinalAckMissing {
                reply: decode_text(&reply),
            });
        }

        Ok(TransferCompletion::Uploaded {
            bytes: self.bytes_streamed,
        })
    }

    // The transport may accept less than a full chunk, so progress is
    // tracked from what each send reports.
    fn stream_payload(&mut self, connection: &mut Connection) -> Result<(), FileTransferError> {
        let total = self.payload.len();
        let mut sent = 0;
        while sent < total {
            let chunk_end = usize::min(sent + FILE_CHUNK_SIZE, total);
            let accepted = connection.send(&self.payload[sent..chunk_end])?;
            sent += accepted;
            self.bytes_streamed = sent as u64;
            debug!("Streamed {}/{} bytes of {}", sent, total, self.metadata.relative_path);
        }

        if self.bytes_streamed != self.metadata.byte_length {
            warn!(
                "Streamed {} bytes but announced {}",
                self.bytes_streamed, self.metadata.byte_length
            );
            return Err(FileTransferError::LengthMismatch {
                declared: self.metadata.byte_length,
                actual: self.bytes_streamed,
            });
        }
        Ok(())
    }
}
