use std::net::SocketAddr;

use log::debug;

use crate::{connection::error::ConnectionError, transport::LauncherStream};

/// The single live stream to the launcher service.
///
/// Owned by exactly one `LauncherClient`. The stream is closed by
/// [`Connection::close`] or, at the latest, when the value is dropped.
pub struct Connection {
    peer: SocketAddr,
    stream: Box<dyn LauncherStream>,
    open: bool,
}

impl Connection {
    pub fn new(peer: SocketAddr, stream: Box<dyn LauncherStream>) -> Self {
        Self {
            peer,
            stream,
            open: true,
        }
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// One transport send; returns the number of bytes accepted
    pub fn send(&mut self, payload: &[u8]) -> Result<usize, ConnectionError> {
        match self.stream.send(payload)? {
            0 if !payload.is_empty() => Err(ConnectionError::PeerClosed),
            sent => Ok(sent),
        }
    }

    /// Sends the whole of `payload`, however many transport sends it takes
    pub fn send_all(&mut self, payload: &[u8]) -> Result<(), ConnectionError> {
        let mut sent = 0;
        while sent < payload.len() {
            sent += self.send(&payload[sent..])?;
        }
        Ok(())
    }

    /// One blocking read of at most `max_len` bytes. An empty read is
    /// reported as [`ConnectionError::PeerClosed`].
    pub fn receive(&mut self, max_len: usize) -> Result<Vec<u8>, ConnectionError> {
        let mut buffer = vec![0u8; max_len];
        let read = self.stream.receive(&mut buffer)?;
        if read == 0 {
            return Err(ConnectionError::PeerClosed);
        }
        buffer.truncate(read);
        Ok(buffer)
    }

    pub fn close(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        if self.open {
            debug!("Closing launcher connection to {}", self.peer);
            self.stream.close();
            self.open = false;
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.shutdown();
    }
}
