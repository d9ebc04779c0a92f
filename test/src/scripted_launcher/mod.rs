/// In-memory launcher peer for testing the launcher client
/// Replies are scripted up front and every write is recorded, without network I/O

use std::collections::VecDeque;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use parking_lot::Mutex;

use vabridge_client::transport::{Dialer, LauncherStream};

#[derive(Default)]
struct Script {
    replies: VecDeque<Vec<u8>>,
    writes: Vec<Vec<u8>>,
    dials: Vec<SocketAddr>,
    dial_error: Option<io::ErrorKind>,
    max_accept: Option<usize>,
    closes: usize,
}

/// Shared handle on a scripted launcher. Clones observe the same script.
#[derive(Clone, Default)]
pub struct ScriptedLauncher {
    script: Arc<Mutex<Script>>,
}

impl ScriptedLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw reply, returned by one receive
    pub fn reply(&self, bytes: &[u8]) -> &Self {
        self.script.lock().replies.push_back(bytes.to_vec());
        self
    }

    pub fn reply_text(&self, text: &str) -> &Self {
        self.reply(text.as_bytes())
    }

    /// Every send accepts at most `limit` bytes
    pub fn accept_at_most(&self, limit: usize) -> &Self {
        self.script.lock().max_accept = Some(limit);
        self
    }

    /// Every dial fails with `kind`
    pub fn refuse_dials(&self, kind: io::ErrorKind) -> &Self {
        self.script.lock().dial_error = Some(kind);
        self
    }

    pub fn dialer(&self) -> ScriptedDialer {
        ScriptedDialer {
            launcher: self.clone(),
        }
    }

    // Observations

    /// Every accepted send, in order
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.script.lock().writes.clone()
    }

    /// All accepted bytes, concatenated
    pub fn written_bytes(&self) -> Vec<u8> {
        self.script.lock().writes.concat()
    }

    pub fn dials(&self) -> Vec<SocketAddr> {
        self.script.lock().dials.clone()
    }

    pub fn dial_count(&self) -> usize {
        self.script.lock().dials.len()
    }

    pub fn close_count(&self) -> usize {
        self.script.lock().closes
    }

    pub fn pending_replies(&self) -> usize {
        self.script.lock().replies.len()
    }
}

/// [`Dialer`] handing out streams attached to a [`ScriptedLauncher`]
pub struct ScriptedDialer {
    launcher: ScriptedLauncher,
}

impl Dialer for ScriptedDialer {
    fn dial(&mut self, address: SocketAddr) -> io::Result<Box<dyn LauncherStream>> {
        let mut script = self.launcher.script.lock();
        script.dials.push(address);
        if let Some(kind) = script.dial_error {
            return Err(io::Error::new(kind, "scripted dial failure"));
        }
        Ok(Box::new(ScriptedStream {
            launcher: self.launcher.clone(),
            closed: false,
        }))
    }
}

struct ScriptedStream {
    launcher: ScriptedLauncher,
    closed: bool,
}

impl LauncherStream for ScriptedStream {
    fn send(&mut self, payload: &[u8]) -> io::Result<usize> {
        if self.closed {
            return Err(io::Error::from(io::ErrorKind::NotConnected));
        }
        let mut script = self.launcher.script.lock();
        let accepted = match script.max_accept {
            Some(limit) => payload.len().min(limit),
            None => payload.len(),
        };
        script.writes.push(payload[..accepted].to_vec());
        Ok(accepted)
    }

    // An exhausted script reads as a closed peer
    fn receive(&mut self, buffer: &mut [u8]) -> io::Result<usize> {
        if self.closed {
            return Err(io::Error::from(io::ErrorKind::NotConnected));
        }
        let mut script = self.launcher.script.lock();
        let Some(reply) = script.replies.pop_front() else {
            return Ok(0);
        };
        let read = reply.len().min(buffer.len());
        buffer[..read].copy_from_slice(&reply[..read]);
        Ok(read)
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            self.launcher.script.lock().closes += 1;
        }
    }
}
