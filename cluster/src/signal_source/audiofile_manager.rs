use std::collections::HashMap;

use log::warn;

use vabridge_shared::{AudioServer, AudioServerError, SignalSourceId};

/// Caches the server-side signal source of every audiofile this node has
/// bound or preloaded, so switching back to a file reuses its source
#[derive(Debug, Default)]
pub struct AudiofileManager {
    sources: HashMap<String, SignalSourceId>,
}

impl AudiofileManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the signal source for `filename`, creating it on the server
    /// if it is not cached. An invalid id is returned as-is and not cached.
    pub fn signal_source_id(
        &mut self,
        server: &mut dyn AudioServer,
        filename: &str,
    ) -> Result<SignalSourceId, AudioServerError> {
        if let Some(id) = self.sources.get(filename) {
            return Ok(id.clone());
        }

        let id = server.create_audiofile_signal_source(filename)?;
        if id.is_valid() {
            self.sources.insert(filename.to_string(), id.clone());
        } else {
            warn!("Audio server returned no valid signal source for {}", filename);
        }
        Ok(id)
    }

    /// Creates the signal source for `filename` ahead of its first use.
    /// Returns whether a valid source is now cached.
    pub fn preload(
        &mut self,
        server: &mut dyn AudioServer,
        filename: &str,
    ) -> Result<bool, AudioServerError> {
        Ok(self.signal_source_id(server, filename)?.is_valid())
    }

    pub fn cached(&self, filename: &str) -> Option<&SignalSourceId> {
        self.sources.get(filename)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
