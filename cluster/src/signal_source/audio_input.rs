use log::{info, warn};

use vabridge_shared::SignalSourceId;

use crate::signal_source::{error::SignalSourceError, SourceContext};

/// A signal source streaming one live input channel of the audio server.
/// It has no play state to replicate.
#[derive(Clone, Debug)]
pub struct AudioInputSignalSource {
    id: SignalSourceId,
    channel: u32,
    initialized: bool,
}

impl AudioInputSignalSource {
    /// `channel` is 1-based; 0 is raised to 1
    pub fn new(channel: u32) -> Self {
        Self {
            id: SignalSourceId::invalid(),
            channel: channel.max(1),
            initialized: false,
        }
    }

    pub fn id(&self) -> &SignalSourceId {
        &self.id
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Looks up the server-side source of the channel. Only the master
    /// holds a valid id; other nodes just mark the source initialized.
    pub(crate) fn initialize(&mut self, ctx: &mut SourceContext) -> Result<(), SignalSourceError> {
        if self.initialized {
            info!("Audio input signal source {:?} is already initialized", ctx.key);
            return Ok(());
        }

        if ctx.is_authoritative() {
            let id = ctx.server.audio_input_signal_source(self.channel)?;
            if !id.is_valid() {
                warn!(
                    "Error initializing audio input signal source for channel {}",
                    self.channel
                );
                return Err(SignalSourceError::InvalidAudioInput {
                    channel: self.channel,
                });
            }
            self.id = id;
        }

        self.initialized = true;
        Ok(())
    }
}
