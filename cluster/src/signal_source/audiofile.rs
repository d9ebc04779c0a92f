use log::{info, warn};

use vabridge_shared::{PlayAction, SignalSourceId};

use crate::signal_source::{
    config::AudiofileSourceConfig, error::SignalSourceError, SourceContext, SourceKey,
};

/// Replicated state of a signal source playing back an audiofile.
///
/// On the master every command is forwarded to the audio server and the
/// resulting play action is broadcast. Other nodes only mirror what the
/// master broadcasts, so their play action may be one tick behind.
#[derive(Clone, Debug)]
pub struct AudiofileSignalSource {
    id: SignalSourceId,
    filename: String,
    looping: bool,
    last_play_action: Option<PlayAction>,
    starting_play_action: PlayAction,
    starting_time: f32,
    initialized: bool,
}

impl AudiofileSignalSource {
    pub fn new(config: AudiofileSourceConfig) -> Self {
        Self {
            id: SignalSourceId::invalid(),
            filename: config.filename,
            looping: config.looping,
            last_play_action: None,
            starting_play_action: config.starting_play_action,
            starting_time: config.starting_time,
            initialized: false,
        }
    }

    // Getters

    pub fn id(&self) -> &SignalSourceId {
        &self.id
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The locally known play action, without contacting anyone
    pub fn last_play_action(&self) -> Option<PlayAction> {
        self.last_play_action
    }

    // Crate-public

    /// Binds the configured audiofile, if any. Initializing twice is a
    /// no-op.
    pub(crate) fn initialize(&mut self, ctx: &mut SourceContext) -> Result<(), SignalSourceError> {
        if self.initialized {
            info!("Signal source {:?} is already initialized", ctx.key);
            return Ok(());
        }

        if !self.filename.is_empty() {
            let filename = self.filename.clone();
            match self.bind_audiofile(ctx, &filename) {
                Ok(()) | Err(SignalSourceError::NotAuthoritative) => {}
                Err(error) => {
                    warn!(
                        "Signal source {:?}: error creating audiofile signal source: {}",
                        ctx.key, error
                    );
                    return Err(error);
                }
            }
        }

        self.initialized = true;
        Ok(())
    }

    /// Switches to `filename`. Before initialization the name is only
    /// stored.
    pub(crate) fn set_audiofile(
        &mut self,
        ctx: &mut SourceContext,
        filename: &str,
    ) -> Result<(), SignalSourceError> {
        if !self.initialized {
            self.filename = filename.to_string();
            return Ok(());
        }
        self.bind_audiofile(ctx, filename)
    }

    pub(crate) fn set_loop(
        &mut self,
        ctx: &mut SourceContext,
        looping: bool,
    ) -> Result<(), SignalSourceError> {
        if !self.initialized {
            self.looping = looping;
            return Ok(());
        }

        let changed = self.looping != looping;
        self.looping = looping;

        ctx.check_authoritative()?;

        // An unbound source picks the flag up when a file gets bound
        if !changed || !self.id.is_valid() {
            return Ok(());
        }
        ctx.server.set_looping(&self.id, looping)?;
        Ok(())
    }

    pub(crate) fn set_playback_position(
        &mut self,
        ctx: &mut SourceContext,
        seconds: f32,
    ) -> Result<(), SignalSourceError> {
        ctx.check_authoritative()?;
        if !self.id.is_valid() {
            return Err(SignalSourceError::NotBound);
        }
        ctx.server.set_playback_position(&self.id, seconds)?;
        Ok(())
    }

    /// Caches and broadcasts `action` on any node; the master additionally
    /// forwards it to the audio server.
    pub(crate) fn set_play_action(
        &mut self,
        ctx: &mut SourceContext,
        action: PlayAction,
    ) -> Result<(), SignalSourceError> {
        if !self.initialized {
            return Err(SignalSourceError::NotInitialized);
        }

        self.last_play_action = Some(action);
        // Also overwrites values a get_play_action broadcast earlier this tick
        ctx.replicate_play_action(action);

        ctx.check_authoritative()?;
        if !self.id.is_valid() {
            return Err(SignalSourceError::NotBound);
        }
        ctx.server.set_play_action(&self.id, action)?;
        Ok(())
    }

    /// Returns the locally known play action.
    ///
    /// On the master the live value is read from the audio server and
    /// broadcast, so every node (the master included) holds it after the
    /// next tick. With `direct_on_master` the master returns the live value
    /// right away instead; other nodes ignore the flag.
    pub(crate) fn play_action(
        &mut self,
        ctx: &mut SourceContext,
        direct_on_master: bool,
    ) -> Result<Option<PlayAction>, SignalSourceError> {
        if !self.initialized {
            return Err(SignalSourceError::NotInitialized);
        }

        if ctx.is_authoritative() && self.id.is_valid() {
            let live = ctx.server.play_action(&self.id)?;
            ctx.replicate_play_action(live);
            if direct_on_master {
                return Ok(Some(live));
            }
        }

        Ok(self.last_play_action)
    }

    pub(crate) fn apply_replicated_play_action(&mut self, action: PlayAction) {
        self.last_play_action = Some(action);
    }

    // Private

    fn bind_audiofile(
        &mut self,
        ctx: &mut SourceContext,
        filename: &str,
    ) -> Result<(), SignalSourceError> {
        if !ctx.is_authoritative() {
            // Other nodes mirror the binding without a server-side source
            self.filename = filename.to_string();
            return ctx.check_authoritative();
        }

        let new_id = ctx.audiofiles.signal_source_id(&mut *ctx.server, filename)?;
        if !new_id.is_valid() {
            warn!("Audiofile {} was loaded incorrectly", filename);
            return Err(SignalSourceError::InvalidAudiofile {
                filename: filename.to_string(),
            });
        }

        if new_id == self.id {
            return Ok(());
        }

        if let Err(error) = self.copy_settings_to(ctx, &new_id) {
            warn!(
                "Could not copy settings to signal source of new audiofile {}: {}",
                filename, error
            );
            return Err(error);
        }

        self.filename = filename.to_string();
        self.id = new_id;
        ctx.events.push_audiofile_change(ctx.key, self.id.clone());
        Ok(())
    }

    // The first binding gets the starting state, later ones inherit the
    // current play action of the source they replace, which is also
    // broadcast so every node holds it after the next tick.
    fn copy_settings_to(
        &mut self,
        ctx: &mut SourceContext,
        other: &SignalSourceId,
    ) -> Result<(), SignalSourceError> {
        ctx.server.set_looping(other, self.looping)?;

        let action = if self.initialized && self.id.is_valid() {
            let current = ctx.server.play_action(&self.id)?;
            ctx.replicate_play_action(current);
            current
        } else {
            if self.starting_time > 0.0 {
                ctx.server.set_playback_position(other, self.starting_time)?;
            }
            self.starting_play_action
        };

        ctx.server.set_play_action(other, action)?;
        Ok(())
    }
}

/// Mutable handle to one audiofile signal source of a node
pub struct AudiofileSourceMut<'n> {
    source: &'n mut AudiofileSignalSource,
    ctx: SourceContext<'n>,
}

impl<'n> AudiofileSourceMut<'n> {
    pub(crate) fn new(source: &'n mut AudiofileSignalSource, ctx: SourceContext<'n>) -> Self {
        Self { source, ctx }
    }

    pub fn key(&self) -> SourceKey {
        self.ctx.key
    }

    pub fn state(&self) -> &AudiofileSignalSource {
        &*self.source
    }

    pub fn initialize(&mut self) -> Result<(), SignalSourceError> {
        self.source.initialize(&mut self.ctx)
    }

    pub fn play(&mut self) -> Result<(), SignalSourceError> {
        self.source.set_play_action(&mut self.ctx, PlayAction::Play)
    }

    pub fn play_from_time(&mut self, seconds: f32) -> Result<(), SignalSourceError> {
        self.source.set_playback_position(&mut self.ctx, seconds)?;
        self.play()
    }

    pub fn pause(&mut self) -> Result<(), SignalSourceError> {
        self.source.set_play_action(&mut self.ctx, PlayAction::Pause)
    }

    pub fn stop(&mut self) -> Result<(), SignalSourceError> {
        self.source.set_play_action(&mut self.ctx, PlayAction::Stop)
    }

    pub fn set_play_action(&mut self, action: PlayAction) -> Result<(), SignalSourceError> {
        self.source.set_play_action(&mut self.ctx, action)
    }

    /// See the note on the one tick delay of [`AudiofileSignalSource`]
    pub fn play_action(
        &mut self,
        direct_on_master: bool,
    ) -> Result<Option<PlayAction>, SignalSourceError> {
        self.source.play_action(&mut self.ctx, direct_on_master)
    }

    pub fn set_audiofile(&mut self, filename: &str) -> Result<(), SignalSourceError> {
        self.source.set_audiofile(&mut self.ctx, filename)
    }

    pub fn set_loop(&mut self, looping: bool) -> Result<(), SignalSourceError> {
        self.source.set_loop(&mut self.ctx, looping)
    }

    pub fn set_playback_position(&mut self, seconds: f32) -> Result<(), SignalSourceError> {
        self.source.set_playback_position(&mut self.ctx, seconds)
    }

    /// Creates the server-side source of `filename` ahead of its first use
    pub fn preload_audiofile(&mut self, filename: &str) -> Result<bool, SignalSourceError> {
        self.ctx.check_authoritative()?;
        Ok(self.ctx.audiofiles.preload(&mut *self.ctx.server, filename)?)
    }
}
