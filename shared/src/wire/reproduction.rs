use std::fmt;

use crate::wire::codec::encode_text;

const REPRODUCTION_COMMAND_TAG: &str = "reproduction_input_type";

/// Family of reproduction modules the audio server activates. Fixed for
/// the lifetime of one launch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReproductionMode {
    /// Reproduction modules for binaural signals
    #[default]
    Binaural,
    /// Reproduction modules for ambisonics signals
    Ambisonics,
    /// Reproduction modules for custom purposes (e.g. mixed signal types)
    Custom,
}

impl ReproductionMode {
    pub fn wire_name(self) -> &'static str {
        match self {
            ReproductionMode::Binaural => "binaural",
            ReproductionMode::Ambisonics => "ambisonics",
            ReproductionMode::Custom => "custom",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        match name {
            "binaural" => Some(ReproductionMode::Binaural),
            "ambisonics" => Some(ReproductionMode::Ambisonics),
            "custom" => Some(ReproductionMode::Custom),
            _ => None,
        }
    }

    /// `reproduction_input_type:<name>`
    pub fn command(self) -> String {
        format!("{}:{}", REPRODUCTION_COMMAND_TAG, self.wire_name())
    }

    pub fn command_bytes(self) -> Vec<u8> {
        encode_text(&self.command())
    }

    /// Parses a negotiation command as received by the launcher
    pub fn parse_command(command: &str) -> Option<Self> {
        let name = command
            .strip_prefix(REPRODUCTION_COMMAND_TAG)?
            .strip_prefix(':')?;
        Self::from_wire_name(name)
    }
}

impl fmt::Display for ReproductionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
