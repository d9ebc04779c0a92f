use std::fmt;

const INVALID_ID: &str = "invalid";

/// Opaque identifier the audio server assigns to a signal source
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignalSourceId(String);

impl SignalSourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The "not created" sentinel
    pub fn invalid() -> Self {
        Self(INVALID_ID.to_string())
    }

    pub fn is_valid(&self) -> bool {
        !self.0.is_empty() && self.0 != INVALID_ID
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SignalSourceId {
    fn default() -> Self {
        Self::invalid()
    }
}

impl fmt::Display for SignalSourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
