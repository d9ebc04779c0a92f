use std::fmt;

/// The single status byte the launcher answers a launch request with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// `g`: the audio server was started
    Go,
    /// `n`: the server binary is invalid or could not be found
    NotFound,
    /// `i`: the launcher configuration holds an invalid file entry
    InvalidConfig,
    /// `a`: the server start was aborted
    Aborted,
    /// `f`: the requested version is not available
    VersionUnavailable,
    /// Any other byte
    Unknown(u8),
}

impl StatusCode {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'g' => StatusCode::Go,
            b'n' => StatusCode::NotFound,
            b'i' => StatusCode::InvalidConfig,
            b'a' => StatusCode::Aborted,
            b'f' => StatusCode::VersionUnavailable,
            other => StatusCode::Unknown(other),
        }
    }

    pub fn to_byte(self) -> u8 {
        match self {
            StatusCode::Go => b'g',
            StatusCode::NotFound => b'n',
            StatusCode::InvalidConfig => b'i',
            StatusCode::Aborted => b'a',
            StatusCode::VersionUnavailable => b'f',
            StatusCode::Unknown(other) => other,
        }
    }

    pub fn is_go(self) -> bool {
        self == StatusCode::Go
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCode::Go => write!(f, "audio server started"),
            StatusCode::NotFound => write!(
                f,
                "audio server cannot be launched, invalid server binary or binary not found"
            ),
            StatusCode::InvalidConfig => write!(
                f,
                "audio server cannot be launched, invalid file entry in the launcher config"
            ),
            StatusCode::Aborted => write!(f, "audio server start was aborted"),
            StatusCode::VersionUnavailable => write!(
                f,
                "audio server cannot be launched, requested version is not available"
            ),
            StatusCode::Unknown(byte) => {
                write!(f, "unexpected launcher response byte 0x{:02x}", byte)
            }
        }
    }
}
