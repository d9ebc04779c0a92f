use std::fmt;

/// Playback action of an audiofile signal source.
///
/// "Not known yet" is expressed as `Option::<PlayAction>::None`, never as a
/// fourth variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayAction {
    Stop,
    Pause,
    Play,
}

impl PlayAction {
    /// Index used by the audio server: Stop = 0, Pause = 1, Play = 2
    pub fn to_index(self) -> i32 {
        match self {
            PlayAction::Stop => 0,
            PlayAction::Pause => 1,
            PlayAction::Play => 2,
        }
    }

    /// Inverse of [`PlayAction::to_index`]. Any other index (the server uses
    /// -1) means the action is unknown.
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(PlayAction::Stop),
            1 => Some(PlayAction::Pause),
            2 => Some(PlayAction::Play),
            _ => None,
        }
    }
}

impl fmt::Display for PlayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayAction::Stop => f.write_str("stop"),
            PlayAction::Pause => f.write_str("pause"),
            PlayAction::Play => f.write_str("play"),
        }
    }
}
