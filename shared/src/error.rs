use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum WheelError {
    /// Prize list or geometry cannot be used; the wheel must not offer a spin control.
    InvalidConfiguration(String),
    /// Audio output could not be created or resumed. Ticks fall back to visual only.
    AudioUnavailable(String),
    /// A spin was requested while another one is still animating.
    AnimationInterrupted,
}

impl fmt::Display for WheelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WheelError::InvalidConfiguration(msg) => write!(f, "Invalid wheel configuration: {}", msg),
            WheelError::AudioUnavailable(msg) => write!(f, "Audio unavailable: {}", msg),
            WheelError::AnimationInterrupted => write!(f, "A spin is already in progress"),
        }
    }
}

impl std::error::Error for WheelError {}

impl From<validator::ValidationErrors> for WheelError {
    fn from(err: validator::ValidationErrors) -> Self {
        WheelError::InvalidConfiguration(err.to_string())
    }
}

impl From<serde_json::Error> for WheelError {
    fn from(err: serde_json::Error) -> Self {
        WheelError::InvalidConfiguration(format!("config parse error: {}", err))
    }
}
