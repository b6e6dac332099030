// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Audio(AudioError),
    Video(String),
}

/// Specific error types for soundtrack playback issues.
///
/// `NoOutputDevice`, `DeviceConfig`, `StreamBuild` and `StreamStart` all mean
/// the platform refused to start playback; the caller treats them as a signal
/// to wait for a user gesture before retrying.
#[derive(Debug, Clone)]
pub enum AudioError {
    /// No audio output device is available.
    NoOutputDevice,

    /// The output device exists but its configuration could not be read.
    DeviceConfig(String),

    /// Building the output stream failed.
    StreamBuild(String),

    /// The stream was built but refused to start.
    StreamStart(String),

    /// The soundtrack file could not be decoded.
    Decode(String),

    /// The device wants a sample format we do not produce.
    UnsupportedFormat(String),
}

impl AudioError {
    /// Returns true when the error means playback was refused by the platform
    /// rather than the soundtrack itself being broken. Refusals are retried
    /// after the first user gesture; decode errors are not.
    pub fn is_playback_refusal(&self) -> bool {
        matches!(
            self,
            AudioError::NoOutputDevice
                | AudioError::DeviceConfig(_)
                | AudioError::StreamBuild(_)
                | AudioError::StreamStart(_)
                | AudioError::UnsupportedFormat(_)
        )
    }
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::NoOutputDevice => write!(f, "No audio output device found"),
            AudioError::DeviceConfig(msg) => write!(f, "Failed to get audio config: {}", msg),
            AudioError::StreamBuild(msg) => write!(f, "Failed to build audio stream: {}", msg),
            AudioError::StreamStart(msg) => write!(f, "Failed to start audio stream: {}", msg),
            AudioError::Decode(msg) => write!(f, "Decoding failed: {}", msg),
            AudioError::UnsupportedFormat(msg) => {
                write!(f, "Unsupported audio sample format: {}", msg)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
            Error::Video(e) => write!(f, "Video Error: {}", e),
        }
    }
}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn refusals_are_distinguished_from_decode_errors() {
        assert!(AudioError::NoOutputDevice.is_playback_refusal());
        assert!(AudioError::StreamStart("busy".into()).is_playback_refusal());
        assert!(!AudioError::Decode("truncated frame".into()).is_playback_refusal());
    }

    #[test]
    fn audio_error_wraps_into_error() {
        let err: Error = AudioError::NoOutputDevice.into();
        assert!(matches!(err, Error::Audio(AudioError::NoOutputDevice)));
        assert!(format!("{}", err).contains("No audio output device"));
    }
}
