use thiserror::Error;

/// Library errors using thiserror for structured error handling.
///
/// None of these reach the caller of the play/show API: the components log
/// them and fall back to a default stimulus. They exist so that fetchers,
/// decoders and outputs can say what went wrong.

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Failed to fetch asset: {location}")]
    FetchFailed {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Asset request for {location} returned status {status}")]
    BadStatus { location: String, status: u16 },

    #[error("Failed to read asset body: {location}")]
    ReadFailed {
        location: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode asset: {location}")]
    DecodeFailed {
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Failed to decode audio format")]
    DecodeFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to initialize audio output stream")]
    StreamInitFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Audio playback failed")]
    PlaybackFailed(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Invalid audio format: {0}")]
    InvalidFormat(String),
}

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("Failed to mount overlay: {0}")]
    MountFailed(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to save configuration to {path}")]
    SaveFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Could not determine the platform config directory")]
    NoConfigDir,
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_error_display() {
        let err = AudioError::InvalidFormat("no tracks".to_string());
        assert_eq!(err.to_string(), "Invalid audio format: no tracks");

        let err = AssetError::BadStatus {
            location: "/assets/sounds/correct/a.mp3".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "Asset request for /assets/sounds/correct/a.mp3 returned status 404"
        );
    }

    #[test]
    fn test_error_source_chain() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let config_err = ConfigError::LoadFailed {
            path: "/test/config.json".to_string(),
            source: Box::new(io_err),
        };

        assert!(config_err.source().is_some());
        assert_eq!(
            config_err.to_string(),
            "Failed to load configuration from /test/config.json"
        );
    }
}
