use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("upstream request failed: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("failed to decode upstream response: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("no top tracks found for the region {0}")]
    NoTopTracks(String),

    #[error("lyrics not found for the track {track} by {artist}")]
    LyricsNotFound { track: String, artist: String },

    #[error("no image results found for the artist {0}")]
    ArtistImageNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
