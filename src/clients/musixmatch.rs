use log::debug;
use serde::Deserialize;

use crate::clients::errors::{Error, Result};

const DEFAULT_BASE_URL: &str = "https://api.musixmatch.com";

// The matcher response nests the lyrics three levels deep and omits levels
// entirely when there is no match, so every level falls back to a default.
#[derive(Deserialize, Debug, Default)]
struct Lyrics {
    #[serde(default)]
    lyrics_body: String,
}

#[derive(Deserialize, Debug, Default)]
struct MessageBody {
    #[serde(default)]
    lyrics: Lyrics,
}

#[derive(Deserialize, Debug, Default)]
struct Message {
    #[serde(default)]
    body: MessageBody,
}

#[derive(Deserialize, Debug, Default)]
struct MatcherLyricsResponse {
    #[serde(default)]
    message: Message,
}

/// Credentials and endpoint for the Musixmatch API.
pub struct MusixmatchConfig {
    pub api_key: String,
    pub base_url: String,
}

pub struct MusixmatchClient {
    config: MusixmatchConfig,
    http: reqwest::Client,
}

impl MusixmatchClient {
    pub fn new(config: MusixmatchConfig) -> Result<Self> {
        Ok(MusixmatchClient {
            config,
            http: super::default_http_client()?,
        })
    }

    // Create a MusixmatchClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        let api_key = std::env::var("MUSIXMATCH_API_KEY")?;
        let base_url = std::env::var("MUSIXMATCH_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        MusixmatchClient::new(MusixmatchConfig { api_key, base_url })
    }

    /// Fetch the lyrics body for a track/artist pair via the matcher
    /// endpoint. Track and artist go through query-string encoding, so names
    /// containing `&` or other reserved characters stay intact.
    pub async fn lyrics(&self, track: &str, artist: &str) -> Result<String> {
        let url = format!("{}/ws/1.1/matcher.lyrics.get", self.config.base_url);
        let body = self
            .http
            .get(&url)
            .query(&[
                ("format", "json"),
                ("apikey", self.config.api_key.as_str()),
                ("q_track", track),
                ("q_artist", artist),
            ])
            .send()
            .await?
            .text()
            .await?;

        let response: MatcherLyricsResponse = serde_json::from_str(&body)?;
        let lyrics = response.message.body.lyrics.lyrics_body;
        if lyrics.is_empty() {
            debug!("no lyrics match for {track:?} by {artist:?}");
            return Err(Error::LyricsNotFound {
                track: track.to_string(),
                artist: artist.to_string(),
            });
        }

        Ok(lyrics)
    }
}
