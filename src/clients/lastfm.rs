use log::debug;
use serde::Deserialize;

use crate::clients::{
    entities::Track,
    errors::{Error, Result},
};

const DEFAULT_BASE_URL: &str = "http://ws.audioscrobbler.com";

#[derive(Deserialize, Debug, Default)]
struct Tracks {
    #[serde(default)]
    track: Vec<Track>,
}

#[derive(Deserialize, Debug, Default)]
struct GeoTopTracksResponse {
    #[serde(default)]
    tracks: Tracks,
}

/// Credentials and endpoint for the Last.fm API. This service gets its own
/// key, never shared with the other upstreams.
pub struct LastFmConfig {
    pub api_key: String,
    pub base_url: String,
}

pub struct LastFmClient {
    config: LastFmConfig,
    http: reqwest::Client,
}

impl LastFmClient {
    pub fn new(config: LastFmConfig) -> Result<Self> {
        Ok(LastFmClient {
            config,
            http: super::default_http_client()?,
        })
    }

    // Create a LastFmClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        let api_key = std::env::var("LASTFM_API_KEY")?;
        let base_url = std::env::var("LASTFM_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        LastFmClient::new(LastFmConfig { api_key, base_url })
    }

    /// Fetch the most popular track for a region from the geo chart.
    ///
    /// The region code is handed to the upstream untouched; Last.fm decides
    /// what an empty or unknown region means.
    pub async fn top_track(&self, region: &str) -> Result<Track> {
        let url = format!("{}/2.0/", self.config.base_url);
        let body = self
            .http
            .get(&url)
            .query(&[
                ("method", "geo.gettoptracks"),
                ("country", region),
                ("api_key", self.config.api_key.as_str()),
                ("format", "json"),
            ])
            .send()
            .await?
            .text()
            .await?;

        let response: GeoTopTracksResponse = serde_json::from_str(&body)?;
        debug!(
            "geo chart for region {region:?} returned {} tracks",
            response.tracks.track.len()
        );

        response
            .tracks
            .track
            .into_iter()
            .next()
            .ok_or_else(|| Error::NoTopTracks(region.to_string()))
    }
}
