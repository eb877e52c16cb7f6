use log::debug;
use serde::Deserialize;

use crate::clients::{
    entities::ArtistInfo,
    errors::{Error, Result},
};

const DEFAULT_BASE_URL: &str = "https://serpapi.com";

// Only `original` is extracted from a result entry; anything else the
// search returns is ignored. The field is optional so a thumbnail-only
// entry maps to a not-found error instead of a decode failure.
#[derive(Deserialize, Debug)]
struct ImageResult {
    original: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
struct ImageSearchResponse {
    #[serde(default)]
    images_results: Vec<ImageResult>,
}

/// Credentials and endpoint for the SerpApi image search.
pub struct SerpApiConfig {
    pub api_key: String,
    pub base_url: String,
}

pub struct SerpApiClient {
    config: SerpApiConfig,
    http: reqwest::Client,
}

impl SerpApiClient {
    pub fn new(config: SerpApiConfig) -> Result<Self> {
        Ok(SerpApiClient {
            config,
            http: super::default_http_client()?,
        })
    }

    // Create a SerpApiClient from environment variables or raise a configuration error
    pub fn try_default() -> Result<Self> {
        let api_key = std::env::var("SERPAPI_API_KEY")?;
        let base_url = std::env::var("SERPAPI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        SerpApiClient::new(SerpApiConfig { api_key, base_url })
    }

    /// Run a safe image search for the artist, limited to one result, and
    /// build an [`ArtistInfo`] from the first image URL. An empty result set
    /// or a result without a full-size URL is a not-found error, not a
    /// decode failure.
    pub async fn artist_info(&self, artist: &str) -> Result<ArtistInfo> {
        let url = format!("{}/search.json", self.config.base_url);
        let body = self
            .http
            .get(&url)
            .query(&[
                ("q", artist),
                ("tbm", "isch"),
                ("num", "1"),
                ("safe", "active"),
                ("api_key", self.config.api_key.as_str()),
            ])
            .send()
            .await?
            .text()
            .await?;

        let response: ImageSearchResponse = serde_json::from_str(&body)?;
        debug!(
            "image search for {artist:?} returned {} results",
            response.images_results.len()
        );

        let image_url = response
            .images_results
            .into_iter()
            .find_map(|result| result.original)
            .ok_or_else(|| Error::ArtistImageNotFound(artist.to_string()))?;

        Ok(ArtistInfo {
            name: artist.to_string(),
            image_url,
            // Declared in the contract but never filled by any upstream call.
            similar_to: None,
        })
    }
}
