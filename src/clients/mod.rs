use std::time::Duration;

/// Data entities shared by the upstream clients
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Last.fm geo-chart client
pub mod lastfm;
/// Musixmatch lyrics client
pub mod musixmatch;
/// SerpApi image-search client
pub mod serpapi;

pub use lastfm::LastFmClient;
pub use musixmatch::MusixmatchClient;
pub use serpapi::SerpApiClient;

const DEFAULT_TIMEOUT_SECS: u64 = 10;

// Every outbound call gets a bounded timeout so a hung upstream can't stall
// a request forever.
fn default_http_client() -> errors::Result<reqwest::Client> {
    let timeout_secs = std::env::var("UPSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}
