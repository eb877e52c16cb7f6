use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::clients::{
    LastFmClient, MusixmatchClient, SerpApiClient,
    entities::{ArtistInfo, Track},
    errors::{Error, Result},
};

/// The three upstream clients, shared read-only by every request.
pub struct AppState {
    pub lastfm: LastFmClient,
    pub musixmatch: MusixmatchClient,
    pub serpapi: SerpApiClient,
}

impl AppState {
    // Build all clients from environment variables; any missing key aborts
    // startup instead of failing per-request.
    pub fn try_default() -> Result<Self> {
        Ok(AppState {
            lastfm: LastFmClient::try_default()?,
            musixmatch: MusixmatchClient::try_default()?,
            serpapi: SerpApiClient::try_default()?,
        })
    }
}

#[derive(Deserialize, Debug)]
struct TopTrackParams {
    // Absent region means empty string; the charts upstream owns validation.
    #[serde(default)]
    region: String,
}

#[derive(Serialize)]
struct AggregateResponse {
    top_track: Track,
    lyrics: String,
    artist_info: ArtistInfo,
}

// Every upstream failure surfaces the same way: 500 with the error message
// as the plain-text body. No partial or degraded responses.
struct AppError(Error);

impl From<Error> for AppError {
    fn from(err: Error) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

async fn top_track(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TopTrackParams>,
) -> std::result::Result<Json<AggregateResponse>, AppError> {
    let region = params.region;

    let track = state
        .lastfm
        .top_track(&region)
        .await
        .inspect_err(|e| warn!("top-track lookup failed for region {region:?}: {e}"))?;

    let lyrics = state
        .musixmatch
        .lyrics(&track.name, &track.artist)
        .await
        .inspect_err(|e| warn!("lyrics lookup failed for region {region:?}: {e}"))?;

    let artist_info = state
        .serpapi
        .artist_info(&track.artist)
        .await
        .inspect_err(|e| warn!("artist image lookup failed for region {region:?}: {e}"))?;

    Ok(Json(AggregateResponse {
        top_track: track,
        lyrics,
        artist_info,
    }))
}

/// Build the application router around the shared client state.
pub fn make_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/toptrack", get(top_track))
        .with_state(state)
}
