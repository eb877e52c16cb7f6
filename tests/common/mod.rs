//! Test server lifecycle management
//!
//! Spawns fake upstream services and an isolated app instance per test,
//! each on its own ephemeral port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::Query, routing::get};
use serde_json::Value;
use tokio::net::TcpListener;

use toptrackd::clients::lastfm::{LastFmClient, LastFmConfig};
use toptrackd::clients::musixmatch::{MusixmatchClient, MusixmatchConfig};
use toptrackd::clients::serpapi::{SerpApiClient, SerpApiConfig};
use toptrackd::server::{AppState, make_app};

pub const LASTFM_TEST_KEY: &str = "lastfm-test-key";
pub const MUSIXMATCH_TEST_KEY: &str = "musixmatch-test-key";
pub const SERPAPI_TEST_KEY: &str = "serpapi-test-key";

/// Query strings received by a fake upstream, in arrival order.
pub type CapturedQueries = Arc<Mutex<Vec<HashMap<String, String>>>>;

/// A fake upstream service listening on an ephemeral port.
pub struct FakeUpstream {
    pub base_url: String,
    pub queries: CapturedQueries,
}

impl FakeUpstream {
    /// Serves `body` as JSON on `path` and records every query string.
    pub async fn json(path: &str, body: Value) -> Self {
        let queries: CapturedQueries = Arc::new(Mutex::new(Vec::new()));
        let recorded = queries.clone();
        let router = Router::new().route(
            path,
            get(move |Query(params): Query<HashMap<String, String>>| {
                let body = body.clone();
                let recorded = recorded.clone();
                async move {
                    recorded.lock().unwrap().push(params);
                    Json(body)
                }
            }),
        );
        Self::spawn(router, queries).await
    }

    /// Serves a raw (possibly malformed) body on `path`.
    pub async fn raw(path: &str, body: &'static str) -> Self {
        let queries: CapturedQueries = Arc::new(Mutex::new(Vec::new()));
        let recorded = queries.clone();
        let router = Router::new().route(
            path,
            get(move |Query(params): Query<HashMap<String, String>>| {
                let recorded = recorded.clone();
                async move {
                    recorded.lock().unwrap().push(params);
                    body
                }
            }),
        );
        Self::spawn(router, queries).await
    }

    async fn spawn(router: Router, queries: CapturedQueries) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        FakeUpstream {
            base_url: format!("http://{addr}"),
            queries,
        }
    }

    /// The single query string this upstream should have received.
    pub fn only_query(&self) -> HashMap<String, String> {
        let queries = self.queries.lock().unwrap();
        assert_eq!(queries.len(), 1, "expected exactly one upstream call");
        queries[0].clone()
    }
}

/// The application under test, wired to fake upstreams.
pub struct TestApp {
    pub base_url: String,
}

impl TestApp {
    /// Spawns the app on a random port with each client pointed at the
    /// given fake upstream and its own per-service test credential.
    pub async fn spawn(
        lastfm: &FakeUpstream,
        musixmatch: &FakeUpstream,
        serpapi: &FakeUpstream,
    ) -> Self {
        let state = AppState {
            lastfm: LastFmClient::new(LastFmConfig {
                api_key: LASTFM_TEST_KEY.to_string(),
                base_url: lastfm.base_url.clone(),
            })
            .unwrap(),
            musixmatch: MusixmatchClient::new(MusixmatchConfig {
                api_key: MUSIXMATCH_TEST_KEY.to_string(),
                base_url: musixmatch.base_url.clone(),
            })
            .unwrap(),
            serpapi: SerpApiClient::new(SerpApiConfig {
                api_key: SERPAPI_TEST_KEY.to_string(),
                base_url: serpapi.base_url.clone(),
            })
            .unwrap(),
        };

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, make_app(Arc::new(state)))
                .await
                .unwrap();
        });

        TestApp {
            base_url: format!("http://{addr}"),
        }
    }

    pub async fn get_toptrack(&self, region: &str) -> reqwest::Response {
        reqwest::get(format!("{}/toptrack?region={region}", self.base_url))
            .await
            .unwrap()
    }
}
