//! Toptrackd - one endpoint over three music upstreams
//!
//! This library aggregates the most popular track for a region (Last.fm),
//! its lyrics (Musixmatch) and an artist image (SerpApi image search) into
//! a single JSON response served at `GET /toptrack?region=<code>`.

/// Client modules for the three upstream services
pub mod clients;
/// HTTP surface: router, app state and the aggregation handler
pub mod server;
