use serde::{Deserialize, Serialize};

/// One cover-art image reference as Last.fm returns it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackImage {
    #[serde(rename = "#text")]
    pub url: String,
}

/// A single chart entry. The geo chart carries the artist as a plain string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
    #[serde(default)]
    pub image: Vec<TrackImage>,
}

/// Artist metadata assembled from the image search.
///
/// `similar_to` is part of the response contract but nothing populates it
/// yet; it serializes as `null`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ArtistInfo {
    pub name: String,
    pub image_url: String,
    pub similar_to: Option<Vec<String>>,
}
