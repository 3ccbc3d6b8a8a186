//! Shapes of the episodate JSON responses, before they are checked and mapped
//! into [`Show`](super::Show) and [`Episode`](super::Episode).
//!
//! Fields whose kind itself has to be diagnosed are kept as [`serde_json::Value`];
//! everything else is typed so serde reports exactly which field is off.

use serde::Deserialize;
use serde_json::Value;

use super::{AirTime, Running, ShowId};

/// `GET /api/search?q=...`
#[derive(Debug, Deserialize)]
pub(super) struct SearchResponse {
    /// A numeral string, e.g. `"12"`, not a JSON number.
    #[serde(default)]
    pub total: Option<Value>,
    #[serde(default)]
    pub tv_shows: Option<Value>,
}

/// `GET /api/show-details?q=...`
#[derive(Debug, Deserialize)]
pub(super) struct ShowDetailsResponse {
    /// An object for a known id; episodate answers unknown ids with `[]`.
    #[serde(rename = "tvShow", default)]
    pub tv_show: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawShow {
    pub id: ShowId,
    pub name: String,
    pub status: Running,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawShowDetails {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub runtime: Option<Value>,
    #[serde(default)]
    pub episodes: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub(super) struct RawEpisode {
    pub season: u32,
    pub episode: u32,
    pub name: String,
    pub air_date: AirTime,
}
