//! Client for the episodate.com show catalog: search shows by name and list the
//! upcoming episodes of a show, turning the API's loosely typed JSON into
//! [`Show`] and [`Episode`] records.

mod air_time;
mod client;
mod episode;
mod error;
mod fetch;
mod parse;
mod raw;
mod running;
mod show;
mod validate;

pub use air_time::{AirTime, EPISODATE_FORMAT};
pub use client::{Client, Endpoints, Lookup, DEFAULT_DETAILS_URL, DEFAULT_SEARCH_URL};
pub use episode::{Episode, EpisodeList};
pub use error::{
    Error, FetchError, FetchErrorKind, InvalidInputError, ParseError, Result, TimeFormatError,
    ValidationError,
};
pub use fetch::{Fetcher, HttpFetcher};
pub use parse::{parse_show_list, parse_upcoming_episodes, parse_upcoming_episodes_at};
pub use running::Running;
pub use show::{Show, ShowId, ShowList};
pub use validate::{validate_search_response, validate_show_details_response};
