use thiserror::Error;

/// Failure to retrieve a response body from the show API.
#[derive(Debug, Error)]
#[error("GET {url}: {kind}")]
pub struct FetchError {
    pub url: String,
    #[source]
    pub kind: FetchErrorKind,
}

#[derive(Debug, Error)]
pub enum FetchErrorKind {
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("transport: {0}")]
    Transport(Box<ureq::Transport>),
    #[error("reading body: {0}")]
    Body(#[from] std::io::Error),
}

/// The response is missing a structural field we need before parsing.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no {field} field")]
    MissingField { field: &'static str },
    #[error("{field} field is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("total {value:?} is not an integer")]
    InvalidTotal { value: String },
}

/// The response passed validation but does not decode into our records.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no tv_shows field")]
    MissingShows,
    #[error("no tvShow.episodes array")]
    MissingEpisodes,
    #[error("no tvShow.name")]
    MissingShowName,
    #[error("tvShow.runtime is missing or not a positive integer")]
    InvalidRuntime,
    #[error("entry {index}: {source}")]
    Entry {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("entry {index}: show has no name")]
    BlankShow { index: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{input:?} is neither RFC 3339 nor YYYY-MM-DD HH:MM:SS")]
pub struct TimeFormatError {
    pub input: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("search query is empty")]
    EmptyQuery,
}

/// Any failure of a show query, with the call it happened in.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("{context}: {source}")]
    Validation {
        context: String,
        #[source]
        source: ValidationError,
    },
    #[error("{context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: ParseError,
    },
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

pub type Result<T> = std::result::Result<T, Error>;
