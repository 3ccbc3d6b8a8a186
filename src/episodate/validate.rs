use serde_json::Value;

use super::raw::{SearchResponse, ShowDetailsResponse};
use super::{Error, Result, ShowId, ValidationError};

/// Checks that a search response can be parsed.
/// `Ok(false)` means the search legitimately matched nothing.
pub fn validate_search_response(raw: &str, query: &str) -> Result<bool> {
    check_search_response(raw).map_err(|source| Error::Validation {
        context: format!("search response for {query:?}"),
        source,
    })
}

fn check_search_response(raw: &str) -> std::result::Result<bool, ValidationError> {
    let response = serde_json::from_str::<SearchResponse>(raw)?;

    let total = match response.total {
        None | Some(Value::Null) => {
            return Err(ValidationError::MissingField { field: "total" });
        }
        Some(Value::String(total)) => total,
        Some(_) => {
            return Err(ValidationError::WrongType {
                field: "total",
                expected: "numeral string",
            });
        }
    };

    let total = total
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidTotal { value: total })?;
    if total < 1 {
        return Ok(false);
    }

    match response.tv_shows {
        None | Some(Value::Null) => Err(ValidationError::MissingField { field: "tv_shows" }),
        Some(Value::Array(_) | Value::Object(_)) => Ok(true),
        Some(_) => Err(ValidationError::WrongType {
            field: "tv_shows",
            expected: "array or object",
        }),
    }
}

/// Checks that a show details response says whether future episodes are known.
/// `Ok(false)` means `tvShow.countdown` is null: no upcoming episode is known.
pub fn validate_show_details_response(raw: &str, id: ShowId) -> Result<bool> {
    check_show_details_response(raw).map_err(|source| Error::Validation {
        context: format!("show details response for id {id}"),
        source,
    })
}

fn check_show_details_response(raw: &str) -> std::result::Result<bool, ValidationError> {
    let response = serde_json::from_str::<ShowDetailsResponse>(raw)?;

    // the countdown is always present for a valid id, even when there is no next episode
    let countdown = response
        .tv_show
        .as_ref()
        .and_then(Value::as_object)
        .and_then(|show| show.get("countdown"));

    match countdown {
        None => Err(ValidationError::MissingField {
            field: "tvShow.countdown",
        }),
        Some(Value::Null) => Ok(false),
        Some(_) => Ok(true),
    }
}
