use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use super::raw::{RawEpisode, RawShow, RawShowDetails};
use super::{Episode, EpisodeList, ParseError, Show, ShowList};

type Result<T> = std::result::Result<T, ParseError>;

/// Decodes the `tv_shows` of a search response, keeping the API's order.
/// The first entry that does not decode fails the whole list.
pub fn parse_show_list(raw: &str) -> Result<ShowList> {
    #[derive(Deserialize)]
    struct Envelope {
        #[serde(default)]
        tv_shows: Option<Value>,
    }

    let envelope = serde_json::from_str::<Envelope>(raw)?;
    let entries = match envelope.tv_shows {
        None | Some(Value::Null) => return Err(ParseError::MissingShows),
        Some(Value::Array(entries)) => entries,
        // validation lets an object through as well, read it as a single entry
        Some(entry @ Value::Object(_)) => vec![entry],
        Some(_) => return Err(ParseError::MissingShows),
    };

    let mut shows = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let raw_show = serde_json::from_value::<RawShow>(entry)
            .map_err(|source| ParseError::Entry { index, source })?;

        if raw_show.name.trim().is_empty() {
            return Err(ParseError::BlankShow { index });
        }

        shows.push(Show {
            name: raw_show.name,
            id: raw_show.id,
            still_running: raw_show.status.into(),
        });
    }

    Ok(ShowList { shows })
}

/// Decodes the episodes of a show details response that air after the current time.
pub fn parse_upcoming_episodes(raw: &str) -> Result<EpisodeList> {
    parse_upcoming_episodes_at(raw, Utc::now())
}

/// Decodes the episodes of a show details response that air strictly after `now`,
/// stamping each with the show's name and runtime.
pub fn parse_upcoming_episodes_at(raw: &str, now: DateTime<Utc>) -> Result<EpisodeList> {
    #[derive(Deserialize)]
    struct Envelope {
        #[serde(rename = "tvShow", default)]
        tv_show: Option<Value>,
    }

    // without a tvShow object there is nowhere for an episodes array to be
    let details = match serde_json::from_str::<Envelope>(raw)?.tv_show {
        Some(show @ Value::Object(_)) => serde_json::from_value::<RawShowDetails>(show)?,
        _ => return Err(ParseError::MissingEpisodes),
    };

    let Some(Value::Array(entries)) = details.episodes else {
        return Err(ParseError::MissingEpisodes);
    };

    let show_name = match details.name {
        Some(Value::String(name)) if !name.trim().is_empty() => name,
        _ => return Err(ParseError::MissingShowName),
    };

    let runtime_minutes = details
        .runtime
        .as_ref()
        .and_then(Value::as_u64)
        .filter(|&runtime| runtime > 0)
        .and_then(|runtime| u32::try_from(runtime).ok())
        .ok_or(ParseError::InvalidRuntime)?;

    let mut episodes = Vec::new();
    for (index, entry) in entries.into_iter().enumerate() {
        let raw_episode = serde_json::from_value::<RawEpisode>(entry)
            .map_err(|source| ParseError::Entry { index, source })?;

        // already aired
        if *raw_episode.air_date <= now {
            continue;
        }

        episodes.push(Episode {
            season: raw_episode.season,
            episode_number: raw_episode.episode,
            title: raw_episode.name,
            air_date: raw_episode.air_date.into(),
            runtime_minutes,
            show_name: show_name.clone(),
        });
    }

    Ok(EpisodeList { episodes })
}
