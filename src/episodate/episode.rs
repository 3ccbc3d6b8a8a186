use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An upcoming installment of a show. `runtime_minutes` and `show_name` come from
/// the parent show, not from the episode entry itself.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub season: u32,
    pub episode_number: u32,

    /// Title
    pub title: String,

    pub air_date: DateTime<Utc>,
    pub runtime_minutes: u32,
    pub show_name: String,
}

impl Episode {
    pub fn identify(&self) -> String {
        format!(
            "{} S{:02}E{:02} {} on {} ({} min)",
            self.show_name,
            self.season,
            self.episode_number,
            self.title,
            self.air_date,
            self.runtime_minutes
        )
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.air_date + chrono::Duration::minutes(i64::from(self.runtime_minutes))
    }
}

/// Future episodes of one show, in the order the API listed them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeList {
    pub episodes: Vec<Episode>,
}

impl EpisodeList {
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Episode> {
        self.episodes.iter()
    }
}

impl From<Vec<Episode>> for EpisodeList {
    fn from(episodes: Vec<Episode>) -> Self {
        Self { episodes }
    }
}

impl IntoIterator for EpisodeList {
    type Item = Episode;
    type IntoIter = std::vec::IntoIter<Episode>;

    fn into_iter(self) -> Self::IntoIter {
        self.episodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a EpisodeList {
    type Item = &'a Episode;
    type IntoIter = std::slice::Iter<'a, Episode>;

    fn into_iter(self) -> Self::IntoIter {
        self.episodes.iter()
    }
}
