use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct ShowId(pub i64);

impl fmt::Display for ShowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of search results.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    /// Title
    pub name: String,
    pub id: ShowId,
    pub still_running: bool,
}

impl Show {
    pub fn identify(&self) -> String {
        let status = if self.still_running { "running" } else { "ended" };
        format!("[{}] {} ({status})", self.id, self.name)
    }
}

/// Search results in the order the API returned them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowList {
    pub shows: Vec<Show>,
}

impl ShowList {
    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Show> {
        self.shows.iter()
    }
}

impl From<Vec<Show>> for ShowList {
    fn from(shows: Vec<Show>) -> Self {
        Self { shows }
    }
}

impl IntoIterator for ShowList {
    type Item = Show;
    type IntoIter = std::vec::IntoIter<Show>;

    fn into_iter(self) -> Self::IntoIter {
        self.shows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ShowList {
    type Item = &'a Show;
    type IntoIter = std::slice::Iter<'a, Show>;

    fn into_iter(self) -> Self::IntoIter {
        self.shows.iter()
    }
}
