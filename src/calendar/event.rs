use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CalendarError;
use crate::episodate::Episode;

/// Anything longer is almost certainly bad runtime data rather than an episode.
pub const MAX_EVENT_DURATION_MINUTES: i64 = 3 * 60;

/// A provider-neutral calendar entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl CalendarEvent {
    pub fn from_episode(episode: &Episode) -> CalendarEvent {
        let summary = format!("{}: \"{}\"", episode.show_name, episode.title);
        let description = format!(
            "{summary}\nSeason {}, Episode {}",
            episode.season, episode.episode_number
        );

        CalendarEvent {
            summary,
            description,
            start: episode.air_date,
            end: episode.end_time(),
        }
    }

    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.summary.trim().is_empty() {
            return Err(CalendarError::MissingSummary);
        }

        let minutes = self.end.signed_duration_since(self.start).num_minutes();
        if minutes > MAX_EVENT_DURATION_MINUTES {
            return Err(CalendarError::RuntimeTooLong {
                summary: self.summary.clone(),
                minutes,
            });
        }

        Ok(())
    }
}

pub fn episodes_to_events<'a>(
    episodes: impl IntoIterator<Item = &'a Episode>,
) -> Vec<CalendarEvent> {
    episodes.into_iter().map(CalendarEvent::from_episode).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn episode(runtime_minutes: u32) -> Episode {
        Episode {
            season: 1,
            episode_number: 1,
            title: "B".into(),
            air_date: Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap(),
            runtime_minutes,
            show_name: "A".into(),
        }
    }

    #[test]
    fn formats_episode() {
        assert_eq!(
            CalendarEvent::from_episode(&episode(30)),
            CalendarEvent {
                summary: "A: \"B\"".into(),
                description: "A: \"B\"\nSeason 1, Episode 1".into(),
                start: Utc.with_ymd_and_hms(2019, 1, 1, 0, 0, 0).unwrap(),
                end: Utc.with_ymd_and_hms(2019, 1, 1, 0, 30, 0).unwrap(),
            }
        );
    }

    #[test]
    fn validates_summary_and_length() {
        assert!(CalendarEvent::from_episode(&episode(180)).validate().is_ok());

        let err = CalendarEvent::from_episode(&episode(181))
            .validate()
            .unwrap_err();
        assert!(matches!(err, CalendarError::RuntimeTooLong { minutes: 181, .. }));

        let mut event = CalendarEvent::from_episode(&episode(30));
        event.summary.clear();
        assert!(matches!(event.validate(), Err(CalendarError::MissingSummary)));
    }

    #[test]
    fn converts_lists_in_order() {
        let mut second = episode(30);
        second.episode_number = 2;

        let events = episodes_to_events(&[episode(30), second]);
        assert_eq!(events.len(), 2);
        assert!(events[1].description.ends_with("Episode 2"));
    }
}
