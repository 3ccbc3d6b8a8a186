//! Turns upcoming episodes into calendar events and hands them to a calendar provider.
//! The provider's own protocol (OAuth, event insertion) lives behind [`CalendarProvider`].

mod event;
mod session;

pub use event::{episodes_to_events, CalendarEvent, MAX_EVENT_DURATION_MINUTES};
pub use session::CalendarSession;

use thiserror::Error;

use crate::episodate::Episode;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("no episodes to add")]
    NoEpisodes,
    #[error("calendar session is missing a token or has expired, log in again")]
    SessionExpired,
    #[error("event has no summary")]
    MissingSummary,
    #[error("event {summary:?} lasts {minutes} minutes")]
    RuntimeTooLong { summary: String, minutes: i64 },
    #[error("calendar provider: {0}")]
    Provider(String),
}

pub trait CalendarProvider {
    /// Creates the event and returns the provider's link to it.
    fn insert_event(
        &self,
        session: &CalendarSession,
        event: &CalendarEvent,
    ) -> Result<String, CalendarError>;
}

/// Adds one event per episode, in order. An event that cannot be built or inserted is
/// logged and skipped; the links of the events that were created are returned.
pub fn add_episodes_to_calendar<P: CalendarProvider + ?Sized>(
    provider: &P,
    session: &CalendarSession,
    episodes: &[Episode],
) -> Result<Vec<String>, CalendarError> {
    if episodes.is_empty() {
        return Err(CalendarError::NoEpisodes);
    }
    if !session.is_valid() {
        return Err(CalendarError::SessionExpired);
    }

    let mut links = Vec::with_capacity(episodes.len());
    for episode in episodes {
        let event = CalendarEvent::from_episode(episode);
        match event
            .validate()
            .and_then(|()| provider.insert_event(session, &event))
        {
            Ok(link) => {
                log::info!("Calendar event created: {link}");
                links.push(link);
            }
            Err(err) => {
                log::warn!("Could not add {} to the calendar: {err}", episode.identify());
            }
        }
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingProvider {
        inserted: RefCell<Vec<CalendarEvent>>,
    }

    impl CalendarProvider for RecordingProvider {
        fn insert_event(
            &self,
            _session: &CalendarSession,
            event: &CalendarEvent,
        ) -> Result<String, CalendarError> {
            if event.summary.contains("Broken") {
                return Err(CalendarError::Provider("rejected".into()));
            }
            let mut inserted = self.inserted.borrow_mut();
            inserted.push(event.clone());
            Ok(format!("https://calendar.example/event/{}", inserted.len()))
        }
    }

    fn episode(title: &str, runtime_minutes: u32) -> Episode {
        Episode {
            season: 15,
            episode_number: 21,
            title: title.into(),
            air_date: Utc.with_ymd_and_hms(2119, 9, 3, 2, 0, 0).unwrap(),
            runtime_minutes,
            show_name: "American Dad!".into(),
        }
    }

    fn session() -> CalendarSession {
        CalendarSession::new("token", Utc::now() + Duration::hours(1))
    }

    #[test]
    fn inserts_every_episode() {
        let provider = RecordingProvider::default();
        let links = add_episodes_to_calendar(
            &provider,
            &session(),
            &[episode("Downtown", 30), episode("Cheek to Cheek", 30)],
        )
        .unwrap();

        assert_eq!(
            links,
            [
                "https://calendar.example/event/1",
                "https://calendar.example/event/2"
            ]
        );
        assert_eq!(
            provider.inserted.borrow()[0].summary,
            "American Dad!: \"Downtown\""
        );
    }

    #[test]
    fn skips_events_that_fail() {
        let provider = RecordingProvider::default();
        let links = add_episodes_to_calendar(
            &provider,
            &session(),
            &[
                episode("Broken", 30),
                episode("Way too long", 600),
                episode("Downtown", 30),
            ],
        )
        .unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(provider.inserted.borrow().len(), 1);
    }

    #[test]
    fn expired_session_inserts_nothing() {
        let provider = RecordingProvider::default();
        let expired = CalendarSession::new("token", Utc::now() - Duration::minutes(1));

        let err = add_episodes_to_calendar(&provider, &expired, &[episode("Downtown", 30)])
            .unwrap_err();
        assert!(matches!(err, CalendarError::SessionExpired));
        assert!(provider.inserted.borrow().is_empty());
    }

    #[test]
    fn no_episodes() {
        let provider = RecordingProvider::default();
        let err = add_episodes_to_calendar(&provider, &session(), &[]).unwrap_err();
        assert!(matches!(err, CalendarError::NoEpisodes));
    }
}
