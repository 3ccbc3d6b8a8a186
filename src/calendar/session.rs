use chrono::{DateTime, Utc};

/// Credentials for a calendar provider, owned by the caller and passed to every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarSession {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

impl CalendarSession {
    pub fn new(access_token: impl Into<String>, expires_at: DateTime<Utc>) -> CalendarSession {
        CalendarSession {
            access_token: access_token.into(),
            expires_at,
        }
    }

    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.access_token.is_empty() && now < self.expires_at
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }
}
