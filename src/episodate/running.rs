use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a show is still airing, decoded from episodate's textual `status`
/// ("Running", "Ended", "Canceled/Ended", ...). Serializes as a plain bool.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Running(pub bool);

impl Running {
    pub fn from_status(status: &str) -> Running {
        Running(status.eq_ignore_ascii_case("running"))
    }
}

impl From<Running> for bool {
    fn from(value: Running) -> Self {
        value.0
    }
}

impl fmt::Display for Running {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            write!(f, "running")
        } else {
            write!(f, "ended")
        }
    }
}

impl Serialize for Running {
    fn serialize<S>(&self, s: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        s.serialize_bool(self.0)
    }
}

impl<'de> Deserialize<'de> for Running {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct Visitor;

        impl serde::de::Visitor<'_> for Visitor {
            type Value = Running;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a show status string such as 'Running' or 'Ended'")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Running::from_status(v))
            }
        }

        d.deserialize_str(Visitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_running_is_true() {
        assert!(Running::from_status("Running").0);
        assert!(Running::from_status("RUNNING").0);
        assert!(Running::from_status("running").0);
        assert!(!Running::from_status("Ended").0);
        assert!(!Running::from_status("Canceled/Ended").0);
        assert!(!Running::from_status("Running soon").0);
        assert!(!Running::from_status("").0);
    }

    #[test]
    fn deserializes_from_status_strings() {
        assert_eq!(
            serde_json::from_str::<Running>("\"Running\"").unwrap(),
            Running(true)
        );
        assert_eq!(
            serde_json::from_str::<Running>("\"Ended\"").unwrap(),
            Running(false)
        );
        assert!(serde_json::from_str::<Running>("bad json").is_err());
        assert!(serde_json::from_str::<Running>("").is_err());
        assert!(serde_json::from_str::<Running>("true").is_err());
    }

    #[test]
    fn serializes_as_bool() {
        assert_eq!(serde_json::to_string(&Running(true)).unwrap(), "true");
        assert_eq!(serde_json::to_string(&Running(false)).unwrap(), "false");
    }
}
