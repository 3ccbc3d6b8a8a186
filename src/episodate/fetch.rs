use std::time::Duration;

use super::{FetchError, FetchErrorKind};

/// Something that can GET a URL and hand back the body as text.
pub trait Fetcher {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Blocking HTTP fetcher. Every call is one independent request: no retries, no caching.
pub struct HttpFetcher {
    agent: ureq::Agent,
}

impl HttpFetcher {
    /// No timeout: a hung upstream blocks the caller until it gives up on its own.
    pub fn new() -> HttpFetcher {
        HttpFetcher {
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    pub fn with_timeout(timeout: Duration) -> HttpFetcher {
        HttpFetcher {
            agent: ureq::AgentBuilder::new().timeout(timeout).build(),
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        let fail = |kind| FetchError {
            url: url.to_owned(),
            kind,
        };

        log::debug!("GET {url}");
        let response = match self.agent.get(url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => return Err(fail(FetchErrorKind::Status(status))),
            Err(ureq::Error::Transport(transport)) => {
                return Err(fail(FetchErrorKind::Transport(Box::new(transport))))
            }
        };

        if response.status() != 200 {
            return Err(fail(FetchErrorKind::Status(response.status())));
        }

        response
            .into_string()
            .map_err(|err| fail(FetchErrorKind::Body(err)))
    }
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        (**self).get(url)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        (**self).get(url)
    }
}
