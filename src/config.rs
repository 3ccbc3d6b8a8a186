use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::episodate::{self, Endpoints, HttpFetcher};

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub episodate: EpisodateConfig,

    /// Applied to the whole request; unset means wait as long as the server takes.
    #[serde(default)]
    pub http_timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn try_read(file_path: &Path) -> anyhow::Result<AppConfig> {
        let json = &std::fs::read_to_string(file_path)
            .with_context(|| format!("Reading config file {file_path:?}"))?;
        serde_json::from_str::<AppConfig>(json)
            .with_context(|| format!("Parsing JSON config file {file_path:?}"))
    }

    pub fn make_client(&self) -> episodate::Client {
        let fetcher = match self.http_timeout_secs {
            Some(secs) => HttpFetcher::with_timeout(Duration::from_secs(secs)),
            None => HttpFetcher::new(),
        };
        episodate::Client::with_fetcher(fetcher, self.episodate.endpoints())
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EpisodateConfig {
    #[serde(default = "default_search_url")]
    pub search_url: String,
    #[serde(default = "default_details_url")]
    pub details_url: String,
}

fn default_search_url() -> String {
    episodate::DEFAULT_SEARCH_URL.to_owned()
}

fn default_details_url() -> String {
    episodate::DEFAULT_DETAILS_URL.to_owned()
}

impl Default for EpisodateConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            details_url: default_details_url(),
        }
    }
}

impl EpisodateConfig {
    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            search_url: self.search_url.clone(),
            details_url: self.details_url.clone(),
        }
    }
}
