use super::{
    parse_show_list, parse_upcoming_episodes, validate_search_response,
    validate_show_details_response, EpisodeList, Error, Fetcher, HttpFetcher, InvalidInputError,
    Result, ShowId, ShowList,
};

pub static DEFAULT_SEARCH_URL: &str = "https://www.episodate.com/api/search";
pub static DEFAULT_DETAILS_URL: &str = "https://episodate.com/api/show-details";

/// Outcome of a query that reached the API and understood its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    /// No matching shows, or no known future episodes.
    NotFound,
}

impl<T> Lookup<T> {
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub search_url: String,
    pub details_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            search_url: DEFAULT_SEARCH_URL.to_owned(),
            details_url: DEFAULT_DETAILS_URL.to_owned(),
        }
    }
}

pub struct Client<F = HttpFetcher> {
    fetcher: F,
    endpoints: Endpoints,
}

impl Client<HttpFetcher> {
    pub fn new() -> Client<HttpFetcher> {
        Client::with_fetcher(HttpFetcher::new(), Endpoints::default())
    }
}

impl Default for Client<HttpFetcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Fetcher> Client<F> {
    pub fn with_fetcher(fetcher: F, endpoints: Endpoints) -> Client<F> {
        Client { fetcher, endpoints }
    }

    pub fn search_url(&self, query: &str) -> std::result::Result<String, InvalidInputError> {
        if query.is_empty() {
            return Err(InvalidInputError::EmptyQuery);
        }
        Ok(format!(
            "{}?q={}",
            self.endpoints.search_url,
            urlencoding::encode(query)
        ))
    }

    pub fn details_url(&self, id: ShowId) -> String {
        format!("{}?q={id}", self.endpoints.details_url)
    }

    /// Searches the catalog by show name. An empty query fails before any request is made.
    pub fn search_shows(&self, query: &str) -> Result<Lookup<ShowList>> {
        let url = self.search_url(query)?;
        let body = self.fetcher.get(&url)?;

        if !validate_search_response(&body, query)? {
            log::info!("No shows match {query:?}");
            return Ok(Lookup::NotFound);
        }

        let shows = parse_show_list(&body).map_err(|source| Error::Parse {
            context: format!("search results for {query:?}"),
            source,
        })?;

        if shows.is_empty() {
            log::info!("No shows listed for {query:?}");
            return Ok(Lookup::NotFound);
        }
        Ok(Lookup::Found(shows))
    }

    /// Fetches the episodes of a show that have not aired yet.
    pub fn get_show_episodes(&self, id: ShowId) -> Result<Lookup<EpisodeList>> {
        let url = self.details_url(id);
        let body = self.fetcher.get(&url)?;

        if !validate_show_details_response(&body, id)? {
            log::info!("No known future episodes for show {id}");
            return Ok(Lookup::NotFound);
        }

        let episodes = parse_upcoming_episodes(&body).map_err(|source| Error::Parse {
            context: format!("episodes of show {id}"),
            source,
        })?;

        if episodes.is_empty() {
            log::info!("Every listed episode of show {id} has already aired");
            return Ok(Lookup::NotFound);
        }
        Ok(Lookup::Found(episodes))
    }

    /// Like [`Client::search_shows`], but every failure becomes `(false, empty)`.
    /// The cause only shows up in the log.
    pub fn get_candidate_shows(&self, query: &str) -> (bool, ShowList) {
        collapse(self.search_shows(query), || format!("searching for {query:?}"))
    }

    /// Like [`Client::get_show_episodes`], but every failure becomes `(false, empty)`.
    /// The cause only shows up in the log.
    pub fn get_show_data(&self, id: ShowId) -> (bool, EpisodeList) {
        collapse(self.get_show_episodes(id), || format!("getting episodes of show {id}"))
    }
}

fn collapse<T: Default>(result: Result<Lookup<T>>, what: impl FnOnce() -> String) -> (bool, T) {
    match result {
        Ok(Lookup::Found(value)) => (true, value),
        Ok(Lookup::NotFound) => (false, T::default()),
        Err(err) => {
            log::warn!("Error {}: {err}", what());
            (false, T::default())
        }
    }
}
