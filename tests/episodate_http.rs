use mockito::Matcher;
use showcal::episodate::{
    Client, Endpoints, EpisodeList, Error, FetchErrorKind, HttpFetcher, Lookup, Show, ShowId,
    ShowList,
};

fn client(server: &mockito::Server) -> Client<HttpFetcher> {
    Client::with_fetcher(
        HttpFetcher::new(),
        Endpoints {
            search_url: format!("{}/api/search", server.url()),
            details_url: format!("{}/api/show-details", server.url()),
        },
    )
}

#[test]
fn search_over_http() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/api/search")
        .match_query(Matcher::UrlEncoded("q".into(), "American Dad".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"total":"1","tv_shows":[{"id":2550,"name":"American Dad!","status":"Running"}]}"#)
        .create();

    let (found, shows) = client(&server).get_candidate_shows("American Dad");

    mock.assert();
    assert!(found);
    assert_eq!(
        shows,
        ShowList::from(vec![Show {
            name: "American Dad!".into(),
            id: ShowId(2550),
            still_running: true,
        }])
    );
}

#[test]
fn null_countdown_over_http() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/show-details")
        .match_query(Matcher::UrlEncoded("q".into(), "2550".into()))
        .with_status(200)
        .with_body(r#"{"tvShow":{"id":2550,"name":"American Dad!","runtime":30,"countdown":null,"episodes":[]}}"#)
        .create();

    let client = client(&server);
    assert_eq!(client.get_show_data(ShowId(2550)), (false, EpisodeList::default()));
    assert_eq!(
        client.get_show_episodes(ShowId(2550)).unwrap(),
        Lookup::NotFound
    );
}

#[test]
fn upcoming_episodes_over_http() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/show-details")
        .match_query(Matcher::UrlEncoded("q".into(), "2550".into()))
        .with_status(200)
        .with_body(r#"{"tvShow":{"id":2550,"name":"American Dad!","runtime":30,"countdown":{"season":15,"episode":21,"name":"Downtown","air_date":"2119-09-03 02:00:00"},"episodes":[{"season":15,"episode":21,"name":"Downtown","air_date":"2119-09-03 02:00:00"},{"season":15,"episode":22,"name":"Cheek to Cheek: A Stripper's Story","air_date":"2119-09-10T02:00:00Z"}]}}"#)
        .create();

    let episodes = client(&server)
        .get_show_episodes(ShowId(2550))
        .unwrap()
        .found()
        .unwrap();

    let titles: Vec<_> = episodes.iter().map(|ep| ep.title.as_str()).collect();
    assert_eq!(titles, ["Downtown", "Cheek to Cheek: A Stripper's Story"]);
    assert!(episodes
        .iter()
        .all(|ep| ep.runtime_minutes == 30 && ep.show_name == "American Dad!"));
}

#[test]
fn error_status_is_a_fetch_error() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/api/show-details")
        .match_query(Matcher::Any)
        .with_status(500)
        .create();

    let err = client(&server).get_show_episodes(ShowId(1)).unwrap_err();
    match err {
        Error::Fetch(fetch) => {
            assert!(matches!(fetch.kind, FetchErrorKind::Status(500)));
            assert!(fetch.url.ends_with("/api/show-details?q=1"));
        }
        other => panic!("expected a fetch error, got {other:?}"),
    }
}
