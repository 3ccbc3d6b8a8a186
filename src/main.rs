mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Args, Command};
use showcal::calendar;
use showcal::config::AppConfig;
use showcal::episodate::{Lookup, ShowId};

fn read_config(args: &Args) -> anyhow::Result<AppConfig> {
    let file_path = match &args.config {
        Some(path) => path.clone(),
        None => match std::env::var_os("SHOWCAL_CONFIG_FILE") {
            Some(path) => path.into(),
            None => return Ok(AppConfig::default()),
        },
    };
    AppConfig::try_read(&file_path)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = read_config(&args)?;
    let client = config.make_client();

    match args.command {
        Command::Search { query } => match client
            .search_shows(&query)
            .with_context(|| format!("Searching for {query:?}"))?
        {
            Lookup::Found(shows) => {
                for show in &shows {
                    println!("{}", show.identify());
                }
            }
            Lookup::NotFound => println!("No shows matching {query:?}"),
        },
        Command::Episodes { id } => {
            let id = ShowId(id);
            match client
                .get_show_episodes(id)
                .with_context(|| format!("Getting episodes of show {id}"))?
            {
                Lookup::Found(episodes) => {
                    for episode in &episodes {
                        println!("{}", episode.identify());
                    }
                }
                Lookup::NotFound => println!("No upcoming episodes for show {id}"),
            }
        }
        Command::Events { id } => {
            let id = ShowId(id);
            let episodes = client
                .get_show_episodes(id)
                .with_context(|| format!("Getting episodes of show {id}"))?
                .found()
                .unwrap_or_default();

            let events = calendar::episodes_to_events(&episodes);
            for event in &events {
                if let Err(err) = event.validate() {
                    log::warn!("{err}");
                }
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&events).context("Serializing calendar events")?
            );
        }
    }

    Ok(())
}
