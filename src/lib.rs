//! Look up TV shows and their upcoming episodes on episodate.com and turn air dates
//! into calendar events.

pub mod calendar;
pub mod config;
pub mod episodate;
