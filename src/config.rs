use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use url::Url;

use crate::{FILE_PATH, MAX_PAGES, REQUEST_TIMEOUT_SECS, START_URL};

/// What to do when a single item can't be extracted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ItemErrorPolicy {
    /// Abort the whole run.
    #[default]
    Fail,
    /// Log a warning, leave the item out and keep going.
    Skip,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "bookscrape")]
#[command(about = "Scrape a paginated book catalogue into a CSV file")]
#[command(version)]
pub struct Config {
    /// First listing page of the catalogue
    #[arg(long, env = "BOOKSCRAPE_START_URL", default_value = START_URL)]
    pub start_url: Url,

    /// CSV file to write, overwritten if it exists
    #[arg(short, long = "output", env = "BOOKSCRAPE_OUTPUT", default_value = FILE_PATH)]
    pub output_path: PathBuf,

    /// Per-request timeout in seconds
    #[arg(
        long = "request-timeout",
        env = "BOOKSCRAPE_REQUEST_TIMEOUT",
        default_value_t = REQUEST_TIMEOUT_SECS
    )]
    pub request_timeout_secs: u64,

    /// Stop after this many listing pages
    #[arg(long, env = "BOOKSCRAPE_MAX_PAGES", default_value_t = MAX_PAGES)]
    pub max_pages: usize,

    /// Whether a broken item aborts the run or is skipped
    #[arg(long, env = "BOOKSCRAPE_ON_ITEM_ERROR", value_enum, default_value_t)]
    pub on_item_error: ItemErrorPolicy,
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_url: Url::parse(START_URL).expect("START_URL is a valid url"),
            output_path: PathBuf::from(FILE_PATH),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            max_pages: MAX_PAGES,
            on_item_error: ItemErrorPolicy::default(),
        }
    }
}
