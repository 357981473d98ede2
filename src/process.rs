use std::path::PathBuf;

use chrono::Local;

use crate::config::Config;
use crate::parse::parse_listing;
use crate::request::{Fetch, HttpFetcher};
use crate::walk::{PaginationWalker, StopReason, WalkReport};
use crate::write::write_items;
use crate::{info_time, Result};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub pages: usize,
    pub items: usize,
    pub skipped: usize,
    pub stop: StopReason,
    pub output_path: PathBuf,
}

/// Scrapes the whole catalogue over HTTP and writes it to `config.output_path`.
pub async fn process_site(config: &Config) -> Result<RunSummary> {
    let fetcher = HttpFetcher::new(config.request_timeout())?;
    process_site_with(&fetcher, config).await
}

/// Same as [`process_site`], with the page source supplied by the caller.
pub async fn process_site_with<F: Fetch + ?Sized>(fetcher: &F, config: &Config) -> Result<RunSummary> {
    let report = scrape_catalogue(fetcher, config).await?;
    write_items(&report.items, &config.output_path)?;

    Ok(RunSummary {
        pages: report.pages.len(),
        items: report.items.len(),
        skipped: report.skipped,
        stop: report.stop,
        output_path: config.output_path.clone(),
    })
}

/// Fetches the start page and walks every listing page after it.
pub async fn scrape_catalogue<F: Fetch + ?Sized>(fetcher: &F, config: &Config) -> Result<WalkReport> {
    let start_time = Local::now();
    info_time!("Started scraping {}", config.start_url);

    let html = fetcher.fetch(&config.start_url).await?;
    let first = parse_listing(config.start_url.clone(), html).await?;

    let walker = PaginationWalker::new(fetcher, config.max_pages, config.on_item_error);
    let report = walker.walk(first).await?;
    info_time!(start_time, "Finished PROCESSING ALL pages.");

    Ok(report)
}
