//! Scraper for paginated book catalogues such as <http://books.toscrape.com>.
//!
//! Walks every listing page by following its "next page" link, visits each
//! item's detail page, and writes title, rating, image and price to a CSV file.

mod error;
mod macros;

pub mod config;
pub mod extract;
pub mod item;
pub mod parse;
pub mod process;
pub mod request;
pub mod title;
pub mod walk;
pub mod write;

pub use error::{Error, ErrorKind, Result};

pub const START_URL: &str = "http://books.toscrape.com/catalogue/page-1.html";
pub const FILE_PATH: &str = "scraping.csv";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// The catalogue has 50 pages; anything far beyond that means the site is looping.
pub const MAX_PAGES: usize = 1000;
