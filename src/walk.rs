use std::collections::HashSet;

use chrono::Local;
use tracing::warn;
use url::Url;

use crate::config::ItemErrorPolicy;
use crate::extract::extract_items;
use crate::item::Item;
use crate::parse::{parse_listing, ListingPage};
use crate::request::Fetch;
use crate::{info_time, Result};

/// Why the walk ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The last page had no "next page" control.
    LastPage,
    /// `max_pages` pages were processed and more were available.
    PageLimit,
    /// The "next page" control pointed at a page that was already processed.
    Revisit(Url),
}

/// State after a page's items have been extracted.
#[derive(Debug, PartialEq, Eq)]
enum WalkState {
    HasNext(Url),
    Done(StopReason),
}

#[derive(Debug)]
pub struct WalkReport {
    /// Listing pages in the order they were processed.
    pub pages: Vec<Url>,
    pub items: Vec<Item>,
    pub skipped: usize,
    pub stop: StopReason,
}

/// Follows "next page" links from a first listing page, collecting the items of every page.
pub struct PaginationWalker<'a, F: ?Sized> {
    fetcher: &'a F,
    max_pages: usize,
    policy: ItemErrorPolicy,
}

impl<'a, F: Fetch + ?Sized> PaginationWalker<'a, F> {
    pub fn new(fetcher: &'a F, max_pages: usize, policy: ItemErrorPolicy) -> Self {
        Self {
            fetcher,
            max_pages,
            policy,
        }
    }

    /// Processes `first` and every page reachable through its "next page" links.
    /// The first page is always processed, even with a `max_pages` of zero.
    pub async fn walk(&self, first: ListingPage) -> Result<WalkReport> {
        let start_time = Local::now();
        let mut visited = HashSet::new();
        let mut pages = Vec::new();
        let mut items = Vec::new();
        let mut skipped = 0;

        let mut page = first;
        let stop = loop {
            visited.insert(page.url.clone());
            pages.push(page.url.clone());
            info_time!("Processing page {}: {}", pages.len(), page.url);

            let page_items = extract_items(self.fetcher, &page, self.policy).await?;
            items.extend(page_items.items);
            skipped += page_items.skipped;

            match self.next_state(&page, &visited, pages.len()) {
                WalkState::HasNext(next_url) => {
                    let html = self.fetcher.fetch(&next_url).await?;
                    page = parse_listing(next_url, html).await?;
                }
                WalkState::Done(reason) => break reason,
            }
        };

        info_time!(
            start_time,
            "Finished walking {} pages, {} items",
            pages.len(),
            items.len()
        );

        Ok(WalkReport {
            pages,
            items,
            skipped,
            stop,
        })
    }

    fn next_state(&self, page: &ListingPage, visited: &HashSet<Url>, processed: usize) -> WalkState {
        let Some(next_url) = &page.next_link else {
            return WalkState::Done(StopReason::LastPage);
        };
        if visited.contains(next_url) {
            warn!(url = %next_url, "next page was already visited, stopping");
            return WalkState::Done(StopReason::Revisit(next_url.clone()));
        }
        if processed >= self.max_pages {
            warn!(max_pages = self.max_pages, "page limit reached, stopping");
            return WalkState::Done(StopReason::PageLimit);
        }
        WalkState::HasNext(next_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::{Error, ErrorKind};

    struct Unreachable;

    #[async_trait]
    impl Fetch for Unreachable {
        async fn fetch(&self, url: &Url) -> Result<String> {
            Err(Error::ParseMissingElement(url.to_string()))
        }
    }

    fn url(path: &str) -> Url {
        Url::parse("http://shop.test/catalogue/").unwrap().join(path).unwrap()
    }

    fn listing(path: &str, next: Option<&str>) -> ListingPage {
        ListingPage {
            url: url(path),
            item_links: Vec::new(),
            next_link: next.map(url),
        }
    }

    #[test]
    fn state_follows_next_link() {
        let walker = PaginationWalker::new(&Unreachable, 10, ItemErrorPolicy::Fail);
        let visited = HashSet::from([url("page-1.html")]);

        assert_eq!(
            walker.next_state(&listing("page-1.html", Some("page-2.html")), &visited, 1),
            WalkState::HasNext(url("page-2.html"))
        );
        assert_eq!(
            walker.next_state(&listing("page-1.html", None), &visited, 1),
            WalkState::Done(StopReason::LastPage)
        );
    }

    #[test]
    fn state_stops_on_revisit_and_limit() {
        let walker = PaginationWalker::new(&Unreachable, 2, ItemErrorPolicy::Fail);
        let visited = HashSet::from([url("page-1.html"), url("page-2.html")]);

        assert_eq!(
            walker.next_state(&listing("page-2.html", Some("page-1.html")), &visited, 2),
            WalkState::Done(StopReason::Revisit(url("page-1.html")))
        );
        assert_eq!(
            walker.next_state(&listing("page-2.html", Some("page-3.html")), &visited, 2),
            WalkState::Done(StopReason::PageLimit)
        );
    }

    #[tokio::test]
    async fn single_page_without_items_needs_no_fetch() {
        let walker = PaginationWalker::new(&Unreachable, 10, ItemErrorPolicy::Fail);
        let report = walker.walk(listing("page-1.html", None)).await.unwrap();
        assert_eq!(report.pages, vec![url("page-1.html")]);
        assert!(report.items.is_empty());
        assert_eq!(report.stop, StopReason::LastPage);
    }

    #[tokio::test]
    async fn failed_next_page_fetch_propagates() {
        let walker = PaginationWalker::new(&Unreachable, 10, ItemErrorPolicy::Skip);
        let err = walker
            .walk(listing("page-1.html", Some("page-2.html")))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
