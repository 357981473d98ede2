use tracing::{debug, warn};
use url::Url;

use crate::config::ItemErrorPolicy;
use crate::item::Item;
use crate::parse::{parse_detail, ListingPage};
use crate::request::Fetch;
use crate::{Error, Result};

/// Items pulled from a single listing page.
#[derive(Debug, Default)]
pub struct PageItems {
    pub items: Vec<Item>,
    pub skipped: usize,
}

/// Visits every detail page linked from `listing`, in document order, and extracts its [`Item`].
///
/// With [`ItemErrorPolicy::Fail`] the first failing item aborts the page.
/// With [`ItemErrorPolicy::Skip`] it is logged and counted instead.
pub async fn extract_items<F: Fetch + ?Sized>(
    fetcher: &F,
    listing: &ListingPage,
    policy: ItemErrorPolicy,
) -> Result<PageItems> {
    let mut page_items = PageItems {
        items: Vec::with_capacity(listing.item_links.len()),
        skipped: 0,
    };

    for link in &listing.item_links {
        match extract_item(fetcher, link).await {
            Ok(item) => page_items.items.push(item),
            Err(err) => match policy {
                ItemErrorPolicy::Fail => return Err(err),
                ItemErrorPolicy::Skip => {
                    warn!(error = %err, "skipping item");
                    page_items.skipped += 1;
                }
            },
        }
    }

    Ok(page_items)
}

async fn extract_item<F: Fetch + ?Sized>(fetcher: &F, link: &Url) -> Result<Item> {
    debug!(url = %link, "fetching item");
    let item: Result<Item> = async {
        let html = fetcher.fetch(link).await?;
        parse_detail(html).await
    }
    .await;
    item.map_err(|err| Error::extraction(link.as_str(), err))
}
