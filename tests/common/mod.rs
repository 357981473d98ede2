#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bookscrape::request::Fetch;
use bookscrape::{Error, Result};
use url::Url;

pub const BASE: &str = "http://shop.test/catalogue/";

/// A book as it appears on a synthetic detail page.
#[derive(Debug, Clone)]
pub struct Book {
    pub title: &'static str,
    pub rating: &'static str,
    pub price: &'static str,
}

pub const fn book(title: &'static str, rating: &'static str, price: &'static str) -> Book {
    Book {
        title,
        rating,
        price,
    }
}

/// In-memory site. Unknown URLs answer with a 404.
#[derive(Default)]
pub struct FakeSite {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl FakeSite {
    /// Builds `page-1.html`..`page-N.html`, each linking to the next, with one detail page per book.
    pub fn catalogue(pages: &[&[Book]]) -> Self {
        let mut site = FakeSite::default();
        for (page_idx, books) in pages.iter().enumerate() {
            let page_num = page_idx + 1;
            let slugs: Vec<String> = (0..books.len())
                .map(|i| format!("book-{page_num}-{i}/index.html"))
                .collect();
            let next = (page_num < pages.len()).then(|| format!("page-{}.html", page_num + 1));
            site.insert(
                &format!("page-{page_num}.html"),
                listing_html(&slugs, next.as_deref()),
            );
            for (slug, book) in slugs.iter().zip(books.iter()) {
                site.insert(slug, detail_html(book));
            }
        }
        site
    }

    pub fn insert(&mut self, path: &str, html: String) {
        self.pages.insert(url(path).to_string(), html);
    }

    /// Every URL requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Requested listing pages, in order.
    pub fn listing_requests(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .filter(|u| u.contains("/page-"))
            .collect()
    }
}

#[async_trait]
impl Fetch for FakeSite {
    async fn fetch(&self, url: &Url) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| Error::FetchStatus {
                url: url.to_string(),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }
}

pub fn url(path: &str) -> Url {
    Url::parse(BASE).unwrap().join(path).unwrap()
}

pub fn listing_html(item_links: &[String], next: Option<&str>) -> String {
    let items: String = item_links
        .iter()
        .map(|href| {
            format!(
                r#"<li><article class="product_pod"><h3><a href="{href}" title="t">t</a></h3></article></li>"#
            )
        })
        .collect();
    let next = next
        .map(|href| format!(r#"<li class="next"><a href="{href}">next</a></li>"#))
        .unwrap_or_default();
    format!(
        r#"<html><head><title>All products | Books to Scrape - Sandbox</title></head><body>
<ol class="row">{items}</ol>
<ul class="pager"><li class="current">Page</li>{next}</ul>
</body></html>"#
    )
}

pub fn detail_html(book: &Book) -> String {
    format!(
        "<html><head><title>\n    {title} | Books to Scrape - Sandbox\n</title></head><body>
<div class=\"item active\"><img src=\"../../media/cache/{rating}.jpg\" alt=\"{title}\" /></div>
<div class=\"product_main\"><h1>{title}</h1>
<p class=\"price_color\">{price}</p>
<p class=\"star-rating {rating}\"><i class=\"icon-star\"></i></p></div>
</body></html>",
        title = book.title,
        rating = book.rating,
        price = book.price,
    )
}
