use std::str::FromStr;

use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;
use url::Url;

use crate::item::{Item, Rating};
use crate::title::title_from_fixed_offsets;
use crate::{Error, Result};

const ITEM_HEADING: &str = "h3";
const ITEM_LINK: &str = "a[href]";
const NEXT_PAGE_LINK: &str = ".next a[href]";
const PAGE_TITLE: &str = "title";
const RATING: &str = ".star-rating";
const RATING_MARKER: &str = "star-rating";
const IMAGE: &str = "img";
const PRICE: &str = ".price_color";
const CURRENCY_SYMBOL: char = '£';

/// The parts of a listing page the walker cares about, with every link already absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    pub url: Url,
    /// Detail page links in document order.
    pub item_links: Vec<Url>,
    /// Present only if the page has a "next page" control.
    pub next_link: Option<Url>,
}

/// Parses a listing page off the async runtime, `Html` isn't `Send`.
pub async fn parse_listing(url: Url, html: String) -> Result<ListingPage> {
    spawn_blocking(move || parse_listing_html(url, &html)).await?
}

/// Parses a detail page into an [`Item`] off the async runtime.
pub async fn parse_detail(html: String) -> Result<Item> {
    spawn_blocking(move || parse_detail_html(&html)).await?
}

pub fn parse_listing_html(url: Url, html: &str) -> Result<ListingPage> {
    let doc = Html::parse_document(html);

    let heading_selector = create_selector(ITEM_HEADING)?;
    let link_selector = create_selector(ITEM_LINK)?;
    let next_selector = create_selector(NEXT_PAGE_LINK)?;

    // Listing pages hold 20 entries.
    let mut item_links = Vec::with_capacity(20);
    for heading in doc.select(&heading_selector) {
        let link = heading
            .select(&link_selector)
            .next()
            .ok_or_else(|| Error::ParseMissingElement(format!("{ITEM_HEADING} {ITEM_LINK}")))?;
        item_links.push(resolve(&url, href(link, ITEM_LINK)?)?);
    }

    let next_link = match doc.select(&next_selector).next() {
        Some(link) => Some(resolve(&url, href(link, NEXT_PAGE_LINK)?)?),
        None => None,
    };

    Ok(ListingPage {
        url,
        item_links,
        next_link,
    })
}

pub fn parse_detail_html(html: &str) -> Result<Item> {
    let doc = Html::parse_document(html);

    let raw_title = first_match(&doc, PAGE_TITLE)?
        .text()
        .collect::<String>();
    let title = title_from_fixed_offsets(&raw_title)?;

    let rating_el = first_match(&doc, RATING)?;
    let class_attr = rating_el
        .value()
        .attr("class")
        .ok_or(Error::ParseMissingAttribute {
            selector: RATING.into(),
            attr: "class",
        })?;
    let rating = parse_rating_class(class_attr)?;

    let image_url = first_match(&doc, IMAGE)?
        .value()
        .attr("src")
        .ok_or(Error::ParseMissingAttribute {
            selector: IMAGE.into(),
            attr: "src",
        })?
        .to_string();

    let price_text = first_match(&doc, PRICE)?.text().collect::<String>();
    let price = parse_price(&price_text)?;

    Ok(Item::new(title, rating, image_url, price))
}

/// Decodes the class token that follows `star-rating`, e.g. `"star-rating Three"`.
pub fn parse_rating_class(class_attr: &str) -> Result<Rating> {
    let mut tokens = class_attr.split_whitespace();
    tokens
        .by_ref()
        .find(|token| *token == RATING_MARKER)
        .ok_or_else(|| Error::UnknownRating(class_attr.to_string()))?;
    tokens
        .next()
        .ok_or_else(|| Error::UnknownRating(class_attr.to_string()))?
        .parse()
}

/// Parses a price such as `"£51.77"`.
pub fn parse_price(text: &str) -> Result<Decimal> {
    let text = text.trim();
    let amount = text
        .strip_prefix(CURRENCY_SYMBOL)
        .ok_or_else(|| Error::PriceMissingCurrency(text.to_string()))?;
    let price = Decimal::from_str(amount).map_err(|source| Error::PriceNotDecimal {
        text: text.to_string(),
        source,
    })?;
    if price.is_sign_negative() && !price.is_zero() {
        return Err(Error::PriceNegative(text.to_string()));
    }
    Ok(price)
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseInvalidSelector(sel_str.into()))
}

fn first_match<'a>(doc: &'a Html, sel_str: &str) -> Result<ElementRef<'a>> {
    let selector = create_selector(sel_str)?;
    doc.select(&selector)
        .next()
        .ok_or_else(|| Error::ParseMissingElement(sel_str.into()))
}

fn href<'a>(link: ElementRef<'a>, sel_str: &str) -> Result<&'a str> {
    link.value()
        .attr("href")
        .ok_or_else(|| Error::ParseMissingAttribute {
            selector: sel_str.into(),
            attr: "href",
        })
}

fn resolve(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|source| Error::InvalidUrl {
        url: href.to_string(),
        source,
    })
}
