use std::{fmt, str::FromStr};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::Error;

/// Star rating as shown by the catalogue, from zero to five stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(into = "u8")]
pub enum Rating {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
}

impl Rating {
    pub const ALL: [Rating; 6] = [
        Rating::Zero,
        Rating::One,
        Rating::Two,
        Rating::Three,
        Rating::Four,
        Rating::Five,
    ];

    /// The word used for this rating in the page markup.
    pub fn label(self) -> &'static str {
        match self {
            Rating::Zero => "Zero",
            Rating::One => "One",
            Rating::Two => "Two",
            Rating::Three => "Three",
            Rating::Four => "Four",
            Rating::Five => "Five",
        }
    }
}

impl FromStr for Rating {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rating::ALL
            .into_iter()
            .find(|rating| rating.label() == s)
            .ok_or_else(|| Error::UnknownRating(s.to_string()))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating as u8
    }
}

/// One scraped catalogue entry. Built once by the extractor and only read afterwards.
///
/// Field order is the column order of the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Stars")]
    rating: Rating,
    #[serde(rename = "Img_url")]
    image_url: String,
    #[serde(rename = "Price (pounds)")]
    price: Decimal,
}

impl Item {
    pub fn new(
        title: impl Into<String>,
        rating: Rating,
        image_url: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            title: title.into(),
            rating,
            image_url: image_url.into(),
            price,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    pub fn price(&self) -> Decimal {
        self.price
    }
}
