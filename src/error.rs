use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Coarse category of an [`Error`], used for reporting and process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Fetch,
    Parse,
    MalformedTitle,
    UnknownRating,
    Extraction,
    Write,
    Runtime,
}

impl ErrorKind {
    /// Process exit code for this category. Starts at 10 so it never collides
    /// with clap's usage error code (2).
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::Fetch => 10,
            ErrorKind::Parse => 11,
            ErrorKind::MalformedTitle => 12,
            ErrorKind::UnknownRating => 13,
            ErrorKind::Extraction => 14,
            ErrorKind::Write => 15,
            ErrorKind::Runtime => 16,
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Couldn't build the HTTP client: {0}")]
    FetchClient(#[source] reqwest::Error),
    #[error("Request to {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to {url} returned HTTP status {status}")]
    FetchStatus {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("Invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("The selector you are trying to scrape for is invalid. Selector: {0}")]
    ParseInvalidSelector(String),
    #[error("The page is missing an expected element. Selector: {0}")]
    ParseMissingElement(String),
    #[error("Element matched by `{selector}` has no `{attr}` attribute")]
    ParseMissingAttribute {
        selector: String,
        attr: &'static str,
    },

    #[error("Malformed page title: {0:?}")]
    MalformedTitle(String),
    #[error("Unknown rating label: {0:?}")]
    UnknownRating(String),

    #[error("Price {0:?} does not start with the expected currency symbol")]
    PriceMissingCurrency(String),
    #[error("Price {0:?} is negative")]
    PriceNegative(String),
    #[error("Price {text:?} is not a decimal number: {source}")]
    PriceNotDecimal {
        text: String,
        #[source]
        source: rust_decimal::Error,
    },
    #[error("Couldn't extract the item at {url}: {source}")]
    Extraction {
        url: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Couldn't write results to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Tokio Join Error, couldn't await a task! {0}")]
    RuntimeJoin(#[from] tokio::task::JoinError),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::FetchClient(_)
            | Error::Fetch { .. }
            | Error::FetchStatus { .. }
            | Error::InvalidUrl { .. } => ErrorKind::Fetch,
            Error::ParseInvalidSelector(_)
            | Error::ParseMissingElement(_)
            | Error::ParseMissingAttribute { .. } => ErrorKind::Parse,
            Error::MalformedTitle(_) => ErrorKind::MalformedTitle,
            Error::UnknownRating(_) => ErrorKind::UnknownRating,
            Error::PriceMissingCurrency(_)
            | Error::PriceNegative(_)
            | Error::PriceNotDecimal { .. }
            | Error::Extraction { .. } => ErrorKind::Extraction,
            Error::Write { .. } => ErrorKind::Write,
            Error::RuntimeJoin(_) => ErrorKind::Runtime,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.kind().exit_code()
    }

    /// Wraps a per-item failure together with the detail page it came from.
    pub(crate) fn extraction(url: impl Into<String>, source: Error) -> Self {
        Error::Extraction {
            url: url.into(),
            source: Box::new(source),
        }
    }
}
