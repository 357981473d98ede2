//! Cleanup of the raw `<title>` text of a detail page.
//!
//! Detail pages render their title as
//! `"\n    A Light in the Attic | Books to Scrape - Sandbox\n"`.

use crate::{Error, Result};

/// Number of boilerplate characters before the title.
pub const TITLE_PREFIX_LEN: usize = 5;
/// Number of boilerplate characters after the title, i.e. `" | Books to Scrape - Sandbox\n"`.
pub const TITLE_SUFFIX_LEN: usize = 29;

const TITLE_DELIMITER: char = '|';

/// Skips leading spaces and newlines, keeps everything up to the `|` delimiter
/// and drops the trailing spaces.
pub fn title_from_delimited(raw: &str) -> Result<String> {
    let start = raw.trim_start_matches([' ', '\n']);
    let (title, _) = start
        .split_once(TITLE_DELIMITER)
        .ok_or_else(|| Error::MalformedTitle(raw.to_string()))?;
    let title = title.trim_end_matches(' ');
    if title.is_empty() {
        return Err(Error::MalformedTitle(raw.to_string()));
    }
    Ok(title.to_string())
}

/// Cuts [`TITLE_PREFIX_LEN`] leading and [`TITLE_SUFFIX_LEN`] trailing characters.
pub fn title_from_fixed_offsets(raw: &str) -> Result<String> {
    let len = raw.chars().count();
    if len < TITLE_PREFIX_LEN + TITLE_SUFFIX_LEN {
        return Err(Error::MalformedTitle(raw.to_string()));
    }
    Ok(raw
        .chars()
        .skip(TITLE_PREFIX_LEN)
        .take(len - TITLE_PREFIX_LEN - TITLE_SUFFIX_LEN)
        .collect())
}
