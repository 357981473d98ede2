use std::path::Path;

use chrono::Local;
use csv::WriterBuilder;

use crate::item::Item;
use crate::{info_time, Error, Result};

pub const HEADER: [&str; 4] = ["Title", "Stars", "Img_url", "Price (pounds)"];

/// Writes `items` to `path` as CSV, truncating any existing file.
///
/// The header row is always written, even for an empty list. Rows already
/// flushed stay on disk if a later row fails.
pub fn write_items(items: &[Item], path: &Path) -> Result<()> {
    let local_now = Local::now();
    let to_write_err = |source: csv::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(to_write_err)?;

    writer.write_record(HEADER).map_err(to_write_err)?;
    for item in items {
        writer.serialize(item).map_err(to_write_err)?;
    }
    writer
        .flush()
        .map_err(|err| to_write_err(csv::Error::from(err)))?;

    info_time!(local_now, "Wrote {} rows to file: {}", items.len(), path.display());
    Ok(())
}
