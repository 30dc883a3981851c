//! Dataset build and JSON persistence.
//!
//! Turns raw `(name, id text)` entries into [`Item`]s and reads/writes the
//! JSON item file the catalog is loaded from. A malformed entry never fails
//! the whole build: it is logged, recorded in the [`BuildReport`], and
//! skipped.

use std::path::Path;

use crate::error::{DatasetError, EntryError};
use crate::ids::parse_id_list;
use crate::image::ImageOptions;
use crate::name_parser::parse_item_name;
use crate::types::{Item, RawEntry};

/// A raw entry that was rejected during build, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub entry: RawEntry,
    pub reason: EntryError,
}

/// Result of building a dataset from raw entries.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub items: Vec<Item>,
    pub skipped: Vec<SkippedEntry>,
}

/// Build a single item from a raw entry.
pub fn build_item(entry: &RawEntry, options: &ImageOptions) -> Result<Item, EntryError> {
    let id = parse_id_list(&entry.id)?;
    if parse_item_name(&entry.name).base_name.is_empty() {
        return Err(EntryError::EmptyName(entry.name.clone()));
    }
    Ok(Item::new(id, entry.name.as_str(), options))
}

/// Build items from raw entries, skipping (and logging) any that fail.
///
/// Output order follows input order.
pub fn build_dataset<I>(entries: I, options: &ImageOptions) -> BuildReport
where
    I: IntoIterator<Item = RawEntry>,
{
    let mut report = BuildReport::default();

    for entry in entries {
        match build_item(&entry, options) {
            Ok(item) => report.items.push(item),
            Err(reason) => {
                log::warn!(
                    "Skipping item '{}' (id '{}'): {reason}",
                    entry.name,
                    entry.id
                );
                report.skipped.push(SkippedEntry { entry, reason });
            }
        }
    }

    log::debug!(
        "Built {} items ({} skipped)",
        report.items.len(),
        report.skipped.len()
    );
    report
}

// ── Raw entry CSV ───────────────────────────────────────────────────────────

/// Parse raw entries from CSV content with a header row containing `name`
/// and `id` columns (any order, case-insensitive, extra columns ignored).
pub fn parse_raw_entries_csv(content: &str) -> Result<Vec<RawEntry>, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| DatasetError::missing_column(name))
    };
    let name_col = column("name")?;
    let id_col = column("id")?;

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed item CSV row: {e}");
                continue;
            }
        };

        match (record.get(name_col), record.get(id_col)) {
            (Some(name), Some(id)) => entries.push(RawEntry::new(name, id)),
            _ => log::warn!(
                "Skipping short item CSV row at line {}",
                record.position().map_or(0, |p| p.line())
            ),
        }
    }

    Ok(entries)
}

/// Read raw entries from a CSV file.
pub fn read_raw_entries(path: &Path) -> Result<Vec<RawEntry>, DatasetError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_raw_entries_csv(&contents)
}

// ── JSON item file ──────────────────────────────────────────────────────────

/// Load the item list from a JSON dataset file.
pub fn load_items(path: &Path) -> Result<Vec<Item>, DatasetError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&contents).map_err(|e| DatasetError::Json {
        path: path.display().to_string(),
        source: e,
    })
}

/// Write the item list to a JSON dataset file.
///
/// Parent directories are created as needed. The file is written to a
/// temporary sibling first and renamed into place.
pub fn save_items(path: &Path, items: &[Item]) -> Result<(), DatasetError> {
    let io_err = |e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }

    let serialized = serde_json::to_string_pretty(items).map_err(|e| DatasetError::Json {
        path: path.display().to_string(),
        source: e,
    })?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, serialized).map_err(io_err)?;
    std::fs::rename(&tmp, path).map_err(io_err)?;

    log::info!("Wrote {} items to {}", items.len(), path.display());
    Ok(())
}
