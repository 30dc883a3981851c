use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use osrs_items_catalog::dataset::read_raw_entries;
use osrs_items_catalog::{ImageOptions, build_dataset, save_items};

use crate::error::CliError;

/// Entry point for `build`.
pub(crate) fn run_build(
    input: &Path,
    output: &Path,
    options: &ImageOptions,
) -> Result<(), CliError> {
    let entries = read_raw_entries(input)?;
    log::debug!("Read {} raw entries from {}", entries.len(), input.display());

    let report = build_dataset(entries, options);
    save_items(output, &report.items)?;

    log::info!(
        "Built {} items into {}",
        report.items.len().if_supports_color(Stdout, |t| t.green()),
        output.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    if !report.skipped.is_empty() {
        log::warn!(
            "{} entries skipped:",
            report.skipped.len().if_supports_color(Stdout, |t| t.yellow()),
        );
        for skipped in &report.skipped {
            log::warn!("  {} ({})", skipped.entry.name, skipped.reason);
        }
    }
    Ok(())
}
