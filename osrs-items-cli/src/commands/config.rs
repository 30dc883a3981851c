use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use osrs_items_catalog::settings::{self, Settings};

use crate::error::CliError;

/// Show current settings and where the dataset resolves to.
pub(crate) fn run_config_show(settings: &Settings, dataset_path: &Path) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "osrs-items Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let dataset_note = if dataset_path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(missing)".if_supports_color(Stdout, |t| t.red()).to_string()
    };
    log::info!("  Dataset:       {} {}", dataset_path.display(), dataset_note);
    log::info!("");
    log::info!("  Image width:   {}px", settings.image.width);
    log::info!("  Thumbnails:    {}", settings.image.thumb);
    log::info!("  Variant mode:  {:?}", settings.image.variant_mode);
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Save the default dataset path.
pub(crate) fn run_config_set_dataset(
    mut settings: Settings,
    path: PathBuf,
) -> Result<(), CliError> {
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    settings.dataset.path = Some(path.clone());
    settings::save_settings(&settings)?;
    log::info!(
        "Default dataset set to {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
