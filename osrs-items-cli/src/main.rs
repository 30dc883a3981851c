//! osrs-items CLI
//!
//! Command-line interface for building and querying the OSRS item dataset.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use osrs_items_catalog::ItemCatalog;
use osrs_items_catalog::settings::{load_settings, resolve_dataset_path};

use cli_types::{Cli, Commands, ConfigAction};
use commands::build::run_build;
use commands::config::{run_config_path, run_config_set_dataset, run_config_show};
use commands::query::{run_filter, run_id, run_name, run_search, run_variants};
use commands::stats::{run_bases, run_stats};
use commands::url::run_url;
use commands::image_options;
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logger(cli.quiet, cli.verbose) {
        eprintln!("{e}");
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings();
    let dataset_path = resolve_dataset_path(cli.dataset, &settings);

    // Commands that don't need the catalog loaded.
    match cli.command {
        Commands::Build {
            input,
            output,
            image,
        } => {
            let output = output.unwrap_or(dataset_path);
            return run_build(&input, &output, &image_options(&settings, &image));
        }
        Commands::Url { name, image } => {
            run_url(&name, &image_options(&settings, &image));
            return Ok(());
        }
        Commands::Config { action } => {
            match action {
                ConfigAction::Show => run_config_show(&settings, &dataset_path),
                ConfigAction::Path => run_config_path(),
                ConfigAction::SetDataset { path } => run_config_set_dataset(settings, path)?,
            }
            return Ok(());
        }
        _ => {}
    }

    debug_assert!(cli.command.needs_catalog());
    let catalog = ItemCatalog::load(&dataset_path);

    match cli.command {
        Commands::Id { id, all } => run_id(&catalog, &id, all),
        Commands::Name { name } => run_name(&catalog, &name),
        Commands::Search { query, limit } => run_search(&catalog, &query, limit),
        Commands::Filter {
            contains,
            variant,
            no_variant,
            limit,
        } => run_filter(&catalog, contains, variant, no_variant, limit),
        Commands::Stats => run_stats(&catalog),
        Commands::Bases => run_bases(&catalog),
        Commands::Variants { base_name } => run_variants(&catalog, &base_name),
        Commands::Build { .. } | Commands::Config { .. } | Commands::Url { .. } => {}
    }

    Ok(())
}
