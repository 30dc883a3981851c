//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "osrs-items")]
#[command(about = "Look up OSRS item ids and wiki detail-image URLs", long_about = None)]
pub(crate) struct Cli {
    /// Item dataset JSON file (defaults to the saved path, then ./items.json)
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the image URL settings.
#[derive(Args, Clone, Default)]
pub(crate) struct ImageArgs {
    /// Thumbnail width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Full-size image URL instead of a thumbnail
    #[arg(long)]
    pub full: bool,

    /// Fold the #variant into the filename as "(variant)"
    #[arg(long)]
    pub parenthesized: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Build the item dataset from a CSV of name/id rows
    Build {
        /// CSV file with "name" and "id" columns
        input: PathBuf,

        /// Output JSON file (defaults to the dataset path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Look up items by id
    Id {
        /// Item id
        id: String,

        /// Show every item carrying this id, not just the first
        #[arg(short, long)]
        all: bool,
    },

    /// Look up an item by its exact (case-sensitive) name
    Name {
        /// Full display name, including any #variant
        name: String,
    },

    /// Case-insensitive substring search on item names
    Search {
        query: String,

        /// Maximum number of results (0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List items matching all given filters
    Filter {
        /// Case-insensitive substring of the name
        #[arg(long)]
        contains: Option<String>,

        /// Only items with a #variant
        #[arg(long, conflicts_with = "no_variant")]
        variant: bool,

        /// Only items without a #variant
        #[arg(long)]
        no_variant: bool,

        /// Maximum number of results (0 = unlimited)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show dataset statistics
    Stats,

    /// List unique base names
    Bases,

    /// List all items sharing a base name
    Variants {
        base_name: String,
    },

    /// Print the detail-image URL for an item name
    Url {
        name: String,

        #[command(flatten)]
        image: ImageArgs,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings
    Show,

    /// Print the settings file path
    Path,

    /// Save the default dataset path
    SetDataset {
        path: PathBuf,
    },
}

impl Commands {
    /// Whether the command reads the item dataset. `build`, `url` and
    /// `config` run without loading it.
    pub fn needs_catalog(&self) -> bool {
        !matches!(
            self,
            Commands::Build { .. } | Commands::Url { .. } | Commands::Config { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_url_does_not_need_catalog() {
        let cli = parse(&["osrs-items", "url", "Amulet of glory#1", "--width", "64"]);
        assert!(!cli.command.needs_catalog());
        assert!(!parse(&["osrs-items", "config", "path"]).command.needs_catalog());
    }

    #[test]
    fn test_queries_need_catalog() {
        assert!(parse(&["osrs-items", "id", "1704", "--all"]).command.needs_catalog());
        assert!(parse(&["osrs-items", "search", "glory"]).command.needs_catalog());
        assert!(parse(&["osrs-items", "stats"]).command.needs_catalog());
    }
}
