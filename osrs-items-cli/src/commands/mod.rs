pub(crate) mod build;
pub(crate) mod config;
pub(crate) mod query;
pub(crate) mod stats;
pub(crate) mod url;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use osrs_items_catalog::{ImageOptions, Item, Settings, VariantMode};

use crate::cli_types::ImageArgs;

/// Merge command-line image flags over the saved image settings.
pub(crate) fn image_options(settings: &Settings, args: &ImageArgs) -> ImageOptions {
    let mut options = settings.image.to_options();
    if let Some(width) = args.width {
        options = options.with_width(width);
    }
    if args.full {
        options = options.full_size();
    }
    if args.parenthesized {
        options = options.with_variant_mode(VariantMode::Parenthesized);
    }
    options
}

/// One-line summary: `id  name  [variant]`.
pub(crate) fn print_item(item: &Item) {
    let variant = match &item.variant {
        Some(v) => format!(" [{}]", v.if_supports_color(Stdout, |t| t.yellow())),
        None => String::new(),
    };
    log::info!(
        "  {} {}{}",
        format!("{:<16}", item.id).if_supports_color(Stdout, |t| t.cyan()),
        item.base_name.if_supports_color(Stdout, |t| t.bold()),
        variant,
    );
}

/// Multi-line detail view of a single item.
pub(crate) fn print_item_detail(item: &Item) {
    log::info!(
        "{}",
        item.name.if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("  Id:        {}", item.id);
    log::info!("  Base name: {}", item.base_name);
    if let Some(ref variant) = item.variant {
        log::info!("  Variant:   {}", variant);
    }
    log::info!(
        "  Image:     {}",
        item.image_url.if_supports_color(Stdout, |t| t.dimmed())
    );
}

pub(crate) fn print_items(items: &[&Item]) {
    if items.is_empty() {
        log::info!("No matching items.");
        return;
    }
    for item in items {
        print_item(item);
    }
    log::info!("");
    log::info!("{} item(s)", items.len());
}
