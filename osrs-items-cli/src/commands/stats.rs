use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use osrs_items_catalog::{ItemCatalog, ItemFilter};

/// Entry point for `stats`.
pub(crate) fn run_stats(catalog: &ItemCatalog) {
    let with_variant = catalog.filtered(&ItemFilter::new().has_variant(true)).len();
    let id_count: usize = catalog.items().iter().map(|item| item.id.len()).sum();

    log::info!(
        "{}",
        "Item Dataset".if_supports_color(Stdout, |t| t.bold())
    );
    log::info!("  Items:         {}", catalog.count());
    log::info!("  Ids covered:   {}", id_count);
    log::info!("  Base names:    {}", catalog.unique_base_names().len());
    log::info!("  With variant:  {}", with_variant);
}

/// Entry point for `bases`.
pub(crate) fn run_bases(catalog: &ItemCatalog) {
    let names = catalog.unique_base_names();
    for name in &names {
        log::info!("{}", name);
    }
    log::debug!("{} unique base names", names.len());
}
