use osrs_items_catalog::{ItemCatalog, ItemFilter};

use super::{print_item_detail, print_items};

/// Entry point for `id`.
pub(crate) fn run_id(catalog: &ItemCatalog, id: &str, all: bool) {
    if all {
        print_items(&catalog.get_all_by_id_str(id));
        return;
    }

    match catalog.get_by_id_str(id) {
        Some(item) => print_item_detail(item),
        None => log::info!("No item with id {}", id.trim()),
    }
}

/// Entry point for `name`.
pub(crate) fn run_name(catalog: &ItemCatalog, name: &str) {
    match catalog.get_by_exact_name(name) {
        Some(item) => print_item_detail(item),
        None => log::info!("No item named '{}'", name),
    }
}

/// Entry point for `search`.
pub(crate) fn run_search(catalog: &ItemCatalog, query: &str, limit: Option<usize>) {
    print_items(&catalog.search_by_name(query, limit));
}

/// Entry point for `filter`.
pub(crate) fn run_filter(
    catalog: &ItemCatalog,
    contains: Option<String>,
    variant: bool,
    no_variant: bool,
    limit: Option<usize>,
) {
    let filter = ItemFilter {
        name_contains: contains,
        has_variant: match (variant, no_variant) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
        limit,
    };
    print_items(&catalog.filtered(&filter));
}

/// Entry point for `variants`.
pub(crate) fn run_variants(catalog: &ItemCatalog, base_name: &str) {
    print_items(&catalog.variants_of(base_name));
}
