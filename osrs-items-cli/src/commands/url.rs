use osrs_items_catalog::{ImageOptions, build_image_url};

/// Entry point for `url`. Prints the bare URL so it can be piped.
///
/// The URL is derived from the name alone, so no dataset is loaded.
pub(crate) fn run_url(name: &str, options: &ImageOptions) {
    log::info!("{}", url_for(name, options));
}

fn url_for(name: &str, options: &ImageOptions) -> String {
    build_image_url(name.trim(), options)
}
