//! Detail-image filename and URL construction.
//!
//! The wiki stores each item's canonical icon as `<Name>_detail.png`, with
//! spaces turned into underscores and a small fixed set of characters
//! percent-encoded. Thumbnails follow the MediaWiki convention:
//! ```text
//! https://oldschool.runescape.wiki/images/thumb/<file>/<width>px-<file>
//! https://oldschool.runescape.wiki/images/<file>
//! ```

use serde::{Deserialize, Serialize};

use crate::name_parser::{base_name, parse_item_name};

/// Image root on the wiki host.
pub const WIKI_IMAGE_BASE: &str = "https://oldschool.runescape.wiki/images";

/// Default thumbnail width in pixels.
pub const DEFAULT_THUMB_WIDTH: u32 = 120;

const DETAIL_SUFFIX: &str = "_detail.png";

/// How a name's `#variant` tag is reflected in the detail filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantMode {
    /// Drop the variant; every variant shares the base item's image.
    #[default]
    Discard,
    /// Append the lowercased variant in parentheses, e.g. `Amulet of glory (1)`.
    Parenthesized,
}

/// Options controlling the generated image URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOptions {
    /// Thumbnail width in pixels. Ignored for full-size URLs.
    pub width: u32,
    /// Use the `/thumb/` resized URL form.
    pub use_thumb: bool,
    pub variant_mode: VariantMode,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_THUMB_WIDTH,
            use_thumb: true,
            variant_mode: VariantMode::Discard,
        }
    }
}

impl ImageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_thumb(mut self, use_thumb: bool) -> Self {
        self.use_thumb = use_thumb;
        self
    }

    /// Full-size image URL (no thumbnail resizing).
    pub fn full_size(self) -> Self {
        self.with_thumb(false)
    }

    pub fn with_variant_mode(mut self, mode: VariantMode) -> Self {
        self.variant_mode = mode;
        self
    }
}

/// Replace spaces with underscores and percent-encode the wiki's reserved
/// filename characters.
///
/// Only `' ( ) # + ? &` are encoded. Everything else, including `%` and
/// `_`, passes through untouched, so the output is never double-encoded.
pub fn encode_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    for ch in name.chars() {
        match ch {
            ' ' => out.push('_'),
            '\'' => out.push_str("%27"),
            '(' => out.push_str("%28"),
            ')' => out.push_str("%29"),
            '#' => out.push_str("%23"),
            '+' => out.push_str("%2B"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            _ => out.push(ch),
        }
    }
    out
}

/// Build the detail-image filename for a raw item name, discarding any variant.
///
/// # Examples
///
/// ```
/// use osrs_items_catalog::image::build_detail_filename;
///
/// assert_eq!(build_detail_filename("Abyssal bludgeon"), "Abyssal_bludgeon_detail.png");
/// assert_eq!(build_detail_filename("Adamant arrow#(p++)"), "Adamant_arrow_detail.png");
/// ```
pub fn build_detail_filename(raw_name: &str) -> String {
    build_detail_filename_with(raw_name, VariantMode::Discard)
}

/// Build the detail-image filename using the given [`VariantMode`].
pub fn build_detail_filename_with(raw_name: &str, mode: VariantMode) -> String {
    let parsed = parse_item_name(raw_name);
    let stem = match (mode, parsed.variant) {
        (VariantMode::Parenthesized, Some(variant)) => {
            format!("{} ({})", parsed.base_name, normalize_variant(&variant))
        }
        _ => parsed.base_name,
    };
    format!("{}{DETAIL_SUFFIX}", encode_filename(&stem))
}

/// Lowercase a variant and drop one pair of surrounding parentheses, so
/// `(p++)` and `p++` both fold to `p++`.
fn normalize_variant(variant: &str) -> String {
    let inner = variant
        .strip_prefix('(')
        .and_then(|v| v.strip_suffix(')'))
        .unwrap_or(variant);
    inner.trim().to_lowercase()
}

/// Build a wiki image URL for an already-encoded filename.
pub fn url_for_filename(filename: &str, options: &ImageOptions) -> String {
    if options.use_thumb {
        format!(
            "{WIKI_IMAGE_BASE}/thumb/{filename}/{}px-{filename}",
            options.width
        )
    } else {
        format!("{WIKI_IMAGE_BASE}/{filename}")
    }
}

/// Build the detail-image URL for a raw item name.
///
/// # Examples
///
/// ```
/// use osrs_items_catalog::image::{build_image_url, ImageOptions};
///
/// assert_eq!(
///     build_image_url("Abyssal bludgeon", &ImageOptions::default()),
///     "https://oldschool.runescape.wiki/images/thumb/Abyssal_bludgeon_detail.png/120px-Abyssal_bludgeon_detail.png"
/// );
/// assert_eq!(
///     build_image_url("Abyssal bludgeon", &ImageOptions::default().full_size()),
///     "https://oldschool.runescape.wiki/images/Abyssal_bludgeon_detail.png"
/// );
/// ```
pub fn build_image_url(raw_name: &str, options: &ImageOptions) -> String {
    let filename = build_detail_filename_with(raw_name, options.variant_mode);
    url_for_filename(&filename, options)
}

/// Image URL for the name including its variant, as far as `options.variant_mode` allows.
pub fn variant_image_url(raw_name: &str, options: &ImageOptions) -> String {
    build_image_url(raw_name, options)
}

/// Image URL for the name's base item, ignoring any variant.
pub fn base_image_url(raw_name: &str, options: &ImageOptions) -> String {
    build_image_url(&base_name(raw_name), options)
}

#[cfg(test)]
#[path = "tests/image_tests.rs"]
mod tests;
