//! Data model types for the item catalog.
//!
//! These types are the persisted interchange format between dataset build
//! and the catalog: one JSON array of [`Item`] records.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;
use crate::image::{ImageOptions, VariantMode, build_image_url};
use crate::name_parser::parse_item_name;

// ── Item ────────────────────────────────────────────────────────────────────

/// One row of the item-id table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    /// Raw display name, possibly with a `#variant` suffix.
    pub name: String,
    pub base_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Cached detail-image URL, derived from `base_name` at build time.
    pub image_url: String,
}

impl Item {
    /// Build an item from a display name, deriving the base name, variant,
    /// and image URL.
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, options: &ImageOptions) -> Self {
        let name = name.into();
        let parsed = parse_item_name(&name);
        let image_url = build_image_url(&name, options);
        Self {
            id: id.into(),
            name,
            base_name: parsed.base_name,
            variant: parsed.variant,
            image_url,
        }
    }

    pub fn has_variant(&self) -> bool {
        self.variant.is_some()
    }

    /// Re-derive the image URL with different options.
    ///
    /// Under [`VariantMode::Discard`] this depends on `base_name` alone.
    /// [`VariantMode::Parenthesized`] also folds in the variant, so it reads
    /// the full `name`.
    pub fn image_url_with(&self, options: &ImageOptions) -> String {
        match options.variant_mode {
            VariantMode::Discard => build_image_url(&self.base_name, options),
            VariantMode::Parenthesized => build_image_url(&self.name, options),
        }
    }
}

// ── Raw entries ─────────────────────────────────────────────────────────────

/// An unprocessed `(name, id text)` pair as scraped from the wiki table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub name: String,
    /// Id cell text, e.g. `"1704-1706, 11976"`.
    pub id: String,
}

impl RawEntry {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}
