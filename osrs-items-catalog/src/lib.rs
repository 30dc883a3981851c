//! Old School RuneScape item catalog: id-list and name parsing, wiki
//! detail-image URL construction, and read-only queries over the item
//! dataset.
//!
//! The dataset is built once from raw `(name, id text)` entries, persisted as
//! JSON, and loaded into an [`ItemCatalog`] at startup.

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod ids;
pub mod image;
pub mod name_parser;
pub mod settings;
pub mod types;

pub use catalog::{ItemCatalog, ItemFilter};
pub use dataset::{BuildReport, SkippedEntry, build_dataset, build_item, load_items, save_items};
pub use error::{DatasetError, EntryError, IdParseError, SettingsError};
pub use ids::{ItemId, parse_id_list};
pub use image::{ImageOptions, VariantMode, build_detail_filename, build_image_url};
pub use name_parser::{ParsedItemName, parse_item_name};
pub use settings::Settings;
pub use types::*;
