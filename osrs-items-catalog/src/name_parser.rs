//! Parser for wiki item display names.
//!
//! Item names on the wiki item-id tables may carry a variant tag after a
//! `#` delimiter, naming a charge level, damage state, or poison tier:
//! ```text
//! Abyssal bludgeon
//! Amulet of glory#1
//! Abyssal dagger#(p++)
//! ```
//!
//! Only the first `#` delimits; anything after it, including further `#`
//! characters, belongs to the variant.

/// Parsed components of an item display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedItemName {
    /// Name without the `#variant` suffix, trimmed.
    pub base_name: String,
    /// Trimmed text after the first `#`, if any non-blank text follows it.
    pub variant: Option<String>,
}

impl ParsedItemName {
    pub fn has_variant(&self) -> bool {
        self.variant.is_some()
    }
}

/// Parse an item display name into its base name and optional variant.
///
/// # Examples
///
/// ```
/// use osrs_items_catalog::name_parser::parse_item_name;
///
/// let parsed = parse_item_name("Abyssal bludgeon");
/// assert_eq!(parsed.base_name, "Abyssal bludgeon");
/// assert_eq!(parsed.variant, None);
///
/// let parsed = parse_item_name("Amulet of glory#1");
/// assert_eq!(parsed.base_name, "Amulet of glory");
/// assert_eq!(parsed.variant.as_deref(), Some("1"));
/// ```
pub fn parse_item_name(raw: &str) -> ParsedItemName {
    match raw.split_once('#') {
        Some((base, variant)) => {
            let variant = variant.trim();
            ParsedItemName {
                base_name: base.trim().to_string(),
                variant: (!variant.is_empty()).then(|| variant.to_string()),
            }
        }
        None => ParsedItemName {
            base_name: raw.trim().to_string(),
            variant: None,
        },
    }
}

/// Shorthand for the base-name half of [`parse_item_name`].
pub fn base_name(raw: &str) -> String {
    parse_item_name(raw).base_name
}
