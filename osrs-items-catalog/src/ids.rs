//! Parser for wiki item id cells.
//!
//! A single wiki row can cover one id, an inclusive range, or a
//! comma-separated mix of both:
//! ```text
//! 13263
//! 1704-1712
//! 1704-1706, 11976, 11978
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::IdParseError;

/// Largest number of ids a single `A-B` range may expand to.
pub const MAX_RANGE_SPAN: u32 = 10_000;

/// The id (or ids) carried by one catalog item.
///
/// Serialized untagged, so the JSON form is either a bare integer or an
/// array of integers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Single(u32),
    Multiple(Vec<u32>),
}

impl ItemId {
    /// Returns true if `id` is this scalar or appears in this sequence.
    pub fn contains(&self, id: u32) -> bool {
        match self {
            Self::Single(v) => *v == id,
            Self::Multiple(ids) => ids.contains(&id),
        }
    }

    /// All ids in order, as a slice.
    pub fn as_slice(&self) -> &[u32] {
        match self {
            Self::Single(v) => std::slice::from_ref(v),
            Self::Multiple(ids) => ids,
        }
    }

    pub fn first(&self) -> Option<u32> {
        self.as_slice().first().copied()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }
}

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self::Single(id)
    }
}

impl From<Vec<u32>> for ItemId {
    fn from(ids: Vec<u32>) -> Self {
        Self::Multiple(ids)
    }
}

/// Compact form: consecutive runs collapse to `A-B`, runs are joined by `", "`.
impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = self.as_slice();
        let mut i = 0;
        while i < ids.len() {
            let start = ids[i];
            let mut j = i;
            while j + 1 < ids.len() && ids[j].checked_add(1) == Some(ids[j + 1]) {
                j += 1;
            }
            if i > 0 {
                f.write_str(", ")?;
            }
            if j > i {
                write!(f, "{}-{}", start, ids[j])?;
            } else {
                write!(f, "{start}")?;
            }
            i = j + 1;
        }
        Ok(())
    }
}

/// Parse an id cell into an [`ItemId`].
///
/// Comma lists and hyphenated ranges always yield [`ItemId::Multiple`], even
/// when they describe a single id. A bare number yields [`ItemId::Single`].
///
/// # Examples
///
/// ```
/// use osrs_items_catalog::ids::{parse_id_list, ItemId};
///
/// assert_eq!(parse_id_list("13263").unwrap(), ItemId::Single(13263));
/// assert_eq!(
///     parse_id_list("1704-1706, 11976").unwrap(),
///     ItemId::Multiple(vec![1704, 1705, 1706, 11976])
/// );
/// assert!(parse_id_list("12a").is_err());
/// ```
pub fn parse_id_list(raw: &str) -> Result<ItemId, IdParseError> {
    let raw = raw.trim();

    if raw.contains(',') {
        let mut ids = Vec::new();
        for part in raw.split(',') {
            expand_part(part, &mut ids)?;
        }
        return Ok(ItemId::Multiple(ids));
    }

    if raw.contains('-') {
        let mut ids = Vec::new();
        expand_part(raw, &mut ids)?;
        return Ok(ItemId::Multiple(ids));
    }

    parse_number(raw).map(ItemId::Single)
}

/// Append one comma-separated part (a number or an `A-B` range) to `out`.
fn expand_part(part: &str, out: &mut Vec<u32>) -> Result<(), IdParseError> {
    match part.split_once('-') {
        Some((start, end)) => {
            let start = parse_number(start)?;
            let end = parse_number(end)?;
            if start > end {
                return Err(IdParseError::ReversedRange { start, end });
            }
            if end - start >= MAX_RANGE_SPAN {
                return Err(IdParseError::RangeTooLarge { start, end });
            }
            out.extend(start..=end);
        }
        None => out.push(parse_number(part)?),
    }
    Ok(())
}

fn parse_number(text: &str) -> Result<u32, IdParseError> {
    let trimmed = text.trim();
    trimmed
        .parse::<u32>()
        .map_err(|_| IdParseError::invalid_number(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_id() {
        assert_eq!(parse_id_list("13263").unwrap(), ItemId::Single(13263));
    }

    #[test]
    fn test_range() {
        let expected: Vec<u32> = (1704..=1712).collect();
        assert_eq!(
            parse_id_list("1704-1712").unwrap(),
            ItemId::Multiple(expected)
        );
    }

    #[test]
    fn test_comma_list() {
        assert_eq!(
            parse_id_list("11976, 11978").unwrap(),
            ItemId::Multiple(vec![11976, 11978])
        );
    }

    #[test]
    fn test_mixed_list_keeps_part_order() {
        assert_eq!(
            parse_id_list("1704-1706, 11976, 11978").unwrap(),
            ItemId::Multiple(vec![1704, 1705, 1706, 11976, 11978])
        );
        assert_eq!(
            parse_id_list("20, 1-2").unwrap(),
            ItemId::Multiple(vec![20, 1, 2])
        );
    }

    #[test]
    fn test_whitespace_tolerated() {
        assert_eq!(
            parse_id_list("  1704 - 1706  ").unwrap(),
            ItemId::Multiple(vec![1704, 1705, 1706])
        );
        assert_eq!(parse_id_list("\t42 \n").unwrap(), ItemId::Single(42));
    }

    #[test]
    fn test_degenerate_range_is_still_a_sequence() {
        assert_eq!(parse_id_list("5-5").unwrap(), ItemId::Multiple(vec![5]));
    }

    #[test]
    fn test_malformed_numbers() {
        assert_eq!(
            parse_id_list("abc"),
            Err(IdParseError::InvalidNumber("abc".to_string()))
        );
        assert!(parse_id_list("").is_err());
        assert!(parse_id_list("1,,2").is_err());
        assert!(parse_id_list("1, 2,").is_err());
        assert!(parse_id_list("1-2-3").is_err());
        assert!(parse_id_list("-5").is_err());
        assert!(parse_id_list("99999999999").is_err());
    }

    #[test]
    fn test_reversed_range() {
        assert_eq!(
            parse_id_list("1712-1704"),
            Err(IdParseError::ReversedRange {
                start: 1712,
                end: 1704
            })
        );
    }

    #[test]
    fn test_oversized_range() {
        assert_eq!(
            parse_id_list("1-4294967295"),
            Err(IdParseError::RangeTooLarge {
                start: 1,
                end: 4294967295
            })
        );
        assert!(matches!(
            parse_id_list("5, 0-10000"),
            Err(IdParseError::RangeTooLarge { .. })
        ));
        let widest = parse_id_list("0-9999").unwrap();
        assert_eq!(widest.len(), MAX_RANGE_SPAN as usize);
    }

    #[test]
    fn test_contains() {
        assert!(ItemId::Single(7).contains(7));
        assert!(!ItemId::Single(7).contains(8));
        let multi = ItemId::Multiple(vec![1, 2, 3]);
        assert!(multi.contains(2));
        assert!(!multi.contains(4));
    }

    #[test]
    fn test_display_collapses_runs() {
        assert_eq!(ItemId::Single(13263).to_string(), "13263");
        let id = parse_id_list("1704-1706, 11976, 11978").unwrap();
        assert_eq!(id.to_string(), "1704-1706, 11976, 11978");
        assert_eq!(ItemId::Multiple(vec![]).to_string(), "");
    }

    #[test]
    fn test_json_shape_is_untagged() {
        assert_eq!(serde_json::to_string(&ItemId::Single(5)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&ItemId::Multiple(vec![1, 2])).unwrap(),
            "[1,2]"
        );
        let back: ItemId = serde_json::from_str("[3,4]").unwrap();
        assert_eq!(back, ItemId::Multiple(vec![3, 4]));
    }
}
