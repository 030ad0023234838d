//! Compact textual encoding of identifier and integer lists.
//!
//! Lists are stored as their elements joined with a single separator
//! character. Decoding is lenient: malformed identifiers are dropped and
//! malformed integers decode to zero, so a damaged setting degrades instead
//! of failing. Strict counterparts are provided for validation.
//!
//! # Examples
//!
//! ```
//! use pathcopy::codec::{decode_plugin_ids, encode_plugin_ids};
//!
//! let text = "{bad},{331A3B60-AF49-44F4-B30D-56ADFF6D25E8}";
//! let ids = decode_plugin_ids(text, ',');
//! assert_eq!(ids.len(), 1);
//! assert_eq!(encode_plugin_ids(&ids, ','), "{331A3B60-AF49-44F4-B30D-56ADFF6D25E8}");
//! ```

use std::fmt::Write as _;

use crate::error::{Error, Result};
use crate::plugin::PluginId;

/// Separator used for order lists in configuration files.
pub const DEFAULT_SEPARATOR: char = ',';

/// Splits encoded text into its parts. Empty text has no parts.
fn split(text: &str, separator: char) -> impl Iterator<Item = &str> {
    let text = if text.is_empty() { None } else { Some(text) };
    text.into_iter().flat_map(move |t| t.split(separator))
}

/// Decodes a list of plugin identifiers, dropping entries that fail to parse.
#[must_use]
pub fn decode_plugin_ids(text: &str, separator: char) -> Vec<PluginId> {
    split(text, separator)
        .filter_map(|part| match PluginId::parse(part) {
            Ok(id) => Some(id),
            Err(e) => {
                log::debug!("dropping malformed plugin identifier: {e}");
                None
            }
        })
        .collect()
}

/// Decodes a list of plugin identifiers, failing on the first malformed entry.
///
/// # Errors
///
/// Returns [`Error::InvalidPluginId`] for the first entry that does not parse.
pub fn try_decode_plugin_ids(text: &str, separator: char) -> Result<Vec<PluginId>> {
    split(text, separator).map(PluginId::parse).collect()
}

/// Decodes a list of unsigned integers.
///
/// Entries that are not plain decimal `u32` values decode to `0`. A warning
/// is logged for each such entry so that configuration corruption leaves a
/// trace.
#[must_use]
pub fn decode_u32s(text: &str, separator: char) -> Vec<u32> {
    split(text, separator)
        .enumerate()
        .map(|(position, part)| {
            part.parse().unwrap_or_else(|_| {
                log::warn!("integer list entry {position} ('{part}') is not a u32, using 0");
                0
            })
        })
        .collect()
}

/// Decodes a list of unsigned integers, failing on the first malformed entry.
///
/// # Errors
///
/// Returns [`Error::InvalidInteger`] for the first entry that does not parse.
pub fn try_decode_u32s(text: &str, separator: char) -> Result<Vec<u32>> {
    split(text, separator)
        .enumerate()
        .map(|(position, part)| {
            part.parse().map_err(|_| Error::InvalidInteger {
                value: part.to_string(),
                position,
            })
        })
        .collect()
}

/// Joins already-rendered items, with no leading separator.
fn join<T: std::fmt::Display>(items: &[T], separator: char) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{item}");
    }
    out
}

/// Encodes plugin identifiers in their braced upper-case form.
#[must_use]
pub fn encode_plugin_ids(ids: &[PluginId], separator: char) -> String {
    join(ids, separator)
}

/// Encodes unsigned integers as plain decimal.
#[must_use]
pub fn encode_u32s(values: &[u32], separator: char) -> String {
    join(values, separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_PATH: &str = "{331A3B60-AF49-44F4-B30D-56ADFF6D25E8}";
    const SHORT_UNC: &str = "{891F9E3E-0B70-49FD-A86C-53B21C6193C7}";

    #[test]
    fn test_empty_text_decodes_to_empty_list() {
        assert!(decode_plugin_ids("", ',').is_empty());
        assert!(decode_u32s("", ',').is_empty());
        assert!(try_decode_u32s("", '|').unwrap().is_empty());
    }

    #[test]
    fn test_empty_list_encodes_to_empty_text() {
        assert_eq!(encode_plugin_ids(&[], ','), "");
        assert_eq!(encode_u32s(&[], ','), "");
    }

    #[test]
    fn test_malformed_identifiers_are_dropped() {
        let ids = decode_plugin_ids(&format!("{{bad}},{LONG_PATH}"), ',');
        assert_eq!(ids, vec![PluginId::parse(LONG_PATH).unwrap()]);
    }

    #[test]
    fn test_strict_decode_reports_malformed_identifier() {
        let err = try_decode_plugin_ids(&format!("{LONG_PATH};nope"), ';').unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_identifier_order_is_preserved() {
        let text = format!("{SHORT_UNC}|{LONG_PATH}|{SHORT_UNC}");
        let ids = decode_plugin_ids(&text, '|');
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], ids[2]);
        assert_eq!(encode_plugin_ids(&ids, '|'), text);
    }

    #[test]
    fn test_first_element_has_no_leading_separator() {
        assert_eq!(encode_u32s(&[7], ','), "7");
        assert_eq!(encode_u32s(&[1, 22, 333], ','), "1,22,333");
    }

    #[test]
    fn test_lenient_integers_default_to_zero() {
        assert_eq!(decode_u32s("4,x,,99999999999,12", ','), vec![4, 0, 0, 0, 12]);
    }

    #[test]
    fn test_strict_integers_report_position() {
        match try_decode_u32s("4,5,x", ',') {
            Err(Error::InvalidInteger { value, position }) => {
                assert_eq!(value, "x");
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn separator_strategy() -> impl Strategy<Value = char> {
            prop::sample::select(vec![',', ';', '|', ' ', '\n'])
        }

        proptest! {
            #[test]
            fn plugin_ids_round_trip(
                raw in prop::collection::vec(any::<u128>(), 0..16),
                separator in separator_strategy(),
            ) {
                let ids: Vec<PluginId> = raw.into_iter().map(PluginId::from_u128).collect();
                let text = encode_plugin_ids(&ids, separator);
                prop_assert_eq!(decode_plugin_ids(&text, separator), ids);
            }

            #[test]
            fn u32s_round_trip(
                values in prop::collection::vec(any::<u32>(), 0..32),
                separator in separator_strategy(),
            ) {
                let text = encode_u32s(&values, separator);
                prop_assert_eq!(decode_u32s(&text, separator), values.clone());
                prop_assert_eq!(try_decode_u32s(&text, separator).unwrap(), values);
            }
        }
    }
}
