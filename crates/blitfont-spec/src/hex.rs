//! Hex notation for scalar values and grapheme clusters.
//!
//! Character maps and block tables write codepoints as bare hex (`"E700"`),
//! and clusters as dash-separated hex scalars (`"1f3c4-200d-2640-fe0f"`).

use crate::error::SpecError;

/// Parses a bare hex codepoint into a `u32` without checking that it is a
/// Unicode scalar value.
pub fn parse_u32(text: &str) -> Result<u32, SpecError> {
    let digits = text.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("U+"))
        .unwrap_or(digits);
    if digits.is_empty() || digits.len() > 8 {
        return Err(invalid(text, "expected 1 to 8 hex digits"));
    }
    u32::from_str_radix(digits, 16).map_err(|e| invalid(text, &e.to_string()))
}

/// Parses a bare hex codepoint into a Unicode scalar value.
pub fn parse_scalar(text: &str) -> Result<char, SpecError> {
    let value = parse_u32(text)?;
    char::from_u32(value).ok_or_else(|| invalid(text, "not a Unicode scalar value"))
}

/// Parses a dash-separated hex cluster (e.g. `"1f3c4-200d-2640-fe0f"`).
pub fn parse_cluster(text: &str) -> Result<Vec<char>, SpecError> {
    if text.trim().is_empty() {
        return Err(invalid(text, "cluster is empty"));
    }
    text.split('-').map(parse_scalar).collect()
}

/// Formats a cluster in the dash-separated notation accepted by [`parse_cluster`].
pub fn format_cluster(scalars: &[char]) -> String {
    scalars
        .iter()
        .map(|&c| format!("{:X}", c as u32))
        .collect::<Vec<_>>()
        .join("-")
}

fn invalid(value: &str, reason: &str) -> SpecError {
    SpecError::InvalidHex {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Serde adapter for `u32` fields written as hex strings.
pub mod serde_u32 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:04X}", value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::parse_u32(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cluster_multi_scalar() {
        let cluster = parse_cluster("1f3c4-200d-2640-fe0f").unwrap();
        assert_eq!(
            cluster,
            vec!['\u{1F3C4}', '\u{200D}', '\u{2640}', '\u{FE0F}']
        );
        assert_eq!(format_cluster(&cluster), "1F3C4-200D-2640-FE0F");
    }

    #[test]
    fn test_parse_scalar_prefixes() {
        assert_eq!(parse_scalar("E700").unwrap(), '\u{E700}');
        assert_eq!(parse_scalar("0xe700").unwrap(), '\u{E700}');
        assert_eq!(parse_scalar("U+41").unwrap(), 'A');
    }

    #[test]
    fn test_parse_rejects_surrogates_and_garbage() {
        assert!(parse_scalar("D800").is_err());
        assert!(parse_scalar("zz").is_err());
        assert!(parse_cluster("").is_err());
        assert!(parse_cluster("41--42").is_err());
    }
}
