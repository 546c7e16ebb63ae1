//! Canonical hashing of font specs.
//!
//! Reports carry the hash of the font spec they were compiled from, so a stale
//! generated font can be detected without recompiling it.

use crate::error::SpecError;
use crate::font::FontSpec;

/// Computes the BLAKE3 hash of a font spec.
///
/// The hash covers the font spec's JSON form plus its resolved character map, so
/// editing a built-in map changes the hash of every font using it.
///
/// # Returns
/// * A 64-character lowercase hexadecimal string
///
/// # Example
/// ```
/// use blitfont_spec::FontSpec;
/// use blitfont_spec::hash::canonical_font_hash;
///
/// let spec = FontSpec::preset("bold").unwrap();
/// let hash = canonical_font_hash(&spec).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_font_hash(spec: &FontSpec) -> Result<String, SpecError> {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&serde_json::to_vec(spec)?);
    hasher.update(&serde_json::to_vec(&spec.character_map()?)?);
    Ok(hasher.finalize().to_hex().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_hash_is_stable_and_sensitive() {
        let bold = FontSpec::preset("bold").unwrap();
        let again = FontSpec::preset("bold").unwrap();
        assert_eq!(
            canonical_font_hash(&bold).unwrap(),
            canonical_font_hash(&again).unwrap()
        );

        let mut wider = bold.clone();
        wider.gutter = 3;
        assert_ne!(
            canonical_font_hash(&bold).unwrap(),
            canonical_font_hash(&wider).unwrap()
        );
    }
}
