//! Built-in character maps.

use crate::cluster::CharacterEntry;
use crate::error::SpecError;

const SYS_LATIN_JSON: &str = include_str!("../data/sys_latin.json");

/// Names of the embedded character maps.
pub const BUILTIN_CHARMAPS: &[&str] = &["sys_latin"];

/// Loads an embedded character map by name.
///
/// `sys_latin` covers printable Basic Latin and Latin-1, the Œ/œ ligatures,
/// typographic quotes and daggers from General Punctuation, the Euro sign,
/// thirteen UI icons at U+E700..U+E70C, and U+FFFD.
pub fn builtin_charmap(name: &str) -> Result<Vec<CharacterEntry>, SpecError> {
    match name {
        "sys_latin" => Ok(serde_json::from_str(SYS_LATIN_JSON)?),
        _ => Err(SpecError::UnknownCharMap(name.to_string())),
    }
}
