//! Font specs and manifests.
//!
//! A manifest is a JSON document listing one or more fonts. Each font names
//! its sprite sheet, the sheet geometry, the Unicode blocks it includes, its
//! character map, and any trim rules.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::blocks::BlockTable;
use crate::charmap::builtin_charmap;
use crate::cluster::CharacterEntry;
use crate::error::SpecError;
use crate::sheet::SpriteSheetSpec;
use crate::trim::TrimPolicy;

/// Blocks drawn by the system Latin fonts.
pub const SYS_LATIN_BLOCKS: &[&str] = &[
    "BASIC_LATIN",
    "LATIN_1_SUPPLEMENT",
    "LATIN_EXTENDED_A",
    "GENERAL_PUNCTUATION",
    "CURRENCY_SYMBOLS",
    "PRIVATE_USE_AREA",
    "SPECIALS",
];

const CHICAGO_LEGAL: &str = "This code includes encoded bitmaps of glyphs from the Chicago typeface which
was designed by Susan Kare and released by Apple in 1984. Chicago is a
registered trademark of Apple Inc.";

const GENEVA_LEGAL: &str = "This code includes encoded bitmaps of glyphs from the Geneva typeface which
was designed by Susan Kare and released by Apple in 1984. Geneva is a
registered trademark of Apple Inc.";

/// Where a font's character map comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CharMap {
    /// Name of an embedded map, e.g. `"sys_latin"`.
    Builtin(String),
    /// Entries listed directly in the manifest.
    Inline(Vec<CharacterEntry>),
}

impl<'de> Deserialize<'de> for CharMap {
    /// A string names a built-in map; an array lists entries inline. A bad
    /// inline entry reports its index and the entry's own error.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, SeqAccess, Visitor};

        struct CharMapVisitor;

        impl<'de> Visitor<'de> for CharMapVisitor {
            type Value = CharMap;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a built-in character map name or a list of entries")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(CharMap::Builtin(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(CharMap::Builtin(v))
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                loop {
                    let index = entries.len();
                    let entry = seq.next_element::<CharacterEntry>().map_err(|e| {
                        de::Error::custom(format!("charmap entry {}: {}", index, e))
                    })?;
                    match entry {
                        Some(entry) => entries.push(entry),
                        None => break,
                    }
                }
                Ok(CharMap::Inline(entries))
            }
        }

        deserializer.deserialize_any(CharMapVisitor)
    }
}

/// Everything needed to compile one font.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontSpec {
    /// Font name; also the generated module's identity.
    pub name: String,
    /// Sprite sheet PNG, relative to the manifest directory.
    pub sprites: PathBuf,
    /// Cell side length in pixels.
    pub size: u32,
    /// Grid columns.
    pub cols: u32,
    /// Pixels between cells.
    #[serde(default)]
    pub gutter: u32,
    /// Top/left border in pixels.
    #[serde(default)]
    pub border: u32,
    /// Names of the Unicode blocks this font includes.
    pub blocks: Vec<String>,
    /// Character map.
    pub charmap: CharMap,
    /// Trim overrides, first match wins.
    #[serde(default)]
    pub trim_rules: TrimPolicy,
    /// Credits or license notice for the glyph artwork.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal: Option<String>,
    /// File name for generated Rust source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rust_out: Option<String>,
}

impl FontSpec {
    /// Built-in presets: `bold` (Chicago) and `regular` (Geneva).
    pub fn preset(name: &str) -> Result<Self, SpecError> {
        let (font_name, sprites, legal) = match name {
            "bold" => ("Bold", "img/bold.png", CHICAGO_LEGAL),
            "regular" => ("Regular", "img/regular.png", GENEVA_LEGAL),
            _ => return Err(SpecError::UnknownPreset(name.to_string())),
        };
        Ok(Self {
            name: font_name.to_string(),
            sprites: PathBuf::from(sprites),
            size: 30,
            cols: 16,
            gutter: 2,
            border: 2,
            blocks: SYS_LATIN_BLOCKS.iter().map(|b| b.to_string()).collect(),
            charmap: CharMap::Builtin("sys_latin".to_string()),
            trim_rules: TrimPolicy::sys_latin(),
            legal: Some(legal.to_string()),
            rust_out: Some(format!("{}.rs", name)),
        })
    }

    /// Sheet geometry.
    pub fn sheet(&self) -> SpriteSheetSpec {
        SpriteSheetSpec::new(
            self.name.clone(),
            self.size,
            self.cols,
            self.gutter,
            self.border,
        )
    }

    /// Resolves the character map to concrete entries.
    pub fn character_map(&self) -> Result<Vec<CharacterEntry>, SpecError> {
        match &self.charmap {
            CharMap::Builtin(name) => builtin_charmap(name),
            CharMap::Inline(entries) => Ok(entries.clone()),
        }
    }

    /// The font's supported blocks, drawn from the full table.
    pub fn supported_blocks(&self, table: &BlockTable) -> Result<BlockTable, SpecError> {
        table.subset(self.blocks.as_slice())
    }

    /// Sprite sheet path resolved against a base directory.
    pub fn sprites_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.sprites)
    }

    /// Output file name for generated Rust source.
    pub fn rust_file_name(&self) -> String {
        self.rust_out
            .clone()
            .unwrap_or_else(|| format!("{}.rs", self.name.to_lowercase()))
    }
}

/// A list of fonts compiled together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontManifest {
    pub fonts: Vec<FontSpec>,
}

impl FontManifest {
    /// Parses a manifest from JSON.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the manifest as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Finds a font by name (case-insensitive).
    pub fn font(&self, name: &str) -> Option<&FontSpec> {
        self.fonts.iter().find(|f| f.name.eq_ignore_ascii_case(name))
    }
}
