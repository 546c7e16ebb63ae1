//! Character map entries.
//!
//! A character map ties each grapheme cluster a font can draw to the grid
//! cell holding its glyph. UI icons live in the Private Use Area and have no
//! printable form, so they carry a name instead.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::hex;
use crate::sheet::GlyphLocation;

/// What a glyph stands for: a real grapheme cluster, or a named icon placed
/// at a single codepoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClusterOrLabel {
    /// An ordered sequence of Unicode scalar values.
    Cluster(Vec<char>),
    /// A UI icon glyph, identified by name, encoded at `codepoint`.
    IconLabel {
        /// Display name, e.g. `Battery_05`.
        name: String,
        /// Codepoint the icon is looked up by.
        codepoint: char,
    },
}

impl ClusterOrLabel {
    /// Builds a cluster from the scalars of a string.
    pub fn from_str_cluster(text: &str) -> Self {
        ClusterOrLabel::Cluster(text.chars().collect())
    }

    /// The scalar sequence to hash and look up.
    pub fn scalars(&self) -> &[char] {
        match self {
            ClusterOrLabel::Cluster(scalars) => scalars,
            ClusterOrLabel::IconLabel { codepoint, .. } => std::slice::from_ref(codepoint),
        }
    }

    /// First scalar, used for Unicode block classification.
    pub fn leading_scalar(&self) -> Option<char> {
        self.scalars().first().copied()
    }

    /// Human-readable label for diagnostics and generated comments.
    pub fn label(&self) -> String {
        match self {
            ClusterOrLabel::Cluster(scalars) => {
                let text: String = scalars.iter().collect();
                if scalars.iter().all(|c| !c.is_control()) {
                    format!("'{}'", text)
                } else {
                    format!("'{}'", text.escape_default())
                }
            }
            ClusterOrLabel::IconLabel { name, .. } => name.clone(),
        }
    }

    /// The cluster as a `String`.
    pub fn to_text(&self) -> String {
        self.scalars().iter().collect()
    }
}

/// One row of a character map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CharacterEntryDef", into = "CharacterEntryDef")]
pub struct CharacterEntry {
    /// The cluster (or icon) this glyph represents.
    pub glyph: ClusterOrLabel,
    /// Grid cell holding the glyph.
    pub location: GlyphLocation,
}

impl CharacterEntry {
    /// Creates an entry for a printable cluster.
    pub fn cluster(text: &str, row: u32, col: u32) -> Self {
        Self {
            glyph: ClusterOrLabel::from_str_cluster(text),
            location: GlyphLocation::new(row, col),
        }
    }

    /// Creates an entry for a named icon.
    pub fn icon(name: impl Into<String>, codepoint: char, row: u32, col: u32) -> Self {
        Self {
            glyph: ClusterOrLabel::IconLabel {
                name: name.into(),
                codepoint,
            },
            location: GlyphLocation::new(row, col),
        }
    }

    /// Leading scalar value as an integer codepoint (0 for an empty cluster).
    pub fn leading_codepoint(&self) -> u32 {
        self.glyph.leading_scalar().map(|c| c as u32).unwrap_or(0)
    }
}

/// On-disk form of a [`CharacterEntry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CharacterEntryDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cluster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    codepoint: Option<String>,
    row: u32,
    col: u32,
}

impl TryFrom<CharacterEntryDef> for CharacterEntry {
    type Error = SpecError;

    fn try_from(def: CharacterEntryDef) -> Result<Self, Self::Error> {
        let location = GlyphLocation::new(def.row, def.col);
        let glyph = match (def.cluster, def.icon, def.codepoint) {
            (Some(cluster), None, None) => ClusterOrLabel::Cluster(hex::parse_cluster(&cluster)?),
            (None, Some(name), Some(codepoint)) => ClusterOrLabel::IconLabel {
                name,
                codepoint: hex::parse_scalar(&codepoint)?,
            },
            _ => {
                return Err(SpecError::InvalidHex {
                    value: format!("row {}, col {}", def.row, def.col),
                    reason: "entry needs either `cluster`, or both `icon` and `codepoint`"
                        .to_string(),
                })
            }
        };
        Ok(Self { glyph, location })
    }
}

impl From<CharacterEntry> for CharacterEntryDef {
    fn from(entry: CharacterEntry) -> Self {
        let (cluster, icon, codepoint) = match entry.glyph {
            ClusterOrLabel::Cluster(scalars) => (Some(hex::format_cluster(&scalars)), None, None),
            ClusterOrLabel::IconLabel { name, codepoint } => (
                None,
                Some(name),
                Some(format!("{:04X}", codepoint as u32)),
            ),
        };
        Self {
            cluster,
            icon,
            codepoint,
            row: entry.location.row,
            col: entry.location.col,
        }
    }
}
