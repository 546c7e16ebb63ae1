//! Unicode block table.
//!
//! One [`BlockTable`] is the authority for both classifying character map
//! entries at compile time and pre-filtering lookups at run time. The full
//! table lists every block any supported font draws from; each font narrows it
//! with [`BlockTable::subset`].

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Embedded table of known blocks.
const KNOWN_BLOCKS_JSON: &str = include_str!("../data/blocks.json");

/// A contiguous, inclusive range of codepoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnicodeBlock {
    /// Block name, e.g. `BASIC_LATIN`.
    pub name: String,
    /// First codepoint of the block.
    #[serde(with = "crate::hex::serde_u32")]
    pub low: u32,
    /// Last codepoint of the block.
    #[serde(with = "crate::hex::serde_u32")]
    pub high: u32,
}

impl UnicodeBlock {
    /// Creates a new block.
    pub fn new(name: impl Into<String>, low: u32, high: u32) -> Self {
        Self {
            name: name.into(),
            low,
            high,
        }
    }

    /// Whether the codepoint falls inside this block.
    #[inline]
    pub fn contains(&self, codepoint: u32) -> bool {
        self.low <= codepoint && codepoint <= self.high
    }
}

/// An ordered list of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockTable {
    blocks: Vec<UnicodeBlock>,
}

impl BlockTable {
    /// Creates a table from blocks, keeping them sorted by their low bound.
    pub fn new(mut blocks: Vec<UnicodeBlock>) -> Self {
        blocks.sort_by_key(|b| b.low);
        Self { blocks }
    }

    /// The embedded table of every block known to blitfont.
    pub fn known() -> Result<Self, SpecError> {
        let blocks: Vec<UnicodeBlock> = serde_json::from_str(KNOWN_BLOCKS_JSON)?;
        Ok(Self::new(blocks))
    }

    /// Blocks in codepoint order.
    pub fn blocks(&self) -> &[UnicodeBlock] {
        &self.blocks
    }

    /// Number of blocks in the table.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Finds a block by name.
    pub fn get(&self, name: &str) -> Option<&UnicodeBlock> {
        self.blocks.iter().find(|b| b.name == name)
    }

    /// Returns the block containing the codepoint, if any.
    pub fn classify(&self, codepoint: u32) -> Option<&UnicodeBlock> {
        let idx = self.blocks.partition_point(|b| b.high < codepoint);
        self.blocks.get(idx).filter(|b| b.contains(codepoint))
    }

    /// Whether any block contains the codepoint.
    pub fn contains(&self, codepoint: u32) -> bool {
        self.classify(codepoint).is_some()
    }

    /// Builds the sub-table with the named blocks.
    pub fn subset<S: AsRef<str>>(&self, names: &[S]) -> Result<Self, SpecError> {
        let mut blocks = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let block = self
                .get(name)
                .ok_or_else(|| SpecError::UnknownBlock(name.to_string()))?;
            if !blocks.contains(block) {
                blocks.push(block.clone());
            }
        }
        Ok(Self::new(blocks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_table_loads_and_is_disjoint() {
        let table = BlockTable::known().unwrap();
        assert_eq!(table.len(), 28);
        for pair in table.blocks().windows(2) {
            assert!(pair[0].high < pair[1].low, "{:?} overlaps {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_classify() {
        let table = BlockTable::known().unwrap();
        assert_eq!(table.classify(0x41).unwrap().name, "BASIC_LATIN");
        assert_eq!(table.classify(0xE70C).unwrap().name, "PRIVATE_USE_AREA");
        assert_eq!(table.classify(0xFFFD).unwrap().name, "SPECIALS");
        assert_eq!(
            table.classify(0x1F600).unwrap().name,
            "EMOTICONS"
        );
        assert!(table.classify(0x1000).is_none());
        assert!(table.classify(0x0180).is_none());
    }

    #[test]
    fn test_subset() {
        let table = BlockTable::known().unwrap();
        let latin = table
            .subset(&["LATIN_1_SUPPLEMENT", "BASIC_LATIN", "BASIC_LATIN"])
            .unwrap();
        assert_eq!(latin.len(), 2);
        assert_eq!(latin.blocks()[0].name, "BASIC_LATIN");
        assert!(latin.contains(0xE9));
        assert!(!latin.contains(0x2018));

        assert!(matches!(
            table.subset(&["KLINGON"]),
            Err(SpecError::UnknownBlock(name)) if name == "KLINGON"
        ));
    }
}
