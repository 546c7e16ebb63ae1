//! Sorted cluster hash index.
//!
//! Maps cluster hashes to pattern offsets through two parallel arrays sorted
//! by hash, so lookup is a binary search.

use thiserror::Error;

use crate::hash::{cluster_hash, CLUSTER_SEED};

/// One indexed glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub hash: u32,
    /// Offset of the glyph's header word in the data buffer.
    pub offset: usize,
    pub label: String,
}

/// Errors from finalizing an index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("{label} is mapped more than once")]
    DuplicateCluster { label: String, hash: u32 },

    #[error("hash collision 0x{hash:08X} between {first} and {second}")]
    Collision {
        hash: u32,
        first: String,
        second: String,
    },
}

/// Collects entries in data order, then sorts and checks them.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    entries: Vec<(IndexEntry, Vec<char>)>,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cluster, hashed with [`CLUSTER_SEED`].
    pub fn push(&mut self, scalars: &[char], offset: usize, label: impl Into<String>) {
        let entry = IndexEntry {
            hash: cluster_hash(scalars, CLUSTER_SEED),
            offset,
            label: label.into(),
        };
        self.entries.push((entry, scalars.to_vec()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorts by hash and rejects equal hashes.
    ///
    /// Equal hashes from equal clusters are a duplicate mapping; from
    /// different clusters they are a collision. Either would make lookup
    /// ambiguous.
    pub fn finish(mut self) -> Result<ClusterIndex, IndexError> {
        self.entries.sort_by_key(|(entry, _)| entry.hash);

        for pair in self.entries.windows(2) {
            let (a, a_scalars) = &pair[0];
            let (b, b_scalars) = &pair[1];
            if a.hash != b.hash {
                continue;
            }
            return Err(if a_scalars == b_scalars {
                IndexError::DuplicateCluster {
                    label: b.label.clone(),
                    hash: b.hash,
                }
            } else {
                IndexError::Collision {
                    hash: a.hash,
                    first: a.label.clone(),
                    second: b.label.clone(),
                }
            });
        }

        let mut index = ClusterIndex::default();
        for (entry, _) in self.entries {
            index.hashes.push(entry.hash);
            index.offsets.push(entry.offset);
            index.labels.push(entry.label);
        }
        Ok(index)
    }
}

/// Finalized index: parallel arrays sorted by ascending hash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterIndex {
    hashes: Vec<u32>,
    offsets: Vec<usize>,
    labels: Vec<String>,
}

impl ClusterIndex {
    pub fn hashes(&self) -> &[u32] {
        &self.hashes
    }

    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Offset of the pattern with this hash.
    pub fn find(&self, hash: u32) -> Option<usize> {
        self.hashes
            .binary_search(&hash)
            .ok()
            .map(|i| self.offsets[i])
    }

    /// Entries in hash order.
    pub fn entries(&self) -> impl Iterator<Item = IndexEntry> + '_ {
        self.hashes
            .iter()
            .zip(&self.offsets)
            .zip(&self.labels)
            .map(|((&hash, &offset), label)| IndexEntry {
                hash,
                offset,
                label: label.clone(),
            })
    }
}
