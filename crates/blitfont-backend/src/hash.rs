//! Grapheme cluster hashing.
//!
//! A 32-bit MurmurHash3 variant that consumes one Unicode scalar value per
//! block instead of four bytes. Generated lookup code carries the same
//! function, so the constants here are part of the output format.

/// Seed used for every compiled font.
pub const CLUSTER_SEED: u32 = 0;

const C1: u32 = 0xcc9e_2d51;
const C2: u32 = 0x1b87_3593;

/// Hashes a sequence of scalar values.
pub fn hash_scalars<I>(scalars: I, seed: u32) -> u32
where
    I: IntoIterator<Item = char>,
{
    let mut h = seed;
    let mut len = 0u32;
    for c in scalars {
        let mut k = c as u32;
        k = k.wrapping_mul(C1);
        k = k.rotate_left(15);
        k = k.wrapping_mul(C2);

        h ^= k;
        h = h.rotate_left(13);
        h = h.wrapping_mul(5).wrapping_add(0xe654_6b64);
        len = len.wrapping_add(1);
    }
    h ^= len;
    fmix32(h)
}

/// Hashes a cluster given as a slice of scalar values.
pub fn cluster_hash(scalars: &[char], seed: u32) -> u32 {
    hash_scalars(scalars.iter().copied(), seed)
}

/// Hashes every scalar of a string as one cluster.
pub fn str_hash(cluster: &str, seed: u32) -> u32 {
    hash_scalars(cluster.chars(), seed)
}

fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(str_hash("", 0), 0);
        assert_eq!(str_hash("", 1), 0x514e_28b7);
        assert_eq!(str_hash("A", 0), 0x4bcd_3197);
        assert_eq!(str_hash(" ", 0), 0x8c69_c315);
        assert_eq!(str_hash("AB", 0), 0xe45b_37ac);
        assert_eq!(str_hash("\u{E700}", 0), 0x4e84_3d6a);
    }

    #[test]
    fn test_length_counts_scalars_not_bytes() {
        // 'é' is two bytes in UTF-8 but one scalar.
        assert_eq!(str_hash("é", 0), 0xc8a8_7e93);
        assert_eq!(str_hash("é", 1), 0xe450_d5b0);
    }

    #[test]
    fn test_multi_scalar_cluster() {
        let surfer = ['\u{1F3C4}', '\u{200D}', '\u{2640}', '\u{FE0F}'];
        assert_eq!(cluster_hash(&surfer, 0), 0xa794_4f8d);
        assert_eq!(cluster_hash(&surfer, 0), str_hash("\u{1F3C4}\u{200D}\u{2640}\u{FE0F}", 0));
        assert_eq!(cluster_hash(&surfer, 1), 0xec11_672c);
    }

    #[test]
    fn test_order_matters() {
        assert_ne!(str_hash("AB", 0), str_hash("BA", 0));
    }
}
