//! Digest comparison for the avalanche effect demo.
//!
//! A good cryptographic hash flips roughly half of its output bits when a
//! single input character changes. These helpers count exactly how much two
//! digests differ so the shell can show it at the hex and bit level.

use crate::hash::HashDigest;

/// How much two equal-width digests differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DigestDiff {
    /// Differing hex characters (nibbles).
    pub hex_flips: usize,
    /// Total hex characters per digest.
    pub hex_total: usize,
    /// Differing bits (Hamming distance).
    pub bit_flips: usize,
    /// Total bits per digest.
    pub bit_total: usize,
}

impl DigestDiff {
    /// Percentage of flipped bits; the ideal for a strong primitive is 50.
    pub fn bit_percent(&self) -> f64 {
        if self.bit_total == 0 {
            return 0.0;
        }
        self.bit_flips as f64 / self.bit_total as f64 * 100.0
    }
}

/// Compares two digests of the same primitive.
///
/// Panics if the widths differ, which would mean the caller mixed
/// primitives; the demos always hash both inputs with the same function.
pub fn compare(a: &HashDigest, b: &HashDigest) -> DigestDiff {
    assert_eq!(a.len(), b.len(), "digests must come from the same primitive");

    let mut hex_flips = 0;
    let mut bit_flips = 0;

    for (&byte_a, &byte_b) in a.as_bytes().iter().zip(b.as_bytes()) {
        let diff = byte_a ^ byte_b;
        bit_flips += diff.count_ones() as usize;
        hex_flips += usize::from(diff >> 4 != 0) + usize::from(diff & 0x0f != 0);
    }

    DigestDiff {
        hex_flips,
        hex_total: a.len() * 2,
        bit_flips,
        bit_total: a.len() * 8,
    }
}

/// Counts the character positions where two inputs differ, treating a length
/// difference as one differing position per extra character.
pub fn char_differences(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let shared = a
        .iter()
        .zip(&b)
        .filter(|(char_a, char_b)| char_a != char_b)
        .count();

    shared + a.len().abs_diff(b.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::HashFunction;

    #[test]
    fn identical_digests_do_not_differ() {
        let digest = HashFunction::Sha2_256.digest("password", None);
        let diff = compare(&digest, &digest);
        assert_eq!(diff.bit_flips, 0);
        assert_eq!(diff.hex_flips, 0);
        assert_eq!(diff.bit_total, 256);
        assert_eq!(diff.hex_total, 64);
    }

    #[test]
    fn one_character_change_scrambles_the_output() {
        let a = HashFunction::Sha2_256.digest("password", None);
        let b = HashFunction::Sha2_256.digest("passwore", None);
        let diff = compare(&a, &b);

        // Around half of 256 bits should flip. Anything above 40% already
        // demonstrates the effect; a fixed input pair keeps this stable.
        assert!(diff.bit_flips > 102, "only {} bits flipped", diff.bit_flips);
        assert!(diff.hex_flips > 0);
    }

    #[test]
    fn known_byte_patterns_count_exactly() {
        let a = HashDigest::from(vec![0x00, 0xf0]);
        let b = HashDigest::from(vec![0x01, 0x00]);
        let diff = compare(&a, &b);
        assert_eq!(diff.bit_flips, 5);
        assert_eq!(diff.hex_flips, 2);
    }

    #[test]
    fn char_differences_counts_positions_and_length() {
        assert_eq!(char_differences("password", "passwore"), 1);
        assert_eq!(char_differences("abc", "abc"), 0);
        assert_eq!(char_differences("abc", "abcde"), 2);
        assert_eq!(char_differences("axc", "abcd"), 2);
    }
}
