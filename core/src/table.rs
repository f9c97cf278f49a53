use std::collections::HashMap;

use crate::corpus::Corpus;
use crate::hash::{HashDigest, HashFunction};

/// A precomputed mapping from unsalted digest back to plaintext candidate.
///
/// Built once per demo session and read-only afterwards; lookups borrow the
/// table. An empty corpus yields an empty table, which is not an error:
/// every lookup against it simply misses.
#[derive(Clone, Debug)]
pub struct RainbowTable {
    hash_function: HashFunction,
    entries: HashMap<HashDigest, String>,
}

impl RainbowTable {
    /// Hashes every corpus candidate without a salt and stores the
    /// digest → candidate pair.
    ///
    /// If two candidates share a digest the later one wins. A curated
    /// 25-entry corpus should never collide under a real primitive, so an
    /// overwrite is worth announcing: it is a live demonstration of demo 2,
    /// not a condition to hide.
    pub fn build(hash_function: HashFunction, corpus: &Corpus) -> Self {
        let mut entries = HashMap::with_capacity(corpus.len());

        for candidate in corpus.candidates() {
            let digest = hash_function.digest(candidate, None);
            if let Some(previous) = entries.insert(digest, candidate.to_owned()) {
                tracing::warn!(
                    %previous,
                    candidate,
                    "corpus collision, later candidate overwrites the earlier entry"
                );
            }
        }

        tracing::debug!(entries = entries.len(), %hash_function, "rainbow table built");

        Self {
            hash_function,
            entries,
        }
    }

    /// O(1) reverse lookup of an unsalted digest.
    pub fn lookup(&self, digest: &HashDigest) -> Option<&str> {
        self.entries.get(digest).map(String::as_str)
    }

    /// The primitive this table was precomputed for.
    pub fn hash_function(&self) -> HashFunction {
        self.hash_function
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_produces_one_entry_per_candidate() {
        let corpus = Corpus::new(["password123", "letmein", "admin"]);
        let table = RainbowTable::build(HashFunction::Sha2_256, &corpus);
        assert_eq!(table.len(), 3);

        let digest = HashFunction::Sha2_256.digest("letmein", None);
        assert_eq!(table.lookup(&digest), Some("letmein"));
    }

    #[test]
    fn empty_corpus_builds_an_empty_table() {
        let corpus = Corpus::new(Vec::<String>::new());
        let table = RainbowTable::build(HashFunction::Sha2_256, &corpus);
        assert!(table.is_empty());

        let digest = HashFunction::Sha2_256.digest("anything", None);
        assert_eq!(table.lookup(&digest), None);
    }

    #[test]
    fn duplicate_digests_keep_the_later_candidate() {
        // Identical candidates are the one collision we can force without
        // breaking a real primitive; the later insert must win quietly.
        let corpus = Corpus::new(["letmein", "letmein"]);
        let table = RainbowTable::build(HashFunction::Sha2_256, &corpus);
        assert_eq!(table.len(), 1);

        let digest = HashFunction::Sha2_256.digest("letmein", None);
        assert_eq!(table.lookup(&digest), Some("letmein"));
    }

    #[test]
    fn table_has_no_salted_entries() {
        let corpus = Corpus::common();
        let table = RainbowTable::build(HashFunction::Sha2_256, &corpus);

        let salted = HashFunction::Sha2_256.digest("dragon", Some(&crate::Salt::from("x7f2")));
        assert_eq!(table.lookup(&salted), None);
    }
}
