use crate::corpus::Corpus;
use crate::hash::{HashDigest, HashFunction, Salt};
use crate::table::RainbowTable;

/// Outcome of a reverse-lookup attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttackResult {
    Cracked(String),
    NotFound,
}

impl AttackResult {
    pub fn is_cracked(&self) -> bool {
        matches!(self, Self::Cracked(_))
    }
}

/// A salted attack outcome together with the work it cost.
///
/// `candidates_tried` feeds the presenter's commentary: multiply it by the
/// number of distinct salts in a stolen database and the precomputation
/// advantage is gone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaltedAttack {
    pub result: AttackResult,
    pub candidates_tried: usize,
}

/// Reverse lookup of an unsalted digest. A single map probe, no hashing.
pub fn crack_unsalted(target: &HashDigest, table: &RainbowTable) -> AttackResult {
    match table.lookup(target) {
        Some(candidate) => AttackResult::Cracked(candidate.to_owned()),
        None => AttackResult::NotFound,
    }
}

/// Brute-forces a salted digest by re-hashing every corpus candidate under
/// the given salt.
///
/// Intentionally linear: the precomputed unsalted table is useless here, so
/// the attacker is back to one full digest per candidate per salt.
pub fn attempt_salted(
    target: &HashDigest,
    salt: &Salt,
    hash_function: HashFunction,
    corpus: &Corpus,
) -> SaltedAttack {
    let mut candidates_tried = 0;

    for candidate in corpus.candidates() {
        candidates_tried += 1;
        if hash_function.digest(candidate, Some(salt)) == *target {
            return SaltedAttack {
                result: AttackResult::Cracked(candidate.to_owned()),
                candidates_tried,
            };
        }
    }

    SaltedAttack {
        result: AttackResult::NotFound,
        candidates_tried,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: HashFunction = HashFunction::Sha2_256;

    fn demo_corpus() -> Corpus {
        Corpus::new(["password123", "letmein", "admin"])
    }

    #[test]
    fn unsalted_digest_cracks_instantly() {
        let corpus = demo_corpus();
        let table = RainbowTable::build(HASH, &corpus);

        let target = HASH.digest("letmein", None);
        assert_eq!(
            crack_unsalted(&target, &table),
            AttackResult::Cracked("letmein".into())
        );
    }

    #[test]
    fn every_corpus_candidate_round_trips() {
        let corpus = Corpus::common();
        let table = RainbowTable::build(HASH, &corpus);

        for candidate in corpus.candidates() {
            let target = HASH.digest(candidate, None);
            match crack_unsalted(&target, &table) {
                // A colliding corpus may legitimately return a different
                // candidate, as long as its digest matches.
                AttackResult::Cracked(found) => {
                    assert_eq!(HASH.digest(&found, None), target);
                }
                AttackResult::NotFound => panic!("corpus candidate missing from its own table"),
            }
        }
    }

    #[test]
    fn salted_digest_defeats_the_table() {
        let corpus = demo_corpus();
        let table = RainbowTable::build(HASH, &corpus);

        let salt = Salt::from("x7f2");
        let target = HASH.digest("letmein", Some(&salt));
        assert_eq!(crack_unsalted(&target, &table), AttackResult::NotFound);
    }

    #[test]
    fn per_salt_recomputation_recovers_the_password() {
        let corpus = demo_corpus();
        let salt = Salt::from("x7f2");
        let target = HASH.digest("letmein", Some(&salt));

        let attack = attempt_salted(&target, &salt, HASH, &corpus);
        assert_eq!(attack.result, AttackResult::Cracked("letmein".into()));
        // "letmein" is the second candidate, so the scan stops there.
        assert_eq!(attack.candidates_tried, 2);
    }

    #[test]
    fn wrong_salt_misses_after_a_full_scan() {
        let corpus = demo_corpus();
        let target = HASH.digest("letmein", Some(&Salt::from("x7f2")));

        let attack = attempt_salted(&target, &Salt::from("wrongsalt"), HASH, &corpus);
        assert_eq!(attack.result, AttackResult::NotFound);
        assert_eq!(attack.candidates_tried, corpus.len());
    }

    #[test]
    fn mismatched_salts_never_cross_match() {
        let corpus = demo_corpus();
        let target = HASH.digest("admin", Some(&Salt::from("s1")));

        let attack = attempt_salted(&target, &Salt::from("s2"), HASH, &corpus);
        assert_eq!(attack.result, AttackResult::NotFound);
    }

    #[test]
    fn empty_corpus_always_reports_not_found() {
        let corpus = Corpus::new(Vec::<String>::new());
        let table = RainbowTable::build(HASH, &corpus);

        let target = HASH.digest("letmein", None);
        assert_eq!(crack_unsalted(&target, &table), AttackResult::NotFound);

        let attack = attempt_salted(&target, &Salt::from("x7f2"), HASH, &corpus);
        assert_eq!(attack.result, AttackResult::NotFound);
        assert_eq!(attack.candidates_tried, 0);
    }
}
