//! Core logic of the interactive hashing concepts lab.
//!
//! Everything in this crate is synchronous, deterministic and terminal-free:
//! the presentation shell in `hashlab-cli` collects input, calls into this
//! crate and renders whatever comes back. The crate covers the five lab
//! demos: the toy bucket hash, digest comparison for the avalanche effect,
//! key stretching, and the rainbow table build/attack pair.

pub mod attack;
pub mod avalanche;
pub mod bucket;
pub mod corpus;
pub mod error;
pub mod hash;
pub mod table;

pub use attack::{attempt_salted, crack_unsalted, AttackResult, SaltedAttack};
pub use corpus::{Corpus, COMMON_PASSWORDS};
pub use error::{HashLabError, HashLabResult};
pub use hash::{stretched_digest, HashDigest, HashFunction, Salt, DEFAULT_PBKDF2_ROUNDS};
pub use table::RainbowTable;
