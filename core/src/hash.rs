use std::fmt::{self, Display};
use std::str::FromStr;

use digest::{Digest as _, DynDigest};
use md5::Md5;
use rand::RngCore;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

use crate::error::HashLabError;

/// Default PBKDF2 round count for the key-stretching demo.
/// OWASP's 2023 recommendation for PBKDF2-HMAC-SHA256.
pub const DEFAULT_PBKDF2_ROUNDS: u32 = 600_000;

/// All the supported hash functions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HashFunction {
    Md5,
    Sha1,
    Sha2_224,
    Sha2_256,
    Sha2_384,
    Sha2_512,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl HashFunction {
    /// Returns a boxed hasher for this function.
    pub fn hasher(&self) -> Box<dyn DynDigest> {
        match self {
            Self::Md5 => Box::new(Md5::new()),
            Self::Sha1 => Box::new(Sha1::new()),
            Self::Sha2_224 => Box::new(Sha224::new()),
            Self::Sha2_256 => Box::new(Sha256::new()),
            Self::Sha2_384 => Box::new(Sha384::new()),
            Self::Sha2_512 => Box::new(Sha512::new()),
            Self::Sha3_224 => Box::new(Sha3_224::new()),
            Self::Sha3_256 => Box::new(Sha3_256::new()),
            Self::Sha3_384 => Box::new(Sha3_384::new()),
            Self::Sha3_512 => Box::new(Sha3_512::new()),
        }
    }

    /// The width of this function's digest in bytes.
    pub fn digest_size(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 => 20,
            Self::Sha2_224 | Self::Sha3_224 => 28,
            Self::Sha2_256 | Self::Sha3_256 => 32,
            Self::Sha2_384 | Self::Sha3_384 => 48,
            Self::Sha2_512 | Self::Sha3_512 => 64,
        }
    }

    /// Hashes `text`, mixing the salt in first when one is given.
    ///
    /// Deterministic: the same `(text, salt)` pair always produces the same
    /// digest. The salt goes in front of the text, matching the
    /// `hash(salt || password)` layout shown on screen during the demos.
    pub fn digest(&self, text: &str, salt: Option<&Salt>) -> HashDigest {
        let mut hasher = self.hasher();
        if let Some(salt) = salt {
            hasher.update(salt.as_bytes());
        }
        hasher.update(text.as_bytes());
        HashDigest(hasher.finalize())
    }
}

impl Display for HashFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "md5",
            Self::Sha1 => "sha1",
            Self::Sha2_224 => "sha2-224",
            Self::Sha2_256 => "sha2-256",
            Self::Sha2_384 => "sha2-384",
            Self::Sha2_512 => "sha2-512",
            Self::Sha3_224 => "sha3-224",
            Self::Sha3_256 => "sha3-256",
            Self::Sha3_384 => "sha3-384",
            Self::Sha3_512 => "sha3-512",
        };
        write!(f, "{name}")
    }
}

impl FromStr for HashFunction {
    type Err = HashLabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Self::Md5),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "sha2-224" | "sha224" => Ok(Self::Sha2_224),
            "sha2-256" | "sha256" => Ok(Self::Sha2_256),
            "sha2-384" | "sha384" => Ok(Self::Sha2_384),
            "sha2-512" | "sha512" => Ok(Self::Sha2_512),
            "sha3-224" => Ok(Self::Sha3_224),
            "sha3-256" => Ok(Self::Sha3_256),
            "sha3-384" => Ok(Self::Sha3_384),
            "sha3-512" => Ok(Self::Sha3_512),
            _ => Err(HashLabError::UnsupportedPrimitive(s.to_owned())),
        }
    }
}

/// A fixed-width digest, immutable once computed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HashDigest(Box<[u8]>);

impl HashDigest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Digest width in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Iterates over the digest bits, most significant bit of each byte
    /// first, so the stream reads the same as the hex rendering.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0
            .iter()
            .flat_map(|byte| (0..8).rev().map(move |shift| byte >> shift & 1 == 1))
    }
}

impl From<Vec<u8>> for HashDigest {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// A short per-attempt byte string mixed into hashing to defeat precomputed
/// tables. Lives for a single demo step and is never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Salt(Vec<u8>);

impl Salt {
    /// The salt length used by the demos, in bytes.
    pub const DEMO_LEN: usize = 12;

    /// Generates a fresh random salt of `len` bytes.
    pub fn random(len: usize) -> Self {
        let mut bytes = vec![0; len];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

/// Presenter-supplied salts are typed as plain text.
impl From<&str> for Salt {
    fn from(text: &str) -> Self {
        Self(text.as_bytes().to_vec())
    }
}

impl Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Deliberately slow digest: PBKDF2-HMAC-SHA256 over `rounds` iterations.
///
/// This is the key-stretching half of the primitive adapter. One call costs
/// roughly `rounds` SHA-256 invocations, which is the entire point of the
/// fast-versus-slow demo.
pub fn stretched_digest(text: &str, salt: &Salt, rounds: u32) -> HashDigest {
    let mut out = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<Sha256>(text.as_bytes(), salt.as_bytes(), rounds, &mut out);
    out.to_vec().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_matches_known_vectors() {
        let sha256 = HashFunction::Sha2_256.digest("abc", None);
        assert_eq!(
            sha256.to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );

        let md5 = HashFunction::Md5.digest("abc", None);
        assert_eq!(md5.to_hex(), "900150983cd24fb0d6963f7d28e17f72");
    }

    #[test]
    fn digest_is_deterministic() {
        let salt = Salt::from("x7f2");
        let a = HashFunction::Sha2_256.digest("letmein", Some(&salt));
        let b = HashFunction::Sha2_256.digest("letmein", Some(&salt));
        assert_eq!(a, b);
    }

    #[test]
    fn salt_changes_the_digest() {
        let unsalted = HashFunction::Sha2_256.digest("letmein", None);
        let salted = HashFunction::Sha2_256.digest("letmein", Some(&Salt::from("x7f2")));
        assert_ne!(unsalted, salted);
    }

    #[test]
    fn digest_width_matches_the_function() {
        for function in [
            HashFunction::Md5,
            HashFunction::Sha1,
            HashFunction::Sha2_256,
            HashFunction::Sha2_512,
            HashFunction::Sha3_384,
        ] {
            assert_eq!(function.digest("abc", None).len(), function.digest_size());
        }
    }

    #[test]
    fn primitive_identifiers_parse() {
        assert_eq!("sha256".parse::<HashFunction>().unwrap(), HashFunction::Sha2_256);
        assert_eq!("SHA3-512".parse::<HashFunction>().unwrap(), HashFunction::Sha3_512);
        assert!(matches!(
            "whirlpool".parse::<HashFunction>(),
            Err(HashLabError::UnsupportedPrimitive(_))
        ));
    }

    #[test]
    fn bits_follow_the_hex_rendering() {
        let digest = HashDigest::from(vec![0b1010_0000, 0xff]);
        let bits: Vec<bool> = digest.bits().collect();
        assert_eq!(bits.len(), 16);
        assert!(bits[0] && !bits[1] && bits[2] && !bits[3]);
        assert!(bits[8..].iter().all(|b| *b));
    }

    #[test]
    fn stretched_digest_is_deterministic() {
        let salt = Salt::from("pepper");
        // Tiny round count: the test checks determinism, not slowness.
        let a = stretched_digest("hunter2", &salt, 2);
        let b = stretched_digest("hunter2", &salt, 2);
        assert_eq!(a, b);
        assert_eq!(a.len(), 32);
        assert_ne!(a, stretched_digest("hunter2", &salt, 3));
    }

    #[test]
    fn random_salts_differ() {
        let a = Salt::random(Salt::DEMO_LEN);
        let b = Salt::random(Salt::DEMO_LEN);
        assert_eq!(a.as_bytes().len(), Salt::DEMO_LEN);
        assert_ne!(a, b);
    }
}
