//! The candidate password corpus backing the rainbow table demo.
//!
//! Real rainbow tables hold billions of entries; ours holds twenty-five of
//! the most common passwords, which is plenty to demonstrate the attack.

/// Common passwords in descending order of popularity.
pub const COMMON_PASSWORDS: &[&str] = &[
    "123456", "password", "12345678", "qwerty", "abc123",
    "monkey", "letmein", "dragon", "111111", "baseball",
    "iloveyou", "trustno1", "sunshine", "master", "welcome",
    "shadow", "ashley", "football", "jesus", "michael",
    "ninja", "mustang", "password1", "hunter2", "batman",
];

/// An ordered, immutable list of candidate passwords.
///
/// The order is presentation order: it carries no meaning, but it is stable
/// across repeated iterations so demos reproduce exactly.
#[derive(Clone, Debug)]
pub struct Corpus(Vec<String>);

impl Corpus {
    /// The built-in common-password corpus.
    pub fn common() -> Self {
        Self::new(COMMON_PASSWORDS.iter().copied())
    }

    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(candidates.into_iter().map(Into::into).collect())
    }

    /// Iterates over the candidates in stable order. Restartable: every call
    /// yields the same sequence.
    pub fn candidates(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_corpus_is_loaded_once_and_ordered() {
        let corpus = Corpus::common();
        assert_eq!(corpus.len(), 25);
        assert_eq!(corpus.candidates().next(), Some("123456"));

        let first: Vec<&str> = corpus.candidates().collect();
        let second: Vec<&str> = corpus.candidates().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_corpus_is_allowed() {
        let corpus = Corpus::new(Vec::<String>::new());
        assert!(corpus.is_empty());
        assert_eq!(corpus.candidates().count(), 0);
    }
}
