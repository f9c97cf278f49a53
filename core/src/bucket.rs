//! The toy bucket hash behind demos 1 and 2.
//!
//! Nothing cryptographic here: the point is to show hashing as
//! "deterministic math that turns text into an address", and to let
//! collisions happen early and visibly.

/// Sum of the byte values of `text`. Exposed separately so the shell can
/// narrate the arithmetic step by step.
pub fn byte_sum(text: &str) -> usize {
    text.bytes().map(usize::from).sum()
}

/// The toy hash: byte sum modulo the bucket count.
///
/// `toy_hash("Cat", 8)` → (67 + 97 + 116) % 8 → 0.
pub fn toy_hash(text: &str, bucket_count: usize) -> usize {
    assert!(bucket_count > 0, "at least one bucket is required");
    byte_sum(text) % bucket_count
}

/// Where a word landed, and whether it shares its bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub bucket: usize,
    pub collision: bool,
}

/// A fixed array of buckets accumulating hashed words.
#[derive(Clone, Debug)]
pub struct BucketBoard {
    buckets: Vec<Vec<String>>,
}

impl BucketBoard {
    pub fn new(bucket_count: usize) -> Self {
        assert!(bucket_count > 0, "at least one bucket is required");
        Self {
            buckets: vec![Vec::new(); bucket_count],
        }
    }

    /// Hashes `word` and appends it to its bucket, reporting a collision
    /// when the bucket was already occupied.
    pub fn place(&mut self, word: &str) -> Placement {
        let bucket = toy_hash(word, self.buckets.len());
        let collision = !self.buckets[bucket].is_empty();
        self.buckets[bucket].push(word.to_owned());
        Placement { bucket, collision }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// The words currently in bucket `index`.
    pub fn bucket(&self, index: usize) -> &[String] {
        &self.buckets[index]
    }

    pub fn buckets(&self) -> impl Iterator<Item = &[String]> {
        self.buckets.iter().map(Vec::as_slice)
    }

    pub fn words_placed(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toy_hash_matches_the_worked_example() {
        assert_eq!(byte_sum("Cat"), 280);
        assert_eq!(toy_hash("Cat", 8), 0);
    }

    #[test]
    fn toy_hash_is_deterministic() {
        assert_eq!(toy_hash("qwerty", 5), toy_hash("qwerty", 5));
    }

    #[test]
    fn placement_reports_collisions() {
        let mut board = BucketBoard::new(8);

        // "Cat" and "Act" are anagrams, so they share a byte sum.
        let first = board.place("Cat");
        assert_eq!(first, Placement { bucket: 0, collision: false });

        let second = board.place("Act");
        assert_eq!(second, Placement { bucket: 0, collision: true });

        assert_eq!(board.bucket(0), ["Cat".to_owned(), "Act".to_owned()].as_slice());
        assert_eq!(board.words_placed(), 2);
    }

    #[test]
    fn pigeonhole_forces_a_collision() {
        // Six distinct words into five buckets must collide at least once.
        let mut board = BucketBoard::new(5);
        let words = ["a", "b", "c", "d", "e", "f"];
        let collided = words.iter().any(|word| board.place(word).collision);
        assert!(collided);
    }
}
