use std::fmt;

use crate::types::*;

///Trait for objects that carry an anagram signature (string-like)
pub trait Anagrammable {
    fn normalize(&self) -> Word;
    fn signature(&self) -> Signature;
}

impl Anagrammable for str {
    ///Reduce raw input to its dictionary form: only letters are retained,
    ///and every retained letter is lowercased
    fn normalize(&self) -> Word {
        self.chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(|c| c.to_lowercase())
            .collect()
    }

    ///Compute the anagram signature for a given string
    ///
    /// # Examples
    ///
    /// ```
    /// # use anadict::*;
    /// assert_eq!("listen".signature(), "silent".signature());
    /// assert_eq!("Dormitory".signature(), "dirty room!".signature());
    /// ```
    fn signature(&self) -> Signature {
        let mut chars: Vec<char> = self.normalize().chars().collect();
        chars.sort_unstable();
        Signature(chars.into_iter().collect())
    }
}

///The anagram-equivalence key: the letters of a word sorted into ascending
///code point order. Two words are anagrams iff their signatures are equal.
///Signatures are derived on demand and never stored in the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    ///Number of letters in the signature
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    ///Select the bucket for this signature in a table with the given number
    ///of buckets. Every letter is weighted by its position and the
    ///signature length; since the signature is sorted, anagrams always land
    ///in the same bucket. Distinct signatures may still collide, callers
    ///filter by signature equality after the bucket scan.
    pub fn bucket(&self, capacity: usize) -> usize {
        let length = self.len();
        let mut total: u64 = 0;
        for (i, c) in self.0.chars().enumerate() {
            total = total.wrapping_add(((i + length) as u64).wrapping_mul(c as u64));
        }
        (total % capacity as u64) as usize
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
