use serde::Serialize;

///A dictionary word: the canonical form of raw input, all non-letter
///characters removed and every letter lowercased
pub type Word = String;

///An ordered chain of words whose signatures hash to the same bucket
pub type Bucket = Vec<Word>;

///Default number of buckets in the table; a prime, hand-tuned against a
///wordlist of roughly 25k entries
pub const DEFAULT_CAPACITY: usize = 49999;

///Occupancy statistics over the bucket array, used for tuning the capacity
///prime for a given vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    ///Number of buckets in the table
    pub capacity: usize,

    ///Number of stored words, duplicate insertions included
    pub entries: usize,

    ///Number of non-empty buckets
    pub occupied: usize,

    ///Length of the longest chain
    pub max_chain: usize,
}
