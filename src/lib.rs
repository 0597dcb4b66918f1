use std::fs::File;
use std::io::{BufRead, BufReader};

use simple_error::{try_with, SimpleError};

pub mod signature;
pub mod types;

pub use crate::signature::*;
pub use crate::types::*;

///An anagram dictionary: a fixed-capacity hash table of words keyed by
///anagram signature, with chained buckets for collisions. The capacity is
///set at construction and never changes; the table grows only by appending
///to bucket chains.
pub struct AnagramDict {
    ///The bucket array; every word is stored in exactly the bucket its
    ///signature hashes to
    pub buckets: Vec<Bucket>,

    ///Number of stored words, duplicate insertions included
    entries: usize,

    pub debug: bool,
}

impl AnagramDict {
    ///Create an empty dictionary with the default capacity
    pub fn new(debug: bool) -> AnagramDict {
        AnagramDict::with_capacity(DEFAULT_CAPACITY, debug)
    }

    ///Create an empty dictionary with the given number of buckets. A prime
    ///capacity gives the best spread; the `stats()` method reports how well
    ///a capacity fares against the loaded vocabulary.
    pub fn with_capacity(capacity: usize, debug: bool) -> AnagramDict {
        assert!(capacity >= 1, "an anagram dictionary needs at least one bucket");
        AnagramDict {
            buckets: vec![Vec::new(); capacity],
            entries: 0,
            debug: debug,
        }
    }

    ///Number of buckets in the table
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    ///Number of stored words, duplicate insertions included
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    ///Insert a word into the dictionary. The word is normalized first;
    ///input without any letters is silently discarded. Duplicates are kept:
    ///inserting the same word twice makes lookups report it twice.
    pub fn insert(&mut self, text: &str) {
        let word = text.normalize();
        if word.is_empty() {
            return;
        }
        let signature = word.signature();
        let bucket = signature.bucket(self.capacity());
        if self.debug {
            eprintln!(" -- Adding to dictionary: {} (signature {}, bucket {})", word, signature, bucket);
        }
        self.buckets[bucket].push(word);
        self.entries += 1;
    }

    ///Call `callback` once for every stored word whose letters are a
    ///permutation of the probe's letters. The probe is normalized first; a
    ///probe without letters matches nothing. Matches are delivered
    ///synchronously in chain order, once per stored occurrence.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anadict::*;
    /// let mut dict = AnagramDict::new(false);
    /// dict.insert("cat");
    /// dict.insert("act");
    /// let mut found = Vec::new();
    /// dict.lookup("tac", |word| found.push(word.to_string()));
    /// found.sort();
    /// assert_eq!(found, vec!["act", "cat"]);
    /// ```
    pub fn lookup<F>(&self, probe: &str, mut callback: F)
    where
        F: FnMut(&str),
    {
        let signature = probe.signature();
        if signature.is_empty() {
            return;
        }
        for word in self.chain(&signature) {
            if word.signature() == signature {
                callback(word);
            }
        }
    }

    ///Get all stored anagrams of the probe, borrowed from the table
    pub fn get_anagrams(&self, probe: &str) -> Vec<&str> {
        let signature = probe.signature();
        let mut found: Vec<&str> = Vec::new();
        if signature.is_empty() {
            return found;
        }
        for word in self.chain(&signature) {
            if word.signature() == signature {
                found.push(word.as_str());
            }
        }
        found
    }

    ///Tests if the dictionary holds this exact word (after normalization)
    pub fn has(&self, text: &str) -> bool {
        let word = text.normalize();
        self.get_anagrams(&word).iter().any(|found| *found == word)
    }

    ///The chain of candidates sharing the signature's bucket; different
    ///signatures may hash to the same bucket, so the chain still needs
    ///filtering by exact signature equality
    fn chain(&self, signature: &Signature) -> &Bucket {
        &self.buckets[signature.bucket(self.capacity())]
    }

    ///Read a wordlist (one word per line) and insert every entry.
    ///Returns the number of words actually stored; lines that normalize to
    ///nothing are discarded by `insert` and not counted.
    pub fn read_wordlist(&mut self, filename: &str) -> Result<usize, SimpleError> {
        if self.debug {
            eprintln!("Reading wordlist from {}...", filename);
        }
        let f = try_with!(File::open(filename), "unable to open wordlist {}", filename);
        let f_buffer = BufReader::new(f);
        let before = self.entries;
        for line in f_buffer.lines() {
            let line = try_with!(line, "error reading wordlist {}", filename);
            if !line.is_empty() {
                self.insert(&line);
            }
        }
        if self.debug {
            eprintln!(" - Read wordlist of size {}", self.entries - before);
        }
        Ok(self.entries - before)
    }

    ///Compute occupancy statistics over the bucket array
    pub fn stats(&self) -> IndexStats {
        let mut occupied = 0;
        let mut max_chain = 0;
        for bucket in self.buckets.iter() {
            if !bucket.is_empty() {
                occupied += 1;
                if bucket.len() > max_chain {
                    max_chain = bucket.len();
                }
            }
        }
        IndexStats {
            capacity: self.capacity(),
            entries: self.entries,
            occupied: occupied,
            max_chain: max_chain,
        }
    }
}
