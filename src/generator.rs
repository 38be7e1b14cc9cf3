//! Builders for demonstration trees of students with generated names.
//!
//! The random source is passed in explicitly so that a seeded generator reproduces the same names.

use crate::search_tree::{Balance, SearchTree};
use crate::student::Student;
use rand::Rng;

/// The id of the student generated for offset 0.
pub const BASE_ID: u32 = 2_000_000_000;

/// The largest offset that still fits in an id.
pub const MAX_OFFSET: u32 = u32::MAX - BASE_ID;

const VOWELS: [char; 10] = ['a', 'e', 'i', 'o', 'u', 'A', 'E', 'I', 'O', 'U'];

pub struct TreeGenerator<R> {
    rng: R,
}

impl<R> TreeGenerator<R>
where
    R: Rng,
{
    pub fn new(rng: R) -> Self {
        TreeGenerator { rng }
    }

    /// Inserts students with ids `BASE_ID + 1` through `BASE_ID + n` in increasing order, which
    /// produces a tree of height `n - 1` when nothing rebalances it.
    ///
    /// # Panics
    ///
    /// Panics if `n` is greater than `MAX_OFFSET`.
    pub fn degenerate<B>(&mut self, n: u32, tree: &mut SearchTree<Student, B>)
    where
        B: Balance,
    {
        assert!(n <= MAX_OFFSET, "offset {} does not fit in an id", n);
        for offset in 1..=n {
            let name = self.full_name();
            tree.insert(Student::new(BASE_ID + offset, name));
        }
    }

    /// Inserts students with ids `BASE_ID + min` through `BASE_ID + max` by inserting the midpoint
    /// of the range before the two halves on either side of it, which produces a tree of minimal
    /// height even when nothing rebalances it.
    ///
    /// # Panics
    ///
    /// Panics if `max` is greater than `MAX_OFFSET`.
    pub fn perfectly_balanced<B>(&mut self, min: u32, max: u32, tree: &mut SearchTree<Student, B>)
    where
        B: Balance,
    {
        assert!(max <= MAX_OFFSET, "offset {} does not fit in an id", max);
        if min > max {
            return;
        }

        let mid = min + (max - min) / 2;
        let name = self.full_name();
        tree.insert(Student::new(BASE_ID + mid, name));

        if mid > min {
            self.perfectly_balanced(min, mid - 1, tree);
        }
        if mid < max {
            self.perfectly_balanced(mid + 1, max, tree);
        }
    }

    /// Returns two capitalized words of three to eight letters separated by a space.
    pub fn full_name(&mut self) -> String {
        let first_len = 3 + self.rng.gen_range(0, 6);
        let last_len = 3 + self.rng.gen_range(0, 6);
        format!("{} {}", self.word(first_len), self.word(last_len))
    }

    // A consonant is always followed by a vowel.
    fn word(&mut self, len: usize) -> String {
        let mut word = String::with_capacity(len);
        let mut prev = self.letter(false);
        word.push(prev);
        for _ in 1..len {
            prev = if is_vowel(prev) { self.letter(true) } else { self.vowel(true) };
            word.push(prev);
        }
        word
    }

    fn letter(&mut self, lowercase: bool) -> char {
        let base = if lowercase { b'a' } else { b'A' };
        (base + self.rng.gen_range(0u8, 26)) as char
    }

    fn vowel(&mut self, lowercase: bool) -> char {
        let offset = if lowercase { 0 } else { 5 };
        VOWELS[offset + self.rng.gen_range(0, 5)]
    }
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}
