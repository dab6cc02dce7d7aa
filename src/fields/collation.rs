//! Locale-style string ordering for field names and labels.
//!
//! Approximates root-locale collation in three levels:
//!
//! 1. Base letters without regard to accents or case. Punctuation and
//!    whitespace sort before digits, digits before letters.
//! 2. Accents: an unaccented letter sorts before the same letter accented.
//! 3. Case: lowercase before uppercase at the first differing letter.
//!
//! Strings are compared in canonical decomposition (NFD), so `é` is `e`
//! followed by a combining acute accent.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings in locale order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let (a, b) = (Decomposed::new(a), Decomposed::new(b));

    a.primary()
        .cmp(b.primary())
        .then_with(|| a.accents.cmp(&b.accents))
        .then_with(|| tertiary(&a.bases, &b.bases))
}

/// A string split into base characters and the accents attached to each.
struct Decomposed {
    bases: Vec<char>,
    accents: Vec<Vec<char>>,
}

impl Decomposed {
    fn new(s: &str) -> Self {
        let mut bases = Vec::new();
        let mut accents: Vec<Vec<char>> = Vec::new();

        for c in s.nfd() {
            match accents.last_mut() {
                Some(marks) if is_combining_mark(c) => marks.push(c),
                _ => {
                    bases.push(c);
                    accents.push(Vec::new());
                }
            }
        }

        Self { bases, accents }
    }

    fn primary(&self) -> impl Iterator<Item = (u8, char)> + '_ {
        self.bases.iter().copied().map(primary_weight)
    }
}

fn primary_weight(c: char) -> (u8, char) {
    let class = if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    };
    (class, c.to_lowercase().next().unwrap_or(c))
}

fn tertiary(a: &[char], b: &[char]) -> Ordering {
    a.iter()
        .zip(b)
        .find(|(x, y)| x != y)
        .map_or(Ordering::Equal, |(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => x.cmp(y),
        })
}
