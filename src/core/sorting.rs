//! Collation used to order titles and artists

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// String ordering strategy injected into the song store
pub trait Collator: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Raw code point ordering
#[derive(Debug, Clone, Copy, Default)]
pub struct CodepointCollator;

impl Collator for CodepointCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Portuguese (Brazil) ordering
///
/// Compares base letters first, then diacritics, then case, and finally raw
/// code points, so "Água" sorts next to "agua" rather than after "zebra".
#[derive(Debug, Clone, Copy, Default)]
pub struct PtBrCollator;

impl Collator for PtBrCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let (ka, kb) = (CollationKey::new(a), CollationKey::new(b));
        ka.primary
            .cmp(&kb.primary)
            .then_with(|| ka.secondary.cmp(&kb.secondary))
            .then_with(|| ka.tertiary.cmp(&kb.tertiary))
            .then_with(|| a.cmp(b))
    }
}

struct CollationKey {
    /// (class, folded char) per base character
    primary: Vec<(u8, char)>,
    /// combining marks attached to each base character
    secondary: Vec<Vec<char>>,
    /// 0 for lower case, 1 for upper case
    tertiary: Vec<u8>,
}

impl CollationKey {
    fn new(text: &str) -> Self {
        let mut primary = Vec::new();
        let mut secondary: Vec<Vec<char>> = Vec::new();
        let mut tertiary = Vec::new();

        for c in text.nfd() {
            if is_combining_mark(c) {
                if let Some(marks) = secondary.last_mut() {
                    marks.push(c);
                }
                continue;
            }
            let folded = c.to_lowercase().next().unwrap_or(c);
            primary.push((char_class(folded), folded));
            secondary.push(Vec::new());
            tertiary.push(u8::from(c.is_uppercase()));
        }

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

// whitespace and punctuation, then digits, then letters
fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_alphabetic() {
        3
    } else if c.is_numeric() {
        2
    } else {
        1
    }
}
