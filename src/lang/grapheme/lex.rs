//! Grapheme lexicon: one letter, one phone
//!
//! Latin (with common diacritics), Greek and Cyrillic letters map to
//! SAMPA style phones. Any other letter becomes a phone named after its
//! code point (`u0e01`), which lets unknown scripts through the pipeline
//! even though those phones are outside the phoneset.

use crate::lexicon::lts::LetterToSound;
use crate::lexicon::phoneset::{Phone, Phoneset};
use crate::{LexError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;

const VOWELS: [&str; 6] = ["a", "e", "i", "o", "u", "1"];

/// (phone, voiced, sonorant)
const CONSONANTS: [(&str, bool, bool); 24] = [
    ("b", true, false),
    ("d", true, false),
    ("f", false, false),
    ("g", true, false),
    ("h", false, false),
    ("j", true, true),
    ("k", false, false),
    ("l", true, true),
    ("m", true, true),
    ("n", true, true),
    ("p", false, false),
    ("r", true, true),
    ("s", false, false),
    ("t", false, false),
    ("v", true, false),
    ("w", true, true),
    ("z", true, false),
    ("x", false, false),
    ("G", true, false),
    ("D", true, false),
    ("T", false, false),
    ("S", false, false),
    ("Z", true, false),
    ("tS", false, false),
];

pub fn grapheme_phoneset() -> Phoneset {
    let mut phones: Vec<Phone> = VOWELS.iter().map(|v| Phone::vowel(v)).collect();
    phones.extend(
        CONSONANTS
            .iter()
            .map(|&(name, voiced, sonorant)| Phone::consonant(name, voiced, sonorant)),
    );
    Phoneset::new("cmu_grapheme", "pau", phones)
}

/// Lowercase letter -> phones
static LETTERS: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    // Latin
    for (c, p) in [
        ('a', "a"), ('b', "b"), ('c', "k"), ('d', "d"), ('e', "e"), ('f', "f"), ('g', "g"),
        ('h', "h"), ('i', "i"), ('j', "j"), ('k', "k"), ('l', "l"), ('m', "m"), ('n', "n"),
        ('o', "o"), ('p', "p"), ('q', "k"), ('r', "r"), ('s', "s"), ('t', "t"), ('u', "u"),
        ('v', "v"), ('w', "w"), ('x', "k s"), ('y', "i"), ('z', "z"),
    ] {
        m.insert(c, p);
    }
    for c in "àáâäãåā".chars() {
        m.insert(c, "a");
    }
    for c in "èéêëē".chars() {
        m.insert(c, "e");
    }
    for c in "ìíîïī".chars() {
        m.insert(c, "i");
    }
    for c in "òóôöõøō".chars() {
        m.insert(c, "o");
    }
    for c in "ùúûüū".chars() {
        m.insert(c, "u");
    }
    m.insert('æ', "e");
    m.insert('ç', "s");
    m.insert('ñ', "n j");
    m.insert('ß', "s");
    m.insert('š', "S");
    m.insert('ž', "Z");
    m.insert('č', "tS");
    // Greek
    for (c, p) in [
        ('α', "a"), ('β', "v"), ('γ', "G"), ('δ', "D"), ('ε', "e"), ('ζ', "z"), ('η', "i"),
        ('θ', "T"), ('ι', "i"), ('κ', "k"), ('λ', "l"), ('μ', "m"), ('ν', "n"), ('ξ', "k s"),
        ('ο', "o"), ('π', "p"), ('ρ', "r"), ('σ', "s"), ('ς', "s"), ('τ', "t"), ('υ', "i"),
        ('φ', "f"), ('χ', "x"), ('ψ', "p s"), ('ω', "o"), ('ά', "a"), ('έ', "e"), ('ή', "i"),
        ('ί', "i"), ('ό', "o"), ('ύ', "i"), ('ώ', "o"),
    ] {
        m.insert(c, p);
    }
    // Cyrillic; hard and soft signs are silent
    for (c, p) in [
        ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"), ('е', "j e"), ('ё', "j o"),
        ('ж', "Z"), ('з', "z"), ('и', "i"), ('й', "j"), ('к', "k"), ('л', "l"), ('м', "m"),
        ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"), ('с', "s"), ('т', "t"), ('у', "u"),
        ('ф', "f"), ('х', "x"), ('ц', "t s"), ('ч', "tS"), ('ш', "S"), ('щ', "S tS"),
        ('ъ', ""), ('ы', "1"), ('ь', ""), ('э', "e"), ('ю', "j u"), ('я', "j a"),
    ] {
        m.insert(c, p);
    }
    m
});

/// Phones for one character; letters outside the table are named by code point
pub fn grapheme_phones(c: char) -> Vec<String> {
    if let Some(p) = LETTERS.get(&c) {
        return p.split_whitespace().map(|s| s.to_string()).collect();
    }
    if c.is_alphanumeric() {
        return vec![format!("u{:04x}", c as u32)];
    }
    Vec::new()
}

/// Letter to sound by direct character mapping
#[derive(Debug, Default)]
pub struct GraphemeLts;

impl LetterToSound for GraphemeLts {
    fn predict(&self, word: &str) -> Result<Vec<String>> {
        let phones: Vec<String> = word
            .chars()
            .flat_map(|c| c.to_lowercase())
            .flat_map(grapheme_phones)
            .collect();
        if phones.is_empty() {
            return Err(LexError::LetterToSound {
                word: word.to_string(),
                reason: "no letters".to_string(),
            });
        }
        Ok(phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn said(word: &str) -> String {
        GraphemeLts.predict(word).unwrap().join(" ")
    }

    #[test]
    fn test_latin() {
        assert_eq!(said("Café"), "k a f e");
        assert_eq!(said("taxi"), "t a k s i");
        assert_eq!(said("mañana"), "m a n j a n a");
    }

    #[test]
    fn test_greek_and_cyrillic() {
        assert_eq!(said("θάλασσα"), "T a l a s s a");
        assert_eq!(said("мир"), "m i r");
        assert_eq!(said("объём"), "o b j o m");
    }

    #[test]
    fn test_unknown_script() {
        assert_eq!(said("กข"), "u0e01 u0e02");
        assert_eq!(said("42"), "u0034 u0032");
        assert!(GraphemeLts.predict("--").is_err());
    }

    #[test]
    fn test_table_in_phoneset() {
        let ps = grapheme_phoneset();
        for p in LETTERS.values() {
            let phones: Vec<&str> = p.split_whitespace().collect();
            assert!(ps.validate(&phones).is_ok(), "{:?}", phones);
        }
    }
}
