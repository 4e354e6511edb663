//! CMU US English lexicon
//!
//! `cmulex_init` builds the English lexicon: the core dictionary in
//! `entries`, letter names for spelled words, letter-to-sound rules for
//! everything else and an English onset table for syllabification.

pub mod entries;
pub mod letters;
pub mod rules;

use crate::lexicon::phoneset::{Phone, Phoneset};
use crate::lexicon::syllable::MaxOnset;
use crate::lexicon::{LexEntry, Lexicon};
use crate::Result;
use log::{info, warn};
use std::sync::Arc;

const VOWELS: [&str; 15] = [
    "aa", "ae", "ah", "ao", "aw", "ay", "eh", "er", "ey", "ih", "iy", "ow", "oy", "uh", "uw",
];

/// (phone, voiced, sonorant)
const CONSONANTS: [(&str, bool, bool); 24] = [
    ("b", true, false),
    ("ch", false, false),
    ("d", true, false),
    ("dh", true, false),
    ("f", false, false),
    ("g", true, false),
    ("hh", false, false),
    ("jh", true, false),
    ("k", false, false),
    ("l", true, true),
    ("m", true, true),
    ("n", true, true),
    ("ng", true, true),
    ("p", false, false),
    ("r", true, true),
    ("s", false, false),
    ("sh", false, false),
    ("t", false, false),
    ("th", false, false),
    ("v", true, false),
    ("w", true, true),
    ("y", true, true),
    ("z", true, false),
    ("zh", true, false),
];

/// Legal English onsets longer than one consonant
const ONSETS: [&str; 40] = [
    "p l", "p r", "p y", "b l", "b r", "b y", "t r", "t w", "d r", "d w", "k l", "k r", "k w",
    "k y", "g l", "g r", "g w", "f l", "f r", "f y", "th r", "th w", "sh r", "s l", "s m", "s n",
    "s p", "s t", "s k", "s w", "s f", "s p l", "s p r", "s t r", "s k r", "s k w", "s k y",
    "hh w", "hh y", "m y",
];

/// The CMU phoneset, stress marked vowels
pub fn cmu_phoneset() -> Phoneset {
    let mut phones: Vec<Phone> = VOWELS.iter().map(|v| Phone::vowel(v)).collect();
    phones.extend(
        CONSONANTS
            .iter()
            .map(|&(name, voiced, sonorant)| Phone::consonant(name, voiced, sonorant)),
    );
    Phoneset::new("cmu", "pau", phones).with_stress_marks()
}

fn core_entries() -> Result<Vec<LexEntry>> {
    let mut entries = Vec::new();
    for line in entries::CORE_ENTRIES.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        entries.push(LexEntry::parse(line)?);
    }
    // Letter names come after the core so plain "a" stays `ah0`
    let mut letters: Vec<_> = letters::LETTER_NAMES.iter().collect();
    letters.sort();
    for (c, phones) in letters {
        entries.push(LexEntry::new(&c.to_string(), Some("letter"), phones));
    }
    Ok(entries)
}

/// Build the CMU US English lexicon
pub fn cmulex_init() -> Result<Lexicon> {
    let phoneset = Arc::new(cmu_phoneset());
    let lts = rules::EnglishLts::new(phoneset.clone())?;
    let mut lexicon = Lexicon::new("cmu", phoneset)
        .with_entries(core_entries()?)?
        .with_lts(Box::new(lts))
        .with_syllabifier(Box::new(MaxOnset::with_onsets(&ONSETS)));
    // Letters outside a-z are read by the grapheme lexicon
    match super::lexicon_for("cmu_grapheme_lang") {
        Ok(grapheme) => lexicon = lexicon.with_fallback(grapheme),
        Err(e) => warn!("cmulex: no grapheme fallback: {}", e),
    }
    info!("cmulex: {} entries", lexicon.entry_count());
    Ok(lexicon)
}
