//! Pronunciation lexicons
//!
//! A lexicon answers "how is this word said". Lookup goes through the
//! user addenda, then the compiled entries, then letter-to-sound rules and
//! finally an optional fallback lexicon (used by Indic voices for Latin
//! script words).

pub mod lts;
pub mod phoneset;
pub mod syllable;

use crate::utterance::Syllable;
use crate::{LexError, Result};
use log::{debug, warn};
use lts::LetterToSound;
use phoneset::Phoneset;
use serde::Serialize;
use std::sync::Arc;
use syllable::{MaxOnset, Syllabify};

/// A dictionary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexEntry {
    pub word: String,
    /// Part of speech tag used to pick between homographs
    pub pos: Option<String>,
    pub phones: Vec<String>,
}

impl LexEntry {
    pub fn new(word: &str, pos: Option<&str>, phones: &str) -> Self {
        Self {
            word: word.to_lowercase(),
            pos: pos.map(|p| p.to_string()),
            phones: phones.split_whitespace().map(|s| s.to_string()).collect(),
        }
    }

    /// Parse `word [pos] : p1 p2 ...`
    pub fn parse(text: &str) -> Result<Self> {
        let (head, phones) = text
            .split_once(':')
            .ok_or_else(|| LexError::InvalidEntry(text.to_string()))?;
        let mut head = head.split_whitespace();
        let word = head
            .next()
            .ok_or_else(|| LexError::InvalidEntry(text.to_string()))?;
        let pos = head.next();
        if head.next().is_some() || phones.trim().is_empty() {
            return Err(LexError::InvalidEntry(text.to_string()));
        }
        Ok(Self::new(word, pos, phones))
    }
}

/// Where a pronunciation came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PronunciationSource {
    Addenda,
    Lexicon,
    LetterToSound,
    Fallback,
}

/// Result of a lexicon lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pronunciation {
    /// Phones as stored, stress digits included
    pub phones: Vec<String>,
    pub syllables: Vec<Syllable>,
    pub source: PronunciationSource,
}

/// Pronunciation dictionary with letter-to-sound backup
pub struct Lexicon {
    pub name: String,
    phoneset: Arc<Phoneset>,
    /// Sorted by word; homographs stay in insertion order
    entries: Vec<LexEntry>,
    addenda: Vec<LexEntry>,
    lts: Option<Box<dyn LetterToSound>>,
    syllabifier: Box<dyn Syllabify>,
    fallback: Option<Arc<Lexicon>>,
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("name", &self.name)
            .field("phoneset", &self.phoneset.name)
            .field("entries", &self.entries.len())
            .field("addenda", &self.addenda.len())
            .field("lts", &self.lts.is_some())
            .field("fallback", &self.fallback.as_ref().map(|l| l.name.clone()))
            .finish()
    }
}

impl Lexicon {
    /// Create an empty lexicon over a phoneset
    pub fn new(name: &str, phoneset: Arc<Phoneset>) -> Self {
        Self {
            name: name.to_string(),
            phoneset,
            entries: Vec::new(),
            addenda: Vec::new(),
            lts: None,
            syllabifier: Box::new(MaxOnset::new()),
            fallback: None,
        }
    }

    /// Install compiled entries; every phone is checked against the phoneset
    pub fn with_entries(mut self, mut entries: Vec<LexEntry>) -> Result<Self> {
        for entry in &entries {
            self.phoneset.validate(&entry.phones)?;
        }
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        self.entries = entries;
        Ok(self)
    }

    pub fn with_lts(mut self, lts: Box<dyn LetterToSound>) -> Self {
        self.lts = Some(lts);
        self
    }

    pub fn with_syllabifier(mut self, syllabifier: Box<dyn Syllabify>) -> Self {
        self.syllabifier = syllabifier;
        self
    }

    pub fn with_fallback(mut self, fallback: Arc<Lexicon>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    pub fn phoneset(&self) -> &Phoneset {
        &self.phoneset
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Add a user entry; addenda take precedence over compiled entries
    pub fn add_addenda(&mut self, entry: LexEntry) -> Result<()> {
        self.phoneset.validate(&entry.phones)?;
        debug!("Lexicon '{}' addenda: {} -> {:?}", self.name, entry.word, entry.phones);
        self.addenda.push(entry);
        Ok(())
    }

    /// Is the word in the addenda or compiled entries (letter to sound not consulted)
    pub fn in_lexicon(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.addenda.iter().any(|e| e.word == word) || !self.entry_range(&word).is_empty()
    }

    fn entry_range(&self, word: &str) -> &[LexEntry] {
        let start = self.entries.partition_point(|e| e.word.as_str() < word);
        let end = self.entries.partition_point(|e| e.word.as_str() <= word);
        &self.entries[start..end]
    }

    fn pick<'a>(candidates: impl Iterator<Item = &'a LexEntry>, pos: Option<&str>) -> Option<&'a LexEntry> {
        let mut first = None;
        for entry in candidates {
            if pos.is_some() && entry.pos.as_deref() == pos {
                return Some(entry);
            }
            first.get_or_insert(entry);
        }
        first
    }

    /// Look up a word, optionally preferring an entry with the given POS
    pub fn lookup(&self, word: &str, pos: Option<&str>) -> Result<Pronunciation> {
        let word = word.to_lowercase();

        // Latest addenda win
        if let Some(entry) = Self::pick(self.addenda.iter().rev().filter(|e| e.word == word), pos) {
            return Ok(self.pronounce_from(entry.phones.clone(), PronunciationSource::Addenda));
        }

        if let Some(entry) = Self::pick(self.entry_range(&word).iter(), pos) {
            return Ok(self.pronounce_from(entry.phones.clone(), PronunciationSource::Lexicon));
        }

        let lts_err = match &self.lts {
            Some(lts) => match lts.predict(&word) {
                Ok(phones) if !phones.is_empty() => {
                    debug!("Lexicon '{}' LTS: {} -> {:?}", self.name, word, phones);
                    return Ok(self.pronounce_from(phones, PronunciationSource::LetterToSound));
                }
                Ok(_) => LexError::LetterToSound {
                    word: word.clone(),
                    reason: "no phones produced".to_string(),
                },
                Err(e) => e,
            },
            None => LexError::LetterToSound {
                word: word.clone(),
                reason: format!("lexicon '{}' has no letter to sound rules", self.name),
            },
        };

        if let Some(fallback) = &self.fallback {
            debug!("Lexicon '{}' falling back to '{}' for {}", self.name, fallback.name, word);
            let mut pron = fallback.lookup(&word, pos)?;
            pron.source = PronunciationSource::Fallback;
            return Ok(pron);
        }

        warn!("Lexicon '{}' cannot pronounce '{}'", self.name, word);
        Err(lts_err)
    }

    /// Syllabify a phone list with this lexicon's rules
    pub fn pronounce(&self, phones: Vec<String>) -> Pronunciation {
        self.pronounce_from(phones, PronunciationSource::Lexicon)
    }

    fn pronounce_from(&self, phones: Vec<String>, source: PronunciationSource) -> Pronunciation {
        let syllables = self.syllabifier.syllabify(&phones, &self.phoneset);
        Pronunciation {
            phones,
            syllables,
            source,
        }
    }
}
