//! Phone inventories
//!
//! A phoneset names every phone a lexicon may produce together with the
//! few features the text pipeline needs (vowel, voicing, sonorance).

use crate::{LexError, Result};

/// A single phone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub name: String,
    pub vowel: bool,
    pub voiced: bool,
    pub sonorant: bool,
}

impl Phone {
    pub fn vowel(name: &str) -> Self {
        Self {
            name: name.to_string(),
            vowel: true,
            voiced: true,
            sonorant: true,
        }
    }

    pub fn consonant(name: &str, voiced: bool, sonorant: bool) -> Self {
        Self {
            name: name.to_string(),
            vowel: false,
            voiced,
            sonorant,
        }
    }
}

/// Named phone inventory
#[derive(Debug, Clone)]
pub struct Phoneset {
    pub name: String,
    pub phones: Vec<Phone>,
    /// Name of the silence phone
    pub silence: String,
    /// Vowels may carry a trailing stress digit (`ah0`, `ey1`)
    pub stress_marked: bool,
}

impl Phoneset {
    pub fn new(name: &str, silence: &str, phones: Vec<Phone>) -> Self {
        Self {
            name: name.to_string(),
            phones,
            silence: silence.to_string(),
            stress_marked: false,
        }
    }

    pub fn with_stress_marks(mut self) -> Self {
        self.stress_marked = true;
        self
    }

    /// Find a phone, ignoring a stress digit when the set uses them
    pub fn phone(&self, name: &str) -> Option<&Phone> {
        let base = if self.stress_marked {
            strip_stress(name).0
        } else {
            name
        };
        self.phones.iter().find(|p| p.name == base)
    }

    /// Vowel test; unknown phones are treated as consonants
    pub fn is_vowel(&self, name: &str) -> bool {
        self.phone(name).map(|p| p.vowel).unwrap_or(false)
    }

    pub fn is_voiced(&self, name: &str) -> bool {
        self.phone(name).map(|p| p.voiced).unwrap_or(false)
    }

    /// Check every phone belongs to this set
    pub fn validate<S: AsRef<str>>(&self, phones: &[S]) -> Result<()> {
        for phone in phones {
            let phone = phone.as_ref();
            if self.phone(phone).is_none() && phone != self.silence {
                return Err(LexError::InvalidPhone {
                    phone: phone.to_string(),
                    phoneset: self.name.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Split `ah1` into (`ah`, Some(1))
pub fn strip_stress(phone: &str) -> (&str, Option<u8>) {
    match phone.as_bytes().last() {
        Some(b @ b'0'..=b'2') if phone.len() > 1 => (&phone[..phone.len() - 1], Some(b - b'0')),
        _ => (phone, None),
    }
}
