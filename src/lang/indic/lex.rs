//! Letter to sound for Brahmic scripts
//!
//! The nine major Indian scripts share one Unicode layout, so a code
//! point's offset from its block start says what the letter is in any of
//! them. Each consonant carries an inherent vowel until a vowel sign,
//! virama or schwa deletion removes it.

use crate::lexicon::lts::LetterToSound;
use crate::lexicon::phoneset::{strip_stress, Phone, Phoneset};
use crate::lexicon::Lexicon;
use crate::{LexError, Result};
use std::sync::Arc;

/// Which inherent vowels a script drops in speech
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchwaDeletion {
    None,
    /// Word final only
    Final,
    /// Word final and between vowel-consonant and consonant-vowel
    Full,
}

/// A Brahmic script block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Script {
    pub name: &'static str,
    pub base: u32,
    pub inherent: &'static str,
    pub deletion: SchwaDeletion,
}

pub const SCRIPTS: [Script; 9] = [
    Script { name: "devanagari", base: 0x0900, inherent: "a", deletion: SchwaDeletion::Full },
    Script { name: "bengali", base: 0x0980, inherent: "ao", deletion: SchwaDeletion::Final },
    Script { name: "gurmukhi", base: 0x0A00, inherent: "a", deletion: SchwaDeletion::Full },
    Script { name: "gujarati", base: 0x0A80, inherent: "a", deletion: SchwaDeletion::Full },
    Script { name: "oriya", base: 0x0B00, inherent: "ao", deletion: SchwaDeletion::None },
    Script { name: "tamil", base: 0x0B80, inherent: "a", deletion: SchwaDeletion::None },
    Script { name: "telugu", base: 0x0C00, inherent: "a", deletion: SchwaDeletion::None },
    Script { name: "kannada", base: 0x0C80, inherent: "a", deletion: SchwaDeletion::None },
    Script { name: "malayalam", base: 0x0D00, inherent: "a", deletion: SchwaDeletion::None },
];

/// Script and block offset of a character
pub fn script_of(c: char) -> Option<(&'static Script, u32)> {
    let cp = c as u32;
    SCRIPTS
        .iter()
        .find(|s| (s.base..s.base + 0x80).contains(&cp))
        .map(|s| (s, cp - s.base))
}

/// Value of an Indic or ASCII digit
pub fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    match script_of(c) {
        Some((_, off @ 0x66..=0x6F)) => Some(off - 0x66),
        _ => None,
    }
}

const VOWELS: [&str; 14] = [
    "a", "aa", "i", "ii", "u", "uu", "e", "ee", "ae", "ai", "o", "oo", "ao", "au",
];

/// (phone, voiced, sonorant)
const CONSONANTS: [(&str, bool, bool); 43] = [
    ("k", false, false),
    ("kh", false, false),
    ("g", true, false),
    ("gh", true, false),
    ("ng", true, true),
    ("c", false, false),
    ("ch", false, false),
    ("j", true, false),
    ("jh", true, false),
    ("nj", true, true),
    ("tt", false, false),
    ("tth", false, false),
    ("dd", true, false),
    ("ddh", true, false),
    ("nn", true, true),
    ("t", false, false),
    ("th", false, false),
    ("d", true, false),
    ("dh", true, false),
    ("n", true, true),
    ("p", false, false),
    ("ph", false, false),
    ("b", true, false),
    ("bh", true, false),
    ("m", true, true),
    ("y", true, true),
    ("r", true, true),
    ("rr", true, true),
    ("rh", true, true),
    ("l", true, true),
    ("ll", true, true),
    ("lll", true, true),
    ("v", true, true),
    ("sh", false, false),
    ("ss", false, false),
    ("s", false, false),
    ("h", true, false),
    ("q", false, false),
    ("kx", false, false),
    ("gx", true, false),
    ("z", true, false),
    ("f", false, false),
    ("yy", true, true),
];

/// The Indic phoneset; vowels also come nasalized (`aa~`)
pub fn indic_phoneset() -> Phoneset {
    let mut phones = Vec::new();
    for v in VOWELS {
        phones.push(Phone::vowel(v));
        phones.push(Phone::vowel(&format!("{}~", v)));
    }
    phones.extend(
        CONSONANTS
            .iter()
            .map(|&(name, voiced, sonorant)| Phone::consonant(name, voiced, sonorant)),
    );
    Phoneset::new("cmu_indic", "pau", phones)
}

/// Consonants at block offsets 0x15..=0x39
const CONSONANT_OFFSETS: [&str; 37] = [
    "k", "kh", "g", "gh", "ng", "c", "ch", "j", "jh", "nj", "tt", "tth", "dd", "ddh", "nn", "t",
    "th", "d", "dh", "n", "n", "p", "ph", "b", "bh", "m", "y", "r", "rr", "l", "ll", "lll", "v",
    "sh", "ss", "s", "h",
];

/// Nukta consonants at offsets 0x58..=0x5F
const NUKTA_OFFSETS: [&str; 8] = ["q", "kx", "gx", "z", "rr", "rh", "f", "yy"];

fn consonant(off: u32) -> Option<&'static str> {
    match off {
        0x15..=0x39 => Some(CONSONANT_OFFSETS[(off - 0x15) as usize]),
        0x58..=0x5F => Some(NUKTA_OFFSETS[(off - 0x58) as usize]),
        _ => None,
    }
}

fn with_nukta(phone: &str) -> &str {
    match phone {
        "k" => "q",
        "kh" => "kx",
        "g" => "gx",
        "j" => "z",
        "dd" => "rr",
        "ddh" => "rh",
        "ph" => "f",
        "y" => "yy",
        other => other,
    }
}

/// Independent vowels (offsets 0x05..=0x14) and vowel signs (0x3E..=0x4C)
fn vowel(off: u32) -> Option<&'static [&'static str]> {
    let v: &'static [&'static str] = match off {
        0x06 | 0x3E => &["aa"],
        0x07 | 0x3F => &["i"],
        0x08 | 0x40 => &["ii"],
        0x09 | 0x41 => &["u"],
        0x0A | 0x42 => &["uu"],
        0x0B | 0x43 => &["r", "i"],
        0x0C | 0x44 => &["r", "ii"],
        0x0D | 0x45 => &["ae"],
        0x0E | 0x46 => &["e"],
        0x0F | 0x47 => &["ee"],
        0x10 | 0x48 => &["ai"],
        0x11 | 0x49 => &["ao"],
        0x12 | 0x4A => &["o"],
        0x13 | 0x4B => &["oo"],
        0x14 | 0x4C => &["au"],
        _ => return None,
    };
    Some(v)
}

/// Malayalam chillu letters: consonants that never carry a vowel
fn chillu(c: char) -> Option<&'static str> {
    match c {
        '\u{0D7A}' => Some("nn"),
        '\u{0D7B}' => Some("n"),
        '\u{0D7C}' => Some("rr"),
        '\u{0D7D}' => Some("l"),
        '\u{0D7E}' => Some("ll"),
        '\u{0D7F}' => Some("k"),
        _ => None,
    }
}

/// Nasal homorganic with a following stop
fn homorganic(next: &str) -> Option<&'static str> {
    match next {
        "k" | "kh" | "g" | "gh" | "q" | "kx" | "gx" => Some("ng"),
        "c" | "ch" | "j" | "jh" => Some("nj"),
        "tt" | "tth" | "dd" | "ddh" => Some("nn"),
        "t" | "th" | "d" | "dh" => Some("n"),
        "p" | "ph" | "b" | "bh" => Some("m"),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Consonant,
    Vowel,
    /// Inherent vowel, may be deleted
    Schwa,
    /// Anusvara, resolved once the following phone is known
    Anusvara,
}

#[derive(Debug, Clone)]
struct Unit {
    phone: String,
    kind: Kind,
    nasal: bool,
}

impl Unit {
    fn new(phone: &str, kind: Kind) -> Self {
        Self {
            phone: phone.to_string(),
            kind,
            nasal: false,
        }
    }

    fn is_vowel(&self) -> bool {
        matches!(self.kind, Kind::Vowel | Kind::Schwa)
    }
}

fn parse(word: &str) -> Result<(Vec<Unit>, &'static Script)> {
    let mut units: Vec<Unit> = Vec::new();
    let mut script = None;
    let mut geminate = false;

    for c in word.chars() {
        if let Some(phone) = chillu(c) {
            units.push(Unit::new(phone, Kind::Consonant));
            continue;
        }
        let Some((s, off)) = script_of(c) else {
            // ZWJ, ZWNJ and stray punctuation
            continue;
        };
        let script = *script.get_or_insert(s);

        if let Some(phone) = consonant(off) {
            if std::mem::take(&mut geminate) {
                units.push(Unit::new(phone, Kind::Consonant));
            }
            units.push(Unit::new(phone, Kind::Consonant));
            units.push(Unit::new(script.inherent, Kind::Schwa));
            continue;
        }

        match off {
            0x05 => units.push(Unit::new(script.inherent, Kind::Vowel)),
            0x06..=0x14 | 0x3E..=0x4C => {
                let phones = vowel(off).unwrap_or(&[]);
                let is_sign = off >= 0x3E;
                if is_sign && units.last().map_or(false, |u| u.kind == Kind::Schwa) {
                    units.pop();
                }
                for (i, p) in phones.iter().enumerate() {
                    let kind = if i + 1 == phones.len() { Kind::Vowel } else { Kind::Consonant };
                    units.push(Unit::new(p, kind));
                }
            }
            // candrabindu
            0x01 => match units.last_mut() {
                Some(u) if u.is_vowel() => u.nasal = true,
                _ => units.push(Unit::new("n", Kind::Consonant)),
            },
            // anusvara, and Gurmukhi tippi
            0x02 | 0x70 => units.push(Unit::new("", Kind::Anusvara)),
            // visarga
            0x03 => units.push(Unit::new("h", Kind::Consonant)),
            // nukta
            0x3C => {
                let n = units.len();
                if n >= 2 && units[n - 1].kind == Kind::Schwa && units[n - 2].kind == Kind::Consonant {
                    let phone = with_nukta(&units[n - 2].phone).to_string();
                    units[n - 2].phone = phone;
                }
            }
            // virama
            0x4D => {
                if units.last().map_or(false, |u| u.kind == Kind::Schwa) {
                    units.pop();
                }
            }
            // Gurmukhi addak doubles the next consonant
            0x71 => geminate = true,
            // Tamil au length mark
            0x57 => {
                if let Some(u) = units.last_mut() {
                    if u.phone == "o" || u.phone == "oo" {
                        u.phone = "au".to_string();
                    }
                }
            }
            _ => {}
        }
    }

    match script {
        Some(s) => Ok((units, s)),
        None => Err(LexError::LetterToSound {
            word: word.to_string(),
            reason: "no Indic letters".to_string(),
        }),
    }
}

fn delete_schwas(units: &mut Vec<Unit>, deletion: SchwaDeletion) {
    if deletion == SchwaDeletion::None {
        return;
    }
    let deletable = |u: &Unit| u.kind == Kind::Schwa && !u.nasal;
    let consonant = |u: Option<&Unit>| u.map_or(false, |u| u.kind == Kind::Consonant);
    let vowel = |u: Option<&Unit>| u.map_or(false, |u| u.is_vowel());

    // Final schwa goes unless it is the only vowel or follows a cluster
    // ending in a semivowel (mitra, shunya)
    let n = units.len();
    if n >= 2 && deletable(&units[n - 1]) && units[n - 2].kind == Kind::Consonant {
        let cluster = n >= 3
            && units[n - 3].kind == Kind::Consonant
            && ["y", "r", "l", "v"].contains(&units[n - 2].phone.as_str());
        let other_vowel = units[..n - 1].iter().any(|u| u.is_vowel());
        if !cluster && other_vowel {
            units.pop();
        }
    }

    if deletion != SchwaDeletion::Full {
        return;
    }

    // V C [a] C V, right to left
    let mut i = units.len();
    while i > 0 {
        i -= 1;
        if i < 2 || !deletable(&units[i]) {
            continue;
        }
        if consonant(units.get(i - 1))
            && vowel(units.get(i - 2))
            && consonant(units.get(i + 1))
            && vowel(units.get(i + 2))
        {
            units.remove(i);
        }
    }
}

fn to_phones(units: &[Unit]) -> Vec<String> {
    let mut phones: Vec<String> = Vec::with_capacity(units.len());
    for (i, unit) in units.iter().enumerate() {
        match unit.kind {
            Kind::Anusvara => {
                let next = units[i + 1..].iter().find(|u| u.kind != Kind::Anusvara);
                match next.and_then(|u| homorganic(&u.phone)) {
                    Some(nasal) => phones.push(nasal.to_string()),
                    None => {
                        let prev_vowel = i > 0 && units[i - 1].is_vowel();
                        let nasalized = match phones.last_mut() {
                            Some(p) if prev_vowel && !p.ends_with('~') => {
                                p.push('~');
                                true
                            }
                            _ => false,
                        };
                        if !nasalized {
                            phones.push("m".to_string());
                        }
                    }
                }
            }
            _ if unit.nasal => phones.push(format!("{}~", unit.phone)),
            _ => phones.push(unit.phone.clone()),
        }
    }
    phones
}

/// Pronounce a word written in a Brahmic script
pub fn brahmic_to_phones(word: &str) -> Result<Vec<String>> {
    let (mut units, script) = parse(word)?;
    delete_schwas(&mut units, script.deletion);
    Ok(to_phones(&units))
}

/// English phone to the nearest Indic phone(s)
fn english_to_indic(phone: &str) -> &'static [&'static str] {
    match strip_stress(phone).0 {
        "aa" => &["aa"],
        "ae" => &["ae"],
        "ah" => &["a"],
        "ao" => &["ao"],
        "aw" => &["au"],
        "ay" => &["ai"],
        "eh" => &["e"],
        "er" => &["a", "r"],
        "ey" => &["ee"],
        "ih" => &["i"],
        "iy" => &["ii"],
        "ow" => &["oo"],
        "oy" => &["o", "i"],
        "uh" => &["u"],
        "uw" => &["uu"],
        "b" => &["b"],
        "ch" => &["c"],
        "d" => &["dd"],
        "dh" => &["d"],
        "f" => &["f"],
        "g" => &["g"],
        "hh" => &["h"],
        "jh" => &["j"],
        "k" => &["k"],
        "l" => &["l"],
        "m" => &["m"],
        "n" => &["n"],
        "ng" => &["ng"],
        "p" => &["p"],
        "r" => &["r"],
        "s" => &["s"],
        "sh" => &["sh"],
        "t" => &["tt"],
        "th" => &["th"],
        "v" => &["v"],
        "w" => &["v"],
        "y" => &["y"],
        "z" => &["z"],
        "zh" => &["sh"],
        _ => &[],
    }
}

/// Indic letter to sound; Latin script words go through an English
/// lexicon and are mapped onto Indic phones
pub struct IndicLts {
    english: Option<Arc<Lexicon>>,
}

impl IndicLts {
    pub fn new(english: Option<Arc<Lexicon>>) -> Self {
        Self { english }
    }
}

impl LetterToSound for IndicLts {
    fn predict(&self, word: &str) -> Result<Vec<String>> {
        let latin = word.chars().any(|c| c.is_ascii_alphabetic());
        let brahmic = word.chars().any(|c| script_of(c).is_some() || chillu(c).is_some());
        if brahmic || !latin {
            return brahmic_to_phones(word);
        }
        let english = self.english.as_ref().ok_or_else(|| LexError::LetterToSound {
            word: word.to_string(),
            reason: "no English lexicon for Latin script".to_string(),
        })?;
        let pron = english.lookup(word, None)?;
        Ok(pron
            .phones
            .iter()
            .flat_map(|p| english_to_indic(p).iter().map(|s| s.to_string()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn said(word: &str) -> String {
        brahmic_to_phones(word).unwrap().join(" ")
    }

    #[test]
    fn test_script_of() {
        assert_eq!(script_of('क').map(|(s, o)| (s.name, o)), Some(("devanagari", 0x15)));
        assert_eq!(script_of('க').map(|(s, _)| s.name), Some("tamil"));
        assert!(script_of('k').is_none());
        assert_eq!(digit_value('७'), Some(7));
        assert_eq!(digit_value('৩'), Some(3));
        assert_eq!(digit_value('4'), Some(4));
        assert_eq!(digit_value('क'), None);
    }

    #[test]
    fn test_final_schwa() {
        assert_eq!(said("राम"), "r aa m");
        assert_eq!(said("दिल"), "d i l");
        assert_eq!(said("कमल"), "k a m a l");
        // only vowel stays
        assert_eq!(said("क"), "k a");
        // cluster keeps it
        assert_eq!(said("मित्र"), "m i t r a");
    }

    #[test]
    fn test_medial_schwa() {
        assert_eq!(said("कमला"), "k a m l aa");
    }

    #[test]
    fn test_matras_and_virama() {
        assert_eq!(said("नमस्ते"), "n a m a s t ee");
        assert_eq!(said("हिंदी"), "h i n d ii");
    }

    #[test]
    fn test_nasals_and_nukta() {
        assert_eq!(said("पाँच"), "p aa~ c");
        assert_eq!(said("में"), "m ee~");
        assert_eq!(said("ज़रा"), "z a r aa");
        assert_eq!(said("फ़िल्म"), "f i l m");
    }

    #[test]
    fn test_scripts_without_deletion() {
        // Tamil keeps every inherent vowel
        assert_eq!(said("கமல"), "k a m a l a");
        // Bengali inherent vowel
        assert_eq!(said("কলম"), "k ao l ao m");
    }

    #[test]
    fn test_gurmukhi() {
        // addak doubles the next consonant
        assert_eq!(said("ਪੱਕਾ"), "p a k k aa");
        // tippi before a stop is homorganic
        assert_eq!(said("ਪੰਜਾਬ"), "p a nj j aa b");
        assert_eq!(said("ਕਮਲਾ"), "k a m l aa");
    }

    #[test]
    fn test_gujarati_medial_schwa() {
        assert_eq!(said("કમલા"), "k a m l aa");
    }

    #[test]
    fn test_visarga() {
        assert_eq!(said("दुःख"), "d u h kh");
    }

    #[test]
    fn test_oriya_keeps_inherent_ao() {
        assert_eq!(said("ମନ"), "m ao n ao");
    }

    #[test]
    fn test_malayalam_chillu() {
        assert_eq!(said("അവൻ"), "a v a n");
        assert_eq!(said("അവൾ"), "a v a ll");
    }

    #[test]
    fn test_phones_in_phoneset() {
        let ps = indic_phoneset();
        for word in ["नमस्ते", "ਪੰਜਾਬ", "ગુજરાત", "ଓଡ଼ିଆ", "తెలుగు", "ಕನ್ನಡ", "മലയാളം"] {
            let phones = brahmic_to_phones(word).unwrap();
            assert!(ps.validate(&phones).is_ok(), "{} -> {:?}", word, phones);
        }
    }

    #[test]
    fn test_latin_without_english() {
        let lts = IndicLts::new(None);
        assert!(lts.predict("hello").is_err());
        assert!(lts.predict("...").is_err());
    }
}
