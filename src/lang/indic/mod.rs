//! Indic languages
//!
//! One language module covers Hindi, Bengali, Punjabi, Gujarati, Odia,
//! Tamil, Telugu, Kannada and Malayalam text. The lexicon reads the script
//! directly; Latin script words are looked up in the English lexicon and
//! mapped onto Indic phones.

pub mod lex;

use super::{Language, TokenWord};
use crate::lexicon::syllable::MaxOnset;
use crate::lexicon::Lexicon;
use crate::text::tokenizer::{DEFAULT_POSTPUNCTUATION, DEFAULT_PREPUNCTUATION, DEFAULT_WHITESPACE};
use crate::utterance::Token;
use crate::voice::Voice;
use crate::Result;
use lex::{digit_value, indic_phoneset, IndicLts};
use log::{debug, info, warn};
use std::sync::Arc;

/// Hindi names of the digits 0-9
pub const DIGIT_NAMES: [&str; 10] = [
    "शून्य", "एक", "दो", "तीन", "चार", "पाँच", "छह", "सात", "आठ", "नौ",
];

/// Danda and double danda close sentences
pub const INDIC_POSTPUNCTUATION: &str = "।॥";

/// Indic text rules
#[derive(Debug, Default)]
pub struct Indic;

impl Language for Indic {
    fn name(&self) -> &str {
        "cmu_indic_lang"
    }

    /// Digits are read one at a time; everything else is a single word
    fn token_to_words(&self, token: &Token, _next: Option<&Token>) -> Vec<TokenWord> {
        let mut words = Vec::new();
        let mut run = String::new();
        for c in token.name.chars() {
            match digit_value(c) {
                Some(d) => {
                    if !run.is_empty() {
                        words.push(TokenWord::plain(&std::mem::take(&mut run)));
                    }
                    words.push(TokenWord::plain(DIGIT_NAMES[d as usize]));
                }
                None if c.is_alphanumeric() || is_mark(c) => run.extend(c.to_lowercase()),
                None => {
                    if !run.is_empty() {
                        words.push(TokenWord::plain(&std::mem::take(&mut run)));
                    }
                }
            }
        }
        if !run.is_empty() {
            words.push(TokenWord::plain(&run));
        }
        words
    }
}

/// Combining signs (matras, virama, nukta) and the zero width joiners
pub(crate) fn is_mark(c: char) -> bool {
    matches!(c, '\u{200C}' | '\u{200D}')
        || lex::script_of(c).map_or(false, |(_, off)| {
            matches!(off, 0x01..=0x03 | 0x3C..=0x4D | 0x57 | 0x70 | 0x71)
        })
}

/// Configure a voice for Indic text
pub fn cmu_indic_lang_init(v: &mut Voice) {
    debug!("cmu_indic_lang_init for voice '{}'", v.name);
    let feats = v.features_mut();
    feats.set_string("language", "cmu_indic_lang");
    feats.set_string("phoneset", "cmu_indic");
    feats.set_string("silence", "pau");

    feats.set_string("text_whitespace", DEFAULT_WHITESPACE);
    feats.set_string("text_prepunctuation", DEFAULT_PREPUNCTUATION);
    feats.set_string(
        "text_postpunctuation",
        &format!("{}{}", DEFAULT_POSTPUNCTUATION, INDIC_POSTPUNCTUATION),
    );
    feats.set_string("text_singlecharsymbols", "");

    feats.set_int("int_f0_target_mean", 110);
    feats.set_int("int_f0_target_stddev", 15);
    feats.set_float("duration_stretch", 1.0);

    v.install_language(Arc::new(Indic));
}

/// Build the Indic lexicon
///
/// There are no compiled entries: every word goes through the script
/// rules. Words in any other script are read by the grapheme lexicon.
/// When the English lexicon cannot be built, Latin script words go to the
/// grapheme lexicon too.
pub fn cmu_indic_lex_init() -> Result<Lexicon> {
    let english = match super::lexicon_for("eng") {
        Ok(lex) => Some(lex),
        Err(e) => {
            warn!("cmu_indic_lex: no English lexicon for Latin words: {}", e);
            None
        }
    };
    let mut lexicon = Lexicon::new("cmu_indic", Arc::new(indic_phoneset()))
        .with_lts(Box::new(IndicLts::new(english)))
        .with_syllabifier(Box::new(MaxOnset::new()));
    match super::lexicon_for("cmu_grapheme_lang") {
        Ok(grapheme) => lexicon = lexicon.with_fallback(grapheme),
        Err(e) => warn!("cmu_indic_lex: no grapheme fallback: {}", e),
    }
    info!("cmu_indic_lex ready");
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::PronunciationSource;

    fn words(text: &str) -> Vec<String> {
        Indic
            .token_to_words(&Token::new(text), None)
            .into_iter()
            .map(|w| w.name)
            .collect()
    }

    #[test]
    fn test_digits_spoken_singly() {
        assert_eq!(words("४२"), vec!["चार", "दो"]);
        assert_eq!(words("10"), vec!["एक", "शून्य"]);
        assert_eq!(words("कक्षा5"), vec!["कक्षा", "पाँच"]);
    }

    #[test]
    fn test_words_keep_signs() {
        assert_eq!(words("नमस्ते"), vec!["नमस्ते"]);
        assert_eq!(words("Hello"), vec!["hello"]);
        assert_eq!(words("a-b"), vec!["a", "b"]);
    }

    #[test]
    fn test_init_sets_features() {
        let mut voice = Voice::new("hin");
        cmu_indic_lang_init(&mut voice);
        let feats = voice.features();
        assert_eq!(feats.get_string("language", ""), "cmu_indic_lang");
        assert!(feats.get_string("text_postpunctuation", "").contains('।'));
        assert_eq!(voice.language_name(), Some("cmu_indic_lang"));
    }

    #[test]
    fn test_lexicon() {
        let lex = cmu_indic_lex_init().unwrap();
        assert_eq!(lex.entry_count(), 0);
        let pron = lex.lookup("नमस्ते", None).unwrap();
        assert_eq!(pron.phones.join(" "), "n a m a s t ee");
        assert_eq!(pron.syllables.len(), 3);
        // Latin words through English
        let pron = lex.lookup("hello", None).unwrap();
        assert_eq!(pron.phones.join(" "), "h a l oo");
        // Other scripts are read letter by letter
        let pron = lex.lookup("мир", None).unwrap();
        assert_eq!(pron.source, PronunciationSource::Fallback);
        assert_eq!(pron.phones.join(" "), "m i r");
    }

    #[test]
    fn test_danda_breaks() {
        let mut tok = Token::new("नमस्ते");
        tok.punctuation = "।".to_string();
        assert_eq!(Indic.phrase_break(&tok), Some(crate::utterance::BreakLevel::Major));
    }
}
