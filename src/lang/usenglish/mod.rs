//! US English language rules
//!
//! `usenglish_init` configures a voice for US English: tokenizer classes,
//! phoneset and prosodic targets go into the voice features, and the
//! `UsEnglish` text rules are installed. Pair it with `cmulex_init`.

pub mod numbers;
pub mod postlex;
pub mod tokentowords;

use super::{Language, TokenWord};
use crate::lexicon::phoneset::Phoneset;
use crate::text::tokenizer::{DEFAULT_POSTPUNCTUATION, DEFAULT_PREPUNCTUATION, DEFAULT_WHITESPACE};
use crate::utterance::{BreakLevel, Token, Utterance};
use crate::voice::Voice;
use log::debug;
use std::sync::Arc;

/// Words after which the next word is probably a verb
const VERB_CONTEXT: [&str; 12] = [
    "to", "will", "would", "can", "could", "should", "must", "i", "you", "we", "they", "don't",
];
/// Words after which the next word is probably a past participle
const PARTICIPLE_CONTEXT: [&str; 7] = ["have", "has", "had", "was", "were", "been", "is"];
/// Determiners; the next word is probably a noun or adjective
const NOUN_CONTEXT: [&str; 10] = ["the", "a", "an", "my", "your", "his", "her", "this", "that", "our"];

/// US English text rules
#[derive(Debug, Default)]
pub struct UsEnglish;

impl Language for UsEnglish {
    fn name(&self) -> &str {
        "usenglish"
    }

    fn token_to_words(&self, token: &Token, next: Option<&Token>) -> Vec<TokenWord> {
        tokentowords::token_to_words(token, next)
    }

    fn part_of_speech(&self, prev: Option<&str>, _word: &str) -> Option<String> {
        let prev = prev?;
        if VERB_CONTEXT.contains(&prev) {
            Some("v".to_string())
        } else if PARTICIPLE_CONTEXT.contains(&prev) {
            Some("vbd".to_string())
        } else if NOUN_CONTEXT.contains(&prev) {
            Some("n".to_string())
        } else {
            None
        }
    }

    fn phrase_break(&self, token: &Token) -> Option<BreakLevel> {
        // "Dr. Smith" is not a sentence end
        if token.punctuation == "." && tokentowords::is_abbreviation(&token.name) {
            return None;
        }
        if token.punctuation.chars().any(|c| ".?!".contains(c)) {
            Some(BreakLevel::Major)
        } else if token.punctuation.chars().any(|c| ",;:".contains(c)) {
            Some(BreakLevel::Minor)
        } else {
            None
        }
    }

    fn post_lexical(&self, utt: &mut Utterance, phoneset: &Phoneset) {
        postlex::apply(utt, phoneset);
    }
}

/// Configure a voice for US English
pub fn usenglish_init(v: &mut Voice) {
    debug!("usenglish_init for voice '{}'", v.name);
    let feats = v.features_mut();
    feats.set_string("language", "usenglish");
    feats.set_string("phoneset", "cmu");
    feats.set_string("silence", "pau");

    feats.set_string("text_whitespace", DEFAULT_WHITESPACE);
    feats.set_string("text_prepunctuation", DEFAULT_PREPUNCTUATION);
    feats.set_string("text_postpunctuation", DEFAULT_POSTPUNCTUATION);
    feats.set_string("text_singlecharsymbols", "");

    feats.set_int("int_f0_target_mean", 95);
    feats.set_int("int_f0_target_stddev", 11);
    feats.set_float("duration_stretch", 1.0);

    v.install_language(Arc::new(UsEnglish));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_sets_features() {
        let mut voice = Voice::new("kal");
        usenglish_init(&mut voice);
        let feats = voice.features();
        assert_eq!(feats.get_string("language", ""), "usenglish");
        assert_eq!(feats.get_string("silence", ""), "pau");
        assert_eq!(feats.get_int("int_f0_target_mean", 0), 95);
        assert_eq!(voice.language_name(), Some("usenglish"));
        // Language only; lexicon comes from cmulex_init
        assert!(voice.lexicon().is_none());
    }

    #[test]
    fn test_abbreviation_not_a_break() {
        let mut tok = Token::new("Dr");
        tok.punctuation = ".".to_string();
        assert_eq!(UsEnglish.phrase_break(&tok), None);
        tok.name = "done".to_string();
        assert_eq!(UsEnglish.phrase_break(&tok), Some(BreakLevel::Major));
    }

    #[test]
    fn test_part_of_speech() {
        assert_eq!(UsEnglish.part_of_speech(Some("to"), "read").as_deref(), Some("v"));
        assert_eq!(UsEnglish.part_of_speech(Some("had"), "read").as_deref(), Some("vbd"));
        assert_eq!(UsEnglish.part_of_speech(Some("the"), "record").as_deref(), Some("n"));
        assert_eq!(UsEnglish.part_of_speech(None, "read"), None);
    }
}
