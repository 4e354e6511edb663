//! Grapheme based language for scripts without a dedicated module
//!
//! Text rules only split tokens into letter runs. The lexicon says each
//! letter as one phone, which is crude but covers any script.

pub mod lex;

use super::indic::INDIC_POSTPUNCTUATION;
use super::{Language, TokenWord, MAJOR_BREAK_CHARS, MINOR_BREAK_CHARS};
use crate::lexicon::syllable::MaxOnset;
use crate::lexicon::Lexicon;
use crate::text::tokenizer::{DEFAULT_POSTPUNCTUATION, DEFAULT_PREPUNCTUATION, DEFAULT_WHITESPACE};
use crate::utterance::{BreakLevel, Token};
use crate::voice::Voice;
use crate::Result;
use lex::{grapheme_phoneset, GraphemeLts};
use log::{debug, info};
use std::sync::Arc;

/// Sentence and clause punctuation of other scripts
const EXTRA_MAJOR: &str = "。！？؟";
const EXTRA_MINOR: &str = "、，،؛";

/// Grapheme text rules
#[derive(Debug, Default)]
pub struct Grapheme;

impl Language for Grapheme {
    fn name(&self) -> &str {
        "cmu_grapheme_lang"
    }

    fn token_to_words(&self, token: &Token, _next: Option<&Token>) -> Vec<TokenWord> {
        token
            .name
            .split(|c: char| !(c.is_alphanumeric() || is_combining(c)))
            .filter(|w| !w.is_empty())
            .map(|w| TokenWord::plain(&w.to_lowercase()))
            .collect()
    }

    fn phrase_break(&self, token: &Token) -> Option<BreakLevel> {
        let p = &token.punctuation;
        if p.chars().any(|c| MAJOR_BREAK_CHARS.contains(c) || EXTRA_MAJOR.contains(c)) {
            Some(BreakLevel::Major)
        } else if p.chars().any(|c| MINOR_BREAK_CHARS.contains(c) || EXTRA_MINOR.contains(c)) {
            Some(BreakLevel::Minor)
        } else {
            None
        }
    }
}

/// Combining diacritics and Indic style vowel signs stay inside words
fn is_combining(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F | 0x0DCA..=0x0DDF | 0x0E30..=0x0E4E)
        || super::indic::is_mark(c)
}

/// Configure a voice for grapheme based synthesis
pub fn cmu_grapheme_lang_init(v: &mut Voice) {
    debug!("cmu_grapheme_lang_init for voice '{}'", v.name);
    let feats = v.features_mut();
    feats.set_string("language", "cmu_grapheme_lang");
    feats.set_string("phoneset", "cmu_grapheme");
    feats.set_string("silence", "pau");

    feats.set_string("text_whitespace", DEFAULT_WHITESPACE);
    feats.set_string("text_prepunctuation", &format!("{}¿¡«", DEFAULT_PREPUNCTUATION));
    feats.set_string(
        "text_postpunctuation",
        &format!(
            "{}»{}{}{}",
            DEFAULT_POSTPUNCTUATION, EXTRA_MAJOR, EXTRA_MINOR, INDIC_POSTPUNCTUATION
        ),
    );
    feats.set_string("text_singlecharsymbols", "");

    feats.set_int("int_f0_target_mean", 100);
    feats.set_int("int_f0_target_stddev", 12);
    feats.set_float("duration_stretch", 1.0);

    v.install_language(Arc::new(Grapheme));
}

/// Build the grapheme lexicon
pub fn cmu_grapheme_lex_init() -> Result<Lexicon> {
    let lexicon = Lexicon::new("cmu_grapheme", Arc::new(grapheme_phoneset()))
        .with_lts(Box::new(GraphemeLts))
        .with_syllabifier(Box::new(MaxOnset::new()));
    info!("cmu_grapheme_lex ready");
    Ok(lexicon)
}
