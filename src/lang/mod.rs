//! Language modules and the language registry
//!
//! Each language supplies two init functions: a lang init that configures
//! a voice in place (features plus the `Language` text rules) and a lex
//! init that builds the matching lexicon. The registry maps language
//! names to those pairs and shares one built lexicon between every voice
//! that asks for it.

pub mod cmulex;
pub mod grapheme;
pub mod indic;
pub mod usenglish;

use crate::lexicon::phoneset::Phoneset;
use crate::lexicon::Lexicon;
use crate::utterance::{BreakLevel, Token, Utterance};
use crate::voice::Voice;
use crate::{LexError, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Sentence final punctuation
pub const MAJOR_BREAK_CHARS: &str = ".?!।॥";
/// Clause punctuation
pub const MINOR_BREAK_CHARS: &str = ",;:";

/// A word produced by token expansion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenWord {
    pub name: String,
    pub pos: Option<String>,
}

impl TokenWord {
    pub fn plain(name: &str) -> Self {
        Self {
            name: name.to_string(),
            pos: None,
        }
    }

    /// A spelled out letter
    pub fn letter(ch: char) -> Self {
        Self {
            name: ch.to_lowercase().to_string(),
            pos: Some("letter".to_string()),
        }
    }
}

/// Language specific text rules installed on a voice by its lang init
pub trait Language: Send + Sync {
    fn name(&self) -> &str;

    /// Expand a token into words
    fn token_to_words(&self, token: &Token, next: Option<&Token>) -> Vec<TokenWord>;

    /// Guess a part of speech for a word from the word before it
    fn part_of_speech(&self, _prev: Option<&str>, _word: &str) -> Option<String> {
        None
    }

    /// Does this token close a phrase
    fn phrase_break(&self, token: &Token) -> Option<BreakLevel> {
        if token.punctuation.chars().any(|c| MAJOR_BREAK_CHARS.contains(c)) {
            Some(BreakLevel::Major)
        } else if token.punctuation.chars().any(|c| MINOR_BREAK_CHARS.contains(c)) {
            Some(BreakLevel::Minor)
        } else {
            None
        }
    }

    /// Rewrite pronunciations in context once every word has been looked up
    fn post_lexical(&self, _utt: &mut Utterance, _phoneset: &Phoneset) {}
}

/// Configures a voice in place
pub type LangInit = fn(&mut Voice);
/// Builds a lexicon
pub type LexInit = fn() -> Result<Lexicon>;

/// A registered language
#[derive(Clone)]
pub struct LanguageSpec {
    pub name: String,
    pub lang_init: LangInit,
    pub lex_init: LexInit,
}

impl std::fmt::Debug for LanguageSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageSpec").field("name", &self.name).finish()
    }
}

/// Name -> (lang init, lex init) table with a lexicon cache
#[derive(Default)]
pub struct LanguageRegistry {
    specs: Vec<LanguageSpec>,
    /// Built lexicons keyed by lex init function
    lexicons: HashMap<usize, Arc<Lexicon>>,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in languages
    pub fn with_defaults() -> Self {
        let mut reg = Self::new();
        reg.add_lang("eng", usenglish::usenglish_init, cmulex::cmulex_init);
        reg.add_lang("usenglish", usenglish::usenglish_init, cmulex::cmulex_init);
        reg.add_lang("cmu_indic_lang", indic::cmu_indic_lang_init, indic::cmu_indic_lex_init);
        reg.add_lang("indic", indic::cmu_indic_lang_init, indic::cmu_indic_lex_init);
        reg.add_lang("cmu_grapheme_lang", grapheme::cmu_grapheme_lang_init, grapheme::cmu_grapheme_lex_init);
        reg.add_lang("grapheme", grapheme::cmu_grapheme_lang_init, grapheme::cmu_grapheme_lex_init);
        reg
    }

    /// Register a language, replacing any existing one of the same name
    pub fn add_lang(&mut self, name: &str, lang_init: LangInit, lex_init: LexInit) {
        debug!("Registering language '{}'", name);
        let spec = LanguageSpec {
            name: name.to_string(),
            lang_init,
            lex_init,
        };
        match self.specs.iter_mut().find(|s| s.name == name) {
            Some(slot) => *slot = spec,
            None => self.specs.push(spec),
        }
    }

    pub fn lookup(&self, name: &str) -> Result<LanguageSpec> {
        self.specs
            .iter()
            .find(|s| s.name == name)
            .cloned()
            .ok_or_else(|| LexError::UnknownLanguage(name.to_string()))
    }

    pub fn languages(&self) -> Vec<String> {
        self.specs.iter().map(|s| s.name.clone()).collect()
    }

    fn cached(&self, spec: &LanguageSpec) -> Option<Arc<Lexicon>> {
        self.lexicons.get(&(spec.lex_init as usize)).cloned()
    }

    fn store(&mut self, spec: &LanguageSpec, lexicon: Lexicon) -> Arc<Lexicon> {
        self.lexicons
            .entry(spec.lex_init as usize)
            .or_insert_with(|| Arc::new(lexicon))
            .clone()
    }
}

static REGISTRY: Lazy<RwLock<LanguageRegistry>> = Lazy::new(|| {
    info!("Initializing language registry");
    RwLock::new(LanguageRegistry::with_defaults())
});

/// Register a language in the global registry
pub fn add_lang(name: &str, lang_init: LangInit, lex_init: LexInit) {
    REGISTRY
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .add_lang(name, lang_init, lex_init);
}

/// Find a language in the global registry
pub fn lookup(name: &str) -> Result<LanguageSpec> {
    REGISTRY.read().unwrap_or_else(|e| e.into_inner()).lookup(name)
}

/// Names of all registered languages
pub fn languages() -> Vec<String> {
    REGISTRY.read().unwrap_or_else(|e| e.into_inner()).languages()
}

/// Shared lexicon for a registered language, built on first use
pub fn lexicon_for(name: &str) -> Result<Arc<Lexicon>> {
    let spec = lookup(name)?;
    if let Some(lex) = REGISTRY.read().unwrap_or_else(|e| e.into_inner()).cached(&spec) {
        return Ok(lex);
    }

    // Build without holding the lock; lex inits may ask for other lexicons
    info!("Building lexicon for language '{}'", name);
    let lexicon = (spec.lex_init)()?;
    Ok(REGISTRY
        .write()
        .unwrap_or_else(|e| e.into_inner())
        .store(&spec, lexicon))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_lang(_v: &mut Voice) {}

    fn failing_lex() -> Result<Lexicon> {
        Err(LexError::Other("no data".into()))
    }

    #[test]
    fn test_defaults_registered() {
        let reg = LanguageRegistry::with_defaults();
        for name in ["eng", "usenglish", "cmu_indic_lang", "cmu_grapheme_lang"] {
            assert!(reg.lookup(name).is_ok(), "{} missing", name);
        }
        assert!(matches!(reg.lookup("klingon"), Err(LexError::UnknownLanguage(_))));
    }

    #[test]
    fn test_add_lang_replaces() {
        let mut reg = LanguageRegistry::new();
        reg.add_lang("x", noop_lang, failing_lex);
        reg.add_lang("x", noop_lang, cmulex::cmulex_init);
        assert_eq!(reg.languages(), vec!["x"]);
    }

    #[test]
    fn test_global_lexicon_shared() {
        let a = lexicon_for("eng").unwrap();
        let b = lexicon_for("usenglish").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_global_failing_lex_init() {
        add_lang("test_failing_lang", noop_lang, failing_lex);
        assert!(languages().contains(&"test_failing_lang".to_string()));
        assert!(lexicon_for("test_failing_lang").is_err());
    }

    #[test]
    fn test_default_phrase_break() {
        struct Plain;
        impl Language for Plain {
            fn name(&self) -> &str {
                "plain"
            }
            fn token_to_words(&self, token: &Token, _next: Option<&Token>) -> Vec<TokenWord> {
                vec![TokenWord::plain(&token.name)]
            }
        }
        let mut tok = Token::new("end");
        tok.punctuation = "\".".to_string();
        assert_eq!(Plain.phrase_break(&tok), Some(BreakLevel::Major));
        tok.punctuation = ",".to_string();
        assert_eq!(Plain.phrase_break(&tok), Some(BreakLevel::Minor));
        tok.punctuation = ")".to_string();
        assert_eq!(Plain.phrase_break(&tok), None);
    }
}
