//! Voices
//!
//! A `Voice` is the unit the rest of the crate configures: language init
//! functions fill in its features and text rules, lex init functions give
//! it a lexicon, and `text_to_utterance` runs the text analysis pipeline
//! over both.

pub mod config;
pub mod features;

pub use config::VoiceConfig;
pub use features::{FeatureValue, Features};

use crate::lang::{self, Language};
use crate::lexicon::{LexEntry, Lexicon, Pronunciation, PronunciationSource};
use crate::text::Tokenizer;
use crate::utterance::{BreakLevel, Phrase, Utterance, Word};
use crate::{LexError, Result};
use log::{debug, error, info};
use std::sync::Arc;

/// A configured synthesis voice
#[derive(Clone)]
pub struct Voice {
    pub name: String,
    features: Features,
    language: Option<Arc<dyn Language>>,
    lexicon: Option<Arc<Lexicon>>,
    /// Per-voice entries checked before the shared lexicon
    addenda: Vec<LexEntry>,
}

impl std::fmt::Debug for Voice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Voice")
            .field("name", &self.name)
            .field("language", &self.language.as_ref().map(|l| l.name().to_string()))
            .field("lexicon", &self.lexicon.as_ref().map(|l| l.name.clone()))
            .field("features", &self.features.len())
            .field("addenda", &self.addenda.len())
            .finish()
    }
}

impl Default for Voice {
    /// The US English "kal" voice
    fn default() -> Self {
        match Self::for_language("kal", "eng") {
            Ok(voice) => voice,
            Err(e) => {
                error!("Failed to build default voice: {}", e);
                Self::new("kal")
            }
        }
    }
}

impl Voice {
    /// An empty voice; nothing can be said until a language and lexicon are installed
    pub fn new(name: &str) -> Self {
        let mut features = Features::new();
        features.set_string("name", name);
        Self {
            name: name.to_string(),
            features,
            language: None,
            lexicon: None,
            addenda: Vec::new(),
        }
    }

    /// Build a voice for a registered language
    ///
    /// Runs the language's lang init on a fresh voice and installs the
    /// shared lexicon for that language.
    pub fn for_language(name: &str, language: &str) -> Result<Self> {
        let spec = lang::lookup(language)?;
        let mut voice = Self::new(name);
        (spec.lang_init)(&mut voice);
        voice.set_lexicon(lang::lexicon_for(language)?);
        info!(
            "Voice '{}' ready with language '{}'",
            name,
            voice.language_name().unwrap_or("none")
        );
        Ok(voice)
    }

    pub fn features(&self) -> &Features {
        &self.features
    }

    pub fn features_mut(&mut self) -> &mut Features {
        &mut self.features
    }

    pub fn install_language(&mut self, language: Arc<dyn Language>) {
        debug!("Voice '{}' installing language '{}'", self.name, language.name());
        self.language = Some(language);
    }

    pub fn language(&self) -> Option<&Arc<dyn Language>> {
        self.language.as_ref()
    }

    pub fn language_name(&self) -> Option<&str> {
        self.language.as_ref().map(|l| l.name())
    }

    pub fn set_lexicon(&mut self, lexicon: Arc<Lexicon>) {
        debug!("Voice '{}' using lexicon '{}'", self.name, lexicon.name);
        self.features.set_string("lexicon", &lexicon.name);
        self.lexicon = Some(lexicon);
    }

    pub fn lexicon(&self) -> Option<&Arc<Lexicon>> {
        self.lexicon.as_ref()
    }

    fn require_language(&self) -> Result<&Arc<dyn Language>> {
        self.language
            .as_ref()
            .ok_or_else(|| LexError::NoLanguage(self.name.clone()))
    }

    fn require_lexicon(&self) -> Result<&Arc<Lexicon>> {
        self.lexicon
            .as_ref()
            .ok_or_else(|| LexError::NoLexicon(self.name.clone()))
    }

    /// Add a voice-local lexicon entry
    pub fn add_addenda(&mut self, entry: LexEntry) -> Result<()> {
        self.require_lexicon()?.phoneset().validate(&entry.phones)?;
        self.addenda.push(entry);
        Ok(())
    }

    /// Pronounce one word through the voice addenda and then the lexicon
    pub fn lookup(&self, word: &str, pos: Option<&str>) -> Result<Pronunciation> {
        let lexicon = self.require_lexicon()?;
        let lower = word.to_lowercase();
        let local = self
            .addenda
            .iter()
            .rev()
            .filter(|e| e.word == lower)
            .find(|e| pos.is_none() || e.pos.is_none() || e.pos.as_deref() == pos);
        if let Some(entry) = local {
            let mut pron = lexicon.pronounce(entry.phones.clone());
            pron.source = PronunciationSource::Addenda;
            return Ok(pron);
        }
        lexicon.lookup(&lower, pos)
    }

    /// Run text analysis: tokens, words, phrases, pronunciations, segments
    pub fn text_to_utterance(&self, text: &str) -> Result<Utterance> {
        let language = self.require_language()?;
        let lexicon = self.require_lexicon()?;
        let mut utt = Utterance::new(text);

        utt.tokens = Tokenizer::from_features(&self.features).tokenize(text);
        debug!("Tokenized into {} tokens", utt.tokens.len());

        let mut phrase_start = 0;
        for (ti, token) in utt.tokens.iter().enumerate() {
            let next = utt.tokens.get(ti + 1);
            for tw in language.token_to_words(token, next) {
                let prev = utt.words.last().map(|w| w.name.as_str());
                let pos = tw
                    .pos
                    .or_else(|| language.part_of_speech(prev, &tw.name));
                utt.words.push(Word {
                    name: tw.name,
                    pos,
                    token: ti,
                    phrase: utt.phrases.len(),
                    syllables: Vec::new(),
                });
            }

            if let Some(level) = language.phrase_break(token) {
                if utt.words.len() > phrase_start {
                    utt.phrases.push(Phrase {
                        words: phrase_start..utt.words.len(),
                        break_level: level,
                    });
                    phrase_start = utt.words.len();
                }
            }
        }
        if utt.words.len() > phrase_start {
            utt.phrases.push(Phrase {
                words: phrase_start..utt.words.len(),
                break_level: BreakLevel::Major,
            });
        }

        for word in utt.words.iter_mut() {
            let pron = self.lookup(&word.name, word.pos.as_deref())?;
            word.syllables = pron.syllables;
        }

        language.post_lexical(&mut utt, lexicon.phoneset());

        let silence = self
            .features
            .get_string("silence", &lexicon.phoneset().silence);
        utt.build_segments(&silence);
        debug!(
            "Utterance: {} words, {} phrases, {} segments",
            utt.words.len(),
            utt.phrases.len(),
            utt.segments.len()
        );
        Ok(utt)
    }

    /// Segment names for a text, pauses included
    pub fn phones(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.text_to_utterance(text)?.segment_names())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_voice_errors() {
        let voice = Voice::new("blank");
        assert!(matches!(voice.text_to_utterance("hi"), Err(LexError::NoLanguage(_))));
        assert!(matches!(voice.lookup("hi", None), Err(LexError::NoLexicon(_))));
        assert_eq!(voice.features().get_string("name", ""), "blank");
    }

    #[test]
    fn test_default_voice() {
        let voice = Voice::default();
        assert_eq!(voice.name, "kal");
        assert_eq!(voice.language_name(), Some("usenglish"));
        assert_eq!(voice.lexicon().map(|l| l.name.as_str()), Some("cmu"));
        assert_eq!(
            voice.phones("Hello world.").unwrap(),
            vec!["pau", "hh", "ah", "l", "ow", "w", "er", "l", "d", "pau"]
        );
    }

    #[test]
    fn test_for_unknown_language() {
        assert!(matches!(
            Voice::for_language("v", "martian"),
            Err(LexError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_voice_addenda() {
        let mut voice = Voice::for_language("kal", "eng").unwrap();
        voice
            .add_addenda(LexEntry::new("flite", None, "f l ay1 t"))
            .unwrap();
        let pron = voice.lookup("Flite", None).unwrap();
        assert_eq!(pron.source, PronunciationSource::Addenda);
        assert_eq!(pron.syllables[0].phones, vec!["f", "l", "ay", "t"]);
        assert!(voice.add_addenda(LexEntry::new("bad", None, "q q")).is_err());
    }

    #[test]
    fn test_phrasing() {
        let voice = Voice::for_language("kal", "eng").unwrap();
        let utt = voice.text_to_utterance("Hello, world. Yes").unwrap();
        assert_eq!(utt.phrases.len(), 3);
        assert_eq!(utt.phrases[0].break_level, BreakLevel::Minor);
        assert_eq!(utt.phrases[1].break_level, BreakLevel::Major);
        let pauses = utt.segments.iter().filter(|s| s.is_pause()).count();
        assert_eq!(pauses, 4);
    }
}
