//! Utterance structure produced by text analysis
//!
//! An utterance holds the tokens read from the input text, the words they
//! expand to, the phrases those words are grouped into and finally the
//! segment (phone) stream. Indices link each level back to the one above.

use serde::Serialize;
use std::ops::Range;

/// A whitespace separated chunk of input text with its punctuation split off
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Token {
    pub name: String,
    pub whitespace: String,
    pub prepunctuation: String,
    pub punctuation: String,
}

impl Token {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// One syllable of a pronunciation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Syllable {
    pub phones: Vec<String>,
    /// 0 unstressed, 1 primary, 2 secondary
    pub stress: u8,
}

/// A word produced from a token
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Word {
    pub name: String,
    /// Part of speech tag, when the language assigned one
    pub pos: Option<String>,
    /// Index of the token this word came from
    pub token: usize,
    /// Index of the phrase this word belongs to
    pub phrase: usize,
    pub syllables: Vec<Syllable>,
}

impl Word {
    /// Flattened phone list of the word
    pub fn phones(&self) -> Vec<&str> {
        self.syllables
            .iter()
            .flat_map(|s| s.phones.iter().map(|p| p.as_str()))
            .collect()
    }
}

/// Strength of the break that closes a phrase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreakLevel {
    /// Minor break (comma, semicolon, colon)
    Minor,
    /// Major break (sentence end or end of input)
    Major,
}

/// A run of words spoken without an internal pause
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phrase {
    pub words: Range<usize>,
    pub break_level: BreakLevel,
}

/// A phone in the output stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub name: String,
    /// Word this segment belongs to; `None` for pauses
    pub word: Option<usize>,
    /// Syllable index within the word
    pub syllable: Option<usize>,
    pub stress: u8,
}

impl Segment {
    pub fn pause(name: &str) -> Self {
        Self {
            name: name.to_string(),
            word: None,
            syllable: None,
            stress: 0,
        }
    }

    pub fn is_pause(&self) -> bool {
        self.word.is_none()
    }
}

/// Full analysis of one input text
#[derive(Debug, Clone, Default, Serialize)]
pub struct Utterance {
    pub text: String,
    pub tokens: Vec<Token>,
    pub words: Vec<Word>,
    pub phrases: Vec<Phrase>,
    pub segments: Vec<Segment>,
}

impl Utterance {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    /// Segment names in order, pauses included
    pub fn segment_names(&self) -> Vec<String> {
        self.segments.iter().map(|s| s.name.clone()).collect()
    }

    /// Word names in order
    pub fn word_names(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.name.as_str()).collect()
    }

    /// Rebuild the segment stream from words and phrases
    ///
    /// Every phrase is preceded by a pause, and the utterance ends with one.
    pub fn build_segments(&mut self, silence: &str) {
        let mut segments = Vec::new();
        for phrase in &self.phrases {
            segments.push(Segment::pause(silence));
            for wi in phrase.words.clone() {
                let word = &self.words[wi];
                for (si, syl) in word.syllables.iter().enumerate() {
                    for phone in &syl.phones {
                        segments.push(Segment {
                            name: phone.clone(),
                            word: Some(wi),
                            syllable: Some(si),
                            stress: syl.stress,
                        });
                    }
                }
            }
        }
        segments.push(Segment::pause(silence));
        self.segments = segments;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(name: &str, phones: &[&str], phrase: usize) -> Word {
        Word {
            name: name.to_string(),
            pos: None,
            token: 0,
            phrase,
            syllables: vec![Syllable {
                phones: phones.iter().map(|p| p.to_string()).collect(),
                stress: 1,
            }],
        }
    }

    #[test]
    fn test_build_segments() {
        let mut utt = Utterance::new("hi, yo");
        utt.words = vec![word("hi", &["hh", "ay"], 0), word("yo", &["y", "ow"], 1)];
        utt.phrases = vec![
            Phrase { words: 0..1, break_level: BreakLevel::Minor },
            Phrase { words: 1..2, break_level: BreakLevel::Major },
        ];
        utt.build_segments("pau");

        assert_eq!(
            utt.segment_names(),
            vec!["pau", "hh", "ay", "pau", "y", "ow", "pau"]
        );
        assert!(utt.segments[0].is_pause());
        assert_eq!(utt.segments[4].word, Some(1));
        assert_eq!(utt.segments[4].stress, 1);
    }

    #[test]
    fn test_empty_utterance_is_single_pause() {
        let mut utt = Utterance::new("");
        utt.build_segments("pau");
        assert_eq!(utt.segment_names(), vec!["pau"]);
    }
}
