//! Text tokenizer
//!
//! Splits input text into tokens on whitespace and peels leading and
//! trailing punctuation off each token. The character classes come from
//! voice features so each language decides what counts as punctuation.

use crate::utterance::Token;
use crate::voice::Features;

pub const DEFAULT_WHITESPACE: &str = " \t\n\r";
pub const DEFAULT_PREPUNCTUATION: &str = "\"'`({[";
pub const DEFAULT_POSTPUNCTUATION: &str = "\"'`.,:;!?(){}[]";

/// Character classes used to split text
#[derive(Debug, Clone)]
pub struct Tokenizer {
    whitespace: String,
    prepunctuation: String,
    postpunctuation: String,
    singlecharsymbols: String,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_WHITESPACE, DEFAULT_PREPUNCTUATION, DEFAULT_POSTPUNCTUATION, "")
    }
}

impl Tokenizer {
    pub fn new(whitespace: &str, prepunctuation: &str, postpunctuation: &str, singlecharsymbols: &str) -> Self {
        Self {
            whitespace: whitespace.to_string(),
            prepunctuation: prepunctuation.to_string(),
            postpunctuation: postpunctuation.to_string(),
            singlecharsymbols: singlecharsymbols.to_string(),
        }
    }

    /// Build from `text_whitespace`, `text_prepunctuation`,
    /// `text_postpunctuation` and `text_singlecharsymbols`
    pub fn from_features(features: &Features) -> Self {
        Self::new(
            &features.get_string("text_whitespace", DEFAULT_WHITESPACE),
            &features.get_string("text_prepunctuation", DEFAULT_PREPUNCTUATION),
            &features.get_string("text_postpunctuation", DEFAULT_POSTPUNCTUATION),
            &features.get_string("text_singlecharsymbols", ""),
        )
    }

    fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(c)
    }

    fn is_singlechar(&self, c: char) -> bool {
        self.singlecharsymbols.contains(c)
    }

    /// Split text into tokens
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = text.chars().peekable();

        loop {
            let mut whitespace = String::new();
            while let Some(&c) = chars.peek() {
                if !self.is_whitespace(c) {
                    break;
                }
                whitespace.push(c);
                chars.next();
            }

            let mut raw = String::new();
            while let Some(&c) = chars.peek() {
                if self.is_whitespace(c) {
                    break;
                }
                if self.is_singlechar(c) {
                    if raw.is_empty() {
                        raw.push(c);
                        chars.next();
                    }
                    break;
                }
                raw.push(c);
                chars.next();
            }

            if raw.is_empty() {
                break;
            }
            tokens.push(self.split_punctuation(&raw, whitespace));
        }

        tokens
    }

    fn split_punctuation(&self, raw: &str, whitespace: String) -> Token {
        let pre_len: usize = raw
            .chars()
            .take_while(|&c| self.prepunctuation.contains(c))
            .map(|c| c.len_utf8())
            .sum();
        let rest = &raw[pre_len..];
        let post_len: usize = rest
            .chars()
            .rev()
            .take_while(|&c| self.postpunctuation.contains(c))
            .map(|c| c.len_utf8())
            .sum();
        let name = &rest[..rest.len() - post_len];

        if name.is_empty() {
            // All punctuation: keep it as punctuation so phrasing sees it
            return Token {
                name: String::new(),
                whitespace,
                prepunctuation: String::new(),
                punctuation: raw.to_string(),
            };
        }

        Token {
            name: name.to_string(),
            whitespace,
            prepunctuation: raw[..pre_len].to_string(),
            punctuation: rest[rest.len() - post_len..].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_split() {
        let tokens = Tokenizer::default().tokenize("  Hello, (big) world!");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].name, "Hello");
        assert_eq!(tokens[0].whitespace, "  ");
        assert_eq!(tokens[0].punctuation, ",");
        assert_eq!(tokens[1].name, "big");
        assert_eq!(tokens[1].prepunctuation, "(");
        assert_eq!(tokens[1].punctuation, ")");
        assert_eq!(tokens[2].punctuation, "!");
    }

    #[test]
    fn test_punctuation_only() {
        let tokens = Tokenizer::default().tokenize("yes ... no");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].name, "");
        assert_eq!(tokens[1].punctuation, "...");
    }

    #[test]
    fn test_inner_punctuation_kept() {
        let tokens = Tokenizer::default().tokenize("3.14 don't");
        assert_eq!(tokens[0].name, "3.14");
        assert_eq!(tokens[1].name, "don't");
    }

    #[test]
    fn test_single_char_symbols() {
        let tok = Tokenizer::new(DEFAULT_WHITESPACE, "", "", "-");
        let names: Vec<_> = tok.tokenize("a-b -").into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["a", "-", "b", "-"]);
    }

    #[test]
    fn test_non_ascii_punctuation() {
        let tok = Tokenizer::new(DEFAULT_WHITESPACE, "", "।", "");
        let tokens = tok.tokenize("नमस्ते।");
        assert_eq!(tokens[0].name, "नमस्ते");
        assert_eq!(tokens[0].punctuation, "।");
        assert!(tok.tokenize("   ").is_empty());
    }
}
