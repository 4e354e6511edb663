//! Error types for lexvoice

use std::io;
use thiserror::Error;

/// Main error type for lexvoice
#[derive(Error, Debug)]
pub enum LexError {
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Voice '{0}' has no lexicon")]
    NoLexicon(String),

    #[error("Voice '{0}' has no language")]
    NoLanguage(String),

    #[error("Letter to sound failed for '{word}': {reason}")]
    LetterToSound { word: String, reason: String },

    #[error("Phone '{phone}' is not in phoneset '{phoneset}'")]
    InvalidPhone { phone: String, phoneset: String },

    #[error("Invalid lexicon entry: {0}")]
    InvalidEntry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for lexvoice operations
pub type Result<T> = std::result::Result<T, LexError>;

impl From<String> for LexError {
    fn from(s: String) -> Self {
        LexError::Other(s)
    }
}

impl From<&str> for LexError {
    fn from(s: &str) -> Self {
        LexError::Other(s.to_string())
    }
}
