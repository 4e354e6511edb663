//! lexvoice - language and lexicon modules for text-to-speech voices
//!
//! Turns text into the phone sequence a synthesizer would speak. Language
//! modules configure a `Voice` (US English, Indic scripts, and a grapheme
//! fallback for anything else) and lexicon modules build the matching
//! pronunciation dictionaries.

pub mod error;
pub mod lang;
pub mod lexicon;
pub mod text;
pub mod utterance;
pub mod voice;

pub use error::{LexError, Result};
pub use lexicon::Lexicon;
pub use utterance::Utterance;
pub use voice::Voice;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "lexvoice";
