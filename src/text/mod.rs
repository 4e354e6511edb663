//! Text handling shared by all languages

pub mod symbols;
pub mod tokenizer;

pub use symbols::{condense_repeated_chars, symbol_name, SYMBOL_NAMES};
pub use tokenizer::Tokenizer;
