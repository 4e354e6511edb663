//! Symbol names for speech
//!
//! - `SYMBOL_NAMES`: how a lone symbol character is read out ("&" -> "and")
//! - `condense_repeated_chars`: converts runs like "====" into "4 equals"
//!
//! US English token expansion uses both when a token is not a word.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Spoken names for symbol characters
pub static SYMBOL_NAMES: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert('!', "exclamation");
    m.insert('"', "quote");
    m.insert('#', "hash");
    m.insert('$', "dollar");
    m.insert('%', "percent");
    m.insert('&', "and");
    m.insert('\'', "apostrophe");
    m.insert('(', "left paren");
    m.insert(')', "right paren");
    m.insert('*', "asterisk");
    m.insert('+', "plus");
    m.insert(',', "comma");
    m.insert('-', "dash");
    m.insert('.', "dot");
    m.insert('/', "slash");
    m.insert(':', "colon");
    m.insert(';', "semicolon");
    m.insert('<', "less than");
    m.insert('=', "equals");
    m.insert('>', "greater than");
    m.insert('?', "question mark");
    m.insert('@', "at");
    m.insert('[', "left bracket");
    m.insert('\\', "backslash");
    m.insert(']', "right bracket");
    m.insert('^', "caret");
    m.insert('_', "underscore");
    m.insert('`', "backquote");
    m.insert('{', "left brace");
    m.insert('|', "bar");
    m.insert('}', "right brace");
    m.insert('~', "tilde");
    m
});

/// Spoken name of a symbol, if it has one
pub fn symbol_name(ch: char) -> Option<&'static str> {
    SYMBOL_NAMES.get(&ch).copied()
}

/// Replace repeated characters with count + character name
/// e.g., "====" becomes "4 equals"
pub fn condense_repeated_chars(
    text: &str,
    chars_to_condense: &str,
    symbols: &HashMap<char, &str>,
) -> String {
    if chars_to_condense.is_empty() || text.is_empty() {
        return text.to_string();
    }

    // No backreferences in the regex crate, so count runs by hand
    let condense_set: std::collections::HashSet<char> = chars_to_condense.chars().collect();

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if !condense_set.contains(&ch) {
            result.push(ch);
            continue;
        }

        let mut count = 1;
        while chars.peek() == Some(&ch) {
            chars.next();
            count += 1;
        }

        if count == 1 {
            result.push(ch);
            continue;
        }

        match symbols.get(&ch) {
            Some(name) => result.push_str(&format!(" {} {} ", count, name)),
            None => result.push_str(&format!(" {} {} ", count, ch)),
        }
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condense_repeated() {
        let symbols = HashMap::new();

        let result = condense_repeated_chars("====", "=", &symbols);
        assert_eq!(result, "4 =");

        let result = condense_repeated_chars("===---", "-=", &symbols);
        assert_eq!(result, "3 =  3 -");

        let result = condense_repeated_chars("====", "=", &SYMBOL_NAMES);
        assert_eq!(result, "4 equals");

        let result = condense_repeated_chars("=", "=", &symbols);
        assert_eq!(result, "=");

        let result = condense_repeated_chars("hello===world", "=", &symbols);
        assert_eq!(result, "hello 3 = world");
    }

    #[test]
    fn test_symbol_name() {
        assert_eq!(symbol_name('&'), Some("and"));
        assert_eq!(symbol_name('%'), Some("percent"));
        assert_eq!(symbol_name('a'), None);
    }
}
