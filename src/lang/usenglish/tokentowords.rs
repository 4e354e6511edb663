//! US English token expansion
//!
//! Turns a raw token into the words that are actually spoken: numbers,
//! money, ordinals, abbreviations, acronyms and symbols are rewritten,
//! everything else is lower-cased and passed through.

use super::numbers::{cardinal, digits, is_year, ordinal, year, MAX_CARDINAL};
use crate::lang::TokenWord;
use crate::text::symbols::{condense_repeated_chars, symbol_name, SYMBOL_NAMES};
use crate::utterance::Token;
use once_cell::sync::Lazy;
use regex::Regex;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+$").expect("valid regex"));
static GROUPED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{1,3}(,\d{3})+$").expect("valid regex"));
static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d*\.\d+$").expect("valid regex"));
static ORDINAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?i)(\d+)(st|nd|rd|th)$").expect("valid regex"));
static MONEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$(\d{1,3}(?:,\d{3})+|\d+)(?:\.(\d{2}))?$").expect("valid regex"));
static PERCENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+(?:\.\d+)?)%$").expect("valid regex"));
static ALNUM_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]+|\d+").expect("valid regex"));

/// Abbreviations read without their trailing period
const ABBREVIATIONS: [(&str, &str); 9] = [
    ("mr", "mister"),
    ("mrs", "missus"),
    ("ms", "miz"),
    ("dr", "doctor"),
    ("prof", "professor"),
    ("jr", "junior"),
    ("sr", "senior"),
    ("vs", "versus"),
    ("etc", "et cetera"),
];

/// Contractions ending in 's that are not possessives
const S_CONTRACTIONS: [&str; 9] = [
    "it's", "that's", "let's", "he's", "she's", "what's", "there's", "here's", "who's",
];

fn plain(words: Vec<String>) -> Vec<TokenWord> {
    words.iter().map(|w| TokenWord::plain(w)).collect()
}

fn split_plain(text: &str) -> Vec<TokenWord> {
    text.split_whitespace().map(TokenWord::plain).collect()
}

pub fn is_abbreviation(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower == "st" || ABBREVIATIONS.iter().any(|(a, _)| *a == lower)
}

/// Read an unsigned digit string as a number
fn number(text: &str) -> Vec<String> {
    if text.len() > 1 && text.starts_with('0') {
        return digits(text);
    }
    match text.parse::<u64>() {
        Ok(n) if n <= MAX_CARDINAL => cardinal(n),
        _ => digits(text),
    }
}

fn signed(text: &str, read: impl Fn(&str) -> Vec<String>) -> Vec<String> {
    match text.strip_prefix('-') {
        Some(rest) => {
            let mut out = vec!["minus".to_string()];
            out.extend(read(rest));
            out
        }
        None => read(text),
    }
}

fn decimal(text: &str) -> Vec<String> {
    let (int, frac) = text.split_once('.').unwrap_or((text, ""));
    let mut out = if int.is_empty() { Vec::new() } else { number(int) };
    out.push("point".to_string());
    out.extend(digits(frac));
    out
}

fn has_vowel(text: &str) -> bool {
    text.chars()
        .any(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u' | 'y'))
}

fn spell(text: &str) -> Vec<TokenWord> {
    text.chars()
        .filter(|c| c.is_alphabetic())
        .map(TokenWord::letter)
        .collect()
}

/// A word made only of letters (apostrophes allowed)
fn alphabetic_word(name: &str) -> Vec<TokenWord> {
    let letters = name.chars().filter(|c| c.is_alphabetic()).count();
    let all_upper = name.chars().all(|c| c.is_ascii_uppercase() || !c.is_alphabetic());

    if letters == 1 && name.chars().count() == 1 {
        let lower = name.to_lowercase();
        return match lower.as_str() {
            "a" | "i" => vec![TokenWord::plain(&lower)],
            _ => spell(name),
        };
    }

    if all_upper && letters > 1 && !has_vowel(name) {
        return spell(name);
    }

    let lower = name.to_lowercase();
    if let Some(base) = lower.strip_suffix("'s") {
        if !base.is_empty() && !S_CONTRACTIONS.contains(&lower.as_str()) {
            return vec![TokenWord::plain(base), TokenWord::plain("'s")];
        }
    }
    vec![TokenWord::plain(&lower)]
}

fn symbols(name: &str) -> Vec<TokenWord> {
    let condensed = condense_repeated_chars(name, name, &SYMBOL_NAMES);
    let mut out = Vec::new();
    for piece in condensed.split_whitespace() {
        if piece.chars().all(|c| c.is_ascii_digit()) {
            out.extend(plain(number(piece)));
            continue;
        }
        if piece.chars().all(|c| c.is_alphabetic()) {
            out.push(TokenWord::plain(piece));
            continue;
        }
        for c in piece.chars() {
            match symbol_name(c) {
                Some(spoken) => out.extend(split_plain(spoken)),
                None if c.is_alphanumeric() => out.push(TokenWord::plain(&c.to_lowercase().to_string())),
                None => {}
            }
        }
    }
    out
}

/// Expand one token into spoken words
pub fn token_to_words(token: &Token, next: Option<&Token>) -> Vec<TokenWord> {
    expand(&token.name.replace('\u{2019}', "'"), next)
}

fn expand(name: &str, next: Option<&Token>) -> Vec<TokenWord> {
    if name.is_empty() {
        return Vec::new();
    }

    let lower = name.to_lowercase();
    if lower == "st" {
        // "St. Louis" vs "Main St."
        let saint = next
            .and_then(|t| t.name.chars().next())
            .map_or(false, |c| c.is_uppercase());
        return vec![TokenWord::plain(if saint { "saint" } else { "street" })];
    }
    if let Some((_, spoken)) = ABBREVIATIONS.iter().find(|(a, _)| *a == lower) {
        return split_plain(spoken);
    }

    if let Some(caps) = MONEY.captures(name) {
        let dollars = caps[1].replace(',', "");
        let mut out = number(&dollars);
        out.push(if dollars == "1" { "dollar" } else { "dollars" }.to_string());
        if let Some(cents) = caps.get(2) {
            let c: u64 = cents.as_str().parse().unwrap_or(0);
            if c > 0 {
                out.push("and".to_string());
                out.extend(cardinal(c));
                out.push(if c == 1 { "cent" } else { "cents" }.to_string());
            }
        }
        return plain(out);
    }

    if let Some(caps) = PERCENT.captures(name) {
        let value = &caps[1];
        let mut out = if value.contains('.') {
            signed(value, decimal)
        } else {
            signed(value, number)
        };
        out.push("percent".to_string());
        return plain(out);
    }

    if let Some(caps) = ORDINAL.captures(name) {
        return match caps[1].parse::<u64>() {
            Ok(n) if n <= MAX_CARDINAL => plain(ordinal(n)),
            _ => plain(digits(&caps[1])),
        };
    }

    if GROUPED.is_match(name) {
        return plain(signed(&name.replace(',', ""), number));
    }

    if INTEGER.is_match(name) {
        if name.len() == 4 {
            if let Ok(n) = name.parse::<u64>() {
                if is_year(n) {
                    return plain(year(n));
                }
            }
        }
        return plain(signed(name, number));
    }

    if DECIMAL.is_match(name) {
        return plain(signed(name, decimal));
    }

    if name.contains('-') && name.chars().any(|c| c.is_alphanumeric()) {
        return name
            .split('-')
            .filter(|p| !p.is_empty())
            .flat_map(|p| expand(p, next))
            .collect();
    }

    let alpha_or_apos = name.chars().all(|c| c.is_alphabetic() || c == '\'');
    if alpha_or_apos && name.chars().any(|c| c.is_alphabetic()) {
        return alphabetic_word(name);
    }

    if name.chars().all(|c| c.is_ascii_alphanumeric()) {
        // Mixed letters and digits: "b52" -> "b fifty two"
        return ALNUM_RUN
            .find_iter(name)
            .flat_map(|m| expand(m.as_str(), next))
            .collect();
    }

    if !name.chars().any(|c| c.is_alphanumeric()) {
        return symbols(name);
    }

    // Letters glued to symbols ("AT&T", "and/or"): read runs and symbols in order
    let mut out = Vec::new();
    let mut run = String::new();
    for c in name.chars() {
        if c.is_alphanumeric() || c == '\'' {
            run.push(c);
            continue;
        }
        if !run.is_empty() {
            out.extend(expand(&run, next));
            run.clear();
        }
        if let Some(spoken) = symbol_name(c) {
            out.extend(split_plain(spoken));
        }
    }
    if !run.is_empty() {
        out.extend(expand(&run, next));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        token_to_words(&Token::new(text), None)
            .into_iter()
            .map(|w| w.name)
            .collect()
    }

    fn said(text: &str) -> String {
        words(text).join(" ")
    }

    #[test]
    fn test_numbers() {
        assert_eq!(said("42"), "forty two");
        assert_eq!(said("-7"), "minus seven");
        assert_eq!(said("1,250"), "one thousand two hundred fifty");
        assert_eq!(said("3.14"), "three point one four");
        assert_eq!(said(".5"), "point five");
        assert_eq!(said("007"), "zero zero seven");
        assert_eq!(said("1999"), "nineteen ninety nine");
        assert_eq!(said("2005"), "two thousand five");
    }

    #[test]
    fn test_ordinals_money_percent() {
        assert_eq!(said("21st"), "twenty first");
        assert_eq!(said("3RD"), "third");
        assert_eq!(said("$1"), "one dollar");
        assert_eq!(said("$12.50"), "twelve dollars and fifty cents");
        assert_eq!(said("$1,000"), "one thousand dollars");
        assert_eq!(said("50%"), "fifty percent");
    }

    #[test]
    fn test_words_and_letters() {
        assert_eq!(said("Hello"), "hello");
        assert_eq!(said("A"), "a");
        assert_eq!(said("NBC"), "n b c");
        assert_eq!(said("NASA"), "nasa");
        assert_eq!(said("b52"), "b fifty two");
        assert_eq!(said("well-known"), "well known");
        assert_eq!(said("John's"), "john 's");
        assert_eq!(said("it's"), "it's");
        assert_eq!(said("John\u{2019}s"), "john 's");
        assert_eq!(said("it\u{2019}s"), "it's");
        // Only ASCII capitals make an acronym
        assert_eq!(said("你好"), "你好");
        assert_eq!(said("ΠΙ"), "πι");

        let spelled = token_to_words(&Token::new("TV"), None);
        assert_eq!(spelled[0].pos.as_deref(), Some("letter"));
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(said("Dr"), "doctor");
        assert_eq!(said("etc"), "et cetera");
        let next = Token::new("Louis");
        let saint = token_to_words(&Token::new("St"), Some(&next));
        assert_eq!(saint[0].name, "saint");
        assert_eq!(said("St"), "street");
        assert!(is_abbreviation("Mrs"));
        assert!(!is_abbreviation("cat"));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(said("&"), "and");
        assert_eq!(said("===="), "four equals");
        assert_eq!(said("AT&T"), "at and t");
        assert_eq!(said("and/or"), "and slash or");
        assert_eq!(said(""), "");
    }
}
