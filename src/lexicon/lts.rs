//! Letter to sound
//!
//! `RuleLts` is a context rule engine in the style of the NRL rules: each
//! rule rewrites a letter string to phones when the letters to its left and
//! right match a context pattern. Context patterns use these classes:
//!
//! - ` ` word boundary
//! - `#` one or more vowels
//! - `:` zero or more consonants
//! - `^` exactly one consonant
//! - `.` one voiced consonant (b d g j l m n r v w z)
//! - `+` a front vowel (e i y)
//! - `%` a suffix (e, er, es, ed, ing, ely)
//!
//! Any other character matches itself. Rule text is written
//! `left [target] right = phones`, with `_` standing for the boundary.

use crate::{LexError, Result};
use log::debug;
use std::collections::HashMap;

/// Predict a pronunciation from spelling
pub trait LetterToSound: Send + Sync {
    fn predict(&self, word: &str) -> Result<Vec<String>>;
}

/// One rewrite rule
#[derive(Debug, Clone)]
pub struct LtsRule {
    pub left: String,
    pub target: String,
    pub right: String,
    pub phones: Vec<String>,
}

impl LtsRule {
    /// Parse `left [target] right = phones`
    pub fn parse(text: &str) -> Result<Self> {
        let bad = || LexError::InvalidEntry(format!("bad LTS rule: {}", text));
        let (lhs, rhs) = text.split_once('=').ok_or_else(bad)?;
        let open = lhs.find('[').ok_or_else(bad)?;
        let close = lhs.find(']').ok_or_else(bad)?;
        if close < open {
            return Err(bad());
        }
        let target = &lhs[open + 1..close];
        if target.is_empty() {
            return Err(bad());
        }
        Ok(Self {
            left: context(&lhs[..open]),
            target: target.to_string(),
            right: context(&lhs[close + 1..]),
            phones: rhs.split_whitespace().map(|s| s.to_string()).collect(),
        })
    }
}

/// Rule text may space out context classes; `_` spells a word boundary
fn context(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == '_' { ' ' } else { c })
        .collect()
}

fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u' | b'y')
}

fn is_consonant(c: u8) -> bool {
    c.is_ascii_lowercase() && !is_vowel(c)
}

fn is_voiced(c: u8) -> bool {
    matches!(c, b'b' | b'd' | b'g' | b'j' | b'l' | b'm' | b'n' | b'r' | b'v' | b'w' | b'z')
}

const SUFFIXES: [&[u8]; 6] = [b"ing", b"ely", b"er", b"es", b"ed", b"e"];

/// Word is padded with a space on each side; positions index that buffer.
///
/// Matches `pattern` forward starting at `pos`; returns the position after
/// the match.
fn match_right(pattern: &[u8], word: &[u8], mut pos: usize) -> Option<usize> {
    for &p in pattern {
        let at = |i: usize| word.get(i).copied();
        match p {
            b'#' => {
                if !at(pos).map_or(false, is_vowel) {
                    return None;
                }
                while at(pos).map_or(false, is_vowel) {
                    pos += 1;
                }
            }
            b':' => {
                while at(pos).map_or(false, is_consonant) {
                    pos += 1;
                }
            }
            b'^' => {
                if !at(pos).map_or(false, is_consonant) {
                    return None;
                }
                pos += 1;
            }
            b'.' => {
                if !at(pos).map_or(false, is_voiced) {
                    return None;
                }
                pos += 1;
            }
            b'+' => {
                if !matches!(at(pos), Some(b'e' | b'i' | b'y')) {
                    return None;
                }
                pos += 1;
            }
            b'%' => {
                let rest = &word[pos.min(word.len())..];
                let suffix = SUFFIXES.iter().find(|s| rest.starts_with(s))?;
                pos += suffix.len();
            }
            c => {
                if at(pos) != Some(c) {
                    return None;
                }
                pos += 1;
            }
        }
    }
    Some(pos)
}

/// Matches `pattern` backwards so that it ends just before `end`
fn match_left(pattern: &[u8], word: &[u8], end: usize) -> bool {
    // `pos` is one past the next character to examine
    let mut pos = end;
    for &p in pattern.iter().rev() {
        let prev = |i: usize| if i == 0 { None } else { word.get(i - 1).copied() };
        match p {
            b'#' => {
                if !prev(pos).map_or(false, is_vowel) {
                    return false;
                }
                while prev(pos).map_or(false, is_vowel) {
                    pos -= 1;
                }
            }
            b':' => {
                while prev(pos).map_or(false, is_consonant) {
                    pos -= 1;
                }
            }
            b'^' => {
                if !prev(pos).map_or(false, is_consonant) {
                    return false;
                }
                pos -= 1;
            }
            b'.' => {
                if !prev(pos).map_or(false, is_voiced) {
                    return false;
                }
                pos -= 1;
            }
            b'+' => {
                if !matches!(prev(pos), Some(b'e' | b'i' | b'y')) {
                    return false;
                }
                pos -= 1;
            }
            c => {
                if prev(pos) != Some(c) {
                    return false;
                }
                pos -= 1;
            }
        }
    }
    true
}

/// Context rule letter-to-sound engine
pub struct RuleLts {
    name: String,
    rules: HashMap<u8, Vec<LtsRule>>,
}

impl RuleLts {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rules: HashMap::new(),
        }
    }

    /// Build from rule text, one rule per line; blank lines and `;` comments are skipped
    pub fn from_rules(name: &str, text: &str) -> Result<Self> {
        let mut lts = Self::new(name);
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            lts.add_rule(LtsRule::parse(line)?);
        }
        debug!(
            "LTS '{}' loaded {} rules",
            lts.name,
            lts.rules.values().map(|r| r.len()).sum::<usize>()
        );
        Ok(lts)
    }

    pub fn add_rule(&mut self, rule: LtsRule) {
        let first = rule.target.as_bytes()[0];
        self.rules.entry(first).or_default().push(rule);
    }

    pub fn rule_count(&self) -> usize {
        self.rules.values().map(|r| r.len()).sum()
    }
}

impl LetterToSound for RuleLts {
    fn predict(&self, word: &str) -> Result<Vec<String>> {
        let lower = word.to_lowercase();
        let letters: String = lower.chars().filter(|c| c.is_ascii_lowercase()).collect();
        if letters.is_empty() {
            return Err(LexError::LetterToSound {
                word: word.to_string(),
                reason: "no letters".to_string(),
            });
        }

        let padded = format!(" {} ", letters);
        let buf = padded.as_bytes();
        let mut phones = Vec::new();
        let mut pos = 1;
        let end = buf.len() - 1;

        while pos < end {
            let c = buf[pos];
            let rules = self.rules.get(&c).ok_or_else(|| LexError::LetterToSound {
                word: word.to_string(),
                reason: format!("no rules for '{}'", c as char),
            })?;

            let hit = rules.iter().find_map(|rule| {
                let target = rule.target.as_bytes();
                if !buf[pos..].starts_with(target) {
                    return None;
                }
                let after = pos + target.len();
                if !match_left(rule.left.as_bytes(), buf, pos) {
                    return None;
                }
                match_right(rule.right.as_bytes(), buf, after)?;
                Some((rule, after))
            });

            match hit {
                Some((rule, after)) => {
                    phones.extend(rule.phones.iter().cloned());
                    pos = after;
                }
                None => {
                    return Err(LexError::LetterToSound {
                        word: word.to_string(),
                        reason: format!("no rule matched at '{}'", &padded[pos..end]),
                    })
                }
            }
        }
        Ok(phones)
    }
}
