//! Letter names for spelled out words
//!
//! When a token is spelled ("NBC", "b52") each letter becomes a word with
//! part of speech `letter`, and these entries give the letter's name
//! rather than its sound as a word ("a" is `ey1`, not `ah0`).

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Letter -> pronunciation of its name
pub static LETTER_NAMES: Lazy<HashMap<char, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert('a', "ey1");
    m.insert('b', "b iy1");
    m.insert('c', "s iy1");
    m.insert('d', "d iy1");
    m.insert('e', "iy1");
    m.insert('f', "eh1 f");
    m.insert('g', "jh iy1");
    m.insert('h', "ey1 ch");
    m.insert('i', "ay1");
    m.insert('j', "jh ey1");
    m.insert('k', "k ey1");
    m.insert('l', "eh1 l");
    m.insert('m', "eh1 m");
    m.insert('n', "eh1 n");
    m.insert('o', "ow1");
    m.insert('p', "p iy1");
    m.insert('q', "k y uw1");
    m.insert('r', "aa1 r");
    m.insert('s', "eh1 s");
    m.insert('t', "t iy1");
    m.insert('u', "y uw1");
    m.insert('v', "v iy1");
    m.insert('w', "d ah1 b ah0 l y uw0");
    m.insert('x', "eh1 k s");
    m.insert('y', "w ay1");
    m.insert('z', "z iy1");
    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_letter_named() {
        for c in 'a'..='z' {
            assert!(LETTER_NAMES.contains_key(&c), "missing {}", c);
        }
        assert_eq!(LETTER_NAMES[&'w'], "d ah1 b ah0 l y uw0");
    }
}
