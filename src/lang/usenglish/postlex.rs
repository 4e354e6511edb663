//! US English post-lexical rules
//!
//! Applied after every word has a pronunciation:
//! - "the" before a vowel is said `dh iy`
//! - the possessive/plural `'s` agrees with the sound before it

use crate::lexicon::phoneset::Phoneset;
use crate::utterance::{Syllable, Utterance};

const SIBILANTS: [&str; 6] = ["s", "z", "sh", "zh", "ch", "jh"];

fn syllable(phones: &[&str]) -> Vec<Syllable> {
    vec![Syllable {
        phones: phones.iter().map(|p| p.to_string()).collect(),
        stress: 0,
    }]
}

fn first_phone(utt: &Utterance, wi: usize) -> Option<&str> {
    utt.words.get(wi)?.phones().first().copied()
}

fn last_phone(utt: &Utterance, wi: usize) -> Option<&str> {
    utt.words.get(wi)?.phones().last().copied()
}

pub fn apply(utt: &mut Utterance, phoneset: &Phoneset) {
    for wi in 0..utt.words.len() {
        let replacement = match utt.words[wi].name.as_str() {
            "the" => match first_phone(utt, wi + 1) {
                Some(next) if phoneset.is_vowel(next) => Some(syllable(&["dh", "iy"])),
                _ => None,
            },
            "'s" if wi > 0 => match last_phone(utt, wi - 1) {
                Some(prev) if SIBILANTS.contains(&prev) => Some(syllable(&["ih", "z"])),
                Some(prev) if !phoneset.is_voiced(prev) => Some(syllable(&["s"])),
                Some(_) => Some(syllable(&["z"])),
                None => None,
            },
            _ => None,
        };
        if let Some(syllables) = replacement {
            utt.words[wi].syllables = syllables;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::cmulex::cmu_phoneset;
    use crate::utterance::Word;

    fn word(name: &str, phones: &[&str]) -> Word {
        Word {
            name: name.to_string(),
            pos: None,
            token: 0,
            phrase: 0,
            syllables: syllable(phones),
        }
    }

    fn phones_of(utt: &Utterance, wi: usize) -> Vec<&str> {
        utt.words[wi].phones()
    }

    #[test]
    fn test_the_before_vowel() {
        let ps = cmu_phoneset();
        let mut utt = Utterance::new("the apple the cat");
        utt.words = vec![
            word("the", &["dh", "ah"]),
            word("apple", &["ae", "p", "ah", "l"]),
            word("the", &["dh", "ah"]),
            word("cat", &["k", "ae", "t"]),
        ];
        apply(&mut utt, &ps);
        assert_eq!(phones_of(&utt, 0), vec!["dh", "iy"]);
        assert_eq!(phones_of(&utt, 2), vec!["dh", "ah"]);
    }

    #[test]
    fn test_possessive_s() {
        let ps = cmu_phoneset();
        let mut utt = Utterance::new("");
        utt.words = vec![
            word("boss", &["b", "aa", "s"]),
            word("'s", &["z"]),
            word("cat", &["k", "ae", "t"]),
            word("'s", &["z"]),
            word("dog", &["d", "ao", "g"]),
            word("'s", &["z"]),
        ];
        apply(&mut utt, &ps);
        assert_eq!(phones_of(&utt, 1), vec!["ih", "z"]);
        assert_eq!(phones_of(&utt, 3), vec!["s"]);
        assert_eq!(phones_of(&utt, 5), vec!["z"]);
    }
}
