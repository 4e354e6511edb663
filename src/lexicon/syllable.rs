//! Syllabification
//!
//! Splits a flat phone list into syllables. Every vowel is a nucleus; the
//! consonants between two nuclei are shared out so the following syllable
//! gets the longest legal onset.

use super::phoneset::{strip_stress, Phoneset};
use crate::utterance::Syllable;
use std::collections::HashSet;

/// Phone list to syllables
pub trait Syllabify: Send + Sync {
    fn syllabify(&self, phones: &[String], phoneset: &Phoneset) -> Vec<Syllable>;
}

/// Maximal onset syllabifier
///
/// With an empty onset set any single consonant is a legal onset and
/// nothing longer is.
#[derive(Debug, Clone, Default)]
pub struct MaxOnset {
    onsets: HashSet<String>,
}

impl MaxOnset {
    /// Single consonant onsets only
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit list of legal multi-consonant onsets (space separated phones)
    pub fn with_onsets(onsets: &[&str]) -> Self {
        Self {
            onsets: onsets.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn legal_onset(&self, cluster: &[&str]) -> bool {
        match cluster.len() {
            0 | 1 => true,
            _ => self.onsets.contains(&cluster.join(" ")),
        }
    }
}

impl Syllabify for MaxOnset {
    fn syllabify(&self, phones: &[String], phoneset: &Phoneset) -> Vec<Syllable> {
        if phones.is_empty() {
            return Vec::new();
        }

        let mut base: Vec<&str> = Vec::with_capacity(phones.len());
        let mut stress: Vec<Option<u8>> = Vec::with_capacity(phones.len());
        for p in phones {
            if phoneset.stress_marked {
                let (b, s) = strip_stress(p);
                base.push(b);
                stress.push(s);
            } else {
                base.push(p.as_str());
                stress.push(None);
            }
        }

        let nuclei: Vec<usize> = (0..base.len())
            .filter(|&i| phoneset.is_vowel(base[i]))
            .collect();

        if nuclei.is_empty() {
            return vec![Syllable {
                phones: base.iter().map(|p| p.to_string()).collect(),
                stress: 0,
            }];
        }

        // Syllable start positions; the first always starts at 0
        let mut starts = vec![0];
        for pair in nuclei.windows(2) {
            let (v1, v2) = (pair[0], pair[1]);
            let mut split = v2;
            for k in (v1 + 1)..=v2 {
                if self.legal_onset(&base[k..v2]) {
                    split = k;
                    break;
                }
            }
            starts.push(split);
        }

        let mut syllables = Vec::with_capacity(starts.len());
        for (n, &start) in starts.iter().enumerate() {
            let end = starts.get(n + 1).copied().unwrap_or(base.len());
            let nucleus = nuclei[n];
            syllables.push(Syllable {
                phones: base[start..end].iter().map(|p| p.to_string()).collect(),
                stress: stress[nucleus].unwrap_or(0),
            });
        }
        syllables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::phoneset::Phone;

    fn phoneset(stress: bool) -> Phoneset {
        let mut phones = vec![Phone::vowel("a"), Phone::vowel("i"), Phone::vowel("ah")];
        for c in ["p", "t", "k", "s", "r", "l", "n"] {
            phones.push(Phone::consonant(c, false, false));
        }
        let ps = Phoneset::new("test", "pau", phones);
        if stress {
            ps.with_stress_marks()
        } else {
            ps
        }
    }

    fn strs(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_consonant_onsets() {
        let syls = MaxOnset::new().syllabify(&strs(&["k", "a", "n", "t", "i"]), &phoneset(false));
        assert_eq!(syls.len(), 2);
        assert_eq!(syls[0].phones, strs(&["k", "a", "n"]));
        assert_eq!(syls[1].phones, strs(&["t", "i"]));
    }

    #[test]
    fn test_cluster_onset() {
        let syl = MaxOnset::with_onsets(&["s t r", "t r", "s t"]);
        let syls = syl.syllabify(&strs(&["a", "s", "t", "r", "i"]), &phoneset(false));
        assert_eq!(syls[0].phones, strs(&["a"]));
        assert_eq!(syls[1].phones, strs(&["s", "t", "r", "i"]));
    }

    #[test]
    fn test_stress_digits() {
        let syls = MaxOnset::new().syllabify(&strs(&["p", "ah0", "t", "i1", "k"]), &phoneset(true));
        assert_eq!(syls.len(), 2);
        assert_eq!(syls[0].stress, 0);
        assert_eq!(syls[1].stress, 1);
        assert_eq!(syls[1].phones, strs(&["t", "i", "k"]));
    }

    #[test]
    fn test_no_vowel() {
        let syls = MaxOnset::new().syllabify(&strs(&["s", "t"]), &phoneset(false));
        assert_eq!(syls.len(), 1);
        assert_eq!(syls[0].stress, 0);
        assert!(MaxOnset::new().syllabify(&[], &phoneset(false)).is_empty());
    }
}
