//! Grapheme voice tests

use lexvoice::lang::grapheme::{cmu_grapheme_lang_init, cmu_grapheme_lex_init};
use lexvoice::Voice;
use std::sync::Arc;

#[test]
fn test_cyrillic_sentence() {
    let voice = Voice::for_language("any", "grapheme").expect("Failed to build grapheme voice");
    let phones = voice.phones("Добрый день!").expect("Failed to get phones");
    assert_eq!(
        phones,
        vec!["pau", "d", "o", "b", "r", "1", "j", "d", "j", "e", "n", "pau"]
    );
}

#[test]
fn test_any_script_gets_phones() {
    let mut voice = Voice::new("thai");
    cmu_grapheme_lang_init(&mut voice);
    voice.set_lexicon(Arc::new(cmu_grapheme_lex_init().expect("Failed to build lexicon")));
    let utt = voice.text_to_utterance("กข").expect("Failed to analyse text");
    assert_eq!(utt.words.len(), 1);
    assert_eq!(utt.words[0].phones(), vec!["u0e01", "u0e02"]);
}

#[test]
fn test_syllables() {
    let voice = Voice::for_language("any", "cmu_grapheme_lang").expect("voice");
    let utt = voice.text_to_utterance("banana").expect("Failed to analyse text");
    let syllables: Vec<String> = utt.words[0]
        .syllables
        .iter()
        .map(|s| s.phones.join(" "))
        .collect();
    assert_eq!(syllables, vec!["b a", "n a", "n a"]);
}

#[test]
fn test_danda_ends_phrases() {
    let voice = Voice::for_language("any", "grapheme").expect("Failed to build grapheme voice");
    let utt = voice
        .text_to_utterance("नमस्ते । नमस्ते॥ ठीक")
        .expect("Failed to analyse text");
    assert_eq!(utt.word_names(), vec!["नमस्ते", "नमस्ते", "ठीक"]);
    assert_eq!(utt.phrases.len(), 3);
    assert_eq!(utt.phrases[0].words, 0..1);
    assert_eq!(utt.words[0].phones()[0], "u0928");
}
