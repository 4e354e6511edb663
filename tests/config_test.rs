//! Voice configuration tests
//!
//! Config files are written to a temporary directory so the user's
//! ~/.lexvoice.cfg is never touched.

use lexvoice::lexicon::PronunciationSource;
use lexvoice::voice::VoiceConfig;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("lexvoice.cfg");
    fs::write(&path, text).expect("Failed to write config");
    path
}

#[test]
fn test_build_voice_from_config() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(
        &dir,
        "[voice]\nname = awb\nlanguage = eng\n\n\
         [features]\nduration_stretch = 1.5\nint_f0_target_mean = 120\nstyle = calm\n\n\
         [addenda]\nflite = f l ay1 t\n",
    );
    let config = VoiceConfig::load_from(&path).expect("Failed to load config");
    let voice = config.build_voice().expect("Failed to build voice");

    assert_eq!(voice.name, "awb");
    let feats = voice.features();
    assert_eq!(feats.get_float("duration_stretch", 1.0), 1.5);
    assert_eq!(feats.get_int("int_f0_target_mean", 0), 120);
    assert_eq!(feats.get_string("style", ""), "calm");

    let pron = voice.lookup("flite", None).expect("Failed to pronounce");
    assert_eq!(pron.source, PronunciationSource::Addenda);
}

#[test]
fn test_language_override() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[voice]\nlanguage = eng\n");
    let config = VoiceConfig::load_from(&path).expect("Failed to load config");
    let voice = config.build_voice_for("grapheme").expect("Failed to build voice");
    assert_eq!(voice.language_name(), Some("cmu_grapheme_lang"));
}

#[test]
fn test_invalid_addenda_skipped() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[voice]\nlanguage = eng\n\n[addenda]\nzork = q x q\n");
    let config = VoiceConfig::load_from(&path).expect("Failed to load config");
    let voice = config.build_voice().expect("Failed to build voice");
    let pron = voice.lookup("zork", None).expect("Failed to pronounce");
    assert_eq!(pron.source, PronunciationSource::LetterToSound);
}

#[test]
fn test_unknown_language() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_config(&dir, "[voice]\nlanguage = martian\n");
    let config = VoiceConfig::load_from(&path).expect("Failed to load config");
    assert!(config.build_voice().is_err());
}
