//! Voice configuration file

use crate::lexicon::LexEntry;
use crate::voice::Voice;
use crate::{LexError, Result};
use ini::Ini;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

/// Persistent voice settings
///
/// `[voice]` picks the voice name and language, `[features]` overrides
/// feature values after the language init has run, and `[addenda]` adds
/// `word = phones` entries (`word pos = phones` for a homograph).
pub struct VoiceConfig {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.lexvoice.cfg by default)
    path: PathBuf,
}

impl VoiceConfig {
    /// Load the configuration from the home directory, creating it when missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, creating a default file when missing
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading voice config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(path)
                .map_err(|e| LexError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            let default = Self::default_config();
            default
                .write_to_file(path)
                .map_err(|e| LexError::IniParse(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self {
            ini,
            path: path.to_path_buf(),
        })
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        debug!("Saving voice config to {:?}", self.path);
        self.ini
            .write_to_file(&self.path)
            .map_err(|e| LexError::Config(format!("Failed to save config: {}", e)))
    }

    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".lexvoice.cfg")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("voice"))
            .set("name", "kal")
            .set("language", "eng");

        ini
    }

    /// Get a boolean value from config
    pub fn get_bool(&self, section: &str, key: &str, default: bool) -> bool {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Get a float value from config
    pub fn get_float(&self, section: &str, key: &str, default: f64) -> f64 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Set a value in config
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.ini.with_section(Some(section)).set(key, value);
    }

    pub fn voice_name(&self) -> String {
        self.get_string("voice", "name", "kal")
    }

    /// Registered language name used to build the voice
    pub fn language(&self) -> String {
        self.get_string("voice", "language", "eng")
    }

    fn section_pairs(&self, section: &str) -> Vec<(String, String)> {
        self.ini
            .section(Some(section))
            .map(|props| {
                props
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Lexicon entries from `[addenda]`
    pub fn addenda(&self) -> Result<Vec<LexEntry>> {
        self.section_pairs("addenda")
            .iter()
            .map(|(word, phones)| LexEntry::parse(&format!("{} : {}", word, phones)))
            .collect()
    }

    /// Build a voice for the configured language and apply overrides
    pub fn build_voice(&self) -> Result<Voice> {
        self.build_voice_for(&self.language())
    }

    /// Build a voice for `language`, still applying this file's overrides
    pub fn build_voice_for(&self, language: &str) -> Result<Voice> {
        let mut voice = Voice::for_language(&self.voice_name(), language)?;

        let features = self.section_pairs("features");
        for (name, value) in &features {
            let feats = voice.features_mut();
            if let Ok(i) = value.parse::<i64>() {
                feats.set_int(name, i);
            } else if let Ok(f) = value.parse::<f64>() {
                feats.set_float(name, f);
            } else {
                feats.set_string(name, value);
            }
        }

        let mut added = 0;
        for entry in self.addenda()? {
            match voice.add_addenda(entry.clone()) {
                Ok(()) => added += 1,
                Err(e) => warn!("Skipping addenda entry '{}': {}", entry.word, e),
            }
        }
        debug!(
            "Voice '{}': {} feature overrides, {} addenda entries",
            voice.name,
            features.len(),
            added
        );
        Ok(voice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("voice.cfg");
        let config = VoiceConfig::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.language(), "eng");
        assert_eq!(config.voice_name(), "kal");
        assert!(config.addenda().unwrap().is_empty());

        // Sections other than [voice] appear once a key is set
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("[voice]"));
        assert!(!text.contains("[features]"));
    }

    #[test]
    fn test_typed_getters() {
        let dir = TempDir::new().unwrap();
        let mut config = VoiceConfig::load_from(&dir.path().join("v.cfg")).unwrap();
        config.set("features", "duration_stretch", "1.25");
        config.set("features", "verbose", "true");
        assert_eq!(config.get_float("features", "duration_stretch", 1.0), 1.25);
        assert!(config.get_bool("features", "verbose", false));
        assert_eq!(config.get_int("features", "missing", 7), 7);
        assert_eq!(config.get_string("voice", "missing", "x"), "x");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("v.cfg");
        let mut config = VoiceConfig::load_from(&path).unwrap();
        config.set("voice", "language", "grapheme");
        config.set("features", "int_f0_target_mean", "95");
        config.save().unwrap();
        let config = VoiceConfig::load_from(&path).unwrap();
        assert_eq!(config.language(), "grapheme");
        assert_eq!(config.get_int("features", "int_f0_target_mean", 0), 95);
    }

    #[test]
    fn test_bad_addenda() {
        let dir = TempDir::new().unwrap();
        let mut config = VoiceConfig::load_from(&dir.path().join("v.cfg")).unwrap();
        config.set("addenda", "flite", "");
        assert!(matches!(config.addenda(), Err(LexError::InvalidEntry(_))));
    }
}
