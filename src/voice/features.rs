//! Typed feature map attached to a voice
//!
//! Language init functions write their settings here (punctuation sets,
//! phoneset name, prosodic targets) and the text pipeline reads them back.

use serde::Serialize;
use std::fmt;

/// A single feature value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureValue::Str(s) => write!(f, "{}", s),
            FeatureValue::Int(i) => write!(f, "{}", i),
            FeatureValue::Float(x) => write!(f, "{}", x),
        }
    }
}

/// Ordered name -> value map
///
/// Insertion order is kept so dumps list features in the order the
/// language set them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Features {
    entries: Vec<(String, FeatureValue)>,
}

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a feature, replacing any existing value under the same name
    pub fn set(&mut self, name: &str, value: FeatureValue) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn set_string(&mut self, name: &str, value: &str) {
        self.set(name, FeatureValue::Str(value.to_string()));
    }

    pub fn set_int(&mut self, name: &str, value: i64) {
        self.set(name, FeatureValue::Int(value));
    }

    pub fn set_float(&mut self, name: &str, value: f64) {
        self.set(name, FeatureValue::Float(value));
    }

    pub fn get(&self, name: &str) -> Option<&FeatureValue> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn remove(&mut self, name: &str) -> Option<FeatureValue> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Get a string feature; numbers are rendered as text
    pub fn get_string(&self, name: &str, default: &str) -> String {
        self.get(name)
            .map(|v| v.to_string())
            .unwrap_or_else(|| default.to_string())
    }

    /// Get an integer feature; string values are parsed
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        match self.get(name) {
            Some(FeatureValue::Int(i)) => *i,
            Some(FeatureValue::Float(x)) => *x as i64,
            Some(FeatureValue::Str(s)) => s.trim().parse().unwrap_or(default),
            None => default,
        }
    }

    /// Get a float feature; string and integer values are converted
    pub fn get_float(&self, name: &str, default: f64) -> f64 {
        match self.get(name) {
            Some(FeatureValue::Float(x)) => *x,
            Some(FeatureValue::Int(i)) => *i as f64,
            Some(FeatureValue::Str(s)) => s.trim().parse().unwrap_or(default),
            None => default,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
