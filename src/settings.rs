//! User settings, read from a JSON file.
//!
//! Every key is optional. A missing file means "all defaults"; a file that
//! exists but cannot be read or parsed is an error.

use std::fs;
use std::io::ErrorKind;
use std::path::{ Path, PathBuf };

use serde::{ Deserialize, Serialize };

use crate::errors::AppError;
use crate::generators::DigitAlphabet;
use crate::password::{ DEFAULT_MAX_FIELD, RawRequest };

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub digit_alphabet: DigitAlphabet,
    pub max_field_value: usize,
    pub copy_by_default: bool,
    pub defaults: FieldDefaults,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            digit_alphabet: DigitAlphabet::default(),
            max_field_value: DEFAULT_MAX_FIELD,
            copy_by_default: false,
            defaults: FieldDefaults::default(),
        }
    }
}

/// Pre-filled field values. Numbers or strings are both accepted so that a
/// config can carry the same text a user would type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldDefaults {
    pub length: Option<FieldValue>,
    pub numbers: Option<FieldValue>,
    pub specials: Option<FieldValue>,
    pub letters: Option<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(u64),
    Text(String),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s,
        }
    }
}

impl FieldDefaults {
    pub fn to_raw(&self) -> RawRequest {
        let text = |v: &Option<FieldValue>| v.clone().map(FieldValue::into_text);
        RawRequest {
            length: text(&self.length),
            numbers: text(&self.numbers),
            specials: text(&self.specials),
            letters: text(&self.letters),
        }
    }
}

impl Settings {
    const APP_DIR: &'static str = "passcompose";
    const FILE_NAME: &'static str = "config.json";

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::APP_DIR).join(Self::FILE_NAME))
    }

    /// Load from `path`, or from the platform config directory when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("no config directory on this platform, using default settings");
                    return Ok(Self::default());
                }
            },
        };

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "settings file not found, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(AppError::SettingsIo { path, source }),
        };

        let settings = Self::from_json(&contents)
            .map_err(|source| AppError::SettingsFormat { path: path.clone(), source })?;
        tracing::debug!(path = %path.display(), ?settings, "loaded settings");

        Ok(settings)
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }
}
