//! Construction options for [`I18nManager`](crate::I18nManager)

use crate::decoder::DecoderRegistry;
use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A single translated message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub key: String,
    pub value: String,
}

/// Inline translations for one locale
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Locale code, e.g. `en` or `hu`
    pub language: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl LanguageEntry {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            messages: Vec::new(),
        }
    }

    /// Append a message, keeping insertion order
    pub fn with_message(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.messages.push(Message {
            key: key.into(),
            value: value.into(),
        });
        self
    }
}

/// Options for building the catalog
///
/// Only the fallback locale is required. Inline `data` is applied first, then
/// the files under `load_dir`.
#[derive(Debug, Clone, Deserialize)]
pub struct I18nConfig {
    /// Locale used whenever a requested one is unknown
    pub fallback_locale: String,

    /// Inline translations
    #[serde(default)]
    pub data: Vec<LanguageEntry>,

    /// Directory scanned recursively for `<locale>.<extension>` files
    #[serde(default)]
    pub load_dir: Option<PathBuf>,

    /// Decoders used by the directory scan; [`DecoderRegistry::default`] when unset
    #[serde(skip)]
    pub decoders: Option<DecoderRegistry>,
}

impl I18nConfig {
    pub fn new(fallback_locale: impl Into<String>) -> Self {
        Self {
            fallback_locale: fallback_locale.into(),
            data: Vec::new(),
            load_dir: None,
            decoders: None,
        }
    }

    /// Replace the inline translations
    pub fn with_data(mut self, data: Vec<LanguageEntry>) -> Self {
        self.data = data;
        self
    }

    /// Append one inline language entry
    pub fn with_entry(mut self, entry: LanguageEntry) -> Self {
        self.data.push(entry);
        self
    }

    pub fn with_load_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.load_dir = Some(dir.into());
        self
    }

    /// Use a custom decoder list instead of the defaults
    pub fn with_decoders(mut self, decoders: DecoderRegistry) -> Self {
        self.decoders = Some(decoders);
        self
    }

    /// The directory to scan, if one is set and non-empty
    pub fn scan_dir(&self) -> Option<&Path> {
        self.load_dir
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }

    /// Load options from a JSON, YAML or TOML file chosen by extension.
    ///
    /// A relative `load_dir` is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> I18nResult<Self> {
        let path = path.as_ref();
        debug!("Loading i18n configuration from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| I18nError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let parse_error = |message: String| I18nError::ConfigParse {
            path: path.to_path_buf(),
            message,
        };

        let extension = path.extension().and_then(|ext| ext.to_str());
        let mut config: Self = match extension {
            Some("json") => {
                serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            Some("yaml" | "yml") => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(e.to_string()))?
            }
            Some("toml") => toml::from_str(&content).map_err(|e| parse_error(e.to_string()))?,
            _ => {
                return Err(I18nError::UnsupportedConfigFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        if let (Some(dir), Some(base)) = (config.load_dir.as_mut(), path.parent()) {
            if dir.is_relative() && !dir.as_os_str().is_empty() {
                *dir = base.join(&*dir);
            }
        }

        Ok(config)
    }
}
