//! Error types for catalog loading and translation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a catalog or using a translator
#[derive(Error, Debug)]
pub enum I18nError {
    /// Walking the locale directory failed; the whole load is aborted
    #[error("Failed to walk locale directory {path:?}: {source}")]
    DirectoryWalk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A single locale file could not be read
    #[error("Failed to read locale file {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file in the locale directory is not named `<locale>.<extension>`
    #[error("Locale file name is not <locale>.<extension>: {path:?}")]
    InvalidFileName { path: PathBuf },

    /// No registered decoder handles the file extension
    #[error("No decoder registered for extension '{extension}'")]
    NoDecoder { extension: String },

    /// A locale file was read but its content could not be decoded
    #[error("Failed to decode locale file {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },

    /// The requested locale is not among the loaded languages
    #[error("Language {locale} not found")]
    LocaleNotFound { locale: String },

    /// Configuration file could not be read
    #[error("Failed to read configuration file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file content is invalid
    #[error("Failed to parse configuration file {path:?}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Configuration file extension is not json, yaml, yml or toml
    #[error("Unsupported configuration format: {path:?}")]
    UnsupportedConfigFormat { path: PathBuf },
}

/// Errors produced by a decoder when turning file bytes into messages
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[cfg(feature = "xml")]
    #[error("invalid XML: {0}")]
    Xml(String),

    #[error("content is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Raised by user supplied decoders
    #[error("{0}")]
    Custom(String),
}

impl DecodeError {
    /// Create an error for a custom decoder
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
