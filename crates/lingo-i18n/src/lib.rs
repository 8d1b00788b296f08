//! Lightweight message catalogs with placeholder translation
//!
//! This crate loads per-locale key → message tables from inline data and/or a
//! directory of locale files, and hands out translators bound to a locale.
//! It includes:
//!
//! - Inline translations supplied through [`I18nConfig`]
//! - Recursive scanning of `<locale>.<extension>` files with pluggable decoders
//! - Fallback to a default locale for unknown locales
//! - Positional (`{0}`) and named (`{name}`) placeholder substitution
//!
//! # Example
//!
//! ```rust
//! use lingo_i18n::{args, named_args, I18nConfig, I18nManager, LanguageEntry, Localizer};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = I18nManager::new(
//!     I18nConfig::new("en")
//!         .with_entry(LanguageEntry::new("en").with_message("greeting", "Hello, {0}!"))
//!         .with_entry(LanguageEntry::new("hu").with_message("greeting", "Szia, {name}!")),
//! )?;
//!
//! let mut translator = manager.create("de");
//! assert_eq!(translator.locale(), "en");
//! assert_eq!(translator.translate("greeting", &args!["John"]), "Hello, John!");
//!
//! translator.change_locale("hu")?;
//! assert_eq!(
//!     translator.translate("greeting", &named_args! {"name" => "John"}),
//!     "Szia, John!"
//! );
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod args;
pub mod catalog;
pub mod config;
pub mod decoder;
pub mod error;
pub mod loader;
pub mod manager;
pub mod translator;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use args::Args;
pub use catalog::{Catalog, Messages};
pub use config::{I18nConfig, LanguageEntry, Message};
pub use decoder::{DecodeFn, DecoderRegistration, DecoderRegistry};
pub use error::{DecodeError, I18nError, I18nResult};
pub use loader::{CatalogLoader, LoadSummary};
pub use manager::I18nManager;
pub use translator::{Localizer, Translator};
