//! Internationalization manager

use crate::args::Args;
use crate::catalog::Catalog;
use crate::config::I18nConfig;
use crate::decoder::DecoderRegistry;
use crate::error::I18nResult;
use crate::loader::CatalogLoader;
use crate::translator::{Localizer, Translator};
use std::sync::Arc;
use tracing::info;

/// Owns the shared catalog and hands out translators
///
/// The catalog is built once in [`I18nManager::new`] and is read-only
/// afterwards, so translators may be used from any thread.
#[derive(Debug, Clone)]
pub struct I18nManager {
    catalog: Arc<Catalog>,
}

impl I18nManager {
    /// Build the catalog: inline data first, then the locale directory.
    ///
    /// Fails only when the locale directory cannot be walked; unreadable or
    /// undecodable files are skipped.
    pub fn new(config: I18nConfig) -> I18nResult<Self> {
        let mut catalog = Catalog::new(config.fallback_locale.as_str());
        let mut loader = CatalogLoader::new(&mut catalog);

        loader.load_entries(&config.data);

        if let Some(dir) = config.scan_dir() {
            let default_decoders;
            let decoders = match &config.decoders {
                Some(decoders) => decoders,
                None => {
                    default_decoders = DecoderRegistry::default();
                    &default_decoders
                }
            };
            loader.load_dir(dir, decoders)?;
        }

        info!(
            "I18nManager initialized with fallback locale {} and languages {:?}",
            catalog.fallback_locale(),
            catalog.languages()
        );

        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }

    /// Translator bound to `locale`, or to the fallback locale if unknown
    pub fn create(&self, locale: &str) -> Translator {
        let locale = self.catalog.resolve_locale(locale);
        Translator::new(Arc::clone(&self.catalog), locale)
    }

    /// Translate function bound to `locale`
    pub fn create_t(&self, locale: &str) -> impl Fn(&str, &Args) -> String + Send + Sync {
        let translator = self.create(locale);
        move |key: &str, args: &Args| translator.translate(key, args)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn fallback_locale(&self) -> &str {
        self.catalog.fallback_locale()
    }

    /// Known locales in load order
    pub fn languages(&self) -> &[String] {
        self.catalog.languages()
    }
}
