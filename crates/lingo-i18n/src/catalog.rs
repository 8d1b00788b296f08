//! Merged per-locale message tables

use std::collections::HashMap;
use tracing::debug;

/// Flat key → message text mapping for a single locale
pub type Messages = HashMap<String, String>;

/// Per-locale message tables plus the known locales and the fallback locale.
///
/// A locale is present in the table exactly when it is listed in
/// [`Catalog::languages`]. Mutation happens only while an
/// [`I18nManager`](crate::I18nManager) is being built; afterwards the catalog
/// is shared read-only.
#[derive(Debug, Clone)]
pub struct Catalog {
    fallback_locale: String,
    /// Known locales in first-seen order
    languages: Vec<String>,
    table: HashMap<String, Messages>,
}

impl Catalog {
    /// Create an empty catalog with the given fallback locale
    pub fn new(fallback_locale: impl Into<String>) -> Self {
        Self {
            fallback_locale: fallback_locale.into(),
            languages: Vec::new(),
            table: HashMap::new(),
        }
    }

    /// Locale substituted for unknown ones
    pub fn fallback_locale(&self) -> &str {
        &self.fallback_locale
    }

    /// Known locales in the order they were first loaded
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Check whether `locale` has been loaded
    pub fn is_known(&self, locale: &str) -> bool {
        self.languages.iter().any(|known| known == locale)
    }

    /// Return `requested` if known, otherwise the fallback locale.
    ///
    /// The fallback is returned even when it was never loaded itself.
    pub fn resolve_locale<'a>(&'a self, requested: &'a str) -> &'a str {
        if self.is_known(requested) {
            requested
        } else {
            debug!(
                "Locale '{}' is not loaded, using fallback '{}'",
                requested, self.fallback_locale
            );
            &self.fallback_locale
        }
    }

    /// Look up the message text for `key` in `locale`
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.table
            .get(locale)
            .and_then(|messages| messages.get(key))
            .map(String::as_str)
    }

    /// All messages loaded for `locale`
    pub fn messages(&self, locale: &str) -> Option<&Messages> {
        self.table.get(locale)
    }

    /// Upsert a single message, registering the locale if needed
    pub fn insert(
        &mut self,
        locale: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.locale_mut(locale.into()).insert(key.into(), value.into());
    }

    /// Upsert every pair into `locale`, registering the locale if needed.
    ///
    /// Existing keys are overwritten, so the last write wins.
    pub fn merge<I, K, V>(&mut self, locale: impl Into<String>, messages: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let table = self.locale_mut(locale.into());
        for (key, value) in messages {
            table.insert(key.into(), value.into());
        }
    }

    fn locale_mut(&mut self, locale: String) -> &mut Messages {
        if !self.is_known(&locale) {
            self.languages.push(locale.clone());
        }
        self.table.entry(locale).or_default()
    }
}
