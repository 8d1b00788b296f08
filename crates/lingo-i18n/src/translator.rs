//! Locale-bound translators

use crate::args::Args;
use crate::catalog::Catalog;
use crate::error::{I18nError, I18nResult};
use std::sync::Arc;

/// Capabilities of a locale-bound translation handle
pub trait Localizer: Clone {
    /// Current locale
    fn locale(&self) -> &str;

    /// Rebind to `locale`.
    ///
    /// Unlike translator creation this does not fall back: an unknown locale
    /// is an error and leaves the current binding untouched.
    fn change_locale(&mut self, locale: &str) -> I18nResult<()>;

    /// Translate `key` in the current locale and substitute `args`.
    ///
    /// A key without translation is used as the message text itself.
    fn translate(&self, key: &str, args: &Args) -> String;

    /// Translate `key` without arguments
    fn t(&self, key: &str) -> String {
        self.translate(key, &Args::None)
    }

    /// Locales known to the shared catalog
    fn languages(&self) -> &[String];
}

/// Translator sharing a read-only [`Catalog`]
///
/// Cloning is cheap: the clone shares the catalog and starts with the same
/// locale, which it can then change independently.
#[derive(Debug, Clone)]
pub struct Translator {
    catalog: Arc<Catalog>,
    locale: String,
}

impl Translator {
    pub(crate) fn new(catalog: Arc<Catalog>, locale: impl Into<String>) -> Self {
        Self {
            catalog,
            locale: locale.into(),
        }
    }

    /// Catalog this translator reads from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Localizer for Translator {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn change_locale(&mut self, locale: &str) -> I18nResult<()> {
        if !self.catalog.is_known(locale) {
            return Err(I18nError::LocaleNotFound {
                locale: locale.to_string(),
            });
        }
        self.locale = locale.to_string();
        Ok(())
    }

    fn translate(&self, key: &str, args: &Args) -> String {
        let message = self.catalog.lookup(&self.locale, key).unwrap_or(key);
        args.apply(message)
    }

    fn languages(&self) -> &[String] {
        self.catalog.languages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, named_args};

    fn catalog() -> Arc<Catalog> {
        let mut catalog = Catalog::new("en");
        catalog.merge("en", [("Hi", "Hi"), ("Greet", "Hello, {0}!")]);
        catalog.merge("hu", [("Hi", "Szia"), ("Greet", "Szia, {name}!")]);
        Arc::new(catalog)
    }

    #[test]
    fn test_translate_known_key() {
        let translator = Translator::new(catalog(), "hu");
        assert_eq!(translator.t("Hi"), "Szia");
    }

    #[test]
    fn test_untranslated_key_is_returned() {
        let translator = Translator::new(catalog(), "en");
        assert_eq!(translator.t("Missing"), "Missing");
        assert_eq!(translator.translate("Hey, {0}", &args!["John"]), "Hey, John");
    }

    #[test]
    fn test_substitution_on_translated_text() {
        let mut translator = Translator::new(catalog(), "en");
        assert_eq!(translator.translate("Greet", &args!["Ann"]), "Hello, Ann!");

        translator.change_locale("hu").unwrap();
        assert_eq!(
            translator.translate("Greet", &named_args! {"name" => "Anna"}),
            "Szia, Anna!"
        );
    }

    #[test]
    fn test_change_locale_to_unknown_keeps_binding() {
        let mut translator = Translator::new(catalog(), "hu");

        let err = translator.change_locale("fr").unwrap_err();
        assert!(matches!(err, I18nError::LocaleNotFound { ref locale } if locale == "fr"));
        assert_eq!(err.to_string(), "Language fr not found");
        assert_eq!(translator.locale(), "hu");
        assert_eq!(translator.t("Hi"), "Szia");
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Translator::new(catalog(), "en");
        let mut branch = original.clone();
        branch.change_locale("hu").unwrap();

        assert_eq!(original.locale(), "en");
        assert_eq!(branch.locale(), "hu");
        assert!(Arc::ptr_eq(&original.catalog, &branch.catalog));
    }

    #[test]
    fn test_languages() {
        let translator = Translator::new(catalog(), "en");
        assert_eq!(translator.languages(), ["en", "hu"]);
    }
}
