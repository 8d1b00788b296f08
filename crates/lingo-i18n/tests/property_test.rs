//! Property tests for locale fallback and lookup

use lingo_i18n::{Args, Catalog, I18nConfig, I18nManager, LanguageEntry, Localizer};
use proptest::prelude::*;

fn manager() -> I18nManager {
    I18nManager::new(
        I18nConfig::new("en")
            .with_entry(LanguageEntry::new("en").with_message("Hi", "Hi"))
            .with_entry(LanguageEntry::new("hu").with_message("Hi", "Szia")),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn unknown_locales_fall_back(locale in "[a-z]{2,3}(-[A-Z]{2})?") {
        prop_assume!(locale != "en" && locale != "hu");
        let translator = manager().create(&locale);
        prop_assert_eq!(translator.locale(), "en");
    }

    #[test]
    fn known_locales_are_kept(locale in prop::sample::select(vec!["en", "hu"])) {
        let translator = manager().create(locale);
        prop_assert_eq!(translator.locale(), locale);
    }

    #[test]
    fn untranslated_keys_are_returned(key in "\\PC*") {
        prop_assume!(key != "Hi");
        let translator = manager().create("hu");
        prop_assert_eq!(translator.translate(&key, &Args::None), key);
    }

    #[test]
    fn last_write_wins(key in "[a-zA-Z ]{1,16}", first in "\\PC*", second in "\\PC*") {
        let mut catalog = Catalog::new("en");
        catalog.insert("en", key.as_str(), first.as_str());
        catalog.insert("en", key.as_str(), second.as_str());
        prop_assert_eq!(catalog.lookup("en", &key), Some(second.as_str()));
    }

    #[test]
    fn reloading_is_idempotent(key in "[a-z]{1,8}", value in "\\PC*") {
        let entry = LanguageEntry::new("en").with_message(key.clone(), value.clone());
        let once = I18nManager::new(I18nConfig::new("en").with_entry(entry.clone())).unwrap();
        let twice = I18nManager::new(
            I18nConfig::new("en").with_entry(entry.clone()).with_entry(entry),
        )
        .unwrap();

        prop_assert_eq!(once.create("en").t(&key), twice.create("en").t(&key));
        prop_assert_eq!(once.languages(), twice.languages());
    }
}
