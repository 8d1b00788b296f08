//! Demonstration of inline and file based catalogs
//!
//! Run with `cargo run --example basic_demo`. Set `RUST_LOG=debug` to see
//! which locale files are picked up.

use lingo_i18n::{args, named_args, I18nConfig, I18nManager, LanguageEntry, Localizer};
use std::fs;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let locales = tempfile::tempdir()?;
    fs::write(locales.path().join("en.json"), r#"{"Bye": "Bye, {0}!"}"#)?;
    fs::write(
        locales.path().join("hu.json"),
        r#"{"Bye": "Viszlát, {0}!", "What's up?": "Mizu, {name}?"}"#,
    )?;

    let manager = I18nManager::new(
        I18nConfig::new("en")
            .with_entry(LanguageEntry::new("en").with_message("Hi", "Hi"))
            .with_entry(LanguageEntry::new("hu").with_message("Hi", "Szia"))
            .with_load_dir(locales.path()),
    )?;

    println!("=== Basic Translation Demo ===\n");
    println!("Languages: {:?}", manager.languages());

    for requested in ["en", "hu", "fr"] {
        let translator = manager.create(requested);
        println!("\n{} -> {}:", requested, translator.locale());
        println!("  {}", translator.t("Hi"));
        println!("  {}", translator.translate("Bye", &args!["John"]));
        println!(
            "  {}",
            translator.translate("What's up?", &named_args! {"name" => "John"})
        );
    }

    let mut translator = manager.create("en");
    let branch = translator.clone();
    translator.change_locale("hu")?;
    println!("\nAfter change_locale: {} / clone still {}", translator.t("Hi"), branch.t("Hi"));

    if let Err(e) = translator.change_locale("fr") {
        println!("Expected failure: {}", e);
    }

    Ok(())
}
