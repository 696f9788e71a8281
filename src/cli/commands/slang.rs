//! Slang table listing command handler.

use anyhow::Result;

use crate::config::ConfigManager;
use crate::translation::{SlangBook, display_name};
use crate::ui::Style;

/// Prints the active slang tables (built-ins merged with config entries).
///
/// With `lang`, prints only that language's table; a language without a
/// table is reported, not an error.
pub fn print_slang(lang: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default();
    let book = SlangBook::load(&config.slang);

    if let Some(lang) = lang {
        print_table(&book, lang);
        return Ok(());
    }

    for lang in book.languages() {
        print_table(&book, lang);
        println!();
    }

    Ok(())
}

fn print_table(book: &SlangBook, lang: &str) {
    let entries = book.entries(lang);
    if entries.is_empty() {
        println!("No slang table for '{lang}'. Substitution is a pass-through.");
        return;
    }

    let name = display_name(lang).unwrap_or(lang);
    println!("{} ({})", Style::header(name), Style::code(lang));
    for (slang, canonical) in entries {
        println!("  {:12} {}", Style::value(slang), Style::secondary(canonical));
    }
}
