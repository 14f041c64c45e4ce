//! Single-text diagnostics: cleaning and language detection.

use console::style;

use crate::config::Config;
use crate::language::{detect_language, LinguaDetector};
use crate::text::clean_text;

/// Print the cleaned form of `text`.
pub fn cmd_clean(text: &str) -> anyhow::Result<()> {
    println!("{}", clean_text(Some(text)));
    Ok(())
}

/// Clean `text` and print the detected language code.
pub fn cmd_detect(config: &Config, text: &str) -> anyhow::Result<()> {
    let detector = LinguaDetector::from_config(&config.language)?;
    let cleaned = clean_text(Some(text));
    let language = detect_language(&detector, &cleaned);
    println!("{} {}", style(&language).bold(), style(format!("({})", cleaned)).dim());
    Ok(())
}
