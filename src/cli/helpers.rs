//! Shared helper functions for CLI commands.

use std::sync::Arc;

use console::style;
use indicatif::ProgressStyle;

use crate::config::Config;
use crate::services::AnalysisContext;

/// Shorten `s` to at most `max` characters, marking the cut with `...`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Progress bar style shared by long-running commands.
pub fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓░")
}

/// Build the detector and scorers, reporting what was loaded.
pub fn load_context(config: &Config) -> anyhow::Result<Arc<AnalysisContext>> {
    let languages = if config.language.uses_all() {
        "all languages".to_string()
    } else {
        format!("{} languages", config.language.languages.len())
    };
    println!(
        "{} Loading models (detector: {}, Malay model: {})",
        style("→").cyan(),
        languages,
        config.malay.model
    );
    let context = AnalysisContext::from_config(config)?;
    Ok(Arc::new(context))
}
