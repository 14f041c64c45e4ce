//! Backend availability check.

use console::style;

use crate::config::Config;
use crate::language::LinguaDetector;
use crate::sentiment::{HfInferenceClassifier, PolarityScorer, TextClassifier, VaderScorer};

/// Show which analysis backends are usable.
pub async fn cmd_check(config: &Config) -> anyhow::Result<()> {
    println!("\n{}", style("Analysis Backend Status").bold());
    println!("{}", "-".repeat(50));

    println!("\n{}", style("English lexicon:").cyan());
    let vader = VaderScorer::new();
    let sample = vader.compound("I love this!");
    println!(
        "  {:<15} {} (sample score {:.3})",
        vader.backend_id(),
        style("✓ available").green(),
        sample
    );
    println!(
        "                  {}",
        style(format!(
            "positive >= {}, negative <= {}",
            config.lexicon.positive_threshold, config.lexicon.negative_threshold
        ))
        .dim()
    );

    println!("\n{}", style("Language detector:").cyan());
    match LinguaDetector::from_config(&config.language) {
        Ok(_) => {
            let languages = if config.language.uses_all() {
                "all".to_string()
            } else {
                config.language.languages.join(", ")
            };
            println!("  {:<15} {}", "lingua", style("✓ available").green());
            println!("                  {}", style(languages).dim());
        }
        Err(e) => {
            println!("  {:<15} {}", "lingua", style("✗ misconfigured").red());
            println!("                  {}", style(e).dim());
        }
    }

    println!("\n{}", style("Malay model:").cyan());
    let classifier = HfInferenceClassifier::new(config.malay.clone())?;
    let available = classifier.is_available().await;
    let status = if available {
        style("✓ available").green()
    } else if !config.malay.enabled {
        style("○ disabled").yellow()
    } else {
        style("✗ unreachable").red()
    };
    println!("  {:<15} {}", classifier.backend_id(), status);
    println!(
        "                  {}",
        style(format!("{} @ {}", config.malay.model, config.malay.endpoint)).dim()
    );
    if !available {
        println!(
            "                  {}",
            style(classifier.availability_hint()).dim()
        );
    }

    println!();
    Ok(())
}
