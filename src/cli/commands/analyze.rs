//! Dataset analysis command.

use std::path::{Path, PathBuf};

use console::style;
use indicatif::ProgressBar;
use tokio::sync::mpsc;

use crate::cli::helpers::{bar_style, load_context, truncate};
use crate::config::{Config, Settings};
use crate::dataset;
use crate::services::{AnalysisEvent, AnalysisService};

/// Output file layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputLayout {
    /// Title, Content, Language, Sentiment
    #[default]
    Summary,
    /// Every input column plus cleaned text, languages and predicted_sentiment
    Full,
}

/// Where results go when no output path is given.
fn default_output_path(settings: &Settings, input: &Path, layout: OutputLayout) -> PathBuf {
    match layout {
        OutputLayout::Summary => settings.results_path(),
        OutputLayout::Full => {
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("dataset");
            settings.output_dir.join(format!("{}_results.csv", stem))
        }
    }
}

/// Analyze a CSV dataset and write the labelled results.
pub async fn cmd_analyze(
    settings: &Settings,
    config: &Config,
    input: &Path,
    output: Option<PathBuf>,
    layout: OutputLayout,
    print: bool,
) -> anyhow::Result<()> {
    let input_owned = input.to_path_buf();
    let mut dataset = tokio::task::spawn_blocking(move || dataset::load_path(&input_owned))
        .await?
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", input.display(), e))?;
    println!(
        "{} Loaded {} rows from {} (columns: {})",
        style("→").cyan(),
        dataset.len(),
        input.display(),
        dataset.headers.join(", ")
    );

    let context = load_context(config)?;
    let service = AnalysisService::new(context);

    service.preprocess(&mut dataset);
    println!("  {} Preprocessing complete", style("✓").green());

    let (event_tx, mut event_rx) = mpsc::channel::<AnalysisEvent>(100);

    // Spawn event handler for UI
    let event_handler = tokio::spawn(async move {
        let mut progress: Option<ProgressBar> = None;

        while let Some(event) = event_rx.recv().await {
            match event {
                AnalysisEvent::Started { total_rows } => {
                    println!(
                        "{} Scoring sentiment for {} rows",
                        style("→").cyan(),
                        total_rows
                    );
                    let pb = ProgressBar::new(total_rows as u64);
                    pb.set_style(bar_style());
                    pb.set_message("Scoring...");
                    progress = Some(pb);
                }
                AnalysisEvent::RowCompleted { title, .. } => {
                    if let Some(ref pb) = progress {
                        pb.set_message(truncate(&title, 40));
                        pb.inc(1);
                    }
                }
                AnalysisEvent::RowFailed {
                    index,
                    title,
                    error,
                } => {
                    let line = format!(
                        "  {} Row {} ({}) failed: {}",
                        style("✗").red(),
                        index,
                        truncate(&title, 40),
                        error
                    );
                    match progress {
                        Some(ref pb) => {
                            pb.suspend(|| eprintln!("{}", line));
                            pb.inc(1);
                        }
                        None => eprintln!("{}", line),
                    }
                }
                AnalysisEvent::Finished { summary } => {
                    if let Some(pb) = progress.take() {
                        pb.finish_and_clear();
                    }
                    println!(
                        "{} Analysis complete: {} rows, {} scored, {} unknown language, {} invalid",
                        style("✓").green(),
                        summary.total,
                        summary.scored,
                        summary.unknown,
                        summary.invalid
                    );
                    for (label, count) in &summary.by_label {
                        println!("    {:<12} {}", label, count);
                    }
                    if summary.failed > 0 {
                        println!("  {} {} rows failed", style("!").yellow(), summary.failed);
                    }
                }
            }
        }
    });

    let result = service.analyze(&mut dataset, event_tx).await;
    let _ = event_handler.await;
    let result = result?;

    let output_path = output.unwrap_or_else(|| default_output_path(settings, input, layout));
    match layout {
        OutputLayout::Summary => dataset::write_results(&output_path, &result.rows)?,
        OutputLayout::Full => dataset::write_full(&output_path, &dataset)?,
    }
    println!(
        "{} Results saved to: {}",
        style("✓").green(),
        output_path.display()
    );

    if print {
        println!();
        for row in &result.rows {
            println!("{} — {}", row.title, row.sentiment);
        }
    }

    Ok(())
}
