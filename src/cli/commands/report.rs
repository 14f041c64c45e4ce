//! Result report command.

use std::path::Path;

use console::style;

use crate::services::report::{self, Report};

/// Print aggregates over a saved results file.
pub async fn cmd_report(results: &Path, top: usize, json: bool) -> anyhow::Result<()> {
    let path = results.to_path_buf();
    let entries = tokio::task::spawn_blocking(move || report::load_entries(&path))
        .await?
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", results.display(), e))?;
    let report = Report::build(&entries, top);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report, results);
    Ok(())
}

fn print_report(report: &Report, results: &Path) {
    println!(
        "\n{} {}",
        style("Sentiment report:").bold(),
        results.display()
    );
    println!("{}", "-".repeat(50));

    if report.total == 0 {
        println!("  {}", style("No labelled rows").dim());
        return;
    }

    println!("\n{}", style("Distribution").cyan());
    for share in &report.distribution {
        println!(
            "  {:<12} {:>6} {:>6.1}%  {}",
            share.label,
            share.count,
            share.percent,
            style(share.color).dim()
        );
    }
    println!("  {:<12} {:>6}", "Total", report.total);

    println!("\n{}", style("By language").cyan());
    print!("  {:<10}", "language");
    for sentiment in &report.sentiments {
        print!(" {:>10}", sentiment);
    }
    println!(" {:>8}", "total");
    for breakdown in &report.by_language {
        print!("  {:<10}", breakdown.language);
        for sentiment in &report.sentiments {
            print!(
                " {:>10}",
                breakdown.counts.get(sentiment).copied().unwrap_or(0)
            );
        }
        println!(" {:>8}", breakdown.total);
    }

    for group in &report.word_groups {
        println!(
            "\n{} ({} articles)",
            style(format!("{} words", group.group)).cyan(),
            group.articles
        );
        if group.words.is_empty() {
            println!("  {}", style("none").dim());
            continue;
        }
        let line = group
            .words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {}", line);
    }
}
