//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod analyze;
mod check;
mod inspect;
mod report;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

pub use analyze::OutputLayout;

#[derive(Parser)]
#[command(name = "news-sentiment")]
#[command(about = "Language-aware sentiment labelling for news article datasets")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Data directory for uploads and results (overrides config file)
    #[arg(long, global = true, env = "NEWS_SENTIMENT_DATA_DIR")]
    data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Clean, detect language and score sentiment for every row of a CSV file
    Analyze {
        /// Input CSV with a Content column (Title optional)
        input: PathBuf,
        /// Output CSV path (default: <data>/output/results.csv, or
        /// <data>/output/<input stem>_results.csv with --layout full)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output layout
        #[arg(long, value_enum, default_value = "summary")]
        layout: OutputLayout,
        /// Print "Title — sentiment" for each row
        #[arg(short, long)]
        print: bool,
    },

    /// Start the web server
    Serve {
        /// Bind address: PORT, HOST, or HOST:PORT
        #[arg(default_value = "127.0.0.1:5000")]
        bind: String,
    },

    /// Summarize a results CSV (distribution, languages, frequent words)
    Report {
        /// Results CSV written by `analyze` or the server
        results: PathBuf,
        /// Words to list per language group
        #[arg(long, default_value = "10")]
        top: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the cleaned form of a text
    Clean {
        /// Text to clean
        text: String,
    },

    /// Print the detected language of a text
    Detect {
        /// Text to classify
        text: String,
    },

    /// Check availability of the lexicon, detector and Malay model
    Check,
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        data: cli.data,
    };
    let (settings, config) = load_settings_with_options(options).await?;
    tracing::debug!("Using data directory {}", settings.data_dir.display());

    match cli.command {
        Commands::Analyze {
            input,
            output,
            layout,
            print,
        } => analyze::cmd_analyze(&settings, &config, &input, output, layout, print).await,
        Commands::Serve { bind } => serve::cmd_serve(&settings, &config, &bind).await,
        Commands::Report { results, top, json } => report::cmd_report(&results, top, json).await,
        Commands::Clean { text } => inspect::cmd_clean(&text),
        Commands::Detect { text } => inspect::cmd_detect(&config, &text),
        Commands::Check => check::cmd_check(&config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "news-sentiment",
            "analyze",
            "news.csv",
            "--layout",
            "full",
            "-o",
            "out.csv",
            "--print",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze {
                input,
                output,
                layout,
                print,
            } => {
                assert_eq!(input, PathBuf::from("news.csv"));
                assert_eq!(output, Some(PathBuf::from("out.csv")));
                assert_eq!(layout, OutputLayout::Full);
                assert!(print);
            }
            _ => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_output_help_names_both_layout_defaults() {
        use clap::CommandFactory;
        let command = Cli::command();
        let analyze = command.find_subcommand("analyze").unwrap();
        let output = analyze
            .get_arguments()
            .find(|arg| arg.get_id() == "output")
            .unwrap();
        let help = output.get_help().unwrap().to_string();
        assert!(help.contains("results.csv"));
        assert!(help.contains("<input stem>_results.csv"));
    }

    #[test]
    fn test_serve_default_bind() {
        let cli = Cli::try_parse_from(["news-sentiment", "serve"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { bind } if bind == "127.0.0.1:5000"));
    }
}
