//! news-sentiment - language-aware sentiment labelling for news datasets.
//!
//! Articles are cleaned, their language is detected, and each one is labelled
//! by a lexicon scorer (English) or a transformer model (Malay). Front ends
//! are a CLI, a web server and a report over saved results.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod language;
pub mod models;
pub mod sentiment;
pub mod server;
pub mod services;
pub mod text;
