//! Service layer for news-sentiment business logic.
//!
//! This module contains domain logic separated from UI concerns.
//! Services can be used by the CLI, the web server, or other interfaces.

pub mod analysis;
pub mod report;

pub use analysis::{
    discard_events, AnalysisContext, AnalysisEvent, AnalysisResult, AnalysisService,
    AnalysisSummary,
};
pub use report::{Report, ReportEntry};
