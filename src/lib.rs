// Export modules for library usage
pub mod analyzer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod graph;
pub mod io;
pub mod portfolio;
pub mod ranking;
pub mod readiness;
pub mod registry;
pub mod report;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{Error, MigrationTask, ReadinessInputs, Result, VendorAttributes};

pub use crate::analyzer::{MigrationAnalyzer, TaskPriority};
pub use crate::graph::{ExecutionOrder, TaskGraph};
pub use crate::portfolio::{Portfolio, PortfolioVendor, ReadinessAssessment};
pub use crate::ranking::{rank_descending, RankedEntry};
pub use crate::readiness::{ExitPhase, ExitPlan, ExitStage, ReadinessRegistry};
pub use crate::registry::{VendorRegistry, NEUTRAL_SCORE};
pub use crate::report::{PortfolioReport, ReadinessReport, VendorReport};
pub use crate::scoring::{
    exit_readiness_score, lock_in_breakdown, lock_in_score, migration_difficulty_score,
    readiness_breakdown, LockInBreakdown, ReadinessBreakdown, NEUTRAL_DIFFICULTY,
};

pub use crate::commands::analyze_portfolio;
pub use crate::config::VendormapConfig;
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
