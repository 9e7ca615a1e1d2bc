//! Command implementations

pub mod audit;
pub mod benchmark;
pub mod check;
pub mod play;
pub mod score;

pub use audit::{AuditStatistics, print_audit_statistics, run_audit};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use check::{CheckResult, check_word};
pub use play::run_play;
pub use score::{ScoreConfig, ScoreResult, score_word};
