//! Simulated reporters, one per demonstration binary

pub mod activity_reporter;
pub mod backup_reporter;
pub mod health_reporter;
pub mod log_reporter;

pub use activity_reporter::ActivityReporter;
pub use backup_reporter::BackupReporter;
pub use health_reporter::HealthCheckReporter;
pub use log_reporter::LogAnalysisReporter;
