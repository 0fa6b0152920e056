use crate::reports::{LogEntry, LogLevel, LogSummary};
use crate::runtime::Clock;
use log::debug;
use rand::Rng;

/// Reporter that emits a simulated log-analysis summary
///
/// Scans a fixed in-memory list of seven log entries, partitions it by
/// severity, and adds a random filler metric for output variety. Given the
/// fixed entry list the output is deterministic apart from that metric and
/// the timestamp.
pub struct LogAnalysisReporter<C: Clock> {
    clock: C,
}

impl<C: Clock> LogAnalysisReporter<C> {
    /// Create a new LogAnalysisReporter
    ///
    /// # Arguments
    ///
    /// * `clock` - Source of the analysis timestamp
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The fixed entry list every analysis pass scans
    fn sample_entries() -> Vec<LogEntry> {
        vec![
            LogEntry::new(LogLevel::Info, "User 'admin' logged in from 192.168.1.100"),
            LogEntry::new(LogLevel::Warning, "High CPU usage detected on process ID 1234"),
            LogEntry::new(LogLevel::Error, "Database connection failed: Timeout"),
            LogEntry::new(LogLevel::Info, "API endpoint /data accessed successfully"),
            LogEntry::new(LogLevel::Warning, "Disk space low on /var partition"),
            LogEntry::new(LogLevel::Error, "Unhandled exception in module 'processor.py'"),
            LogEntry::new(LogLevel::Info, "Scheduled backup completed"),
        ]
    }

    /// Produce one log summary
    ///
    /// Draws a single random integer in [100, 1000] for the filler metric.
    pub fn run<R: Rng>(&self, rng: &mut R) -> LogSummary {
        let entries = Self::sample_entries();
        debug!("Analyzing {} simulated log entries", entries.len());

        let recent_errors: Vec<LogEntry> = entries
            .iter()
            .filter(|entry| entry.level == LogLevel::Error)
            .cloned()
            .collect();
        let recent_warnings: Vec<LogEntry> = entries
            .iter()
            .filter(|entry| entry.level == LogLevel::Warning)
            .cloned()
            .collect();

        LogSummary {
            total_entries_simulated: entries.len(),
            errors_found: recent_errors.len(),
            warnings_found: recent_warnings.len(),
            recent_errors,
            recent_warnings,
            analysis_time: self.clock.now(),
            random_metric: rng.gen_range(100..=1000),
        }
    }
}
