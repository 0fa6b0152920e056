//! Output entity types for the simulated operations reporters
//!
//! This module defines the report structures emitted by the four reporters.
//! Every entity is built fresh for a single invocation, serialized once, and
//! discarded; nothing here is mutated after construction.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Timestamp type for consistent time handling across the application
pub type Timestamp = DateTime<Utc>;

/// Simulated system health snapshot
///
/// All resource metrics are illustrative constants; only the timestamp
/// varies between invocations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthSnapshot {
    /// CPU usage as a display string (e.g., "25%")
    pub cpu_usage: String,
    /// Memory usage as a display string
    pub memory_usage: String,
    /// Disk space usage as a display string
    pub disk_space: String,
    /// Overall network status
    pub network_status: String,
    /// Names of the services reported as running
    pub services_running: Vec<String>,
    /// When the snapshot was generated
    pub timestamp: Timestamp,
}

/// Severity level of a simulated log entry
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Warning that may require attention
    Warning,
    /// Error indicating a problem
    Error,
}

/// A single simulated log entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    /// Severity of the entry
    pub level: LogLevel,
    /// The log message content
    pub message: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Summary of a simulated log-analysis pass
///
/// Invariant: `errors_found` and `warnings_found` equal the lengths of
/// `recent_errors` and `recent_warnings` respectively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogSummary {
    /// How many entries were scanned
    pub total_entries_simulated: usize,
    /// Count of ERROR-level entries
    pub errors_found: usize,
    /// Count of WARNING-level entries
    pub warnings_found: usize,
    /// The ERROR-level entries, in scan order
    pub recent_errors: Vec<LogEntry>,
    /// The WARNING-level entries, in scan order
    pub recent_warnings: Vec<LogEntry>,
    /// When the analysis was generated
    pub analysis_time: Timestamp,
    /// Random filler metric with no semantic meaning
    pub random_metric: u32,
}

/// Record of a simulated database backup
///
/// Invariant: `end_time - start_time` equals `duration_seconds` exactly;
/// both fields derive from a single reference time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BackupRecord {
    /// Identifier combining a fixed prefix and the reference time
    pub backup_id: String,
    /// Outcome of the simulated backup, always "success"
    pub status: String,
    /// Name of the backed-up database
    pub database_name: String,
    /// Kind of backup performed
    pub backup_type: String,
    /// Simulated backup size in megabytes
    pub size_mb: u32,
    /// Simulated backup duration in seconds
    pub duration_seconds: u32,
    /// When the backup started
    pub start_time: Timestamp,
    /// When the backup finished
    pub end_time: Timestamp,
    /// Where the backup was written
    pub storage_location: String,
    /// Whether the checksum was verified, always true
    pub checksum_verified: bool,
}

/// A single simulated user action
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// User who performed the action
    pub user: String,
    /// Name of the action performed
    pub action: String,
    /// When the action happened
    pub timestamp: Timestamp,
    /// Human-readable description of the action
    pub details: String,
}

/// Report of recent simulated user activity
///
/// Invariant: `activities` is sorted by timestamp descending and
/// `total_activities` equals its length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityReport {
    /// Date the report covers
    pub report_date: NaiveDate,
    /// Number of activities in the report
    pub total_activities: usize,
    /// The activities, most recent first
    pub activities: Vec<Activity>,
    /// Label identifying the report producer
    pub generated_by: String,
}
