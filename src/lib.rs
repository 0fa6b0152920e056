/// Error types for the reporters
pub mod error;

/// Output entity types
pub mod reports;

/// Simulated reporters, one per binary
pub mod reporters;

/// Injectable clock and wait capabilities
pub mod runtime;

/// Shared emit / failure-routing contract
pub mod output;

// Re-export commonly used types
pub use error::ReportError;
