use crate::reports::HealthSnapshot;
use crate::runtime::Clock;
use log::debug;

/// The services every snapshot reports as running
const RUNNING_SERVICES: [&str; 3] = ["web_server", "database", "api_gateway"];

/// Reporter that emits a simulated system health snapshot
///
/// All resource metrics are illustrative constants; only the timestamp
/// comes from the injected clock. Construction never fails.
pub struct HealthCheckReporter<C: Clock> {
    clock: C,
}

impl<C: Clock> HealthCheckReporter<C> {
    /// Create a new HealthCheckReporter
    ///
    /// # Arguments
    ///
    /// * `clock` - Source of the snapshot timestamp
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Produce one health snapshot
    pub fn run(&self) -> HealthSnapshot {
        debug!("Generating simulated health snapshot");

        HealthSnapshot {
            cpu_usage: "25%".to_string(),
            memory_usage: "40%".to_string(),
            disk_space: "70% used".to_string(),
            network_status: "OK".to_string(),
            services_running: RUNNING_SERVICES.iter().map(|s| s.to_string()).collect(),
            timestamp: self.clock.now(),
        }
    }
}
