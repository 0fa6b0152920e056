use crate::reports::BackupRecord;
use crate::runtime::{Clock, Waiter};
use log::debug;
use rand::Rng;
use std::time::Duration;

const DATABASE_NAME: &str = "production_db";
const BACKUP_TYPE: &str = "full";
const STORAGE_LOCATION: &str = "/mnt/backups/db/";

/// Reporter that emits a simulated database backup record
///
/// Fabricates size and duration, then blocks through the injected waiter
/// for a fifth of the fabricated duration to simulate work. This is the
/// only reporter with an observable time cost.
pub struct BackupReporter<C: Clock, W: Waiter> {
    clock: C,
    waiter: W,
}

impl<C: Clock, W: Waiter> BackupReporter<C, W> {
    /// Create a new BackupReporter
    ///
    /// # Arguments
    ///
    /// * `clock` - Source of the backup reference time
    /// * `waiter` - Capability used for the simulated work delay
    pub fn new(clock: C, waiter: W) -> Self {
        Self { clock, waiter }
    }

    /// Produce one backup record
    ///
    /// Draws a size in [500, 2000] MB and a duration in [5, 15] seconds,
    /// then waits `duration / 5` seconds before building the record.
    pub fn run<R: Rng>(&self, rng: &mut R) -> BackupRecord {
        let size_mb = rng.gen_range(500..=2000);
        let duration_seconds: u32 = rng.gen_range(5..=15);

        // Single reference time for the id and both timestamp fields, so
        // end_time - start_time always equals duration_seconds.
        let start_time = self.clock.now();

        debug!(
            "Simulating {}s backup of {} ({} MB)",
            duration_seconds, DATABASE_NAME, size_mb
        );
        self.waiter
            .wait(Duration::from_secs_f64(f64::from(duration_seconds) / 5.0));

        BackupRecord {
            backup_id: format!("backup_{}", start_time.format("%Y%m%d_%H%M%S")),
            status: "success".to_string(),
            database_name: DATABASE_NAME.to_string(),
            backup_type: BACKUP_TYPE.to_string(),
            size_mb,
            duration_seconds,
            start_time,
            end_time: start_time + chrono::Duration::seconds(i64::from(duration_seconds)),
            storage_location: STORAGE_LOCATION.to_string(),
            checksum_verified: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{FrozenClock, MockWaiter, NoWait};
    use chrono::{TimeZone, Utc};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn frozen_clock() -> FrozenClock {
        FrozenClock::new(Utc.with_ymd_and_hms(2026, 8, 23, 9, 30, 0).unwrap())
    }

    #[test]
    fn test_record_has_the_fixed_metadata() {
        let reporter = BackupReporter::new(frozen_clock(), NoWait);
        let record = reporter.run(&mut StdRng::seed_from_u64(7));

        assert_eq!(record.status, "success");
        assert_eq!(record.database_name, "production_db");
        assert_eq!(record.backup_type, "full");
        assert_eq!(record.storage_location, "/mnt/backups/db/");
        assert!(record.checksum_verified);
    }

    #[test]
    fn test_backup_id_combines_prefix_and_reference_time() {
        let reporter = BackupReporter::new(frozen_clock(), NoWait);
        let record = reporter.run(&mut StdRng::seed_from_u64(7));

        assert_eq!(record.backup_id, "backup_20260823_093000");
    }

    #[test]
    fn test_duration_invariant_holds_exactly() {
        let reporter = BackupReporter::new(frozen_clock(), NoWait);
        let record = reporter.run(&mut StdRng::seed_from_u64(7));

        let elapsed = record.end_time - record.start_time;
        assert_eq!(elapsed.num_seconds(), i64::from(record.duration_seconds));
    }

    #[test]
    fn test_waiter_is_invoked_once_with_a_fifth_of_the_duration() {
        let mut waiter = MockWaiter::new();
        waiter
            .expect_wait()
            .withf(|duration| {
                // duration_seconds is in [5, 15], so the delay is in [1s, 3s]
                *duration >= Duration::from_secs(1) && *duration <= Duration::from_secs(3)
            })
            .times(1)
            .return_const(());

        let reporter = BackupReporter::new(frozen_clock(), waiter);
        reporter.run(&mut StdRng::seed_from_u64(7));
    }
}
