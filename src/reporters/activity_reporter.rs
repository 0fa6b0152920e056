use crate::reports::{Activity, ActivityReport};
use crate::runtime::Clock;
use log::debug;
use rand::Rng;

/// The users activities are attributed to
const USERS: [&str; 4] = ["alice", "bob", "charlie", "diana"];

/// The actions a user can be reported to have performed
const ACTIONS: [&str; 5] = [
    "login",
    "logout",
    "view_dashboard",
    "update_profile",
    "execute_automation",
];

const GENERATED_BY: &str = "Automation System";

/// Reporter that emits a simulated user activity report
///
/// Generates between 5 and 15 activities with users and actions drawn
/// uniformly from fixed sets, timestamped within the last hour and sorted
/// most recent first.
pub struct ActivityReporter<C: Clock> {
    clock: C,
}

impl<C: Clock> ActivityReporter<C> {
    /// Create a new ActivityReporter
    ///
    /// # Arguments
    ///
    /// * `clock` - Source of the report date and activity time base
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Produce one activity report
    pub fn run<R: Rng>(&self, rng: &mut R) -> ActivityReport {
        let now = self.clock.now();
        let count = rng.gen_range(5..=15);
        debug!("Generating {count} simulated activities");

        let mut activities = Vec::with_capacity(count);
        for _ in 0..count {
            let user = USERS[rng.gen_range(0..USERS.len())];
            let action = ACTIONS[rng.gen_range(0..ACTIONS.len())];
            let offset_minutes: i64 = rng.gen_range(1..=60);

            activities.push(Activity {
                user: user.to_string(),
                action: action.to_string(),
                timestamp: now - chrono::Duration::minutes(offset_minutes),
                details: format!("User {user} performed {action}."),
            });
        }

        activities.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        ActivityReport {
            report_date: now.date_naive(),
            total_activities: activities.len(),
            activities,
            generated_by: GENERATED_BY.to_string(),
        }
    }
}
