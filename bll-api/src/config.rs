//! Resting place for BLL's [Config] & friends


/// Configuration to dictate the tunable behaviors of the Business Logic Layer
pub struct Config {

    /// Log::warn! of any oddities found while replaying demos -- such as frames going back in time
    /// or shots of unknown guns. Those are not errors: the replay continues regardless.
    pub log_issues: bool,

    /// Minimum demo time, in milliseconds, between two position snapshots
    pub snapshot_interval_ms: i64,

    /// If true, the replay of a demo stops as soon as the game clock reaches the end of the match
    /// (as announced by its first `TimeUp` message), skipping whatever the demo recorded after it
    pub stop_at_time_up: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_issues: false,
            snapshot_interval_ms: 1000,
            stop_at_time_up: true,
        }
    }
}
