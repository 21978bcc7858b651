//! Resting place for Presentation's [Config] & friends

/// Configuration for the Presentation crate
pub struct Config {

    /// If false, ignore any errors and continue with the generation of the report
    pub stop_on_errors: bool,

    /// If true, logs any errors found on the generation of the report
    pub log_errors: bool,

    /// If true, statistics are only reported for players that took part in the match
    /// -- see [model::game::Player::is_reportable()]. If false, every known client slot is reported.
    pub only_active_players: bool,

}

impl Default for Config {
    fn default() -> Self {
        Self {
            stop_on_errors: false,
            log_errors: true,
            only_active_players: true,
        }
    }
}
