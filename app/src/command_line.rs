//! Configs that are gathered from the command line -- see [CommandLineOptions]

use cube2_demo::ProtocolVersion;
use structopt::StructOpt;
use strum_macros::{Display, EnumString};


/// Command-line options
#[derive(Debug,StructOpt)]
#[structopt(about = "
==================================================================
Extracts player statistics & position recordings out of
Cube 2: Sauerbraten demos, as TSV files.
Each PATH may be a demo file, a directory of demos or '-' (stdin).
==================================================================
")]
pub struct CommandLineOptions {

    // FLAGS
    ////////

    /// Outputs any non-fatal errors or inconsistencies in the demos to stderr
    #[structopt(long)]
    pub verbose: bool,

    /// Considers all errors as fatal -- even the ones that might be ignored (such as a corrupted demo in a directory)
    #[structopt(long)]
    pub pedantic: bool,

    /// Keeps replaying demos after the end of the match
    #[structopt(long)]
    pub full_replay: bool,


    // OPTIONS
    //////////

    /// The game protocol the demos were recorded with: 259 or 260
    #[structopt(long, default_value = "260")]
    pub protocol: ProtocolOption,


    // COMMANDS
    ///////////

    #[structopt(subcommand)]
    pub command: Command,

}

#[derive(Debug,StructOpt)]
pub enum Command {

    /// Writes the statistics of every player that took part in each match -- one TSV per PATH
    Statistics {
        /// Also reports connected players that didn't take part in the match (spectators, idle players)
        #[structopt(long)]
        all_players: bool,

        /// Demo files or directories of demo files
        #[structopt(required = true)]
        paths: Vec<String>,
    },

    /// Writes where each player was, periodically, during each match -- one TSV per PATH
    Recordings {
        /// Demo time between two position snapshots, in milliseconds
        #[structopt(long, default_value = "1000")]
        interval_ms: i64,

        /// Demo files or directories of demo files
        #[structopt(required = true)]
        paths: Vec<String>,
    },

}

impl Command {

    pub fn paths(&self) -> &[String] {
        match self {
            Command::Statistics { paths, .. } |
            Command::Recordings { paths, .. } => paths,
        }
    }
}

/// Protocol versions, as typed in the command line
#[derive(Debug, Clone, Copy, PartialEq, Display, EnumString)]
pub enum ProtocolOption {
    #[strum(serialize = "259")]
    Protocol259,
    #[strum(serialize = "260")]
    Protocol260,
}

impl From<ProtocolOption> for ProtocolVersion {
    fn from(protocol_option: ProtocolOption) -> Self {
        match protocol_option {
            ProtocolOption::Protocol259 => ProtocolVersion::Protocol259,
            ProtocolOption::Protocol260 => ProtocolVersion::Protocol260,
        }
    }
}

pub fn parse_from_args() -> CommandLineOptions {
    CommandLineOptions::from_args()
}


/// Unit tests for the [command_line](super) module
#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;


    #[test]
    fn protocols() {
        assert_eq!(ProtocolOption::from_str("259"), Ok(ProtocolOption::Protocol259));
        assert_eq!(ProtocolVersion::from(ProtocolOption::from_str("260").expect("260 is valid")), ProtocolVersion::Protocol260);
        assert!(ProtocolOption::from_str("261").is_err());
        assert_eq!(ProtocolOption::Protocol259.to_string(), "259");
    }

    #[test]
    fn statistics_command() {
        let options = CommandLineOptions::from_iter(["app", "--verbose", "--protocol", "259", "statistics", "--all-players", "a.dmo", "demos"]);
        assert!(options.verbose);
        assert!(!options.pedantic);
        assert_eq!(options.protocol, ProtocolOption::Protocol259);
        assert!(matches!(options.command, Command::Statistics { all_players: true, .. }));
        assert_eq!(options.command.paths(), ["a.dmo".to_string(), "demos".to_string()]);
    }

    #[test]
    fn recordings_command() {
        let options = CommandLineOptions::from_iter(["app", "recordings", "-"]);
        assert_eq!(options.protocol, ProtocolOption::Protocol260);
        assert!(matches!(options.command, Command::Recordings { interval_ms: 1000, .. }));
        assert_eq!(options.command.paths(), ["-".to_string()]);
    }

    #[test]
    fn paths_are_required() {
        assert!(CommandLineOptions::from_iter_safe(["app", "statistics"]).is_err());
    }
}
