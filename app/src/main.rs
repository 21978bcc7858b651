//! Command line front end for the demo analysis architecture:
//!
//! ==================================================================
//! Extracts player statistics & position recordings out of
//! Cube 2: Sauerbraten demos, as TSV files.
//! Each PATH may be a demo file, a directory of demos or '-' (stdin).
//! ==================================================================
//!
//! USAGE:
//!     app [FLAGS] [OPTIONS] <SUBCOMMAND>
//!
//! FLAGS:
//!         --full-replay    Keeps replaying demos after the end of the match
//!     -h, --help           Prints help information
//!         --pedantic       Considers all errors as fatal -- even the ones that might be ignored (such as a corrupted demo in a directory)
//!     -V, --version        Prints version information
//!         --verbose        Outputs any non-fatal errors or inconsistencies in the demos to stderr
//!
//! OPTIONS:
//!         --protocol <protocol>    The game protocol the demos were recorded with: 259 or 260 [default: 260]
//!
//! SUBCOMMANDS:
//!     help          Prints this message or the help of the given subcommand(s)
//!     recordings    Writes where each player was, periodically, during each match -- one TSV per PATH
//!     statistics    Writes the statistics of every player that took part in each match -- one TSV per PATH
//!
//! Explore some execution options:
//!  - ./target/debug/app --help
//!  - ./target/debug/app statistics '<path_to_demos_dir>'                     # writes '<path_to_demos_dir>.tsv'
//!  - ./target/debug/app --protocol 259 statistics '<path_to_demo_file>'      # for demos recorded by older servers
//!  - ./target/debug/app --pedantic recordings '<path_to_demos_dir>'         # stop on the first corrupted demo
//!  - gunzip -c '<demo>.dmo.gz' | ./target/debug/app statistics -           # TSV goes to stdout

mod command_line;
mod inputs;

use command_line::Command;
use inputs::{ReportJob, ReportOutput};
use bll_api::DemoAnalysisApi;
use common::types::Result;
use dal_api::DemoFrames;
use std::{
    fs::File,
    io::{BufWriter, Write},
    sync::Arc,
};
use log::{warn, LevelFilter};

/// Buffer to allow efficient output operations
const OUTPUT_BUFFER_SIZE: usize = 1024 * 1024;

fn main() -> Result<()> {

    let command_line_options = command_line::parse_from_args();

    // start the logger
    simple_logger::SimpleLogger::new()
        .with_utc_timestamps()
        .with_level(if command_line_options.verbose { LevelFilter::Trace } else { LevelFilter::Warn })
        .init()
        .unwrap_or_else(|_| eprintln!("--> LOGGER WAS ALREADY STARTED"));

    let dal_config = Arc::new(dal_api::Config {
        protocol_version: command_line_options.protocol.into(),
        debug: command_line_options.verbose,
        ..dal_api::Config::default()
    });
    let logic_config = bll_api::Config {
        log_issues: command_line_options.verbose,
        stop_at_time_up: !command_line_options.full_replay,
        snapshot_interval_ms: match command_line_options.command {
            Command::Recordings { interval_ms, .. } => interval_ms,
            Command::Statistics { .. } => bll_api::Config::default().snapshot_interval_ms,
        },
    };
    let presentation_config = presentation::Config {
        log_errors: true,
        stop_on_errors: command_line_options.pedantic,
        only_active_players: !matches!(command_line_options.command, Command::Statistics { all_players: true, .. }),
    };
    let analyser = bll::DemoAnalyser::new(logic_config);

    for path in command_line_options.command.paths() {
        let report_job = match inputs::plan_report(path) {
            Ok(report_job) => report_job,
            Err(err) if command_line_options.pedantic => return Err(Box::from(err)),
            Err(err) => {
                warn!("Skipping '{path}': {err}");
                continue
            },
        };
        let ReportJob { demo_locators, output } = report_job;
        let demo_daos: Vec<Box<dyn DemoFrames>> = demo_locators.iter()
            .map(|demo_locator| dal::factory::instantiate_demo_dao(Arc::clone(&dal_config), demo_locator))
            .collect();
        let writer: Box<dyn Write> = match output {
            ReportOutput::File(ref output_path) => Box::new(File::create(output_path)
                .map_err(|err| format!("Couldn't create the report file '{}': {err}", output_path.display()))?),
            ReportOutput::Stdout => Box::new(std::io::stdout()),
        };
        let mut writer = BufWriter::with_capacity(OUTPUT_BUFFER_SIZE, writer);
        match command_line_options.command {
            Command::Statistics { .. } => presentation::to_tsv_statistics(&presentation_config, analyser.summarize_demos(demo_daos), &mut writer)?,
            Command::Recordings { .. } => presentation::to_tsv_recordings(&presentation_config, analyser.record_positions(demo_daos), &mut writer)?,
        }
        writer.flush()
            .map_err(|err| format!("Couldn't write the report for '{path}': {err}"))?;
    }

    Ok(())
}
