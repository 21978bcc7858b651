//! Small crate to be a central point for presentation requisites.
//!
//! Shows the `Stream`s produced by the BLL as Tab Separated Values: one row per player
//! for statistics & one row per player position for recordings.

mod config;
pub use config::Config;

use common::types::Result;
use model::{
    errors::DemoError,
    game::{Game, Player},
    report::{GamesStream, PositionSnapshot, SnapshotsStream},
};
use std::io::Write;
use log::warn;


/// Names of the guns, in the order of the per-weapon statistics
const GUN_NAMES: [&str; 7] = ["Fist", "Shotgun", "Chaingun", "RocketLauncher", "Rifle", "GrenadeLauncher", "Pistol"];

/// Columns of the recordings report
const RECORDINGS_HEADER: [&str; 5] = ["Time", "Event", "Name", "Team", "Value"];


/// Writes a header followed by the statistics of each player of each `Game` in `games_stream`.\
/// Demos that failed are logged and/or interrupt the report, according to `config`.
pub fn to_tsv_statistics(config: &Config, games_stream: GamesStream, mut writer: impl Write) -> Result<()> {

    let mut write_line = |line: &str|
        writeln!(writer, "{line}")
            .map_err(|err| format!("presentation: to_tsv_statistics(): Error writing to the given `writer`: {err}"));

    write_line(&statistics_header().join("\t"))?;
    for game_result in futures::executor::block_on_stream(games_stream) {
        match game_result {
            Ok(game) => {
                let players: Box<dyn Iterator<Item=&Player>> = if config.only_active_players {
                    Box::new(game.reportable_players().map(|(_cn, player)| player))
                } else {
                    Box::new(game.players.values())
                };
                for player in players {
                    write_line(&statistics_row(&game, player))?;
                }
            },
            Err(demo_err) => handle_error(config, "to_tsv_statistics", demo_err)?,
        }
    }
    Ok(())
}

/// Writes a header followed by one line for each player position in each snapshot of `snapshots_stream`.\
/// Demos that failed are logged and/or interrupt the report, according to `config`.
pub fn to_tsv_recordings(config: &Config, snapshots_stream: SnapshotsStream, mut writer: impl Write) -> Result<()> {

    let mut write_line = |line: &str|
        writeln!(writer, "{line}")
            .map_err(|err| format!("presentation: to_tsv_recordings(): Error writing to the given `writer`: {err}"));

    write_line(&RECORDINGS_HEADER.join("\t"))?;
    for snapshot_result in futures::executor::block_on_stream(snapshots_stream) {
        match snapshot_result {
            Ok(snapshot) => {
                for line in recordings_rows(&snapshot) {
                    write_line(&line)?;
                }
            },
            Err(demo_err) => handle_error(config, "to_tsv_recordings", demo_err)?,
        }
    }
    Ok(())
}

fn handle_error(config: &Config, operation: &str, demo_err: DemoError) -> Result<()> {
    let msg = format!("presentation: {operation}(): {demo_err}");
    if config.log_errors {
        warn!("{msg}");
    }
    if config.stop_on_errors {
        return Err(Box::from(msg))
    }
    Ok(())
}

fn statistics_header() -> Vec<String> {
    let mut header: Vec<String> = ["Time", "Mode", "Map", "Name", "Team", "Frags", "Deaths", "Damage", "DamageDealt", "Suicides", "TotalShots", "ShotsDealt"]
        .into_iter()
        .map(String::from)
        .collect();
    header.extend(GUN_NAMES.iter().flat_map(|gun| [format!("{gun}Damage"), format!("{gun}DamageDealt")]));
    header.extend(GUN_NAMES.iter().flat_map(|gun| [format!("{gun}Shots"), format!("{gun}ShotsDealt")]));
    header.extend(["FlagsScored", "FlagsResetted", "FlagsDropped"].into_iter().map(String::from));
    header
}

fn statistics_row(game: &Game, player: &Player) -> String {
    let mut row = format!("{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                          game.time, game.mode, game.map, player.name, player.team, player.frags, player.deaths,
                          player.damage, player.damage_dealt, player.suicides, player.shots_total, player.shots_dealt);
    for (damage, damage_dealt) in player.weapon_damage.iter().zip(&player.weapon_damage_dealt) {
        row.push_str(&format!("\t{damage}\t{damage_dealt}"));
    }
    for (shots, shots_dealt) in player.weapon_shots.iter().zip(&player.weapon_shots_dealt) {
        row.push_str(&format!("\t{shots}\t{shots_dealt}"));
    }
    row.push_str(&format!("\t{}\t{}\t{}", player.flags_scored, player.flags_resetted, player.flags_dropped));
    row
}

fn recordings_rows(snapshot: &PositionSnapshot) -> impl Iterator<Item=String> + '_ {
    snapshot.players.iter()
        .map(|player| format!("{}\tPosition\t{}\t{}\t{},{},{}",
                              snapshot.time_ms, player.name, player.team, player.position.x, player.position.y, player.position.z))
}
