//! The rules for evolving a [Game] as the events of a demo are replayed

use bll_api::Config;
use model::{
    demo_events::{DemoEvents, DemoFrameEvents},
    errors::DemoError,
    game::{ClientState, Game, Player, GUNS, GUN_DAMAGES},
    types::DemoResult,
};
use log::warn;


/// Guns whose explosions tell which weapon a client is using: Rocket Launcher & Grenade Launcher
const EXPLOSIVE_GUNS: [i32; 2] = [3, 5];

/// Advances the game clock to the timestamp of `frame`, then applies all of its events to `game`.\
/// A client number out of range aborts the frame with [DemoError::Index].
pub fn apply_frame(config: &Config, source_name: &str, game: &mut Game, frame: &DemoFrameEvents) -> DemoResult<()> {
    let timestamp_ms = i64::from(frame.timestamp_ms);
    if timestamp_ms >= game.current_time {
        game.current_time = timestamp_ms;
    } else if config.log_issues {
        warn!("Demo '{source_name}': frame #{} goes back in time ({timestamp_ms}ms, while the game clock is at {}ms) -- the clock won't be rewound",
              frame.frame_number, game.current_time);
    }
    frame.events.iter()
        .try_for_each(|event| apply_event(config, source_name, game, event))
        .map_err(|InvalidClientNumber(cn)| DemoError::Index { source_name: source_name.to_string(), frame_number: frame.frame_number, cn })
}

/// The client number that made an event impossible to apply
#[derive(Debug, PartialEq)]
struct InvalidClientNumber(i32);

fn player(game: &mut Game, cn: i32) -> Result<&mut Player, InvalidClientNumber> {
    game.player_mut(cn)
        .ok_or(InvalidClientNumber(cn))
}

fn apply_event(config: &Config, source_name: &str, game: &mut Game, event: &DemoEvents) -> Result<(), InvalidClientNumber> {
    match event {

        DemoEvents::MapChange { map, mode } => {
            game.map = map.clone();
            game.mode = *mode;
        },

        DemoEvents::TimeUp { seconds_left } => {
            if game.end_time.is_none() {
                game.end_time = Some(game.current_time + i64::from(*seconds_left) * 1000);
            }
        },

        DemoEvents::Resume { cn, state, frags } => {
            let player = player(game, *cn)?;
            player.state = ClientState::from_code(*state);
            player.frags = *frags;
        },

        DemoEvents::ClientWelcomed { cn, name, team, model } => {
            let player = player(game, *cn)?;
            player.name = name.clone();
            player.team = team.clone();
            player.model = *model;
            player.connected = true;
        },

        DemoEvents::ClientConnected { cn, name } => {
            let player = player(game, *cn)?;
            player.name = name.clone();
            player.connected = true;
            player.state = ClientState::Joining;
        },

        DemoEvents::SpectatorToggled { cn, spectating } => {
            player(game, *cn)?.state = if *spectating { ClientState::Spectator } else { ClientState::Dead };
        },

        DemoEvents::ClientDisconnected { cn } => {
            let player = player(game, *cn)?;
            player.connected = false;
            player.state = ClientState::Spectator;
        },

        DemoEvents::Explosion { attacker, gun } => {
            if EXPLOSIVE_GUNS.contains(gun) {
                player(game, *attacker)?.last_weapon = *gun as usize;
            }
        },

        DemoEvents::Shot { attacker, gun } => {
            let Some(gun) = usize::try_from(*gun).ok().filter(|gun| *gun < GUNS)
                else {
                    if config.log_issues {
                        warn!("Demo '{source_name}': ignoring a shot of client {attacker} with the unknown gun {gun}");
                    }
                    return Ok(())
                };
            let player = player(game, *attacker)?;
            player.last_weapon = gun;
            player.damage += GUN_DAMAGES[gun];
            player.weapon_damage[gun] += GUN_DAMAGES[gun];
            player.weapon_shots[gun] += 1;
            player.shots_total += 1;
        },

        // the protocol doesn't tell which gun caused the damage: it is credited to the last one the attacker used
        DemoEvents::Damage { victim, attacker, damage } => {
            let damage = i64::from(*damage);
            let player = player(game, *attacker)?;
            if attacker != victim {
                player.damage_dealt += damage;
                player.shots_dealt += 1;
            }
            let gun = player.last_weapon;
            player.weapon_damage_dealt[gun] += damage;
            player.weapon_shots_dealt[gun] += 1;
        },

        DemoEvents::Died { victim, attacker, frags } => {
            let attacker_player = player(game, *attacker)?;
            attacker_player.frags = *frags;
            if victim == attacker {
                attacker_player.suicides += 1;
            }
            player(game, *victim)?.deaths += 1;
        },

        DemoEvents::FlagReturned { cn } => player(game, *cn)?.flags_resetted += 1,
        DemoEvents::FlagDropped  { cn } => player(game, *cn)?.flags_dropped += 1,
        DemoEvents::FlagScored   { cn } => player(game, *cn)?.flags_scored += 1,

        DemoEvents::Moved { cn, position } => player(game, *cn)?.position = *position,

    }
    Ok(())
}
