//! Builds the final statistics of each demo

use crate::state_machine::apply_frame;
use bll_api::Config;
use dal_api::DemoFrames;
use model::{
    demo_events::DemoStream,
    game::Game,
    report::GamesStream,
    types::DemoResult,
};
use std::sync::Arc;
use futures::{stream, StreamExt};
use log::debug;


/// Replays the demos one after the other, yielding each one's final [Game] -- or the error that interrupted it
pub fn summarize_demos(config: Arc<Config>, demo_daos: Vec<Box<dyn DemoFrames>>) -> GamesStream {
    Box::pin(stream::iter(demo_daos)
        .then(move |demo_dao| summarize_demo(Arc::clone(&config), demo_dao)))
}

/// Replays a whole demo (or up to the end of the match, if [Config::stop_at_time_up]),
/// returning the resulting [Game]
pub async fn summarize_demo(config: Arc<Config>, demo_dao: Box<dyn DemoFrames>) -> DemoResult<Game> {
    let DemoStream { source_name, recorded_at, mut frames } = demo_dao.demo_stream()?;
    let mut game = Game::new(recorded_at);
    while let Some(frame_result) = frames.next().await {
        let frame = frame_result?;
        apply_frame(&config, &source_name, &mut game, &frame)?;
        if config.stop_at_time_up && game.is_over() {
            debug!("Demo '{source_name}': match ended at {}ms -- skipping the remaining frames", game.current_time);
            break
        }
    }
    Ok(game)
}


/// Unit tests for the [statistics](super) module
#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_dal::{TestDAL, RECORDED_AT};
    use dal::sync_file_reader::DemoFileSyncReader;
    use model::{
        demo_events::DemoEvents,
        errors::DemoError,
        game::{ClientState, Position},
    };


    /// A good demo, with all frames OK -- shared with the DAL tests
    const GOOD_DEMO_FILE_LOCATION: &str = "../dal/tests/resources/duel.dmo";
    const NON_EXISTING_FILE_LOCATION: &str = "/tmp/non-existing.dmo";


    // unit-isolated tests section
    //////////////////////////////
    // the following tests use a mock implementation for the DAL layer: `TestDAL`,
    // allowing us freedom to test some simple, yet diverse set of scenarios

    #[test]
    fn happy_path() {
        let games = summarize(Config::default(), vec![
            TestDAL::new("a.dmo", vec![
                (0,   vec![DemoEvents::MapChange { map: "complex".to_string(), mode: 5 },
                           DemoEvents::ClientWelcomed { cn: 0, name: "Alice".to_string(), team: "good".to_string(), model: 0 }]),
                (100, vec![DemoEvents::Shot { attacker: 0, gun: 2 }]),
                (120, vec![DemoEvents::Damage { victim: 1, attacker: 0, damage: 30 }]),
            ]),
        ]);
        assert_eq!(games.len(), 1);
        let game = games[0].as_ref().expect("The demo should have been replayed");
        assert_eq!((game.time, game.mode, game.map.as_str(), game.current_time, game.end_time), (RECORDED_AT, 5, "complex", 120, None));
        let reported: Vec<(u32, &str, i64)> = game.reportable_players().map(|(cn, player)| (cn, player.name.as_str(), player.damage_dealt)).collect();
        assert_eq!(reported, vec![(0, "Alice", 30)]);
    }

    /// Frames after the end of the match are not applied, unless told otherwise
    #[test]
    fn early_stop() {
        let frames = || vec![
            (0,    vec![DemoEvents::TimeUp { seconds_left: 1 }]),
            (500,  vec![DemoEvents::Died { victim: 1, attacker: 0, frags: 1 }]),
            (1000, vec![DemoEvents::Died { victim: 1, attacker: 0, frags: 2 }]),
            (1500, vec![DemoEvents::Died { victim: 1, attacker: 0, frags: 3 }]),
        ];
        let games = summarize(Config::default(), vec![TestDAL::new("a.dmo", frames())]);
        let game = games[0].as_ref().expect("The demo should have been replayed");
        assert_eq!((game.current_time, game.players[&0].frags), (1000, 2));

        let games = summarize(Config { stop_at_time_up: false, ..Config::default() }, vec![TestDAL::new("a.dmo", frames())]);
        let game = games[0].as_ref().expect("The demo should have been replayed");
        assert_eq!((game.current_time, game.players[&0].frags), (1500, 3));
    }

    /// Failing demos don't prevent the others from being replayed -- nor share any state with them
    #[test]
    fn errors_are_per_demo() {
        let index_error = DemoError::Index { source_name: "b.dmo".to_string(), frame_number: 2, cn: 200 };
        let format_error = DemoError::Io { source_name: "c.dmo".to_string(), description: "gone".to_string() };
        let games = summarize(Config::default(), vec![
            TestDAL::new("a.dmo", vec![(0, vec![DemoEvents::ClientConnected { cn: 0, name: "Alice".to_string() }])]),
            TestDAL::new("b.dmo", vec![(0, vec![]), (10, vec![DemoEvents::ClientConnected { cn: 200, name: "Bob".to_string() }])]),
            TestDAL::unopenable("c.dmo", format_error.clone()),
            TestDAL::new("d.dmo", vec![(0, vec![DemoEvents::ClientConnected { cn: 1, name: "Dave".to_string() }])])
                .failing_with(DemoError::Protocol { source_name: "d.dmo".to_string(), frame_number: 2, channel: 1, description: "x".to_string() }),
            TestDAL::new("e.dmo", vec![(0, vec![DemoEvents::ClientConnected { cn: 1, name: "Eve".to_string() }])]),
        ]);
        assert_eq!(games.len(), 5);
        assert!(games[0].is_ok());
        assert_eq!(games[1], Err(index_error));
        assert_eq!(games[2], Err(format_error));
        assert!(matches!(games[3], Err(DemoError::Protocol { frame_number: 2, .. })), "Unexpected outcome: {:?}", games[3]);
        let last_game = games[4].as_ref().expect("The last demo should have been replayed");
        assert_eq!(last_game.players.keys().copied().collect::<Vec<_>>(), vec![1]);
    }

    // integration tests section
    ////////////////////////////
    // the following tests use the real DAL, reading demo files

    #[test]
    fn demo_file() {
        let games = summarize(Config::default(), vec![DemoFileSyncReader::new(Default::default(), GOOD_DEMO_FILE_LOCATION)]);
        let game = games[0].as_ref().unwrap_or_else(|err| panic!("The demo should have been replayed: {err}"));
        assert!(game.time > 0, "The file modification time should have been used");
        assert_eq!((game.map.as_str(), game.mode, game.current_time, game.end_time), ("ot", 3, 1600, Some(600_000)));

        let alice = &game.players[&0];
        assert_eq!((alice.name.as_str(), alice.team.as_str(), alice.model, alice.connected, alice.state), ("Alice", "good", 1, true, ClientState::Alive));
        assert_eq!((alice.frags, alice.deaths, alice.suicides), (1, 0, 0));
        assert_eq!((alice.damage, alice.damage_dealt, alice.shots_total, alice.shots_dealt), (200, 40, 1, 1));
        assert_eq!((alice.weapon_damage[1], alice.weapon_damage_dealt[1], alice.weapon_shots[1], alice.weapon_shots_dealt[1]), (200, 40, 1, 1));
        assert_eq!(alice.position, Position { x: 512, y: 768, z: 64 });

        let bob = &game.players[&1];
        assert_eq!((bob.name.as_str(), bob.team.as_str(), bob.frags, bob.deaths, bob.damage_dealt), ("Bob", "evil", 0, 1, 0));
        assert_eq!(bob.position, Position { x: 16, y: 32, z: -1 });

        let reported: Vec<u32> = game.reportable_players().map(|(cn, _)| cn).collect();
        assert_eq!(reported, vec![0]);
    }

    #[test]
    fn non_existing_demo_file() {
        let games = summarize(Config::default(), vec![DemoFileSyncReader::new(Default::default(), NON_EXISTING_FILE_LOCATION)]);
        assert!(matches!(games[0], Err(DemoError::Io { .. })), "Unexpected outcome: {:?}", games[0]);
    }


    fn summarize(config: Config, demo_daos: Vec<Box<dyn DemoFrames>>) -> Vec<DemoResult<Game>> {
        futures::executor::block_on_stream(summarize_demos(Arc::new(config), demo_daos))
            .collect()
    }
}
