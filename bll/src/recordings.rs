//! Periodic snapshots of where the players are, taken while demos are replayed

use crate::state_machine::apply_frame;
use bll_api::Config;
use dal_api::DemoFrames;
use model::{
    demo_events::{DemoFrameEvents, DemoStream},
    game::Game,
    report::{PlayerPosition, PositionSnapshot, SnapshotsStream},
    types::DemoResult,
};
use std::{
    future,
    pin::Pin,
    sync::Arc,
};
use futures::{Stream, stream, StreamExt};


/// Replays the demos one after the other, yielding the [PositionSnapshot]s of each.\
/// A failing demo yields its error after the snapshots it had produced.
pub fn record_positions(config: Arc<Config>, demo_daos: Vec<Box<dyn DemoFrames>>) -> SnapshotsStream {
    Box::pin(stream::iter(demo_daos)
        .flat_map(move |demo_dao| record_demo(Arc::clone(&config), demo_dao)))
}

/// Replays a single demo, taking a snapshot after each frame that puts the game clock more than
/// [Config::snapshot_interval_ms] past the previous snapshot. The clock starts at the first frame.
pub fn record_demo(config: Arc<Config>, demo_dao: Box<dyn DemoFrames>) -> SnapshotsStream {
    let replay = match demo_dao.demo_stream() {
        Ok(demo_stream) => Replay::new(config, demo_stream),
        Err(err) => return Box::pin(stream::once(future::ready(Err(err)))),
    };
    Box::pin(stream::unfold(Some(replay), |replay| async move {
        let mut replay = replay?;
        match replay.next_snapshot().await {
            Ok(Some(snapshot)) => Some((Ok(snapshot), Some(replay))),
            Ok(None) => None,
            Err(err) => Some((Err(err), None)),
        }
    }))
}

/// State of a demo being replayed for recordings
struct Replay {
    config: Arc<Config>,
    source_name: String,
    frames: Pin<Box<dyn Stream<Item=DemoResult<DemoFrameEvents>>>>,
    game: Game,
    last_snapshot_ms: Option<i64>,
    match_ended: bool,
}

impl Replay {

    fn new(config: Arc<Config>, demo_stream: DemoStream) -> Self {
        let DemoStream { source_name, recorded_at, frames } = demo_stream;
        Self {
            config,
            source_name,
            frames,
            game: Game::new(recorded_at),
            last_snapshot_ms: None,
            match_ended: false,
        }
    }

    /// Applies frames until a snapshot is due, returning it -- or `None` if the demo (or the match) ended first
    async fn next_snapshot(&mut self) -> DemoResult<Option<PositionSnapshot>> {
        while !self.match_ended {
            let Some(frame_result) = self.frames.next().await
                else {
                    break
                };
            let frame = frame_result?;
            let last_snapshot_ms = *self.last_snapshot_ms.get_or_insert(i64::from(frame.timestamp_ms));
            apply_frame(&self.config, &self.source_name, &mut self.game, &frame)?;
            self.match_ended = self.config.stop_at_time_up && self.game.is_over();
            if self.game.current_time > last_snapshot_ms + self.config.snapshot_interval_ms {
                self.last_snapshot_ms = Some(self.game.current_time);
                return Ok(Some(snapshot(&self.game)))
            }
        }
        Ok(None)
    }
}

fn snapshot(game: &Game) -> PositionSnapshot {
    PositionSnapshot {
        time_ms: game.current_time,
        players: game.reportable_players()
            .map(|(cn, player)| PlayerPosition {
                cn,
                name: player.name.clone(),
                team: player.team.clone(),
                position: player.position,
            })
            .collect(),
    }
}
