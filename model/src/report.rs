//! Contains the data the presentation layer turns into reports

use std::pin::Pin;
use futures::Stream;
use crate::{
    game::{Game, Position},
    types::DemoResult,
};


/// Final [Game]s, one per demo -- or the error that prevented it
pub type GamesStream = Pin<Box<dyn Stream<Item=DemoResult<Game>>>>;

/// [PositionSnapshot]s of all demos, in order -- interleaved with each failing demo's error
pub type SnapshotsStream = Pin<Box<dyn Stream<Item=DemoResult<PositionSnapshot>>>>;

/// Where the reportable players were at a given moment of a demo
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSnapshot {
    /// Demo time, in milliseconds
    pub time_ms: i64,
    pub players: Vec<PlayerPosition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPosition {
    pub cn: u32,
    pub name: String,
    pub team: String,
    pub position: Position,
}
