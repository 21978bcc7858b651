//! Resting place for [DemoEvents] & the [DemoStream] that carries them

use std::pin::Pin;
use futures::Stream;
use crate::{
    game::Position,
    types::DemoResult,
};


/// Maps the demo messages we care about, in close relation to `cube2_demo::GameMessage` & friends.\
/// Messages decoded only to be skipped (item lists, team infos, ...) don't make it here.
///
/// IMPLEMENTATION NOTE: this enum resembles the one in the `cube2-demo` crate, but both should exist:
///   1) `cube2-demo` mirrors the wire, including the distinction between welcome & standalone messages
///      -- having this model here decouples the application from the wire library;
///   2) By unbinding the models, the business logic only ever sees events that mean something to it.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoEvents {
    MapChange          { map: String, mode: i32 },
    /// The match ends `seconds_left` after the current frame
    TimeUp             { seconds_left: i32 },
    /// State & score of a client already in the game when recording started
    Resume             { cn: i32, state: i32, frags: i32 },
    /// A client already in the game when recording started
    ClientWelcomed     { cn: i32, name: String, team: String, model: i32 },
    ClientConnected    { cn: i32, name: String },
    SpectatorToggled   { cn: i32, spectating: bool },
    ClientDisconnected { cn: i32 },
    Explosion          { attacker: i32, gun: i32 },
    Shot               { attacker: i32, gun: i32 },
    Damage             { victim: i32, attacker: i32, damage: i32 },
    Died               { victim: i32, attacker: i32, frags: i32 },
    FlagReturned       { cn: i32 },
    FlagDropped        { cn: i32 },
    FlagScored         { cn: i32 },
    Moved              { cn: i32, position: Position },
}

/// The events decoded out of a single demo frame
#[derive(Debug, Clone, PartialEq)]
pub struct DemoFrameEvents {
    /// Position of the frame in the demo, starting at 1
    pub frame_number: u64,
    /// Demo time, in milliseconds
    pub timestamp_ms: u32,
    pub events: Vec<DemoEvents>,
}

/// An opened & validated demo, ready to be replayed
pub struct DemoStream {
    /// File name (or any other name) to identify the demo in reports & errors
    pub source_name: String,
    /// When the demo was recorded, in seconds since the Unix epoch
    pub recorded_at: i64,
    /// The frames, in demo order. Ends after the first error.
    pub frames: Pin<Box<dyn Stream<Item=DemoResult<DemoFrameEvents>>>>,
}
