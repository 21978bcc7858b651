//! Decoders for the two payload kinds found in demos: game messages (channel 1) & position updates (channel 0).
//!
//! Payloads carry no field boundaries: each message type must consume exactly the fields the engine wrote,
//! otherwise everything read after it is garbage. This is why every decoder below reads *all* fields of its
//! message -- even the ones nobody cares about -- and why the matches on [MessageType] are exhaustive.

use crate::{
    message_types::MessageType,
    packet::{Packet, DecodingError},
    protocol::ProtocolVersion,
};


/// A game message -- the contents of a channel 1 payload.\
/// Only the first message of a payload is decoded, except for [GameMessage::Welcome], which aggregates many.
#[derive(Debug, PartialEq)]
pub enum GameMessage {
    /// The state of the game sent to a (recording) client when it connects
    Welcome { messages: Vec<WelcomeMessage> },
    /// A client has joined the game
    InitClient { cn: i32, name: String },
    /// A client entered (`spectating == true`) or left the spectators
    Spectator { cn: i32, spectating: bool },
    ClientDisconnect { cn: i32 },
    /// Splash damage of a projectile
    ExplodeEffect { attacker: i32, gun: i32 },
    /// A shot was fired
    ShotEffect { attacker: i32, gun: i32 },
    /// `attacker` hurt `victim`. Which gun did it is not told.
    Damage { victim: i32, attacker: i32, damage: i32 },
    /// `victim` was killed & `attacker` now has `frags`
    Died { victim: i32, attacker: i32, frags: i32 },
    TakeFlag,
    ReturnFlag { cn: i32 },
    DropFlag { cn: i32 },
    ScoreFlag { cn: i32 },
    /// A known type that has no decoding rules outside of a welcome -- nothing past the tag was read
    Unhandled { message_type: MessageType },
    /// An unknown type -- nothing past the tag was read
    Unknown { code: i32 },
}

/// One of the messages aggregated by [GameMessage::Welcome]
#[derive(Debug, PartialEq)]
pub enum WelcomeMessage {
    MapChange { map: String, mode: i32 },
    /// Remaining duration of the match
    TimeUp { seconds_left: i32 },
    ItemList,
    CurrentMaster,
    PauseGame,
    GameSpeed,
    TeamInfo,
    SetTeam,
    ForceDeath,
    SpawnState,
    Spectator,
    /// Scores & states of the clients already in the game
    Resume { clients: Vec<ResumedClient> },
    InitAi,
    /// A client already in the game
    InitClient { cn: i32, name: String, team: String, model: i32 },
    /// A known type with no decoding rules inside a welcome -- nothing past the tag was read
    Unhandled { message_type: MessageType },
    /// An unknown type -- nothing past the tag was read
    Unknown { code: i32 },
}

/// A client entry of [WelcomeMessage::Resume]
#[derive(Debug, PartialEq)]
pub struct ResumedClient {
    pub cn: i32,
    pub state: i32,
    pub frags: i32,
}

/// The contents of a channel 0 payload
#[derive(Debug, PartialEq)]
pub struct PositionUpdate {
    pub cn: i32,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Decodes the game message in `payload`
pub fn decode_game_payload(payload: &[u8], protocol: ProtocolVersion) -> Result<GameMessage, DecodingError> {
    let mut packet = Packet::new(payload);
    let code = packet.get_int()?;
    let Some(message_type) = MessageType::from_code(code)
        else {
            return Ok(GameMessage::Unknown { code })
        };
    let message = match message_type {
        MessageType::Welcome => GameMessage::Welcome { messages: decode_welcome(&mut packet, protocol)? },
        MessageType::InitClient => {
            let cn = packet.get_int()?;
            let name = packet.get_string();
            GameMessage::InitClient { cn, name }
        },
        MessageType::Spectator => {
            let cn = packet.get_int()?;
            let spectating = packet.get_int()? != 0;
            GameMessage::Spectator { cn, spectating }
        },
        MessageType::ClientDisconnect => GameMessage::ClientDisconnect { cn: packet.get_int()? },
        MessageType::ExplodeEffect => {
            let attacker = packet.get_int()?;
            let gun = packet.get_int()?;
            GameMessage::ExplodeEffect { attacker, gun }
        },
        MessageType::ShotEffect => {
            let attacker = packet.get_int()?;
            let gun = packet.get_int()?;
            GameMessage::ShotEffect { attacker, gun }
        },
        MessageType::Damage => {
            let victim = packet.get_int()?;
            let attacker = packet.get_int()?;
            let damage = packet.get_int()?;
            GameMessage::Damage { victim, attacker, damage }
        },
        MessageType::Died => {
            let victim = packet.get_int()?;
            let attacker = packet.get_int()?;
            let frags = packet.get_int()?;
            GameMessage::Died { victim, attacker, frags }
        },
        MessageType::TakeFlag => GameMessage::TakeFlag,
        MessageType::ReturnFlag => {
            let cn = packet.get_int()?;
            skip_ints(&mut packet, 2)?;     // flag, version
            GameMessage::ReturnFlag { cn }
        },
        MessageType::DropFlag => {
            let cn = packet.get_int()?;
            skip_ints(&mut packet, 4)?;     // flag, version, drop position (x, y, z) packed in 3
            GameMessage::DropFlag { cn }
        },
        MessageType::ScoreFlag => {
            let cn = packet.get_int()?;
            skip_ints(&mut packet, 8)?;     // relay flag & version, goal flag & version & spawn, team, score, flags
            GameMessage::ScoreFlag { cn }
        },
        MessageType::Position      |
        MessageType::SpawnState    |
        MessageType::ForceDeath    |
        MessageType::MapChange     |
        MessageType::TeamInfo      |
        MessageType::TimeUp        |
        MessageType::ItemList      |
        MessageType::Resume        |
        MessageType::CurrentMaster |
        MessageType::SetTeam       |
        MessageType::PauseGame     |
        MessageType::GameSpeed     |
        MessageType::InitAi        => GameMessage::Unhandled { message_type },
    };
    Ok(message)
}

/// Reads the messages of a welcome until, at most, a single byte is left
fn decode_welcome(packet: &mut Packet, protocol: ProtocolVersion) -> Result<Vec<WelcomeMessage>, DecodingError> {
    let mut messages = Vec::new();
    while packet.remaining() > 1 {
        messages.push(decode_welcome_message(packet, protocol)?);
    }
    Ok(messages)
}

fn decode_welcome_message(packet: &mut Packet, protocol: ProtocolVersion) -> Result<WelcomeMessage, DecodingError> {
    let code = packet.get_int()?;
    let Some(message_type) = MessageType::from_code(code)
        else {
            return Ok(WelcomeMessage::Unknown { code })
        };
    let message = match message_type {
        MessageType::MapChange => {
            let map = packet.get_string();
            let mode = packet.get_int()?;
            skip_ints(packet, 1)?;    // has items
            WelcomeMessage::MapChange { map, mode }
        },
        MessageType::TimeUp => WelcomeMessage::TimeUp { seconds_left: packet.get_int()? },
        MessageType::ItemList => {
            // (item index, item type) pairs
            while packet.get_int()? != -1 {
                packet.get_int()?;
            }
            WelcomeMessage::ItemList
        },
        MessageType::CurrentMaster => {
            // master mode, then (cn, privilege) pairs
            packet.get_int()?;
            while packet.get_int()? != -1 {
                packet.get_int()?;
            }
            WelcomeMessage::CurrentMaster
        },
        MessageType::PauseGame => {
            skip_ints(packet, 2)?;
            WelcomeMessage::PauseGame
        },
        MessageType::GameSpeed => {
            skip_ints(packet, 2)?;
            WelcomeMessage::GameSpeed
        },
        MessageType::TeamInfo => {
            // (team name, frags) pairs
            while !packet.get_string().is_empty() {
                packet.get_int()?;
            }
            WelcomeMessage::TeamInfo
        },
        MessageType::SetTeam => {
            packet.get_int()?;
            packet.get_string();
            packet.get_int()?;
            WelcomeMessage::SetTeam
        },
        MessageType::ForceDeath => {
            skip_ints(packet, 1)?;
            WelcomeMessage::ForceDeath
        },
        MessageType::SpawnState => {
            skip_ints(packet, 13)?;
            WelcomeMessage::SpawnState
        },
        MessageType::Spectator => {
            skip_ints(packet, 2)?;
            WelcomeMessage::Spectator
        },
        MessageType::Resume => WelcomeMessage::Resume { clients: decode_resumed_clients(packet, protocol)? },
        MessageType::InitAi => {
            skip_ints(packet, 5)?;
            packet.get_string();
            packet.get_string();
            WelcomeMessage::InitAi
        },
        MessageType::InitClient => {
            let cn = packet.get_int()?;
            let name = packet.get_string();
            let team = packet.get_string();
            let model = packet.get_int()?;
            WelcomeMessage::InitClient { cn, name, team, model }
        },
        MessageType::Welcome          |
        MessageType::Position         |
        MessageType::ClientDisconnect |
        MessageType::Died             |
        MessageType::Damage           |
        MessageType::ShotEffect       |
        MessageType::ExplodeEffect    |
        MessageType::TakeFlag         |
        MessageType::ReturnFlag       |
        MessageType::DropFlag         |
        MessageType::ScoreFlag        => WelcomeMessage::Unhandled { message_type },
    };
    Ok(message)
}

/// Reads `(cn, state, frags, <protocol dependent number of ints>)` entries until a `cn` of -1
fn decode_resumed_clients(packet: &mut Packet, protocol: ProtocolVersion) -> Result<Vec<ResumedClient>, DecodingError> {
    let mut clients = Vec::new();
    loop {
        let cn = packet.get_int()?;
        if cn == -1 {
            break
        }
        let state = packet.get_int()?;
        let frags = packet.get_int()?;
        skip_ints(packet, protocol.resume_trailing_ints())?;
        clients.push(ResumedClient { cn, state, frags });
    }
    Ok(clients)
}

/// Decodes the position update in `payload`.\
/// `None` is returned for any other message type, in which case the rest of the payload is left alone.
pub fn decode_position_payload(payload: &[u8]) -> Result<Option<PositionUpdate>, DecodingError> {
    let mut packet = Packet::new(payload);
    if packet.get_int()? != MessageType::Position.code() {
        return Ok(None)
    }
    let cn = packet.get_int()?;
    packet.get_byte()?;     // physics state
    let flags = packet.get_byte()?;
    let x = get_position_component(&mut packet, flags & (1 << 0) != 0)?;
    let y = get_position_component(&mut packet, flags & (1 << 1) != 0)?;
    let z = get_position_component(&mut packet, flags & (1 << 2) != 0)?;
    // velocity, orientation & friends are not needed
    packet.skip_to_end();
    Ok(Some(PositionUpdate { cn, x, y, z }))
}

/// Position components are either unsigned 16-bit or, when `extended`, signed 24-bit -- both little-endian
fn get_position_component(packet: &mut Packet, extended: bool) -> Result<i32, DecodingError> {
    if extended {
        let bytes = packet.get_bytes(3)?;
        let value = u32::from(bytes[0]) | u32::from(bytes[1]) << 8 | u32::from(bytes[2]) << 16;
        Ok(((value << 8) as i32) >> 8)
    } else {
        let bytes = packet.get_bytes(2)?;
        Ok(i32::from(u16::from_le_bytes([bytes[0], bytes[1]])))
    }
}

fn skip_ints(packet: &mut Packet, count: usize) -> Result<(), DecodingError> {
    for _ in 0..count {
        packet.get_int()?;
    }
    Ok(())
}
