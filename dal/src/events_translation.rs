//! Contains utilities for translating the outputs of the `cube2-demo` library into
//! our simplified models for the events we care about

use crate::container::RawFrame;
use cube2_demo::{
    decode_game_payload, decode_position_payload,
    GameMessage, WelcomeMessage, PositionUpdate, ProtocolVersion,
    protocol::{MESSAGES_CHANNEL, POSITIONS_CHANNEL},
};
use model::{
    demo_events::{DemoEvents, DemoFrameEvents},
    errors::DemoError,
    game::Position,
    types::DemoResult,
};
use log::debug;


/// Decodes the payload of `frame` according to its channel & simplifies the outcome into our
/// [DemoEvents]. Frames of channels other than positions & messages yield no events.
pub fn translate_frame(source_name: &str, protocol: ProtocolVersion, frame: RawFrame) -> DemoResult<DemoFrameEvents> {
    let decoding_result = match frame.channel {
        POSITIONS_CHANNEL => decode_position_payload(&frame.payload)
            .map(|position_update| position_update.into_iter().map(translate_position_update).collect()),
        MESSAGES_CHANNEL => decode_game_payload(&frame.payload, protocol)
            .map(translate_game_message),
        _ => Ok(Vec::new()),
    };
    match decoding_result {
        Ok(events) => Ok(DemoFrameEvents {
            frame_number: frame.frame_number,
            timestamp_ms: frame.timestamp_ms,
            events,
        }),
        Err(decoding_err) => Err(DemoError::Protocol {
            source_name: source_name.to_string(),
            frame_number: frame.frame_number,
            channel: frame.channel,
            description: decoding_err.to_string(),
        }),
    }
}

fn translate_position_update(PositionUpdate { cn, x, y, z }: PositionUpdate) -> DemoEvents {
    DemoEvents::Moved { cn, position: Position { x, y, z } }
}

fn translate_game_message(message: GameMessage) -> Vec<DemoEvents> {
    match message {
        GameMessage::Welcome { messages } => messages.into_iter()
            .flat_map(translate_welcome_message)
            .collect(),
        GameMessage::InitClient { cn, name } => vec![DemoEvents::ClientConnected { cn, name }],
        GameMessage::Spectator { cn, spectating } => vec![DemoEvents::SpectatorToggled { cn, spectating }],
        GameMessage::ClientDisconnect { cn } => vec![DemoEvents::ClientDisconnected { cn }],
        GameMessage::ExplodeEffect { attacker, gun } => vec![DemoEvents::Explosion { attacker, gun }],
        GameMessage::ShotEffect { attacker, gun } => vec![DemoEvents::Shot { attacker, gun }],
        GameMessage::Damage { victim, attacker, damage } => vec![DemoEvents::Damage { victim, attacker, damage }],
        GameMessage::Died { victim, attacker, frags } => vec![DemoEvents::Died { victim, attacker, frags }],
        GameMessage::TakeFlag => vec![],
        GameMessage::ReturnFlag { cn } => vec![DemoEvents::FlagReturned { cn }],
        GameMessage::DropFlag { cn } => vec![DemoEvents::FlagDropped { cn }],
        GameMessage::ScoreFlag { cn } => vec![DemoEvents::FlagScored { cn }],
        GameMessage::Unhandled { message_type } => {
            debug!("Skipping standalone `{message_type:?}` message");
            vec![]
        },
        GameMessage::Unknown { code } => {
            debug!("Skipping message of unknown type {code}");
            vec![]
        },
    }
}

fn translate_welcome_message(message: WelcomeMessage) -> Vec<DemoEvents> {
    match message {
        WelcomeMessage::MapChange { map, mode } => vec![DemoEvents::MapChange { map, mode }],
        WelcomeMessage::TimeUp { seconds_left } => vec![DemoEvents::TimeUp { seconds_left }],
        WelcomeMessage::Resume { clients } => clients.into_iter()
            .map(|client| DemoEvents::Resume { cn: client.cn, state: client.state, frags: client.frags })
            .collect(),
        WelcomeMessage::InitClient { cn, name, team, model } => vec![DemoEvents::ClientWelcomed { cn, name, team, model }],
        WelcomeMessage::ItemList      |
        WelcomeMessage::CurrentMaster |
        WelcomeMessage::PauseGame     |
        WelcomeMessage::GameSpeed     |
        WelcomeMessage::TeamInfo      |
        WelcomeMessage::SetTeam       |
        WelcomeMessage::ForceDeath    |
        WelcomeMessage::SpawnState    |
        WelcomeMessage::Spectator     |
        WelcomeMessage::InitAi        => vec![],
        WelcomeMessage::Unhandled { message_type } => {
            debug!("Skipping `{message_type:?}` message found inside a welcome");
            vec![]
        },
        WelcomeMessage::Unknown { code } => {
            debug!("Skipping message of unknown type {code} found inside a welcome");
            vec![]
        },
    }
}
