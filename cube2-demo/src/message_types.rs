//! Resting place for [MessageType]

/// The message tags (the first integer of a payload) this library knows how to decode.\
/// Tags absent here are reported by the decoders as `Unknown`, without consuming their fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageType {
    Welcome,
    InitClient,
    Position,
    ClientDisconnect,
    Died,
    Damage,
    ShotEffect,
    ExplodeEffect,
    SpawnState,
    ForceDeath,
    MapChange,
    TeamInfo,
    TimeUp,
    ItemList,
    Resume,
    CurrentMaster,
    Spectator,
    SetTeam,
    TakeFlag,
    ReturnFlag,
    DropFlag,
    ScoreFlag,
    PauseGame,
    GameSpeed,
    InitAi,
}

impl MessageType {

    /// The tag written on the wire
    pub fn code(&self) -> i32 {
        match self {
            MessageType::Welcome          => 2,
            MessageType::InitClient       => 3,
            MessageType::Position         => 4,
            MessageType::ClientDisconnect => 7,
            MessageType::Died             => 11,
            MessageType::Damage           => 12,
            MessageType::ShotEffect       => 14,
            MessageType::ExplodeEffect    => 15,
            MessageType::SpawnState       => 17,
            MessageType::ForceDeath       => 19,
            MessageType::MapChange        => 22,
            MessageType::TeamInfo         => 24,
            MessageType::TimeUp           => 33,
            MessageType::ItemList         => 36,
            MessageType::Resume           => 37,
            MessageType::CurrentMaster    => 58,
            MessageType::Spectator        => 59,
            MessageType::SetTeam          => 61,
            MessageType::TakeFlag         => 79,
            MessageType::ReturnFlag       => 80,
            MessageType::DropFlag         => 84,
            MessageType::ScoreFlag        => 85,
            MessageType::PauseGame        => 91,
            MessageType::GameSpeed        => 92,
            MessageType::InitAi           => 95,
        }
    }

    /// Inverse of [Self::code()]
    pub fn from_code(code: i32) -> Option<Self> {
        let message_type = match code {
            2  => MessageType::Welcome,
            3  => MessageType::InitClient,
            4  => MessageType::Position,
            7  => MessageType::ClientDisconnect,
            11 => MessageType::Died,
            12 => MessageType::Damage,
            14 => MessageType::ShotEffect,
            15 => MessageType::ExplodeEffect,
            17 => MessageType::SpawnState,
            19 => MessageType::ForceDeath,
            22 => MessageType::MapChange,
            24 => MessageType::TeamInfo,
            33 => MessageType::TimeUp,
            36 => MessageType::ItemList,
            37 => MessageType::Resume,
            58 => MessageType::CurrentMaster,
            59 => MessageType::Spectator,
            61 => MessageType::SetTeam,
            79 => MessageType::TakeFlag,
            80 => MessageType::ReturnFlag,
            84 => MessageType::DropFlag,
            85 => MessageType::ScoreFlag,
            91 => MessageType::PauseGame,
            92 => MessageType::GameSpeed,
            95 => MessageType::InitAi,
            _  => return None,
        };
        Some(message_type)
    }
}


/// Unit tests for the [message_types](super) module
#[cfg(test)]
mod tests {
    use super::*;

    /// Each known tag maps back to its own variant -- a duplicated code would break this
    #[test]
    fn codes_are_unique() {
        let known = (0..=100)
            .filter_map(MessageType::from_code)
            .inspect(|message_type| assert_eq!(MessageType::from_code(message_type.code()), Some(*message_type)))
            .count();
        assert_eq!(known, 25, "Unexpected number of known message types");
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(MessageType::from_code(0), None);
        assert_eq!(MessageType::from_code(-1), None);
        assert_eq!(MessageType::from_code(1000), None);
    }
}
