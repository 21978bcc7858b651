//! Resting place for [Game], [Player] & friends -- the aggregate built out of a demo

use std::collections::BTreeMap;


/// Client numbers are in the range `0..MAX_CLIENTS`
pub const MAX_CLIENTS: i32 = 128;

/// Number of guns -- the length of all per-weapon arrays
pub const GUNS: usize = 7;

/// Damage credited for every shot of each gun (Fist, Shotgun, Chaingun, Rocket Launcher, Rifle, Grenade Launcher & Pistol)
pub static GUN_DAMAGES: [i64; GUNS] = [50, 200, 30, 120, 100, 90, 35];

/// Everything known about the match recorded in one demo
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Game {
    /// When the demo was recorded, in seconds since the Unix epoch
    pub time: i64,
    /// The game mode id
    pub mode: i32,
    pub map: String,
    /// When the match ends, in demo milliseconds -- known after the first `TimeUp` message
    pub end_time: Option<i64>,
    /// Timestamp of the last frame applied, in demo milliseconds
    pub current_time: i64,
    /// One slot per client number, created on first reference & reused across reconnections
    pub players: BTreeMap<u32, Player>,
}

impl Game {

    pub fn new(time: i64) -> Self {
        Self {
            time,
            ..Self::default()
        }
    }

    /// Returns the slot for client `cn`, creating it if needed.\
    /// `None` if `cn` is not a valid client number.
    pub fn player_mut(&mut self, cn: i32) -> Option<&mut Player> {
        if !(0..MAX_CLIENTS).contains(&cn) {
            return None
        }
        Some(self.players.entry(cn as u32).or_default())
    }

    /// True once the end of the match is known and was reached
    pub fn is_over(&self) -> bool {
        matches!(self.end_time, Some(end_time) if self.current_time >= end_time)
    }

    /// The players worth reporting, in client number order -- see [Player::is_reportable()]
    pub fn reportable_players(&self) -> impl Iterator<Item=(u32, &Player)> {
        self.players.iter()
            .filter(|(_cn, player)| player.is_reportable())
            .map(|(cn, player)| (*cn, player))
    }
}

/// Where a player is, in the engine's fixed-point map units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// Statistics & state of one client slot
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Player {
    pub name: String,
    pub team: String,
    pub model: i32,
    pub position: Position,
    pub connected: bool,
    pub state: ClientState,

    pub frags: i32,
    pub deaths: u32,
    pub suicides: u32,

    /// Damage potentially caused by all shots fired
    pub damage: i64,
    /// Damage actually inflicted on others
    pub damage_dealt: i64,
    pub shots_total: u32,
    /// Shots that hurt someone else
    pub shots_dealt: u32,

    pub weapon_damage: [i64; GUNS],
    pub weapon_damage_dealt: [i64; GUNS],
    pub weapon_shots: [u32; GUNS],
    pub weapon_shots_dealt: [u32; GUNS],
    /// The gun this client fired last -- damage is credited to it, as the protocol doesn't say which gun caused it
    pub last_weapon: usize,

    pub flags_scored: u32,
    pub flags_dropped: u32,
    pub flags_resetted: u32,
}

impl Player {

    /// Whether this player took part in the match: connected, in game (not spectating) & did hurt someone
    pub fn is_reportable(&self) -> bool {
        self.connected && self.state.is_in_game() && self.damage_dealt != 0
    }
}

/// The engine's client states, as found in `Resume` messages.\
/// Slots start as [ClientState::Alive].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClientState {
    /// Just joined -- nothing known yet
    Joining,
    #[default]
    Alive,
    /// Also the state of a client that just left the spectators
    Dead,
    Spawning,
    Lagged,
    Editing,
    /// Spectating or disconnected
    Spectator,
    /// Any other value sent by the server
    Other(i32),
}

impl ClientState {

    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => ClientState::Joining,
            0  => ClientState::Alive,
            1  => ClientState::Dead,
            2  => ClientState::Spawning,
            3  => ClientState::Lagged,
            4  => ClientState::Editing,
            5  => ClientState::Spectator,
            _  => ClientState::Other(code),
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            ClientState::Joining     => -1,
            ClientState::Alive       => 0,
            ClientState::Dead        => 1,
            ClientState::Spawning    => 2,
            ClientState::Lagged      => 3,
            ClientState::Editing     => 4,
            ClientState::Spectator   => 5,
            ClientState::Other(code) => *code,
        }
    }

    /// States `0..=4`: the client is playing
    pub fn is_in_game(&self) -> bool {
        (0..=4).contains(&self.code())
    }
}
