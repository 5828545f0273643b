//! Game-state byte lookup for A Link to the Past
//!
//! The monitored WRAM byte is the game's main-module index. The
//! mapping below is a pure lookup table; bytes outside the known
//! range have no variant and callers report the raw value instead of
//! casting it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main-module game states, indexed 0..=26.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    RetroArchMenuOrStartup,
    GameSelect,
    CopyPlayer,
    ErasePlayer,
    NamePlayer,
    LoadingGame,
    Dungeon,
    PreDungeon,
    PreOverworld,
    Overworld,
    PreSpecialOverworld,
    SpecialOverworld,
    /// An in-game module the disassembly has no name for; distinct
    /// from an out-of-range byte.
    Unknown,
    BlankScreen,
    Text,
    ClosingSpotlight,
    OpeningSpotlight,
    FallingDownHole,
    Death,
    BossVictory,
    History,
    MagicMirror,
    RefillStatsAfterBoss,
    SaveAndQuit,
    GanonExitsAga,
    TriforceRoom,
    EndSequence,
    Select,
}

/// All states in byte order; index equals the wire value.
const STATES: [GameState; 28] = [
    GameState::RetroArchMenuOrStartup,
    GameState::GameSelect,
    GameState::CopyPlayer,
    GameState::ErasePlayer,
    GameState::NamePlayer,
    GameState::LoadingGame,
    GameState::Dungeon,
    GameState::PreDungeon,
    GameState::PreOverworld,
    GameState::Overworld,
    GameState::PreSpecialOverworld,
    GameState::SpecialOverworld,
    GameState::Unknown,
    GameState::BlankScreen,
    GameState::Text,
    GameState::ClosingSpotlight,
    GameState::OpeningSpotlight,
    GameState::FallingDownHole,
    GameState::Death,
    GameState::BossVictory,
    GameState::History,
    GameState::MagicMirror,
    GameState::RefillStatsAfterBoss,
    GameState::SaveAndQuit,
    GameState::GanonExitsAga,
    GameState::TriforceRoom,
    GameState::EndSequence,
    GameState::Select,
];

impl GameState {
    /// Look up the state for a wire byte. Returns `None` for bytes
    /// outside the known range.
    pub fn from_byte(byte: u8) -> Option<GameState> {
        STATES.get(byte as usize).copied()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_bytes_map_to_named_states() {
        assert_eq!(GameState::from_byte(6), Some(GameState::Dungeon));
        assert_eq!(GameState::from_byte(7), Some(GameState::PreDungeon));
        assert_eq!(GameState::from_byte(9), Some(GameState::Overworld));
        assert_eq!(GameState::from_byte(18), Some(GameState::Death));
        assert_eq!(GameState::from_byte(26), Some(GameState::Select));
    }

    #[test]
    fn out_of_range_bytes_are_unrecognized() {
        assert_eq!(GameState::from_byte(27), None);
        assert_eq!(GameState::from_byte(0xFF), None);
    }

    #[test]
    fn byte_12_is_the_named_unknown_module() {
        // In-range "Unknown" is a real game module, not the catch-all.
        assert_eq!(GameState::from_byte(12), Some(GameState::Unknown));
    }

    #[test]
    fn display_uses_the_variant_name() {
        assert_eq!(GameState::Dungeon.to_string(), "Dungeon");
        assert_eq!(GameState::Overworld.to_string(), "Overworld");
    }
}
