//! Bundled classic layout and its fixed coordinates

use crate::board::board_map::Board;
use crate::cards::{Room, Suspect};
use crate::core::error::Result;
use crate::core::types::GridPos;

/// 25x24 mansion layout shipped with the crate
pub const CLASSIC_LAYOUT: &str = include_str!("../../data/boards/classic.txt");

pub fn classic_board() -> Result<Board> {
    CLASSIC_LAYOUT.parse()
}

/// Hallway tile each character starts on in the classic layout
pub fn start_position(suspect: Suspect) -> GridPos {
    match suspect {
        Suspect::MissScarlett => GridPos::new(24, 8),
        Suspect::ColonelMustard => GridPos::new(16, 0),
        Suspect::MrsWhite => GridPos::new(0, 7),
        Suspect::ReverendGreen => GridPos::new(0, 16),
        Suspect::MrsPeacock => GridPos::new(6, 23),
        Suspect::ProfessorPlum => GridPos::new(24, 16),
    }
}

/// Where a token lands after taking the secret passage into `room`
pub fn secret_passage_arrival(room: Room) -> Option<GridPos> {
    match room {
        Room::Kitchen => Some(GridPos::new(1, 1)),
        Room::Study => Some(GridPos::new(23, 22)),
        Room::Conservatory => Some(GridPos::new(1, 22)),
        Room::Lounge => Some(GridPos::new(23, 1)),
        _ => None,
    }
}
