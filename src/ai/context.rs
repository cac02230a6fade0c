//! AI's read-only view of the table for one movement decision

use crate::board::{Board, Tile};
use crate::cards::Room;
use crate::core::types::{GridPos, PlayerId};

/// What any player can see about a token on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerView {
    pub id: PlayerId,
    pub position: GridPos,
    pub in_room: Option<Room>,
    pub eliminated: bool,
}

/// Inputs to a single-step movement decision
pub struct MoveContext<'a> {
    pub board: &'a Board,
    pub players: &'a [PlayerView],
    pub me: PlayerView,
    pub steps_remaining: u32,
}

impl<'a> MoveContext<'a> {
    /// Build the context for `me`. Returns None if `me` isn't at the table.
    pub fn new(
        board: &'a Board,
        players: &'a [PlayerView],
        me: PlayerId,
        steps_remaining: u32,
    ) -> Option<Self> {
        let me = players.iter().find(|p| p.id == me).copied()?;
        Some(Self {
            board,
            players,
            me,
            steps_remaining,
        })
    }

    pub fn position(&self) -> GridPos {
        self.me.position
    }

    pub fn tile(&self, pos: GridPos) -> Option<Tile> {
        self.board.tile(pos)
    }

    /// Is another player's token on `pos`?
    pub fn is_occupied(&self, pos: GridPos) -> bool {
        self.players
            .iter()
            .any(|p| p.id != self.me.id && p.position == pos)
    }
}
