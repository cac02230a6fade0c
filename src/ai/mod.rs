//! Cluedo AI decision core
//!
//! Architecture: Trait + Data hybrid
//! - AgentController trait is the seam the game loop talks to
//! - AiConfig holds TOML-loaded weights (scoring strategy, movement, policy)
//! - Notebook is the agent's belief state, MoveContext its view of the table

pub mod context;
pub mod controller;
pub mod movement;
pub mod notebook;
pub mod pathfinding;
pub mod scoring;

pub use context::{MoveContext, PlayerView};
pub use controller::AiPlayer;
pub use movement::choose_move;
pub use notebook::Notebook;
pub use pathfinding::{build_door_index, shortest_distances, DoorIndex};
pub use scoring::score_room;

use crate::board::Board;
use crate::cards::{Card, Room, Triplet};
use crate::core::types::MoveCommand;

/// Decision-maker attached to a player
///
/// The game loop calls these at fixed points of a turn; every method must
/// return a decision for every legal input.
pub trait AgentController: std::fmt::Debug {
    /// One movement step (or stop) given the board and every token on it
    fn choose_move_command(
        &mut self,
        board: &Board,
        players: &[PlayerView],
        steps_remaining: u32,
    ) -> MoveCommand;

    /// Suspect and weapon to name; the room is always the one we're in
    fn choose_suggestion(&mut self, room: Room) -> Triplet;

    /// Take the secret passage from `current` to `dest` at turn start?
    fn decide_use_secret_passage(&mut self, current: Room, dest: Room) -> bool;

    /// Called when nobody could refute our suggestion
    fn decide_accusation_from_suggestion(&mut self, triplet: Triplet) -> bool;

    /// Accusation to make before moving, if we already know the answer
    fn check_for_winning_accusation(&self) -> Option<Triplet>;

    fn note_entered_room(&mut self, room: Room);

    fn note_seen_card(&mut self, card: Card);

    /// Card to reveal when refuting someone else's suggestion
    fn choose_card_to_show(&mut self, matches: &[Card]) -> Option<Card> {
        matches.first().copied()
    }

    /// Belief state, for controllers that keep one
    fn notebook(&self) -> Option<&Notebook> {
        None
    }
}
