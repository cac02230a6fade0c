//! A seat at the table: token, hand, room status and optional controller

use crate::ai::{AgentController, PlayerView};
use crate::board::start_position;
use crate::cards::{Card, Room, Suspect, Triplet};
use crate::core::types::{GridPos, PlayerId};

#[derive(Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub suspect: Suspect,
    pub token: char,
    pub start_position: GridPos,
    pub position: GridPos,
    pub hand: Vec<Card>,
    pub in_room: Option<Room>,
    pub eliminated: bool,
    /// None for a seat with nobody deciding for it
    pub controller: Option<Box<dyn AgentController>>,
}

impl Player {
    /// Seat for `suspect` on its classic start tile
    pub fn new(id: PlayerId, suspect: Suspect) -> Self {
        Self::at(id, suspect, start_position(suspect))
    }

    pub fn at(id: PlayerId, suspect: Suspect, start: GridPos) -> Self {
        Self {
            id,
            name: suspect.name().to_string(),
            suspect,
            token: suspect.token(),
            start_position: start,
            position: start,
            hand: Vec::new(),
            in_room: None,
            eliminated: false,
            controller: None,
        }
    }

    pub fn with_controller(mut self, controller: Box<dyn AgentController>) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.controller.is_some()
    }

    pub fn move_to(&mut self, pos: GridPos) {
        self.position = pos;
    }

    /// Mark the player as inside `room` and tell its controller
    pub fn enter_room(&mut self, room: Room) {
        self.in_room = Some(room);
        if let Some(controller) = self.controller.as_mut() {
            controller.note_entered_room(room);
        }
    }

    pub fn exit_room(&mut self) {
        self.in_room = None;
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Cards in hand that would refute `triplet`, in hand order
    pub fn matching_cards(&self, triplet: &Triplet) -> Vec<Card> {
        self.hand
            .iter()
            .copied()
            .filter(|c| triplet.contains(*c))
            .collect()
    }

    pub fn reset_to_start(&mut self) {
        self.position = self.start_position;
        self.in_room = None;
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            id: self.id,
            position: self.position,
            in_room: self.in_room,
            eliminated: self.eliminated,
        }
    }
}
