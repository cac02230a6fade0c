//! Suspect, weapon and room cards
//!
//! Every card belongs to exactly one category by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::error::ClueError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suspect {
    MissScarlett,
    ColonelMustard,
    MrsWhite,
    ReverendGreen,
    MrsPeacock,
    ProfessorPlum,
}

impl Suspect {
    pub const ALL: [Suspect; 6] = [
        Suspect::MissScarlett,
        Suspect::ColonelMustard,
        Suspect::MrsWhite,
        Suspect::ReverendGreen,
        Suspect::MrsPeacock,
        Suspect::ProfessorPlum,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Suspect::MissScarlett => "Miss Scarlett",
            Suspect::ColonelMustard => "Colonel Mustard",
            Suspect::MrsWhite => "Mrs. White",
            Suspect::ReverendGreen => "Reverend Green",
            Suspect::MrsPeacock => "Mrs. Peacock",
            Suspect::ProfessorPlum => "Professor Plum",
        }
    }

    /// Single-character board token
    pub fn token(&self) -> char {
        match self {
            Suspect::MissScarlett => 'S',
            Suspect::ColonelMustard => 'M',
            Suspect::MrsWhite => 'W',
            Suspect::ReverendGreen => 'G',
            Suspect::MrsPeacock => 'P',
            Suspect::ProfessorPlum => 'L',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weapon {
    Candlestick,
    Dagger,
    LeadPipe,
    Revolver,
    Rope,
    Wrench,
}

impl Weapon {
    pub const ALL: [Weapon; 6] = [
        Weapon::Candlestick,
        Weapon::Dagger,
        Weapon::LeadPipe,
        Weapon::Revolver,
        Weapon::Rope,
        Weapon::Wrench,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weapon::Candlestick => "Candlestick",
            Weapon::Dagger => "Dagger",
            Weapon::LeadPipe => "Lead Pipe",
            Weapon::Revolver => "Revolver",
            Weapon::Rope => "Rope",
            Weapon::Wrench => "Wrench",
        }
    }
}

/// The nine rooms, numbered 1..=9 on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Room {
    Kitchen,
    Ballroom,
    Conservatory,
    DiningRoom,
    BilliardRoom,
    Library,
    Lounge,
    Hall,
    Study,
}

impl Room {
    pub const ALL: [Room; 9] = [
        Room::Kitchen,
        Room::Ballroom,
        Room::Conservatory,
        Room::DiningRoom,
        Room::BilliardRoom,
        Room::Library,
        Room::Lounge,
        Room::Hall,
        Room::Study,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Room::Kitchen => "Kitchen",
            Room::Ballroom => "Ballroom",
            Room::Conservatory => "Conservatory",
            Room::DiningRoom => "Dining Room",
            Room::BilliardRoom => "Billiard Room",
            Room::Library => "Library",
            Room::Lounge => "Lounge",
            Room::Hall => "Hall",
            Room::Study => "Study",
        }
    }

    /// Board id (1..=9)
    pub fn id(&self) -> u8 {
        *self as u8 + 1
    }

    pub fn from_id(id: u8) -> Option<Self> {
        id.checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize).copied())
    }

    /// Room on the other end of this room's secret passage
    ///
    /// Kitchen <-> Study, Conservatory <-> Lounge
    pub fn secret_passage(&self) -> Option<Room> {
        match self {
            Room::Kitchen => Some(Room::Study),
            Room::Study => Some(Room::Kitchen),
            Room::Conservatory => Some(Room::Lounge),
            Room::Lounge => Some(Room::Conservatory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Suspect,
    Weapon,
    Room,
}

/// Any card in the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Card {
    Suspect(Suspect),
    Weapon(Weapon),
    Room(Room),
}

impl Card {
    pub fn category(&self) -> CardCategory {
        match self {
            Card::Suspect(_) => CardCategory::Suspect,
            Card::Weapon(_) => CardCategory::Weapon,
            Card::Room(_) => CardCategory::Room,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Card::Suspect(s) => s.name(),
            Card::Weapon(w) => w.name(),
            Card::Room(r) => r.name(),
        }
    }
}

impl From<Suspect> for Card {
    fn from(s: Suspect) -> Self {
        Card::Suspect(s)
    }
}

impl From<Weapon> for Card {
    fn from(w: Weapon) -> Self {
        Card::Weapon(w)
    }
}

impl From<Room> for Card {
    fn from(r: Room) -> Self {
        Card::Room(r)
    }
}

impl fmt::Display for Suspect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suspect {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClueError::UnknownCard(s.to_string()))
    }
}

impl FromStr for Weapon {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClueError::UnknownCard(s.to_string()))
    }
}

impl FromStr for Room {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ClueError::UnknownCard(s.to_string()))
    }
}

impl FromStr for Card {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Suspect>()
            .map(Card::Suspect)
            .or_else(|_| s.parse::<Weapon>().map(Card::Weapon))
            .or_else(|_| s.parse::<Room>().map(Card::Room))
    }
}

/// A (suspect, weapon, room) combination: the envelope, a suggestion or a hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triplet {
    pub suspect: Suspect,
    pub weapon: Weapon,
    pub room: Room,
}

impl Triplet {
    pub fn new(suspect: Suspect, weapon: Weapon, room: Room) -> Self {
        Self {
            suspect,
            weapon,
            room,
        }
    }

    pub fn cards(&self) -> [Card; 3] {
        [
            Card::Suspect(self.suspect),
            Card::Weapon(self.weapon),
            Card::Room(self.room),
        ]
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards().contains(&card)
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with the {} in the {}", self.suspect, self.weapon, self.room)
    }
}

/// All 21 cards in domain order (suspects, weapons, rooms)
pub fn full_deck() -> Vec<Card> {
    Suspect::ALL
        .into_iter()
        .map(Card::Suspect)
        .chain(Weapon::ALL.into_iter().map(Card::Weapon))
        .chain(Room::ALL.into_iter().map(Card::Room))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_ids_round_trip() {
        for room in Room::ALL {
            assert_eq!(Room::from_id(room.id()), Some(room));
        }
        assert_eq!(Room::Kitchen.id(), 1);
        assert_eq!(Room::Study.id(), 9);
        assert_eq!(Room::from_id(0), None);
        assert_eq!(Room::from_id(10), None);
    }

    #[test]
    fn test_secret_passages_are_symmetric() {
        for room in Room::ALL {
            if let Some(dest) = room.secret_passage() {
                assert_eq!(dest.secret_passage(), Some(room));
            }
        }
        assert_eq!(Room::Kitchen.secret_passage(), Some(Room::Study));
        assert_eq!(Room::Conservatory.secret_passage(), Some(Room::Lounge));
        assert_eq!(Room::Hall.secret_passage(), None);
    }

    #[test]
    fn test_parse_card_names() {
        assert_eq!("Mrs. Peacock".parse::<Card>().unwrap(), Card::Suspect(Suspect::MrsPeacock));
        assert_eq!("lead pipe".parse::<Card>().unwrap(), Card::Weapon(Weapon::LeadPipe));
        assert_eq!("Billiard Room".parse::<Card>().unwrap(), Card::Room(Room::BilliardRoom));
        assert!("Attic".parse::<Card>().is_err());
    }

    #[test]
    fn test_full_deck_has_every_card_once() {
        let deck = full_deck();
        assert_eq!(deck.len(), 21);
        let unique: std::collections::HashSet<_> = deck.iter().collect();
        assert_eq!(unique.len(), 21);
    }

    #[test]
    fn test_triplet_contains() {
        let t = Triplet::new(Suspect::MrsWhite, Weapon::Rope, Room::Hall);
        assert!(t.contains(Card::Weapon(Weapon::Rope)));
        assert!(!t.contains(Card::Room(Room::Study)));
        assert_eq!(t.to_string(), "Mrs. White with the Rope in the Hall");
    }
}
