//! Board tile codes
//!
//! One character per tile, matching the layout files under `data/boards/`.

use serde::{Deserialize, Serialize};

use crate::cards::Room;

/// Kind of a single board tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tile {
    #[default]
    Wall,           // '#'
    Hallway,        // '.'
    Door,           // 'X', adjacent to exactly one room interior
    Room(Room),     // '1'..'9'
    SecretPassage(char), // '%' or '&', inside a room
    Center,         // 'Q', the envelope; never walkable
}

impl Tile {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Hallway),
            'X' => Some(Tile::Door),
            'Q' => Some(Tile::Center),
            '%' | '&' => Some(Tile::SecretPassage(ch)),
            '1'..='9' => ch
                .to_digit(10)
                .and_then(|d| Room::from_id(d as u8))
                .map(Tile::Room),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Hallway => '.',
            Tile::Door => 'X',
            Tile::Center => 'Q',
            Tile::SecretPassage(marker) => *marker,
            Tile::Room(room) => char::from(b'0' + room.id()),
        }
    }

    /// Hallways and doors are the only tiles pathfinding walks over
    pub fn is_walkable(&self) -> bool {
        matches!(self, Tile::Hallway | Tile::Door)
    }

    /// Room id for a room-interior tile
    pub fn room(&self) -> Option<Room> {
        match self {
            Tile::Room(room) => Some(*room),
            _ => None,
        }
    }

    /// Room interior or a secret passage endpoint
    pub fn is_room_like(&self) -> bool {
        matches!(self, Tile::Room(_) | Tile::SecretPassage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_round_trip() {
        for ch in "#.XQ%&123456789".chars() {
            let tile = Tile::from_char(ch).unwrap();
            assert_eq!(tile.to_char(), ch);
        }
    }

    #[test]
    fn test_unknown_chars_rejected() {
        assert_eq!(Tile::from_char('0'), None);
        assert_eq!(Tile::from_char('S'), None);
        assert_eq!(Tile::from_char(' '), None);
    }

    #[test]
    fn test_walkable_tiles() {
        assert!(Tile::Hallway.is_walkable());
        assert!(Tile::Door.is_walkable());
        assert!(!Tile::Wall.is_walkable());
        assert!(!Tile::Center.is_walkable());
        assert!(!Tile::Room(Room::Hall).is_walkable());
        assert!(!Tile::SecretPassage('%').is_walkable());
    }

    #[test]
    fn test_room_lookup() {
        assert_eq!(Tile::from_char('6').and_then(|t| t.room()), Some(Room::Library));
        assert_eq!(Tile::Door.room(), None);
        assert!(Tile::SecretPassage('&').is_room_like());
        assert!(!Tile::Door.is_room_like());
    }
}
