//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Index-stable identifier for a seat at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub fn new(id: u8) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Board coordinate as (row, col)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub row: i32,
    pub col: i32,
}

impl GridPos {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Neighbor one step in `dir`
    pub fn offset(&self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    pub fn manhattan(&self, other: &Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Direction of a single orthogonal step from `self` to `other`
    pub fn direction_to(&self, other: &Self) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| self.offset(*dir) == *other)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor scan order. Ties between neighbors are always resolved in this order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) delta
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Keyboard token used by the turn loop
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Up => "w",
            Direction::Down => "s",
            Direction::Left => "a",
            Direction::Right => "d",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "w" | "up" => Some(Direction::Up),
            "s" | "down" => Some(Direction::Down),
            "a" | "left" => Some(Direction::Left),
            "d" | "right" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// One movement decision: a single step or the end of the movement phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCommand {
    Step(Direction),
    Stop,
}

impl MoveCommand {
    pub const STOP_TOKEN: &'static str = "done";

    pub fn token(&self) -> &'static str {
        match self {
            MoveCommand::Step(dir) => dir.token(),
            MoveCommand::Stop => Self::STOP_TOKEN,
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "done" | "stop" | "" => Some(MoveCommand::Stop),
            other => Direction::from_token(other).map(MoveCommand::Step),
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            MoveCommand::Step(dir) => Some(*dir),
            MoveCommand::Stop => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_matches_delta() {
        let pos = GridPos::new(5, 5);
        assert_eq!(pos.offset(Direction::Up), GridPos::new(4, 5));
        assert_eq!(pos.offset(Direction::Down), GridPos::new(6, 5));
        assert_eq!(pos.offset(Direction::Left), GridPos::new(5, 4));
        assert_eq!(pos.offset(Direction::Right), GridPos::new(5, 6));
    }

    #[test]
    fn test_manhattan_distance() {
        let a = GridPos::new(1, 1);
        let b = GridPos::new(4, -2);
        assert_eq!(a.manhattan(&b), 6);
        assert_eq!(a.manhattan(&a), 0);
    }

    #[test]
    fn test_direction_to_adjacent_only() {
        let a = GridPos::new(3, 3);
        assert_eq!(a.direction_to(&GridPos::new(3, 4)), Some(Direction::Right));
        assert_eq!(a.direction_to(&GridPos::new(2, 3)), Some(Direction::Up));
        assert_eq!(a.direction_to(&GridPos::new(5, 3)), None);
        assert_eq!(a.direction_to(&a), None);
    }

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn test_command_tokens() {
        assert_eq!(MoveCommand::Step(Direction::Up).token(), "w");
        assert_eq!(MoveCommand::Stop.token(), "done");
        assert_eq!(MoveCommand::from_token("left"), Some(MoveCommand::Step(Direction::Left)));
        assert_eq!(MoveCommand::from_token("stop"), Some(MoveCommand::Stop));
        assert_eq!(MoveCommand::from_token("jump"), None);
    }
}
