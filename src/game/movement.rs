//! Step legality and token movement
//!
//! Rules applied to a single step:
//! - off-board and wall tiles always block
//! - inside a room a token may move over room and passage tiles, or exit
//!   onto a door
//! - hallway and door tiles may be entered unless another token stands there
//! - passage tiles can only be reached from inside their room
//! - room tiles can only be entered from a door; entering ends movement

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Tile};
use crate::cards::Room;
use crate::core::types::{Direction, GridPos, PlayerId};
use crate::game::player::Player;

/// Why a step was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockReason {
    OffBoard,
    Wall,
    Occupied,
    /// Inside a room, only room tiles and doors are reachable
    MustExitThroughDoor,
    PassageFromOutside,
    RoomOnlyFromDoor,
    Impassable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepOutcome {
    Moved,
    EnteredRoom(Room),
    Blocked(BlockReason),
}

impl StepOutcome {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, StepOutcome::Blocked(_))
    }

    pub fn entered_room(&self) -> Option<Room> {
        match self {
            StepOutcome::EnteredRoom(room) => Some(*room),
            _ => None,
        }
    }
}

pub fn roll_dice<R: Rng + ?Sized>(rng: &mut R, sides: u32) -> u32 {
    rng.gen_range(1..=sides.max(1))
}

/// Is any player other than `ignore` standing on `pos`?
pub fn is_occupied(players: &[Player], pos: GridPos, ignore: PlayerId) -> bool {
    players.iter().any(|p| p.id != ignore && p.position == pos)
}

/// Try to move `players[idx]` one tile in `dir`
///
/// On success the player's position and room status are updated, and room
/// entry is reported to its controller.
pub fn attempt_step(board: &Board, players: &mut [Player], idx: usize, dir: Direction) -> StepOutcome {
    let Some(player) = players.get(idx) else {
        return StepOutcome::Blocked(BlockReason::OffBoard);
    };
    let from = player.position;
    let to = from.offset(dir);

    let outcome = check_step(board, players, idx, from, to);
    if !outcome.is_accepted() {
        return outcome;
    }

    let player = &mut players[idx];
    let leaving = player.in_room.is_some() && board.tile(to) == Some(Tile::Door);
    if leaving {
        player.exit_room();
    }
    player.move_to(to);
    if let StepOutcome::EnteredRoom(room) = outcome {
        player.enter_room(room);
        tracing::debug!(player = %player.name, room = %room, "entered room");
    }
    outcome
}

fn check_step(board: &Board, players: &[Player], idx: usize, from: GridPos, to: GridPos) -> StepOutcome {
    let Some(target) = board.tile(to) else {
        return StepOutcome::Blocked(BlockReason::OffBoard);
    };
    if target == Tile::Wall {
        return StepOutcome::Blocked(BlockReason::Wall);
    }

    let player = &players[idx];
    let current = board.tile(from);
    let occupied = || is_occupied(players, to, player.id);

    if player.in_room.is_some() && current.is_some_and(|t| t.is_room_like()) {
        return match target {
            t if t.is_room_like() => StepOutcome::Moved,
            Tile::Door if occupied() => StepOutcome::Blocked(BlockReason::Occupied),
            Tile::Door => StepOutcome::Moved,
            _ => StepOutcome::Blocked(BlockReason::MustExitThroughDoor),
        };
    }

    match target {
        Tile::Hallway | Tile::Door if occupied() => StepOutcome::Blocked(BlockReason::Occupied),
        Tile::Hallway | Tile::Door => StepOutcome::Moved,
        Tile::SecretPassage(_) => StepOutcome::Blocked(BlockReason::PassageFromOutside),
        Tile::Room(room) if current == Some(Tile::Door) => StepOutcome::EnteredRoom(room),
        Tile::Room(_) => StepOutcome::Blocked(BlockReason::RoomOnlyFromDoor),
        Tile::Wall | Tile::Center => StepOutcome::Blocked(BlockReason::Impassable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suspect;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // Kitchen (1) with a passage tile, door at (3, 2), hallway below
    const MAP: &str = "\
#####
#%11#
#111#
##X##
#...#
#####
";

    fn setup(positions: &[(i32, i32)]) -> (Board, Vec<Player>) {
        let board: Board = MAP.parse().unwrap();
        let players = positions
            .iter()
            .enumerate()
            .map(|(i, (r, c))| {
                Player::at(PlayerId(i as u8), Suspect::ALL[i], GridPos::new(*r, *c))
            })
            .collect();
        (board, players)
    }

    #[test]
    fn test_dice_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..200 {
            let d = roll_dice(&mut rng, 6);
            assert!((1..=6).contains(&d));
        }
    }

    #[test]
    fn test_hallway_step_and_wall() {
        let (board, mut players) = setup(&[(4, 1)]);
        assert_eq!(attempt_step(&board, &mut players, 0, Direction::Right), StepOutcome::Moved);
        assert_eq!(players[0].position, GridPos::new(4, 2));
        assert_eq!(
            attempt_step(&board, &mut players, 0, Direction::Down),
            StepOutcome::Blocked(BlockReason::Wall)
        );
        assert_eq!(players[0].position, GridPos::new(4, 2));
    }

    #[test]
    fn test_enter_room_only_from_door() {
        let (board, mut players) = setup(&[(4, 2)]);
        assert_eq!(attempt_step(&board, &mut players, 0, Direction::Up), StepOutcome::Moved);
        assert_eq!(
            attempt_step(&board, &mut players, 0, Direction::Up),
            StepOutcome::EnteredRoom(Room::Kitchen)
        );
        assert_eq!(players[0].in_room, Some(Room::Kitchen));
        assert_eq!(players[0].position, GridPos::new(2, 2));
    }

    #[test]
    fn test_room_blocked_from_hallway_side() {
        let board: Board = "#1.\n###\n".parse().unwrap();
        let mut players = vec![Player::at(PlayerId(0), Suspect::MrsWhite, GridPos::new(0, 2))];
        assert_eq!(
            attempt_step(&board, &mut players, 0, Direction::Left),
            StepOutcome::Blocked(BlockReason::RoomOnlyFromDoor)
        );
    }

    #[test]
    fn test_move_inside_room_and_exit() {
        let (board, mut players) = setup(&[(2, 2)]);
        players[0].in_room = Some(Room::Kitchen);
        assert_eq!(attempt_step(&board, &mut players, 0, Direction::Left), StepOutcome::Moved);
        assert_eq!(attempt_step(&board, &mut players, 0, Direction::Up), StepOutcome::Moved);
        // Onto the passage tile from inside the room
        assert_eq!(players[0].position, GridPos::new(1, 1));

        players[0].move_to(GridPos::new(2, 2));
        assert_eq!(attempt_step(&board, &mut players, 0, Direction::Down), StepOutcome::Moved);
        assert_eq!(players[0].in_room, None);
        assert_eq!(players[0].position, GridPos::new(3, 2));
    }

    #[test]
    fn test_passage_not_enterable_from_outside() {
        let board: Board = "%.\n".parse().unwrap();
        let mut players = vec![Player::at(PlayerId(0), Suspect::MrsWhite, GridPos::new(0, 1))];
        assert_eq!(
            attempt_step(&board, &mut players, 0, Direction::Left),
            StepOutcome::Blocked(BlockReason::PassageFromOutside)
        );
    }

    #[test]
    fn test_occupied_door_blocks_exit() {
        let (board, mut players) = setup(&[(2, 2), (3, 2)]);
        players[0].in_room = Some(Room::Kitchen);
        assert_eq!(
            attempt_step(&board, &mut players, 0, Direction::Down),
            StepOutcome::Blocked(BlockReason::Occupied)
        );
        assert_eq!(players[0].in_room, Some(Room::Kitchen));
    }

    #[test]
    fn test_occupied_hallway_blocks() {
        let (board, mut players) = setup(&[(4, 1), (4, 2)]);
        assert_eq!(
            attempt_step(&board, &mut players, 0, Direction::Right),
            StepOutcome::Blocked(BlockReason::Occupied)
        );
        assert!(is_occupied(&players, GridPos::new(4, 2), PlayerId(0)));
        assert!(!is_occupied(&players, GridPos::new(4, 2), PlayerId(1)));
    }

    #[test]
    fn test_off_board() {
        let board: Board = "..\n".parse().unwrap();
        let mut players = vec![Player::at(PlayerId(0), Suspect::MrsWhite, GridPos::new(0, 0))];
        assert_eq!(
            attempt_step(&board, &mut players, 0, Direction::Up),
            StepOutcome::Blocked(BlockReason::OffBoard)
        );
    }
}
