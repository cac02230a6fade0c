//! Move-decision engine - one step per call
//!
//! Branches, in priority order:
//! 1. Inside a room: take an adjacent free door, else head greedily for the
//!    nearest door of this room, else wander.
//! 2. On a door: walk straight into the room behind it if it's still a
//!    candidate and not the room we just left.
//! 3. Hallway: BFS to every door, pick the best `score - weight * distance`,
//!    take the first step on that path if the cell is free.
//! 4. Any adjacent free door.
//! 5. Random walkable step.
//! 6. Stop.
//!
//! Every branch ends in a step or an explicit stop.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::ai::context::MoveContext;
use crate::ai::notebook::Notebook;
use crate::ai::pathfinding::{build_door_index, reconstruct_first_step, shortest_distances};
use crate::board::Tile;
use crate::cards::Room;
use crate::core::config::AiConfig;
use crate::core::types::{Direction, GridPos, MoveCommand};

/// Decide one movement command for the player in `ctx`
pub fn choose_move<R: Rng + ?Sized>(
    ctx: &MoveContext,
    notebook: &Notebook,
    config: &AiConfig,
    rng: &mut R,
) -> MoveCommand {
    let pos = ctx.position();
    let current = ctx.tile(pos);

    if let (Some(room), Some(tile)) = (ctx.me.in_room, current) {
        if tile.is_room_like() {
            return leave_room(ctx, room, config, rng);
        }
    }

    if current == Some(Tile::Door) {
        if let Some(dir) = enter_candidate_room(ctx, notebook) {
            tracing::debug!(?pos, ?dir, "stepping into candidate room");
            return MoveCommand::Step(dir);
        }
    }

    if let Some(dir) = step_toward_best_door(ctx, notebook, config) {
        return MoveCommand::Step(dir);
    }

    if let Some(dir) = adjacent_free_door(ctx) {
        tracing::debug!(?pos, ?dir, "fallback: adjacent door");
        return MoveCommand::Step(dir);
    }

    if let Some(dir) = wander(ctx, config.movement.hallway_wander_attempts, rng, |tile| {
        tile.is_walkable()
    }) {
        tracing::debug!(?pos, ?dir, "fallback: random hallway step");
        return MoveCommand::Step(dir);
    }

    tracing::debug!(?pos, "no legal move, stopping");
    MoveCommand::Stop
}

/// Branch 1: find the way out of `room`
fn leave_room<R: Rng + ?Sized>(
    ctx: &MoveContext,
    room: Room,
    config: &AiConfig,
    rng: &mut R,
) -> MoveCommand {
    if let Some(dir) = adjacent_free_door(ctx) {
        return MoveCommand::Step(dir);
    }

    let pos = ctx.position();
    let doors = build_door_index(ctx.board);
    let mut nearest: Option<(u32, GridPos)> = None;
    for door in doors.doors_of(room) {
        let d = pos.manhattan(&door);
        if nearest.map_or(true, |(best, _)| d < best) {
            nearest = Some((d, door));
        }
    }

    if let Some((_, door)) = nearest {
        // Vertical first, then horizontal; commit the first legal one
        for dir in greedy_directions(pos, door) {
            let next = pos.offset(dir);
            if ctx.tile(next).is_some_and(can_step_inside_room) && !ctx.is_occupied(next) {
                return MoveCommand::Step(dir);
            }
        }
    }

    match wander(ctx, config.movement.room_wander_attempts, rng, can_step_inside_room) {
        Some(dir) => MoveCommand::Step(dir),
        None => MoveCommand::Stop,
    }
}

/// Inside a room you can cross room tiles and passage endpoints or exit by a door
fn can_step_inside_room(tile: Tile) -> bool {
    tile.is_room_like() || tile == Tile::Door
}

fn greedy_directions(from: GridPos, to: GridPos) -> Vec<Direction> {
    let mut dirs = Vec::with_capacity(2);
    if to.row < from.row {
        dirs.push(Direction::Up);
    } else if to.row > from.row {
        dirs.push(Direction::Down);
    }
    if to.col < from.col {
        dirs.push(Direction::Left);
    } else if to.col > from.col {
        dirs.push(Direction::Right);
    }
    dirs
}

/// Branch 2: room behind the door we stand on
fn enter_candidate_room(ctx: &MoveContext, notebook: &Notebook) -> Option<Direction> {
    let pos = ctx.position();
    Direction::ALL.into_iter().find(|dir| {
        let next = pos.offset(*dir);
        match ctx.tile(next).and_then(|t| t.room()) {
            Some(room) => {
                notebook.last_room() != Some(room)
                    && notebook.is_possible_room(room)
                    && !ctx.is_occupied(next)
            }
            None => false,
        }
    })
}

/// Branch 3: highest-utility reachable door
fn step_toward_best_door(
    ctx: &MoveContext,
    notebook: &Notebook,
    config: &AiConfig,
) -> Option<Direction> {
    let pos = ctx.position();
    let doors = build_door_index(ctx.board);
    let (dist, prev) = shortest_distances(ctx.board, pos);

    let mut best: Option<(f32, GridPos, Room)> = None;
    for (door, room) in doors.iter() {
        let Some(d) = dist.get(door) else {
            continue;
        };
        if d == 0 {
            continue;
        }

        let utility = notebook.score_room(room, &config.scoring)
            - config.movement.distance_weight * d as f32;
        if best.map_or(true, |(u, _, _)| utility > u) {
            best = Some((utility, door, room));
        }
    }

    let (utility, door, room) = best?;
    let dir = reconstruct_first_step(pos, door, &prev)?;
    if ctx.is_occupied(pos.offset(dir)) {
        tracing::debug!(?pos, ?dir, "path step blocked by another player");
        return None;
    }

    tracing::debug!(?pos, ?door, %room, utility, ?dir, "heading for door");
    Some(dir)
}

fn adjacent_free_door(ctx: &MoveContext) -> Option<Direction> {
    let pos = ctx.position();
    Direction::ALL.into_iter().find(|dir| {
        let next = pos.offset(*dir);
        ctx.tile(next) == Some(Tile::Door) && !ctx.is_occupied(next)
    })
}

/// Up to `attempts` random directions; repeats still cost an attempt
fn wander<R: Rng + ?Sized>(
    ctx: &MoveContext,
    attempts: u32,
    rng: &mut R,
    allowed: impl Fn(Tile) -> bool,
) -> Option<Direction> {
    let pos = ctx.position();
    let mut tried: Vec<Direction> = Vec::with_capacity(4);

    for _ in 0..attempts {
        let Some(&dir) = Direction::ALL.choose(rng) else {
            break;
        };
        if tried.contains(&dir) {
            continue;
        }
        tried.push(dir);

        let next = pos.offset(dir);
        if ctx.tile(next).is_some_and(&allowed) && !ctx.is_occupied(next) {
            return Some(dir);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::context::PlayerView;
    use crate::board::Board;
    use crate::cards::Card;
    use crate::core::config::ScoringStrategy;
    use crate::core::types::PlayerId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Room 3 (Conservatory) top-left with a door at (3, 2),
    // room 8 (Hall) right with a door at (3, 6)
    const MAP: &str = "\
#########
#333#888#
#333#888#
##X###X##
#.......#
#########
";

    fn board() -> Board {
        MAP.parse().unwrap()
    }

    fn me(row: i32, col: i32, in_room: Option<Room>) -> PlayerView {
        PlayerView {
            id: PlayerId(0),
            position: GridPos::new(row, col),
            in_room,
            eliminated: false,
        }
    }

    fn other(id: u8, row: i32, col: i32) -> PlayerView {
        PlayerView {
            id: PlayerId(id),
            position: GridPos::new(row, col),
            in_room: None,
            eliminated: false,
        }
    }

    fn decide(board: &Board, players: &[PlayerView], nb: &Notebook) -> MoveCommand {
        let ctx = MoveContext::new(board, players, PlayerId(0), 3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        choose_move(&ctx, nb, &AiConfig::default(), &mut rng)
    }

    #[test]
    fn test_step_onto_door_of_candidate_room() {
        let board = board();
        let players = [me(4, 2, None)];
        let nb = Notebook::new();
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Up));
    }

    #[test]
    fn test_prefers_candidate_room_over_eliminated() {
        let board = board();
        // Equidistant between the two doors
        let players = [me(4, 4, None)];
        let mut nb = Notebook::new();
        nb.note_seen_card(Card::Room(Room::Conservatory));
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Right));

        let mut nb = Notebook::new();
        nb.note_seen_card(Card::Room(Room::Hall));
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Left));
    }

    #[test]
    fn test_nearer_door_wins_on_equal_score() {
        let board = board();
        let players = [me(4, 3, None)];
        let nb = Notebook::new();
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Left));
    }

    #[test]
    fn test_enter_room_from_door() {
        let board = board();
        let players = [me(3, 2, None)];
        let nb = Notebook::new();
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Up));
    }

    #[test]
    fn test_door_does_not_reenter_last_room() {
        let board = board();
        let players = [me(3, 2, None)];
        let mut nb = Notebook::new();
        nb.note_room_visit(Room::Conservatory);
        // Heads down into the hallway toward the Hall instead
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Down));
    }

    #[test]
    fn test_door_does_not_enter_eliminated_room() {
        let board = board();
        let players = [me(3, 6, None)];
        let mut nb = Notebook::new();
        nb.note_seen_card(Card::Room(Room::Hall));
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Down));
    }

    #[test]
    fn test_leave_room_through_adjacent_door() {
        let board = board();
        let players = [me(2, 2, Some(Room::Conservatory))];
        let nb = Notebook::new();
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Down));
    }

    #[test]
    fn test_leave_room_heads_for_nearest_door() {
        let board = board();
        let players = [me(1, 1, Some(Room::Conservatory))];
        let nb = Notebook::new();
        // Door at (3, 2): vertical step first
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Down));
    }

    #[test]
    fn test_leave_room_sidesteps_wall() {
        let board = board();
        // Directly above the wall at (3, 1); vertical step is a wall
        let players = [me(2, 1, Some(Room::Conservatory))];
        let nb = Notebook::new();
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Step(Direction::Right));
    }

    #[test]
    fn test_occupied_door_is_not_taken_from_room() {
        let board = board();
        let players = [me(2, 2, Some(Room::Conservatory)), other(1, 3, 2)];
        let nb = Notebook::new();
        let cmd = decide(&board, &players, &nb);
        assert_ne!(cmd, MoveCommand::Step(Direction::Down));
    }

    #[test]
    fn test_blocked_path_step_falls_through() {
        let board = board();
        // Heading left for the Conservatory door; (4, 2) is taken
        let players = [me(4, 3, None), other(1, 4, 2)];
        let nb = Notebook::new();
        let cmd = decide(&board, &players, &nb);
        // Only the random fallback is left, and it can only go right
        assert!(matches!(cmd, MoveCommand::Step(Direction::Right) | MoveCommand::Stop));
    }

    #[test]
    fn test_boxed_in_player_stops() {
        let board: Board = "#####\n#...#\n#####\n".parse().unwrap();
        let players = [me(1, 2, None), other(1, 1, 1), other(2, 1, 3)];
        let nb = Notebook::new();
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Stop);
    }

    #[test]
    fn test_flat_strategy_still_targets_candidates() {
        let board = board();
        let players = [me(4, 4, None)];
        let mut nb = Notebook::new();
        nb.note_seen_card(Card::Room(Room::Hall));
        let ctx = MoveContext::new(&board, &players, PlayerId(0), 2).unwrap();
        let config = AiConfig::with_strategy(ScoringStrategy::Flat);
        let mut rng = StdRng::seed_from_u64(5);
        assert_eq!(
            choose_move(&ctx, &nb, &config, &mut rng),
            MoveCommand::Step(Direction::Left)
        );
    }

    #[test]
    fn test_hallway_wander_never_enters_room() {
        // No doors at all: only the random fallback can move
        let board: Board = "#####\n#1.1#\n#####\n".parse().unwrap();
        let players = [me(1, 2, None)];
        let nb = Notebook::new();
        assert_eq!(decide(&board, &players, &nb), MoveCommand::Stop);
    }
}
