//! Breadth-first pathfinding over hallway and door tiles
//!
//! Distances depend on board topology only. Player occupancy is checked by
//! the caller when a step is committed.

use ahash::AHashMap;
use std::collections::VecDeque;

use crate::board::{Board, Tile};
use crate::cards::Room;
use crate::core::types::{Direction, GridPos};

/// Door coordinate -> room it opens into
///
/// Doors are kept in row-major board order so callers iterating them get a
/// stable first-encountered order.
#[derive(Debug, Clone, Default)]
pub struct DoorIndex {
    doors: Vec<(GridPos, Room)>,
    by_pos: AHashMap<GridPos, Room>,
}

impl DoorIndex {
    pub fn room_at(&self, pos: GridPos) -> Option<Room> {
        self.by_pos.get(&pos).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (GridPos, Room)> + '_ {
        self.doors.iter().copied()
    }

    /// Doors opening into `room`
    pub fn doors_of(&self, room: Room) -> impl Iterator<Item = GridPos> + '_ {
        self.doors
            .iter()
            .filter(move |(_, r)| *r == room)
            .map(|(pos, _)| *pos)
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }
}

/// Map every door tile to the room behind it
///
/// The first room-interior neighbor in up, down, left, right order wins.
/// A door with no room neighbor is left out.
pub fn build_door_index(board: &Board) -> DoorIndex {
    let mut index = DoorIndex::default();

    for pos in board.find_tiles(|t| t == Tile::Door) {
        let room = Direction::ALL
            .into_iter()
            .find_map(|dir| board.tile(pos.offset(dir)).and_then(|t| t.room()));

        if let Some(room) = room {
            index.doors.push((pos, room));
            index.by_pos.insert(pos, room);
        }
    }

    index
}

/// BFS step counts from the start cell; None where unreachable
#[derive(Debug, Clone)]
pub struct DistanceGrid {
    cols: usize,
    cells: Vec<Option<u32>>,
}

impl DistanceGrid {
    pub fn get(&self, pos: GridPos) -> Option<u32> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    fn index(&self, pos: GridPos) -> Option<usize> {
        let rows = self.cells.len() / self.cols.max(1);
        (pos.row >= 0 && pos.col >= 0 && (pos.row as usize) < rows && (pos.col as usize) < self.cols)
            .then(|| pos.row as usize * self.cols + pos.col as usize)
    }
}

/// BFS predecessor links; None for the start cell and unreachable cells
#[derive(Debug, Clone)]
pub struct PredecessorGrid {
    cols: usize,
    cells: Vec<Option<GridPos>>,
}

impl PredecessorGrid {
    pub fn get(&self, pos: GridPos) -> Option<GridPos> {
        let rows = self.cells.len() / self.cols.max(1);
        if pos.row < 0 || pos.col < 0 || pos.row as usize >= rows || pos.col as usize >= self.cols {
            return None;
        }
        self.cells[pos.row as usize * self.cols + pos.col as usize]
    }
}

/// Single-source BFS over hallway and door tiles
///
/// Each cell is visited at most once, so its first distance is the shortest.
/// Room interiors are never expanded.
pub fn shortest_distances(board: &Board, start: GridPos) -> (DistanceGrid, PredecessorGrid) {
    let size = board.rows() * board.cols();
    let mut dist = DistanceGrid {
        cols: board.cols(),
        cells: vec![None; size],
    };
    let mut prev = PredecessorGrid {
        cols: board.cols(),
        cells: vec![None; size],
    };

    let Some(start_idx) = board.index_of(start) else {
        return (dist, prev);
    };

    let mut queue = VecDeque::new();
    dist.cells[start_idx] = Some(0);
    queue.push_back((start, 0u32));

    while let Some((current, d)) = queue.pop_front() {
        for dir in Direction::ALL {
            let next = current.offset(dir);
            if !board.tile(next).is_some_and(|t| t.is_walkable()) {
                continue;
            }
            // In bounds: tile() returned Some
            let Some(idx) = board.index_of(next) else {
                continue;
            };
            if dist.cells[idx].is_some() {
                continue;
            }
            dist.cells[idx] = Some(d + 1);
            prev.cells[idx] = Some(current);
            queue.push_back((next, d + 1));
        }
    }

    (dist, prev)
}

/// Direction of the first step on the BFS path from `start` to `target`
///
/// None when the target is unreachable or is the start cell itself.
pub fn reconstruct_first_step(
    start: GridPos,
    target: GridPos,
    predecessors: &PredecessorGrid,
) -> Option<Direction> {
    if start == target {
        return None;
    }

    // Walk back until the cell whose predecessor is the start
    let mut current = target;
    loop {
        let parent = predecessors.get(current)?;
        if parent == start {
            return start.direction_to(&current);
        }
        current = parent;
    }
}

/// Full BFS path from `start` to `target`, inclusive of both ends
pub fn reconstruct_path(
    start: GridPos,
    target: GridPos,
    predecessors: &PredecessorGrid,
) -> Option<Vec<GridPos>> {
    let mut path = vec![target];
    let mut current = target;
    while current != start {
        current = predecessors.get(current)?;
        path.push(current);
    }
    path.reverse();
    Some(path)
}
