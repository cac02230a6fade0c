//! Immutable tile grid shared by every player
//!
//! Built once at game start and never mutated. Token overlays for display
//! work on a rendered copy.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::board::tile::Tile;
use crate::core::error::{ClueError, Result};
use crate::core::types::GridPos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    rows: usize,
    cols: usize,
}

impl Board {
    /// Build from rows of tile codes. Every row must have the same width.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let expected = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if expected == 0 {
            return Err(ClueError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(expected * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != expected {
                return Err(ClueError::RaggedBoard {
                    row,
                    expected,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let tile = Tile::from_char(ch).ok_or(ClueError::BoardParse { row, col, tile: ch })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            rows: rows.len(),
            cols: expected,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.rows
            && (pos.col as usize) < self.cols
    }

    /// Tile at `pos`, or None when out of bounds
    #[inline]
    pub fn tile(&self, pos: GridPos) -> Option<Tile> {
        if self.in_bounds(pos) {
            Some(self.tiles[pos.row as usize * self.cols + pos.col as usize])
        } else {
            None
        }
    }

    /// Row-major index for dense per-cell grids
    #[inline]
    pub fn index_of(&self, pos: GridPos) -> Option<usize> {
        self.in_bounds(pos)
            .then(|| pos.row as usize * self.cols + pos.col as usize)
    }

    /// All coordinates in row-major order
    pub fn positions(&self) -> impl Iterator<Item = GridPos> + '_ {
        (0..self.rows as i32)
            .flat_map(move |row| (0..self.cols as i32).map(move |col| GridPos::new(row, col)))
    }

    /// Coordinates of every tile matching `pred`, row-major
    pub fn find_tiles(&self, pred: impl Fn(Tile) -> bool) -> Vec<GridPos> {
        self.positions()
            .filter(|pos| self.tile(*pos).is_some_and(&pred))
            .collect()
    }

    /// Text rendering with player tokens drawn on top
    pub fn render_with_tokens(&self, tokens: &[(GridPos, char)]) -> String {
        let mut chars: Vec<char> = self.tiles.iter().map(|t| t.to_char()).collect();
        for (pos, token) in tokens {
            if let Some(idx) = self.index_of(*pos) {
                chars[idx] = *token;
            }
        }

        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for row in chars.chunks(self.cols) {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

impl FromStr for Board {
    type Err = ClueError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.is_empty())
            .collect();
        Board::from_rows(&rows)
    }
}

/// Load a board layout from a text file (one row per line)
pub fn load_board(path: &Path) -> Result<Board> {
    let contents = fs::read_to_string(path)?;
    contents.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Room;

    const SMALL: &str = "\
#####
#11X.
#11#.
#####
";

    #[test]
    fn test_parse_dimensions() {
        let board: Board = SMALL.parse().unwrap();
        assert_eq!(board.rows(), 4);
        assert_eq!(board.cols(), 5);
    }

    #[test]
    fn test_tile_lookup() {
        let board: Board = SMALL.parse().unwrap();
        assert_eq!(board.tile(GridPos::new(1, 3)), Some(Tile::Door));
        assert_eq!(board.tile(GridPos::new(1, 1)), Some(Tile::Room(Room::Kitchen)));
        assert_eq!(board.tile(GridPos::new(-1, 0)), None);
        assert_eq!(board.tile(GridPos::new(0, 5)), None);
    }

    #[test]
    fn test_ragged_board_rejected() {
        let result = "####\n###\n".parse::<Board>();
        assert!(matches!(
            result,
            Err(ClueError::RaggedBoard { row: 1, expected: 4, found: 3 })
        ));
    }

    #[test]
    fn test_unknown_tile_rejected() {
        let result = "##\n#?\n".parse::<Board>();
        assert!(matches!(
            result,
            Err(ClueError::BoardParse { row: 1, col: 1, tile: '?' })
        ));
    }

    #[test]
    fn test_empty_board_rejected() {
        assert!(matches!("".parse::<Board>(), Err(ClueError::EmptyBoard)));
    }

    #[test]
    fn test_render_overlay_leaves_board_untouched() {
        let board: Board = SMALL.parse().unwrap();
        let before = board.clone();
        let rendered = board.render_with_tokens(&[(GridPos::new(1, 4), 'S'), (GridPos::new(9, 9), 'M')]);
        assert_eq!(rendered.lines().nth(1), Some("#11XS"));
        assert_eq!(board, before);
    }

    #[test]
    fn test_find_tiles_row_major() {
        let board: Board = SMALL.parse().unwrap();
        let halls = board.find_tiles(|t| t == Tile::Hallway);
        assert_eq!(halls, vec![GridPos::new(1, 4), GridPos::new(2, 4)]);
    }
}
