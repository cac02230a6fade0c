//! Board model - a fixed grid of typed tiles
//!
//! Walls, hallways, doors, room interiors, secret passage endpoints and the
//! center envelope. The grid never changes after it is loaded.

pub mod board_map;
pub mod layout;
pub mod tile;

pub use board_map::{load_board, Board};
pub use layout::{classic_board, secret_passage_arrival, start_position, CLASSIC_LAYOUT};
pub use tile::Tile;
