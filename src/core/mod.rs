pub mod config;
pub mod error;
pub mod types;

pub use config::{AiConfig, GameConfig, ScoringStrategy};
pub use error::{ClueError, Result};
pub use types::{Direction, GridPos, MoveCommand, PlayerId};
