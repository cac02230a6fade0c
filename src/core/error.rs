use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClueError {
    #[error("Unknown tile {tile:?} at row {row}, col {col}")]
    BoardParse { row: usize, col: usize, tile: char },

    #[error("Board row {row} has {found} tiles, expected {expected}")]
    RaggedBoard {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Board has no tiles")]
    EmptyBoard,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Unknown card: {0}")]
    UnknownCard(String),

    #[error("Unknown room id: {0}")]
    UnknownRoom(u8),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ClueError>;
