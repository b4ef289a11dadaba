use std::path::PathBuf;

/// Errors raised by board operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be between 4x4 and 100x100 (got {width}x{height})")]
    InvalidDimensions { width: usize, height: usize },

    #[error("column {column} is out of range (0..{width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("no move has been made")]
    NoMoveYet,
}

/// Errors that can occur when applying a move to a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("game is already over")]
    GameOver,
}

/// Errors that can occur while running an interactive session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input closed before the game finished")]
    InputClosed,

    #[error("unrecoverable move error: {0}")]
    Move(#[from] MoveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
