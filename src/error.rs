use std::path::PathBuf;

/// A move was rejected. Nothing on the board changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { column: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("game is already over")]
    GameAlreadyOver,

    #[error("it is not the human's turn")]
    NotHumanTurn,
}

/// A board picture could not be turned into a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    #[error("board picture has no cells")]
    Empty,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell symbol '{0}'")]
    UnknownSymbol(char),

    #[error("token at row {row}, column {col} is floating above an empty cell")]
    FloatingToken { row: usize, col: usize },
}

/// The move selector was asked to play on a board with no open column.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no legal move: every column is full")]
    NoLegalMove,
}

/// Errors returned by the engine's public operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("illegal move: {0}")]
    Move(#[from] MoveError),

    #[error("move selection failed: {0}")]
    Selector(#[from] SelectError),
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
