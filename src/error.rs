//! Error types for move validation and engine configuration

/// Errors raised when a requested move cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Invalid move, column {column} out of range. Columns must be between 1 and {}", crate::WIDTH)]
    OutOfRange { column: usize },

    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("could not parse '{found}' at position {position} as a valid move")]
    Parse { position: usize, found: char },

    #[error("Invalid move, the game is already over")]
    GameOver,
}

/// Errors raised when validating engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("config validation error: {0}")]
    Validation(String),
}
