use crate::error::ConfigError;
use crate::heuristic::DefensivePenalty;

/// Search depth used when none is given
pub const DEFAULT_DEPTH: usize = 3;

/// Deepest search accepted; each extra ply costs roughly seven times the work
pub const MAX_DEPTH: usize = 10;

/// Settings for the computer player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched ahead of the current position
    pub depth: usize,
    /// Seed for the tie-break choice; `None` draws from entropy
    pub seed: Option<u64>,
    pub penalty: DefensivePenalty,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            seed: None,
            penalty: DefensivePenalty::default(),
        }
    }
}

impl EngineConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::Validation("depth must be > 0".into()));
        }
        if self.depth > MAX_DEPTH {
            return Err(ConfigError::Validation(format!(
                "depth must be <= {}",
                MAX_DEPTH
            )));
        }
        Ok(())
    }
}
