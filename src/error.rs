use thiserror::Error;

/// Errors surfaced by the environment and the discretizer.
///
/// Every variant is local to the call that raised it: a failed call leaves
/// the environment or discretizer state exactly as it was.
#[derive(Error, Debug)]
pub enum EnvError {
    /// Raw action value outside the enumerated set {0, 1, 2, 3}.
    #[error("invalid action {0}: expected a value in 0..=3")]
    InvalidAction(u8),

    /// Malformed continuous state handed to the discretizer.
    #[error("invalid continuous state: {0}")]
    InvalidInput(String),

    /// Non-strictly-increasing boundary array at discretizer construction.
    #[error("invalid discretizer configuration: {0}")]
    InvalidConfiguration(String),

    /// `step` called on an episode that already reached a terminal outcome.
    #[error("episode already terminated with {outcome:?}; call reset() first")]
    StepAfterTerminal {
        outcome: crate::simulation::Outcome,
    },

    /// Environment configuration file could not be read or parsed.
    #[error("failed to load environment config: {0}")]
    Config(String),
}

impl From<std::io::Error> for EnvError {
    fn from(err: std::io::Error) -> Self {
        EnvError::Config(err.to_string())
    }
}

impl From<ron::error::SpannedError> for EnvError {
    fn from(err: ron::error::SpannedError) -> Self {
        EnvError::Config(err.to_string())
    }
}
