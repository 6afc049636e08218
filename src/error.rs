//! Error types for the bandit simulator.

use thiserror::Error;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, BanditError>;

/// Errors raised while configuring a simulation.
///
/// A configured simulation never fails while running; every variant here is
/// produced at construction time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BanditError {
    /// The action list is empty.
    #[error("no actions available")]
    NoActionsAvailable,

    /// An action definition is malformed.
    #[error("invalid action {index}: {message}")]
    InvalidAction { index: usize, message: String },

    /// Invalid parameter value.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Builder configuration error.
    #[error("builder error: {message}")]
    BuilderError { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BanditError::NoActionsAvailable;
        assert_eq!(err.to_string(), "no actions available");

        let err = BanditError::InvalidParameter {
            message: "steps must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "invalid parameter: steps must be positive");

        let err = BanditError::InvalidAction {
            index: 2,
            message: "probability 1.5 is outside [0, 1]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid action 2: probability 1.5 is outside [0, 1]"
        );
    }
}
