//! Error taxonomy shared across the workspace

use thiserror::Error;

/// Simulation errors.
///
/// All invalid-input and boundary conditions surface as one of these
/// variants instead of propagating NaN through the statistics.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// A top-level parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A tournament was handed a field whose length is not a power of two.
    #[error("bracket size {0} is not a power of two")]
    InvalidBracketSize(usize),

    /// Both contestants in a probabilistic battle have a final score of
    /// zero, leaving the win ratio undefined.
    #[error("degenerate battle: both contestants have a final score of zero")]
    DegenerateBattle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SimError::InvalidBracketSize(6);
        assert_eq!(err.to_string(), "bracket size 6 is not a power of two");

        let err = SimError::InvalidParameter("experiments must be at least 1".to_string());
        assert!(err.to_string().contains("experiments"));
    }
}
