use thiserror::Error;

/// Errors produced by the scoring engine.
///
/// The engine has no I/O, so there is only one recoverable failure: the
/// caller supplied an input set the engine cannot score. Contract
/// violations between the vectorizer and the scorer (a matrix with fewer
/// than two rows reaching the scorer) are bugs, not user errors, and
/// panic instead of surfacing here.
#[derive(Error, Debug)]
pub enum SimilarityError {
    /// The supplied document set cannot be scored.
    /// Retrying with the same input will fail the same way.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SimilarityError {
    /// Create a new invalid-input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SimilarityError::InvalidInput(msg.into())
    }
}

/// Result type alias for operations that may fail with [`SimilarityError`].
pub type Result<T> = std::result::Result<T, SimilarityError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_message() {
        let err = SimilarityError::invalid_input("need at least two texts");
        assert_eq!(err.to_string(), "invalid input: need at least two texts");
    }
}
