//! Error types for the luck-roll engine.

use thiserror::Error;

/// Result type for engine operations.
pub type LuckResult<T> = Result<T, LuckError>;

/// Errors that can occur while computing a luck-roll report.
#[derive(Debug, Error)]
pub enum LuckError {
    /// The roll source produced a value outside the d20 range.
    ///
    /// A contract violation of the source, not recoverable input: the
    /// invocation aborts and no partial report is returned. Whether to retry
    /// the whole invocation is the caller's call.
    #[error("roll source produced {value}, outside the d20 range 1..=20")]
    InvalidRollOutcome {
        /// The out-of-range value the source returned.
        value: u32,
    },
}
