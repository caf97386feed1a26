use thiserror::Error;

pub type SimResult<T> = std::result::Result<T, SimError>;

/// Everything that can abort a run. Configuration problems are caught
/// eagerly at construction/build time, never mid-simulation.
#[derive(Error, Debug)]
pub enum SimError{
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Internal bookkeeping went bad. Unreachable in a correct build,
    /// kept as a testing aid.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}
