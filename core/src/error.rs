use thiserror::Error;

pub type HashLabResult<T> = std::result::Result<T, HashLabError>;

/// Errors produced by the lab core.
///
/// The taxonomy is deliberately small: every core operation is deterministic,
/// so the only thing that can go wrong is being asked for a primitive the
/// lab does not know about. Anything interactive (re-prompting, aborting a
/// demo step) is the shell's business.
#[derive(Error, Debug)]
pub enum HashLabError {
    #[error("Unsupported hash primitive: '{0}'")]
    UnsupportedPrimitive(String),
}
