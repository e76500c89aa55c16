use thiserror::Error;

/// Reasons a job descriptor cannot be built.
///
/// All of them are caller mistakes: the descriptor is never partially built and
/// nothing here is meant to be retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JobError {
    #[error("invalid callable kind: {0}")]
    InvalidCallableKind(String),
    #[error("invalid positional arguments kind: {0}")]
    InvalidPositionalArgsKind(String),
    #[error("invalid keyword arguments kind: {0}")]
    InvalidKeywordArgsKind(String),
    #[error("function `{0}` is not registered")]
    UnregisteredFunction(String),
    #[error("function `{0}` is registered more than once")]
    AmbiguousFunction(String),
}

impl JobError {
    pub fn get_message(&self) -> String {
        match self {
            JobError::InvalidCallableKind(message)
            | JobError::InvalidPositionalArgsKind(message)
            | JobError::InvalidKeywordArgsKind(message)
            | JobError::UnregisteredFunction(message)
            | JobError::AmbiguousFunction(message) => message.to_string(),
        }
    }
    pub fn get_code(&self) -> u32 {
        match self {
            JobError::InvalidCallableKind(_) => 1u32,
            JobError::InvalidPositionalArgsKind(_) => 2u32,
            JobError::InvalidKeywordArgsKind(_) => 3u32,
            JobError::UnregisteredFunction(_) => 4u32,
            JobError::AmbiguousFunction(_) => 5u32,
        }
    }
}
