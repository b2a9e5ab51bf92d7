use thiserror::Error;

/// Which size check rejected the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolShortfall {
    BeforeAuthorRemoval,
    AfterAuthorRemoval,
}

impl std::fmt::Display for PoolShortfall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PoolShortfall::BeforeAuthorRemoval => {
                f.write_str("The pool size is smaller than the desired number of assignees.")
            }
            PoolShortfall::AfterAuthorRemoval => f.write_str(
                "The pool size, after removing the author of the PR, is smaller than the desired number of assignees.",
            ),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssignError {
    #[error("{0}")]
    Configuration(String),

    #[error("{0}")]
    InsufficientPool(PoolShortfall),
}

impl AssignError {
    pub fn config(msg: impl Into<String>) -> Self {
        AssignError::Configuration(msg.into())
    }
}
