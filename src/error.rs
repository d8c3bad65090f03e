//! Widget tree error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("widget {0} is not allocated")]
    UnknownWidget(usize),

    #[error("widget {0} cannot be its own child")]
    SelfParent(usize),

    #[error("widget {child} already has parent {parent}")]
    AlreadyHasParent { child: usize, parent: usize },

    #[error("adding {child} under {parent} would create a cycle")]
    Cycle { parent: usize, child: usize },

    #[error("widget {child} is not a child of {parent}")]
    NotAChild { parent: usize, child: usize },
}
