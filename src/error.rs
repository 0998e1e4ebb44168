use thiserror::Error;

use crate::dom::ElementId;

/// Boxed error returned by content providers
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Custom error types for tipsy
#[derive(Debug, Error)]
pub enum TipsyError {
    #[error("element {0} does not exist")]
    ElementNotFound(ElementId),

    #[error("element {0} is not attached to the document body")]
    Detached(ElementId),

    #[error("no tooltip is bound to element {0}")]
    NotBound(ElementId),

    #[error("tooltip for element {0} has been destroyed")]
    Destroyed(ElementId),

    #[error("content provider failed: {0}")]
    Content(#[source] BoxError),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TipsyError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
