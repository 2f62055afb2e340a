use thiserror::Error;

/// Errors raised while building a search pattern.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error("invalid search pattern: {0}")]
    InvalidPattern(String),
}

/// Errors raised by the host when a requested edit cannot be applied.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EditError {
    #[error("edit rejected: {from}..{to} no longer addresses live text")]
    Rejected { from: usize, to: usize },
}
