//! Error types for tagtree
//!
//! The builder itself never fails. Errors only come out of
//! [`html_with_config`](crate::html_with_config), when a finished tree
//! violates a policy the caller opted into through [`Config`](crate::Config).

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A kind marked [`Unique`](crate::Unique) occurs more than once under one parent.
    DuplicateUnique {
        parent: &'static str,
        child: &'static str,
        count: usize,
    },
    /// The tag nesting is deeper than the configured limit.
    MaxDepthExceeded { max: usize, found: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateUnique {
                parent,
                child,
                count,
            } => write!(
                f,
                "<{child}> may appear at most once inside <{parent}>, found {count}"
            ),
            Self::MaxDepthExceeded { max, found } => {
                write!(f, "max depth exceeded: {found} > {max}")
            }
        }
    }
}

/// Main error type for tagtree
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn duplicate_unique(parent: &'static str, child: &'static str, count: usize) -> Self {
        Self::new(ErrorKind::DuplicateUnique {
            parent,
            child,
            count,
        })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid document: {}", self.message)
    }
}

/// Result type alias for tagtree
pub type Result<T> = std::result::Result<T, Error>;
