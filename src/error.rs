//! Error types for tree accessors, the tuple-form codec, and evaluation.

use std::fmt;

// ============================================================================
// Error Kinds
// ============================================================================

/// Categories of errors raised by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A branch-only accessor was applied to a leaf
    NotABranch,
    /// Structurally invalid tuple form (empty list, bad token, unclosed list)
    MalformedForm,
    /// The execution primitive reported a failure
    Evaluation,
    /// A head symbol outside the registered vocabulary where a known head
    /// was required
    UnsupportedHead,
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotABranch => "not a branch",
            ErrorKind::MalformedForm => "malformed form",
            ErrorKind::Evaluation => "evaluation error",
            ErrorKind::UnsupportedHead => "unsupported head",
        }
    }
}

// ============================================================================
// Error
// ============================================================================

/// An error with a category and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    /// The category of error
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
}

impl Error {
    /// Create a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Create a `NotABranch` error.
    pub fn not_a_branch(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotABranch, what)
    }

    /// Create a `MalformedForm` error.
    pub fn malformed(what: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedForm, what)
    }

    /// Wrap a failure reported by the execution primitive, preserving
    /// its message.
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Evaluation, message)
    }

    /// Create an `UnsupportedHead` error.
    pub fn unsupported_head(head: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnsupportedHead, head)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.message)
    }
}

impl std::error::Error for Error {}
