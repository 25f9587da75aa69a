//! Crate error type.
//!
//! Every failure is fatal to the run and surfaces before any engine
//! executes; engines themselves are infallible over a validated workload.

use thiserror::Error;

/// Errors raised while configuring a run or loading a workload.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// No workload source was given, or a command-line option is invalid.
    #[error("invalid args: {0}")]
    InvalidArgs(String),

    /// A workload record could not be parsed or violates a field constraint.
    #[error("malformed input{}: {message}", line_suffix(.line))]
    MalformedInput {
        /// 1-based source line, when known.
        line: Option<usize>,
        /// What was wrong.
        message: String,
    },

    /// The workload holds no processes.
    #[error("empty workload: at least one process is required")]
    EmptyWorkload,

    /// The workload source could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid arguments error
    #[inline]
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a malformed input error tied to a source line
    #[inline]
    pub fn malformed_at(line: usize, msg: impl Into<String>) -> Self {
        Self::MalformedInput {
            line: Some(line),
            message: msg.into(),
        }
    }

    /// Create a malformed input error with no line information
    #[inline]
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedInput {
            line: None,
            message: msg.into(),
        }
    }
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
