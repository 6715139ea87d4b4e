//! Error types for the bumpscan CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Gate rejections are deliberately NOT part of this taxonomy: a candidate
//! transition failing a classification gate is a successful run that reports
//! an empty bump list. Only collaborator failures (git) and unparseable data
//! are fatal.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for bumpscan operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum BumpError {
    /// User provided invalid arguments or ran the command in an invalid location.
    #[error("{0}")]
    UserError(String),

    /// A file snapshot is not valid structured data.
    #[error("Malformed data: {0}")]
    MalformedData(String),

    /// Git operation failed (unresolvable revision, diff/show failure).
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl BumpError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            BumpError::UserError(_) => exit_codes::USER_ERROR,
            BumpError::MalformedData(_) => exit_codes::DATA_FAILURE,
            BumpError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }
}

/// Result type alias for bumpscan operations.
pub type Result<T> = std::result::Result<T, BumpError>;
