//! Query errors.

use thiserror::Error;

/// The only way a lookup can fail.
///
/// `query` is the string exactly as the caller typed it, not the
/// case-folded key, so it can be echoed back to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Sorry, \"{query}\" could not be found")]
    NotFound { query: String },
}

pub type Result<T> = std::result::Result<T, QueryError>;
