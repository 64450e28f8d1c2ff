//! Error types for recsift operations.

use std::io;
use thiserror::Error;

use crate::query::{EmptyResult, ParseError};

/// The error type for a single query run.
///
/// Display strings are the exact messages shown to the user.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file is missing or unreadable.
    #[error("Could not process file")]
    Io(#[source] io::Error),

    /// The input file is not a JSON array of objects.
    #[error("This is not JSON file")]
    Format(#[source] serde_json::Error),

    /// The query string is malformed.
    #[error(transparent)]
    Query(#[from] ParseError),

    /// The query selected nothing.
    #[error(transparent)]
    EmptyResult(#[from] EmptyResult),

    /// The output file could not be written.
    #[error("Could not write output file: {0}")]
    Write(#[source] recsift_json::Error),
}

impl Error {
    /// Classify a failure to load the input file.
    pub fn from_input(err: recsift_json::Error) -> Self {
        match err {
            recsift_json::Error::Io(io_err) => Error::Io(io_err),
            recsift_json::Error::Json(json_err) => Error::Format(json_err),
        }
    }
}

/// A specialized Result type for recsift operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_map_to_user_messages() {
        let io_err = recsift_json::Error::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(Error::from_input(io_err).to_string(), "Could not process file");

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from_input(recsift_json::Error::Json(json_err));
        assert_eq!(err.to_string(), "This is not JSON file");
    }

    #[test]
    fn query_errors_keep_parser_message() {
        let err: Error = ParseError::WrongQuery.into();
        assert_eq!(err.to_string(), "wrong query");
    }

    #[test]
    fn empty_result_message() {
        let err: Error = EmptyResult.into();
        assert_eq!(err.to_string(), "Search results are empty");
    }
}
