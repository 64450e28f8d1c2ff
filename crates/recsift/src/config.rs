//! Run configuration for recsift.
//!
//! Holds the defaults for the positional CLI arguments and the settings a
//! single query run needs.

use std::path::PathBuf;

use crate::query::Strictness;

/// Query used when none is given.
pub const DEFAULT_QUERY: &str = "all";

/// Input file used when none is given.
pub const DEFAULT_INPUT_PATH: &str = "./cities.json";

/// Output file used when none is given.
pub const DEFAULT_OUTPUT_PATH: &str = "./output.json";

/// Environment variable that turns colored output off when set to `0` or `false`.
pub const COLOR_ENV_VAR: &str = "RECSIFT_COLOR";

/// Settings for one query run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Raw query string
    pub query: String,
    /// JSON array to read records from
    pub input: PathBuf,
    /// File the selected records are written to
    pub output: PathBuf,
    /// Parser strictness
    pub strictness: Strictness,
}

impl RunConfig {
    /// Create a config with explicit values.
    ///
    /// Empty values fall back to the defaults, matching a missing argument.
    pub fn new(
        query: impl Into<String>,
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        let query = query.into();
        let input = input.into();
        let output = output.into();

        Self {
            query: if query.trim().is_empty() {
                DEFAULT_QUERY.to_string()
            } else {
                query
            },
            input: if input.as_os_str().is_empty() {
                PathBuf::from(DEFAULT_INPUT_PATH)
            } else {
                input
            },
            output: if output.as_os_str().is_empty() {
                PathBuf::from(DEFAULT_OUTPUT_PATH)
            } else {
                output
            },
            strictness: Strictness::default(),
        }
    }

    /// Set the parser strictness.
    #[must_use]
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(DEFAULT_QUERY, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}
