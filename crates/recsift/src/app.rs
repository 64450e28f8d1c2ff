//! Application context for a single query run.
//!
//! [`App`] ties the pipeline together: parse the query, load the records,
//! execute, and persist the selection. Each stage short-circuits on its own
//! error, so nothing is written when any stage fails.
//!
//! # Example
//!
//! ```no_run
//! use recsift::app::App;
//! use recsift::config::RunConfig;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = RunConfig::new("first where %region%=X", "cities.json", "output.json");
//!     let app = App::new(config);
//!     let selected = app.run().await?;
//!     println!("{} record(s)", selected.len());
//!     Ok(())
//! }
//! ```

use crate::config::RunConfig;
use crate::domain::Record;
use crate::error::{Error, Result};
use crate::query::{Parser, Query, execute};

/// Application context for one query run.
#[derive(Debug, Clone)]
pub struct App {
    config: RunConfig,
}

impl App {
    /// Create an App for the given run configuration.
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Parse the configured query string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Query`] if the query is malformed.
    pub fn parse_query(&self) -> Result<Query> {
        let query = Parser::new(self.config.strictness).parse(&self.config.query)?;
        tracing::debug!(query = %query, "Parsed query");
        Ok(query)
    }

    /// Load every record from the configured input file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and [`Error::Format`]
    /// if it is not a JSON array of objects.
    pub async fn load_records(&self) -> Result<Vec<Record>> {
        let records = recsift_json::read_json_array(&self.config.input)
            .await
            .map_err(|e| {
                tracing::debug!(
                    path = %self.config.input.display(),
                    error = %e,
                    "Failed to load input"
                );
                Error::from_input(e)
            })?;
        tracing::debug!(count = records.len(), "Loaded records");
        Ok(records)
    }

    /// Run the whole pipeline and return the selected records.
    ///
    /// The output file is written and flushed before this returns.
    ///
    /// # Errors
    ///
    /// Returns the first error of any stage: query parsing, input loading,
    /// an empty result, or the output write.
    pub async fn run(&self) -> Result<Vec<Record>> {
        let query = self.parse_query()?;
        let records = self.load_records().await?;
        let selected = execute(&records, &query)?;

        recsift_json::write_json_atomic_iter(&self.config.output, selected.iter())
            .await
            .map_err(Error::Write)?;

        Ok(selected.into_iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{ParseError, Strictness};
    use serde_json::{Value, json};
    use tempfile::TempDir;

    fn cities() -> Value {
        json!([
            {"number": 3, "city": "A", "region": "X"},
            {"number": 7, "city": "B", "region": "Y"},
            {"number": 9, "city": "C", "region": "X"}
        ])
    }

    fn setup(query: &str) -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("cities.json");
        std::fs::write(&input, cities().to_string()).unwrap();
        let output = temp_dir.path().join("output.json");
        let app = App::new(RunConfig::new(query, input, output));
        (temp_dir, app)
    }

    fn read_output(app: &App) -> Value {
        let text = std::fs::read_to_string(&app.config().output).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    #[tokio::test]
    async fn all_writes_input_unchanged() {
        let (_dir, app) = setup("all");

        let selected = app.run().await.unwrap();

        assert_eq!(selected.len(), 3);
        assert_eq!(read_output(&app), cities());
    }

    #[tokio::test]
    async fn all_keeps_input_text_and_field_order() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("cities.json");
        let text = r#"[{"number":3,"city":"A","region":"X"},{"region":"Y","city":"B","number":7}]"#;
        std::fs::write(&input, text).unwrap();
        let app = App::new(RunConfig::new("all", input, temp_dir.path().join("output.json")));

        app.run().await.unwrap();

        assert_eq!(std::fs::read_to_string(&app.config().output).unwrap(), text);
    }

    #[tokio::test]
    async fn filtered_selection_is_written() {
        let (_dir, app) = setup("all where %number%>5");

        let selected = app.run().await.unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(
            read_output(&app),
            json!([
                {"number": 7, "city": "B", "region": "Y"},
                {"number": 9, "city": "C", "region": "X"}
            ])
        );
    }

    #[tokio::test]
    async fn empty_result_writes_nothing() {
        let (_dir, app) = setup("all where %number%>100");

        let err = app.run().await.unwrap_err();

        assert!(matches!(err, Error::EmptyResult(_)));
        assert!(!app.config().output.exists());
    }

    #[tokio::test]
    async fn bad_query_fails_before_reading_input() {
        let temp_dir = TempDir::new().unwrap();
        let app = App::new(RunConfig::new(
            "abc",
            temp_dir.path().join("missing.json"),
            temp_dir.path().join("output.json"),
        ));

        let err = app.run().await.unwrap_err();

        assert!(matches!(err, Error::Query(ParseError::InvalidCount(_))));
        assert!(!app.config().output.exists());
    }

    #[tokio::test]
    async fn missing_input_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let app = App::new(RunConfig::new(
            "all",
            temp_dir.path().join("missing.json"),
            temp_dir.path().join("output.json"),
        ));

        let err = app.run().await.unwrap_err();

        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.to_string(), "Could not process file");
    }

    #[tokio::test]
    async fn malformed_input_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("cities.json");
        std::fs::write(&input, "not json at all").unwrap();
        let app = App::new(RunConfig::new("all", input, temp_dir.path().join("output.json")));

        let err = app.run().await.unwrap_err();

        assert!(matches!(err, Error::Format(_)));
        assert_eq!(err.to_string(), "This is not JSON file");
        assert!(!app.config().output.exists());
    }

    #[tokio::test]
    async fn invalid_utf8_input_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("cities.json");
        std::fs::write(&input, b"[{\"city\":\"\xff\"}]").unwrap();
        let app = App::new(RunConfig::new("all", input, temp_dir.path().join("output.json")));

        let err = app.run().await.unwrap_err();

        assert!(matches!(err, Error::Format(_)));
        assert_eq!(err.to_string(), "This is not JSON file");
    }

    #[tokio::test]
    async fn array_of_non_objects_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("cities.json");
        std::fs::write(&input, "[1, 2, 3]").unwrap();
        let app = App::new(RunConfig::new("all", input, temp_dir.path().join("output.json")));

        assert!(matches!(app.run().await, Err(Error::Format(_))));
    }

    #[tokio::test]
    async fn strict_mode_rejects_unknown_key() {
        let (_dir, app) = setup("all where %population%>5");
        let app = App::new(app.config().clone().with_strictness(Strictness::Strict));

        let err = app.run().await.unwrap_err();

        assert!(matches!(err, Error::Query(ParseError::UnknownKey(_))));
    }

    #[tokio::test]
    async fn output_is_overwritten_each_run() {
        let (_dir, app) = setup("all");
        app.run().await.unwrap();

        let first_only = App::new(RunConfig {
            query: "first".to_string(),
            ..app.config().clone()
        });
        first_only.run().await.unwrap();

        assert_eq!(
            read_output(&first_only),
            json!([{"number": 3, "city": "A", "region": "X"}])
        );
    }
}
