//! CLI argument parsing and dispatch.
//!
//! `recsift` takes up to three positional arguments, all optional:
//!
//! ```bash
//! recsift "<query>" [input.json] [output.json]
//! recsift "first where %region%=X"
//! recsift "3 where %number%>5" data/cities.json result.json --strict
//! ```
//!
//! # Flags
//!
//! - `--strict`: only accept the known fields and coerce `number` values
//! - `--json`: print the result as JSON instead of the text report
//! - `--template`: line template for the text report

mod execute;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_QUERY, RunConfig};
use crate::output::{DEFAULT_TEMPLATE, OutputConfig, OutputMode};
use crate::query::Strictness;

/// Recsift - query a JSON array of records
///
/// The query is `<count> [where %key%<op>value]` where count is `all`,
/// `first`, `last` or a number and op is one of `<`, `>`, `=`.
/// The selection is printed and written to the output file.
#[derive(Parser, Debug)]
#[command(name = "recsift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Query string, e.g. "all where %number%>5"
    #[arg(default_value = DEFAULT_QUERY)]
    pub query: String,

    /// JSON file holding an array of records
    #[arg(default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// File the selected records are written to (overwritten)
    #[arg(default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Only accept region, city and number as keys; number values must be numeric
    #[arg(long)]
    pub strict: bool,

    /// Output in JSON format for programmatic use
    #[arg(long)]
    pub json: bool,

    /// Template for each report line; `{field}` is replaced by the field value
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Settings for the query run.
    pub fn run_config(&self) -> RunConfig {
        let strictness = if self.strict {
            Strictness::Strict
        } else {
            Strictness::Lenient
        };
        RunConfig::new(self.query.clone(), self.input.clone(), self.output.clone())
            .with_strictness(strictness)
    }

    /// Output mode selected by `--json`.
    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Execute the query and print the result to stdout.
    pub async fn execute(&self) -> Result<()> {
        use crate::app::App;

        let app = App::new(self.run_config());
        let config = OutputConfig::from_env().with_template(self.template.clone());
        execute::execute_query(&app, self.output_mode(), &config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["recsift"]).unwrap();
        assert_eq!(cli.query, "all");
        assert_eq!(cli.input, Path::new("./cities.json"));
        assert_eq!(cli.output, Path::new("./output.json"));
        assert!(!cli.strict);
        assert!(!cli.json);
        assert_eq!(cli.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn test_parse_positionals() {
        let cli =
            Cli::try_parse_from(["recsift", "first where %region%=X", "in.json", "out.json"])
                .unwrap();
        assert_eq!(cli.query, "first where %region%=X");
        assert_eq!(cli.input, Path::new("in.json"));
        assert_eq!(cli.output, Path::new("out.json"));
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "recsift",
            "all",
            "--strict",
            "--json",
            "--template",
            "{city}",
        ])
        .unwrap();
        assert!(cli.strict);
        assert_eq!(cli.output_mode(), OutputMode::Json);
        assert_eq!(cli.template, "{city}");
        assert_eq!(cli.run_config().strictness, Strictness::Strict);
    }

    #[test]
    fn test_empty_query_falls_back_to_default() {
        let cli = Cli::try_parse_from(["recsift", ""]).unwrap();
        assert_eq!(cli.run_config().query, "all");
    }

    #[test]
    fn test_too_many_positionals_rejected() {
        assert!(Cli::try_parse_from(["recsift", "all", "a.json", "b.json", "c.json"]).is_err());
    }
}
