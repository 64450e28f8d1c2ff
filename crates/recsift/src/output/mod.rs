//! Output formatting for query results.
//!
//! Results are printed either as a human-readable report or as JSON. Every
//! printing function takes its sink explicitly, so callers decide whether
//! output goes to stdout, stderr or a buffer.
//!
//! Submodules:
//! - [`color`]: Color and styling helpers

pub mod color;

use std::env;
use std::io::{self, Write};

use serde_json::Value;

use crate::config::COLOR_ENV_VAR;
use crate::domain::Record;

use color::{bold, dimmed};

// ============================================================================
// Output Configuration
// ============================================================================

/// Line printed above and below the record lines.
pub const SEPARATOR: &str = "--------------------------";

/// Per-record line template; `{field}` is replaced by the record's value.
pub const DEFAULT_TEMPLATE: &str = "{number}\t{city} | {region}";

/// Configuration for output formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colors in output.
    pub use_colors: bool,
    /// Template for one record line.
    pub template: String,
}

impl OutputConfig {
    /// Create a new OutputConfig with explicit values.
    pub fn new(use_colors: bool, template: impl Into<String>) -> Self {
        Self {
            use_colors,
            template: template.into(),
        }
    }

    /// Create an OutputConfig by reading from environment variables.
    ///
    /// Reads:
    /// - `NO_COLOR`: Standard env var to disable colors (any value disables colors)
    /// - `RECSIFT_COLOR`: Set to "0" or "false" to disable colors (default: true)
    pub fn from_env() -> Self {
        let use_colors = colors_enabled(
            env::var("NO_COLOR").ok().as_deref(),
            env::var(COLOR_ENV_VAR).ok().as_deref(),
        );

        Self {
            use_colors,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }

    /// Replace the record line template.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_colors: true,
            template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

/// Decide whether colors are on from the `NO_COLOR` and `RECSIFT_COLOR` values.
fn colors_enabled(no_color: Option<&str>, color: Option<&str>) -> bool {
    // Respect NO_COLOR standard (https://no-color.org/)
    if no_color.is_some() {
        return false;
    }
    match color {
        None => true,
        Some(v) if v == "1" || v.eq_ignore_ascii_case("true") || v.is_empty() => true,
        Some(v) if v == "0" || v.eq_ignore_ascii_case("false") => false,
        Some(v) => {
            tracing::warn!(
                env_var = COLOR_ENV_VAR,
                value = %v,
                "Invalid value (expected '1', 'true', '0', or 'false'), using default"
            );
            true
        }
    }
}

/// Output format mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text format
    #[default]
    Text,
    /// JSON format for programmatic use
    Json,
}

// ============================================================================
// Public Printing Functions
// ============================================================================

/// Print `records` in the given mode.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn print_records<W: Write>(
    w: &mut W,
    records: &[Record],
    mode: OutputMode,
    config: &OutputConfig,
) -> io::Result<()> {
    match mode {
        OutputMode::Text => print_report(w, records, config),
        OutputMode::Json => print_records_json(w, records),
    }
}

/// Print the human-readable report: separators, one line per record, and
/// the total.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn print_report<W: Write>(
    w: &mut W,
    records: &[Record],
    config: &OutputConfig,
) -> io::Result<()> {
    let separator = dimmed(SEPARATOR, config);

    writeln!(w)?;
    writeln!(w, "{separator}")?;
    for record in records {
        writeln!(w, "{}", render_line(&config.template, record))?;
    }
    writeln!(w, "{separator}")?;
    writeln!(w, "{}", bold(&format!("Total: {}", records.len()), config))?;
    writeln!(w)?;
    Ok(())
}

/// Print records as a pretty JSON array.
///
/// # Errors
///
/// Returns an error if serialization or writing to `w` fails.
pub fn print_records_json<W: Write>(w: &mut W, records: &[Record]) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, records)?;
    writeln!(w)
}

/// Print a single-line failure message.
///
/// # Errors
///
/// Returns an error if writing to `w` fails.
pub fn print_error<W: Write>(w: &mut W, message: &str, config: &OutputConfig) -> io::Result<()> {
    writeln!(w, "{}", color::error(message, config))
}

/// Fill a line template from a record.
///
/// `{name}` is replaced by the field's value: strings verbatim, other JSON
/// values in their JSON form, missing fields as nothing. Braces that do not
/// enclose a field name are kept as written.
pub fn render_line(template: &str, record: &Record) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if is_field_name(&after[..end]) => {
                push_field(&mut out, record.get(&after[..end]));
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

fn is_field_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

fn push_field(out: &mut String, value: Option<&Value>) {
    match value {
        None => {}
        Some(Value::String(s)) => out.push_str(s),
        Some(other) => out.push_str(&other.to_string()),
    }
}
