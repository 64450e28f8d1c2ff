//! JSON array reading operations.
//!
//! Input files hold a single top-level JSON array. The file is read in one
//! pass with tokio's async filesystem API and then deserialized element by
//! element into the caller's type. Content is parsed from raw bytes, so a
//! file that is not valid UTF-8 is a JSON error rather than an I/O error.

use crate::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads the file at `path` and deserializes it as a JSON array of `T`.
///
/// # Errors
///
/// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened or
/// read, and [`Error::Json`](crate::Error::Json) if its content is not a
/// UTF-8 JSON array of values deserializable as `T`.
///
/// # Examples
///
/// ```no_run
/// use recsift_json::read_json_array;
/// use serde_json::Value;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let rows: Vec<Value> = read_json_array("cities.json").await?;
/// println!("loaded {} rows", rows.len());
/// # Ok(())
/// # }
/// ```
pub async fn read_json_array<T, P>(path: P) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Read input file");

    parse_json_array(&content)
}

/// Deserializes `content` as a JSON array of `T`.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if `content` is not valid
/// UTF-8 JSON or is not an array of `T`.
pub fn parse_json_array<T, C>(content: C) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    C: AsRef<[u8]>,
{
    let values: Vec<T> = serde_json::from_slice(content.as_ref())?;
    tracing::debug!(count = values.len(), "Parsed JSON array");
    Ok(values)
}
