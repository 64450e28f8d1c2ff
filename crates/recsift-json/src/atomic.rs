//! Atomic write operations for JSON array files.
//!
//! Output files are replaced, never appended to or merged. To keep a reader
//! from ever observing a half-written file, data goes through the
//! temp-file-then-rename pattern:
//!
//! 1. Data is first written to a temporary file with a `.tmp` extension
//! 2. The temporary file is flushed and closed
//! 3. The temporary file is renamed over the target path
//!
//! On POSIX systems a rename within one filesystem is atomic, so a crash
//! during step 1 or 2 leaves the previous output untouched.
//!
//! # Examples
//!
//! ```no_run
//! use recsift_json::write_json_atomic;
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let rows = vec![json!({"number": 1, "city": "A"})];
//! write_json_atomic("output.json", &rows).await?;
//! # Ok(())
//! # }
//! ```

use crate::{JsonArrayWriter, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs::File;

/// Atomically writes a slice of values to `path` as one JSON array.
///
/// # Errors
///
/// Returns an error if:
/// - The temporary file cannot be created
/// - Any value fails to serialize
/// - An I/O error occurs during writing
/// - The rename fails (e.g., cross-filesystem move)
///
/// On failure the original file, if any, is left unchanged.
pub async fn write_json_atomic<T, P>(path: P, values: &[T]) -> Result<()>
where
    T: Serialize,
    P: AsRef<Path>,
{
    write_json_atomic_iter(path, values.iter()).await
}

/// Atomically writes an iterator of values to `path` as one JSON array.
///
/// Accepts any iterator of serializable values, which lets callers pass a
/// borrowed selection without collecting owned copies first.
///
/// # Errors
///
/// See [`write_json_atomic`] for error conditions.
pub async fn write_json_atomic_iter<T, I, P>(path: P, values: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let temp_path = make_temp_path(path);

    if let Err(e) = write_to_temp_file(&temp_path, values).await {
        // Best-effort cleanup of temp file
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e);
    }

    if let Err(e) = tokio::fs::rename(&temp_path, path).await {
        let _ = tokio::fs::remove_file(&temp_path).await;
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), "Wrote output file");

    Ok(())
}

/// Creates a temporary file path for atomic write operations.
///
/// `.tmp` is appended to the existing extension, or used as the extension
/// when the path has none.
fn make_temp_path(path: &Path) -> PathBuf {
    let mut temp_path = path.to_path_buf();
    let new_extension = match path.extension() {
        Some(ext) => {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".tmp");
            new_ext
        }
        None => std::ffi::OsString::from("tmp"),
    };
    temp_path.set_extension(new_extension);
    temp_path
}

/// Writes values to a temporary file, ensuring proper flush and close.
async fn write_to_temp_file<T, I>(temp_path: &Path, values: I) -> Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let file = File::create(temp_path).await?;
    let mut writer = JsonArrayWriter::new(file);
    let count = writer.write_all(values).await?;
    writer.flush().await?;
    tracing::trace!(path = %temp_path.display(), count, "Flushed temporary file");
    Ok(())
}
