//! JSON array writing operations.
//!
//! This module provides async functionality for writing a sequence of values
//! as one compact JSON array with efficient buffering.

use crate::Result;
use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};

/// Async writer for JSON array output.
///
/// `JsonArrayWriter` wraps an async writer and serializes each value as one
/// element of a single top-level array, producing the same compact text as
/// `serde_json::to_string` on a slice.
///
/// # Type Parameters
///
/// * `W` - The underlying async writer type. Must implement [`AsyncWrite`] and [`Unpin`].
///
/// # Examples
///
/// ```no_run
/// use recsift_json::JsonArrayWriter;
/// use tokio::fs::File;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let file = File::create("output.json").await?;
/// let mut writer = JsonArrayWriter::new(file);
/// writer.write_all([1, 2, 3]).await?;
/// writer.flush().await?;
/// # Ok(())
/// # }
/// ```
pub struct JsonArrayWriter<W> {
    /// Buffered writer wrapping the underlying async writer.
    writer: BufWriter<W>,
}

impl<W: AsyncWrite + Unpin> JsonArrayWriter<W> {
    /// Creates a new `JsonArrayWriter` wrapping the given async writer.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Creates a new `JsonArrayWriter` with a custom buffer capacity.
    #[must_use]
    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, writer),
        }
    }

    /// Serializes every value from `values` into one JSON array.
    ///
    /// Returns the number of elements written.
    ///
    /// # Errors
    ///
    /// Returns an error if a value fails to serialize or the underlying
    /// writer fails.
    pub async fn write_all<T, I>(&mut self, values: I) -> Result<usize>
    where
        T: Serialize,
        I: IntoIterator<Item = T>,
    {
        let mut count = 0;
        self.writer.write_all(b"[").await?;
        for value in values {
            if count > 0 {
                self.writer.write_all(b",").await?;
            }
            let bytes = serde_json::to_vec(&value)?;
            self.writer.write_all(&bytes).await?;
            count += 1;
        }
        self.writer.write_all(b"]").await?;
        Ok(count)
    }

    /// Flushes buffered data to the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails to flush.
    pub async fn flush(&mut self) -> Result<()> {
        self.writer.flush().await?;
        Ok(())
    }

    /// Consumes the writer, returning the underlying buffered writer.
    ///
    /// Note: This does not flush the buffer. Call [`flush`](Self::flush)
    /// before calling this method to ensure all data is written.
    #[must_use]
    pub fn into_inner(self) -> BufWriter<W> {
        self.writer
    }
}
