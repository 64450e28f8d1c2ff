//! Async reading and atomic writing of JSON array files.
//!
//! The whole file is treated as a single JSON array: [`read_json_array`]
//! loads it into memory in one pass, and [`write_json_atomic`] replaces the
//! target file with a freshly serialized array using the
//! temp-file-then-rename pattern.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod atomic;
pub mod error;
pub mod reader;
pub mod writer;

pub use atomic::{write_json_atomic, write_json_atomic_iter};
pub use error::{Error, Result};
pub use reader::{parse_json_array, read_json_array};
pub use writer::JsonArrayWriter;
