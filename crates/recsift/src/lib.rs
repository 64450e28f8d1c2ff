//! Recsift - query a JSON array of records from the command line.
//!
//! This crate provides both the `recsift` CLI and a library exposing the
//! query language: [`query::parse`] turns a query string into a
//! [`query::Query`], and [`query::execute`] applies it to a slice of
//! [`domain::Record`]s.

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod query;

// Public CLI module (needed by binary)
pub mod cli;

pub use error::{Error, Result};
