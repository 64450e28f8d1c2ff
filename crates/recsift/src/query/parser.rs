//! Query string parsing.
//!
//! Grammar:
//!
//! ```text
//! query     := count [ "where" condition ]
//! count     := "all" | "first" | "last" | digits
//! condition := "%" letters "%" operator value
//! operator  := "<" | ">" | "="
//! ```
//!
//! Everything after `where` is the condition clause, so a value may contain
//! spaces (`%city%=New York`). Parsing is fail-fast: the first problem found
//! is returned and no partial query is produced.

use std::num::IntErrorKind;

use thiserror::Error;

use super::{Condition, ConditionValue, Count, Operator, Query};
use crate::domain::{KNOWN_FIELDS, is_known_field, is_numeric_field};

/// Keyword separating the count from the condition.
pub const WHERE_KEYWORD: &str = "where";

/// Errors produced while parsing a query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The count token is not a keyword or a non-negative integer.
    #[error("Count must be 'all', 'first', 'last', or a number")]
    InvalidCount(String),

    /// Something other than `where` follows the count.
    #[error("wrong query")]
    WrongQuery,

    /// `where` is present but nothing follows it.
    #[error("Condition must follow 'where'")]
    MissingCondition,

    /// The condition contains none of `<`, `>`, `=`.
    #[error("Operator must be one of <, >, =")]
    MissingOperator,

    /// The key is not `%letters%`.
    #[error("Key must be enclosed in % and contain only letters")]
    InvalidKey(String),

    /// Nothing follows the operator.
    #[error("Value must not be empty")]
    EmptyValue,

    /// Strict grammar only: the key is outside the known field list.
    #[error("Key must be one of region, city, number")]
    UnknownKey(String),

    /// Strict grammar only: a numeric field was given a non-numeric value.
    #[error("Value for '{key}' must be numeric")]
    NonNumericValue {
        /// Field the value was meant for
        key: String,
        /// Value as written
        value: String,
    },
}

/// How much the parser checks beyond the grammar itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strictness {
    /// Any letter-only key is accepted and values stay text.
    #[default]
    Lenient,
    /// Keys must be known fields and numeric fields get numeric values.
    Strict,
}

/// Query parser configured with a [`Strictness`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    strictness: Strictness,
}

impl Parser {
    /// Create a parser with the given strictness.
    pub fn new(strictness: Strictness) -> Self {
        Self { strictness }
    }

    /// The strictness this parser applies.
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Parse a raw query string.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn parse(&self, raw: &str) -> Result<Query, ParseError> {
        let (count_token, rest) = split_word(raw);
        let count = parse_count(count_token)?;

        if rest.is_empty() {
            return Ok(Query {
                count,
                condition: None,
            });
        }

        let (keyword, clause) = split_word(rest);
        if keyword != WHERE_KEYWORD {
            tracing::debug!(token = keyword, "Expected '{WHERE_KEYWORD}' after count");
            return Err(ParseError::WrongQuery);
        }

        let clause = clause.trim_end();
        if clause.is_empty() {
            return Err(ParseError::MissingCondition);
        }

        let condition = self.parse_condition(clause)?;
        Ok(Query {
            count,
            condition: Some(condition),
        })
    }

    fn parse_condition(&self, clause: &str) -> Result<Condition, ParseError> {
        let (index, operator) = clause
            .char_indices()
            .find_map(|(i, c)| Operator::from_char(c).map(|op| (i, op)))
            .ok_or(ParseError::MissingOperator)?;

        // Operators are single ASCII bytes.
        let raw_key = &clause[..index];
        let raw_value = &clause[index + 1..];

        let key =
            unwrap_key(raw_key).ok_or_else(|| ParseError::InvalidKey(raw_key.to_string()))?;

        if raw_value.is_empty() {
            return Err(ParseError::EmptyValue);
        }

        let value = match self.strictness {
            Strictness::Lenient => ConditionValue::Text(raw_value.to_string()),
            Strictness::Strict => strict_value(key, raw_value)?,
        };

        Ok(Condition {
            key: key.to_string(),
            operator,
            value,
        })
    }
}

/// Parse a query string with the lenient grammar.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
pub fn parse(raw: &str) -> Result<Query, ParseError> {
    Parser::default().parse(raw)
}

/// Split off the first whitespace-delimited word, returning it and the
/// remainder with leading whitespace removed.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(end) => (&input[..end], input[end..].trim_start()),
        None => (input, ""),
    }
}

fn parse_count(token: &str) -> Result<Count, ParseError> {
    match token {
        "all" => Ok(Count::All),
        "first" => Ok(Count::First),
        "last" => Ok(Count::Last),
        _ => match token.parse::<usize>() {
            Ok(n) => Ok(Count::Limit(n)),
            // Any count past the address space keeps every record anyway.
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Count::Limit(usize::MAX)),
            Err(_) => Err(ParseError::InvalidCount(token.to_string())),
        },
    }
}

/// Strip the `%` delimiters from a key, if it is one or more ASCII letters
/// framed by `%`.
fn unwrap_key(raw: &str) -> Option<&str> {
    let key = raw.strip_prefix('%')?.strip_suffix('%')?;
    (!key.is_empty() && key.chars().all(|c| c.is_ascii_alphabetic())).then_some(key)
}

fn strict_value(key: &str, raw_value: &str) -> Result<ConditionValue, ParseError> {
    if !is_known_field(key) {
        tracing::debug!(key, known = ?KNOWN_FIELDS, "Rejected unknown key");
        return Err(ParseError::UnknownKey(key.to_string()));
    }

    if !is_numeric_field(key) {
        return Ok(ConditionValue::Text(raw_value.to_string()));
    }

    raw_value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(ConditionValue::Number)
        .ok_or_else(|| ParseError::NonNumericValue {
            key: key.to_string(),
            value: raw_value.to_string(),
        })
}
