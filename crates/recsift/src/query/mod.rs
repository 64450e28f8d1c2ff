//! The query language and its evaluation.
//!
//! A query selects how many records to keep and, optionally, which records
//! qualify:
//!
//! ```text
//! all
//! first where %region%=X
//! 2 where %number%>5
//! ```
//!
//! - [`parser`] turns the raw string into a [`Query`]
//! - [`compare`] holds the loose comparison used by conditions
//! - [`executor`] applies a [`Query`] to a list of [`Record`]s

pub mod compare;
pub mod executor;
pub mod parser;

use std::fmt;
use std::str::FromStr;

use crate::domain::Record;

pub use compare::compare;
pub use executor::{EmptyResult, execute, filter};
pub use parser::{ParseError, Parser, Strictness, WHERE_KEYWORD, parse};

/// How many records, or which one, a query keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Count {
    /// Every record of the working sequence
    All,
    /// Only the first record
    First,
    /// Only the last record
    Last,
    /// At most this many records from the front
    Limit(usize),
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Count::All => f.write_str("all"),
            Count::First => f.write_str("first"),
            Count::Last => f.write_str("last"),
            Count::Limit(n) => write!(f, "{n}"),
        }
    }
}

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `<`
    Lt,
}

impl Operator {
    /// Map an operator character to its operator.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Operator::Eq),
            '>' => Some(Operator::Gt),
            '<' => Some(Operator::Lt),
            _ => None,
        }
    }

    /// The character this operator is written as.
    pub fn as_char(self) -> char {
        match self {
            Operator::Eq => '=',
            Operator::Gt => '>',
            Operator::Lt => '<',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Right-hand side of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionValue {
    /// Value kept exactly as written
    Text(String),
    /// Value coerced to a number by the strict grammar
    Number(f64),
}

impl fmt::Display for ConditionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConditionValue::Text(s) => f.write_str(s),
            ConditionValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for ConditionValue {
    fn from(s: &str) -> Self {
        ConditionValue::Text(s.to_string())
    }
}

impl From<f64> for ConditionValue {
    fn from(n: f64) -> Self {
        ConditionValue::Number(n)
    }
}

/// A single `%key%<op>value` restriction.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    /// Field name, without the `%` delimiters
    pub key: String,
    /// Comparison operator
    pub operator: Operator,
    /// Value the field is compared against
    pub value: ConditionValue,
}

impl Condition {
    /// Create a condition
    pub fn new(
        key: impl Into<String>,
        operator: Operator,
        value: impl Into<ConditionValue>,
    ) -> Self {
        Self {
            key: key.into(),
            operator,
            value: value.into(),
        }
    }

    /// Does `record` satisfy this condition?
    pub fn matches(&self, record: &Record) -> bool {
        compare(self.operator, record.get(&self.key), &self.value)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}%{}{}", self.key, self.operator, self.value)
    }
}

/// A parsed query.
///
/// `Display` renders the canonical query string, which parses back into an
/// equal `Query`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Count selector applied after filtering
    pub count: Count,
    /// Optional filter condition
    pub condition: Option<Condition>,
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.count)?;
        if let Some(condition) = &self.condition {
            write!(f, " {WHERE_KEYWORD} {condition}")?;
        }
        Ok(())
    }
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
