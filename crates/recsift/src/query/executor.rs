//! Applying a [`Query`] to a list of records.
//!
//! The executor never copies or mutates records: the result borrows from the
//! input slice and keeps the input order.

use thiserror::Error;

use super::{Condition, Count, Query};
use crate::domain::Record;

/// Signal that the query selected nothing it could return.
///
/// Raised when a condition matches no record, and when `first` or `last` is
/// applied to an empty working sequence. A numeric count of `0` is not an
/// empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Search results are empty")]
pub struct EmptyResult;

/// Run `query` over `records`.
///
/// # Errors
///
/// Returns [`EmptyResult`] when the condition filters out every record, or
/// when `first`/`last` has nothing to pick from.
pub fn execute<'a>(
    records: &'a [Record],
    query: &Query,
) -> Result<Vec<&'a Record>, EmptyResult> {
    let working = match &query.condition {
        Some(condition) => {
            let matched = filter(records, condition);
            tracing::debug!(
                condition = %condition,
                matched = matched.len(),
                total = records.len(),
                "Applied condition"
            );
            if matched.is_empty() {
                return Err(EmptyResult);
            }
            matched
        }
        None => records.iter().collect(),
    };

    select(working, query.count)
}

/// Records satisfying `condition`, in their original order.
pub fn filter<'a>(records: &'a [Record], condition: &Condition) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| condition.matches(record))
        .collect()
}

fn select(mut working: Vec<&Record>, count: Count) -> Result<Vec<&Record>, EmptyResult> {
    match count {
        Count::All => Ok(working),
        Count::First => working.first().map(|r| vec![*r]).ok_or(EmptyResult),
        Count::Last => working.last().map(|r| vec![*r]).ok_or(EmptyResult),
        Count::Limit(n) => {
            working.truncate(n);
            Ok(working)
        }
    }
}
