//! CLI command implementations.

pub(crate) mod list;
pub(crate) mod run;
pub(crate) mod show;

use retrace_lib::{RetraceError, TurningPointEvent};

use crate::display::record_symbol;

/// Pairs each record with its position in the events table, keeping only
/// `symbol`'s when given.
pub(crate) fn select(
    records: Vec<Result<TurningPointEvent, RetraceError>>,
    symbol: Option<&str>,
) -> Vec<(usize, Result<TurningPointEvent, RetraceError>)> {
    records
        .into_iter()
        .enumerate()
        .filter(|(_, record)| symbol.is_none_or(|s| record_symbol(record).eq_ignore_ascii_case(s)))
        .collect()
}
