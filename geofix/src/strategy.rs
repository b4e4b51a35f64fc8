//! Uniform search strategy seam and result folding.
//!
//! Every search backend (cell, region, and the Wi-Fi/IP strategies that
//! live outside this crate) implements [`SearchStrategy`]; the surrounding
//! service holds an explicit ordered list of them and folds their outputs
//! with [`fold_best`].

use crate::query::Query;
use crate::result::LocateResult;

/// One way of answering a location query.
pub trait SearchStrategy {
    /// What a search yields: a single result for position strategies, a
    /// result list for region strategies.
    type Output;

    /// Whether this strategy has anything to work with for the query.
    /// Searching when this is false only wastes datastore round-trips.
    fn should_search(&self, query: &Query) -> bool;

    /// Run the search. Never fails: missing or degraded data comes back
    /// as a not-found result.
    fn search(&self, query: &Query) -> Self::Output;
}

/// Fold candidate results left-to-right, keeping the incumbent unless a
/// later candidate is [`more_accurate`](LocateResult::more_accurate).
///
/// The order matters: the trust override inside `more_accurate` is not
/// transitive across three or more sources of mixed trust, so different
/// orderings of the same candidates can produce different winners. Callers
/// must feed candidates in a fixed, documented order; this function only
/// guarantees the pairwise contract applied sequentially.
pub fn fold_best<I>(results: I) -> LocateResult
where
    I: IntoIterator<Item = LocateResult>,
{
    let mut incumbent = LocateResult::Empty;
    for candidate in results {
        if candidate.more_accurate(&incumbent) {
            incumbent = candidate;
        }
    }
    incumbent
}
