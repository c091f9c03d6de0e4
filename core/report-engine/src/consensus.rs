//! FILENAME: core/report-engine/src/consensus.rs
//! Reduction of results from a set of interchangeable providers.
//!
//! Providers are asked in turn; the caller passes their answers here.
//! Exactly one distinct answer wins. No answer, or answers that disagree,
//! yield nothing.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashSet;
use working_time::log_warn;

pub fn resolve_single_result<T>(results: impl IntoIterator<Item = Option<T>>) -> Option<T>
where
    T: Eq + Hash + Debug,
{
    let mut distinct: FxHashSet<T> = results.into_iter().flatten().collect();
    match distinct.len() {
        0 => None,
        1 => distinct.drain().next(),
        _ => {
            log_warn!("PROVIDER", "providers disagree, ignoring all results: {:?}", distinct);
            None
        }
    }
}
