// Interval merging and coverage ratio over a reference sequence.

use crate::error::{EngineError, Result};
use crate::window::MatchRecord;

#[path = "coverage_test.rs"]
mod coverage_test;

/// Half-open region `[start, end)` of the reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

/// How the merge pass treats an interval nested inside the last merged one.
///
/// The reference tool stops the merge pass outright at the first nested
/// interval, silently dropping every interval after it. `Legacy` reproduces
/// that behavior so outputs stay comparable; `Complete` skips the nested
/// interval and keeps merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MergePolicy {
    #[default]
    Legacy,
    Complete,
}

/// Merge intervals into a disjoint set, sorting by `(start, end)` first.
///
/// An interval starting at most one position past the last merged end is
/// treated as adjacent and merged, matching the reference tool's arithmetic.
pub fn merge_intervals(mut intervals: Vec<Interval>, policy: MergePolicy) -> Vec<Interval> {
    intervals.sort_unstable_by_key(|iv| (iv.start, iv.end));
    let mut merged: Vec<Interval> = Vec::new();
    for iv in intervals {
        let Some(last) = merged.last_mut() else {
            merged.push(iv);
            continue;
        };
        if iv.start <= last.end + 1 && iv.end >= last.end {
            last.start = last.start.min(iv.start);
            last.end = iv.end;
        } else if iv.start <= last.end && iv.end <= last.end {
            match policy {
                MergePolicy::Legacy => break,
                MergePolicy::Complete => continue,
            }
        } else {
            merged.push(iv);
        }
    }
    merged
}

/// Fraction of the reference covered by the match records, after merging.
///
/// `reference_len` is the reference sequence length excluding its sentinel.
pub fn coverage_ratio(
    records: &[MatchRecord],
    reference_len: usize,
    policy: MergePolicy,
) -> Result<f64> {
    if reference_len == 0 {
        return Err(EngineError::EmptyInput);
    }
    let intervals: Vec<Interval> = records
        .iter()
        .map(|r| Interval {
            start: r.position,
            end: r.position + r.length,
        })
        .collect();
    let covered: usize = merge_intervals(intervals, policy)
        .iter()
        .map(|iv| iv.end - iv.start)
        .sum();
    Ok(covered as f64 / reference_len as f64)
}
