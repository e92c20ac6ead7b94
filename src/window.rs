// Backward sliding-window scan of a query against a reference suffix array.

use crate::error::{EngineError, Result};
use crate::suffix_array::SuffixArray;

#[path = "window_test.rs"]
mod window_test;

/// One window hit: `length` symbols of the reference matched, starting at
/// `position` in the reference text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub position: usize,
    pub length: usize,
}

/// Scan `query` from its end toward its start in fixed-size windows.
///
/// A window found in the reference records one [`MatchRecord`] per occurrence
/// and the scan steps back by the whole window length; a window not found
/// steps back by a single symbol. The final shift is clamped so the window
/// starting at query position 0 is tested exactly once before the scan
/// terminates.
///
/// `window == query.len()` is legal (the whole query is tested as one
/// window); `window > query.len()` is [`EngineError::WindowTooLarge`].
pub fn scan_windows(
    reference: &SuffixArray<'_>,
    query: &[u8],
    window: usize,
) -> Result<Vec<MatchRecord>> {
    if window == 0 {
        return Err(EngineError::InvalidPattern(
            "window length must be positive".to_string(),
        ));
    }
    if window > query.len() {
        return Err(EngineError::WindowTooLarge {
            window,
            query_len: query.len(),
        });
    }

    let mut records = Vec::new();
    let mut start = query.len() - window;
    loop {
        let chunk = &query[start..start + window];
        let hits = reference.locate(chunk)?;
        let step = if hits.is_empty() { 1 } else { window };
        records.extend(hits.into_iter().map(|position| MatchRecord {
            position,
            length: window,
        }));
        if start == 0 {
            break;
        }
        start = start.saturating_sub(step);
    }
    Ok(records)
}
