// Exact substring location: binary search over the suffix array, then
// expansion across the contiguous block of matching suffixes.

use std::cmp::Ordering;

use crate::error::{EngineError, Result};
use crate::suffix_array::SuffixArray;

#[path = "locate_test.rs"]
mod locate_test;

impl SuffixArray<'_> {
    /// Find every start position of `pattern` in the indexed text.
    ///
    /// Returns raw text offsets in unspecified order; an empty vec when the
    /// pattern does not occur. O(m log n) for the search plus O(k) for the
    /// expansion over the k occurrences.
    pub fn locate(&self, pattern: &[u8]) -> Result<Vec<usize>> {
        let text = self.text().as_bytes();
        if pattern.is_empty() {
            return Err(EngineError::InvalidPattern("empty pattern".to_string()));
        }
        if pattern.len() > text.len() {
            return Err(EngineError::InvalidPattern(format!(
                "pattern length {} exceeds text length {}",
                pattern.len(),
                text.len()
            )));
        }

        let positions = self.positions();
        let mut lo = 0usize;
        let mut hi = positions.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            match pattern_cmp(text, positions[mid], pattern) {
                Ordering::Equal => return Ok(self.expand(mid, pattern)),
                Ordering::Less => hi = mid,
                Ordering::Greater => lo = mid + 1,
            }
        }
        Ok(Vec::new())
    }

    /// All suffixes sharing a prefix sit next to each other in the sorted
    /// array, so walk out from `hit` downward and then upward, stopping in
    /// each direction at the first suffix that no longer starts with the
    /// pattern.
    fn expand(&self, hit: usize, pattern: &[u8]) -> Vec<usize> {
        let text = self.text().as_bytes();
        let positions = self.positions();
        let mut found = vec![positions[hit]];

        let mut down = hit;
        while down > 0 {
            down -= 1;
            if pattern_cmp(text, positions[down], pattern) != Ordering::Equal {
                break;
            }
            found.push(positions[down]);
        }

        let mut up = hit + 1;
        while up < positions.len() {
            if pattern_cmp(text, positions[up], pattern) != Ordering::Equal {
                break;
            }
            found.push(positions[up]);
            up += 1;
        }

        found
    }
}

/// Three-way comparison of `pattern` against the suffix starting at `start`,
/// over the first `pattern.len()` symbols. A suffix exhausted before the
/// pattern orders below any real symbol, so the pattern compares greater.
/// `Equal` means the suffix starts with the pattern.
fn pattern_cmp(text: &[u8], start: usize, pattern: &[u8]) -> Ordering {
    for (i, &p) in pattern.iter().enumerate() {
        match text.get(start + i) {
            None => return Ordering::Greater,
            Some(&t) => match p.cmp(&t) {
                Ordering::Equal => continue,
                other => return other,
            },
        }
    }
    Ordering::Equal
}
