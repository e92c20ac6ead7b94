// Suffix array construction over a sentinel-terminated sequence.
//
// The array is rebuilt from scratch for every reference sequence and dropped
// as soon as that reference's matrix row is complete.

use std::cmp::Ordering;

use crate::error::{EngineError, Result};

#[path = "suffix_array_test.rs"]
mod suffix_array_test;

/// Sentinel appended to every indexed sequence. Lexicographically smaller
/// than any nucleotide or ambiguity code, and unique within the text, so all
/// suffixes are pairwise distinguishable.
pub const SENTINEL: u8 = b'$';

/// A sequence with the sentinel appended, ready for indexing.
#[derive(Debug, Clone)]
pub struct IndexedText {
    data: Vec<u8>,
}

impl IndexedText {
    /// Wrap raw sequence symbols, appending the sentinel.
    pub fn from_symbols(symbols: &[u8]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(EngineError::EmptyInput);
        }
        let mut data = Vec::with_capacity(symbols.len() + 1);
        data.extend_from_slice(symbols);
        data.push(SENTINEL);
        Ok(IndexedText { data })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Text length including the sentinel.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Length of the underlying sequence, excluding the sentinel.
    pub fn sequence_len(&self) -> usize {
        self.data.len() - 1
    }
}

/// Suffix start positions of an [`IndexedText`], sorted lexicographically.
///
/// Borrows the text it was built from; using it against any other text would
/// be meaningless, and the borrow makes that impossible.
#[derive(Debug)]
pub struct SuffixArray<'a> {
    text: &'a IndexedText,
    positions: Vec<usize>,
}

impl<'a> SuffixArray<'a> {
    /// Sort all suffix start positions of `text`.
    ///
    /// Comparison sort with a lock-step suffix comparator: O(n^2 log n) in
    /// the worst case, which is fine for the genome sizes this tool targets.
    pub fn build(text: &'a IndexedText) -> Self {
        let bytes = text.as_bytes();
        let mut positions: Vec<usize> = (0..bytes.len()).collect();
        positions.sort_unstable_by(|&a, &b| suffix_cmp(bytes, a, b));
        SuffixArray { text, positions }
    }

    pub fn text(&self) -> &IndexedText {
        self.text
    }

    /// The sorted permutation of suffix start positions.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// Lock-step comparison of the suffixes starting at `a` and `b`.
///
/// Iterative on purpose: the comparison depth is the length of the common
/// prefix, and a recursive formulation overflows the stack on long
/// homopolymer runs. A position past the end of the text orders below any
/// real symbol.
fn suffix_cmp(text: &[u8], mut a: usize, mut b: usize) -> Ordering {
    loop {
        match (text.get(a), text.get(b)) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x != y {
                    return x.cmp(y);
                }
                a += 1;
                b += 1;
            }
        }
    }
}
