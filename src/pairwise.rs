// Orchestration of the full pairwise matrix: one suffix array per reference,
// one row per reference, rows computed in parallel on the rayon pool.

use rayon::prelude::*;

use crate::coverage::{coverage_ratio, MergePolicy};
use crate::loader::{Sequence, SequenceSet};
use crate::matrix::{Cell, SimilarityMatrix};
use crate::suffix_array::{IndexedText, SuffixArray};
use crate::window::scan_windows;

#[path = "pairwise_test.rs"]
mod pairwise_test;

pub const DEFAULT_WINDOW: usize = 10;

/// Knobs for one matrix computation, threaded explicitly from the CLI.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityParams {
    /// Window length in symbols for the backward scan.
    pub window: usize,
    /// Interval merge behavior for the coverage step.
    pub merge: MergePolicy,
}

impl Default for SimilarityParams {
    fn default() -> Self {
        SimilarityParams {
            window: DEFAULT_WINDOW,
            merge: MergePolicy::Legacy,
        }
    }
}

/// Compute the full asymmetric similarity matrix.
///
/// Rows are independent: each reference's suffix array is built inside its
/// row computation and dropped when the row is done, so peak memory is one
/// index per worker plus the shared read-only sequences.
pub fn compute_matrix(sequences: &SequenceSet, params: &SimilarityParams) -> SimilarityMatrix {
    let seqs = sequences.sequences();
    let rows: Vec<Vec<Cell>> = seqs
        .par_iter()
        .enumerate()
        .map(|(row, reference)| compute_row(reference, row, seqs, params))
        .collect();
    let names = seqs.iter().map(|s| s.name.clone()).collect();
    SimilarityMatrix::new(names, rows)
}

/// One reference's row: build its index once, scan every other sequence
/// against it. A failure is confined to its cell; a reference that cannot be
/// indexed at all loses its whole row, diagonal marker excepted.
fn compute_row(
    reference: &Sequence,
    row: usize,
    seqs: &[Sequence],
    params: &SimilarityParams,
) -> Vec<Cell> {
    let indexed = match IndexedText::from_symbols(reference.symbols.as_bytes()) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("cannot index reference '{}': {}", reference.name, e);
            return (0..seqs.len())
                .map(|col| if col == row { Cell::SelfMatch } else { Cell::Unavailable })
                .collect();
        }
    };
    let array = SuffixArray::build(&indexed);
    let reference_len = indexed.sequence_len();
    log::debug!(
        "reference '{}': {} bp indexed",
        reference.name,
        reference_len
    );

    seqs.iter()
        .enumerate()
        .map(|(col, query)| {
            if col == row {
                return Cell::SelfMatch;
            }
            log::debug!(
                "{} ({} bp) vs {} ({} bp)",
                reference.name,
                reference_len,
                query.name,
                query.symbols.len()
            );
            match scan_windows(&array, query.symbols.as_bytes(), params.window)
                .and_then(|records| coverage_ratio(&records, reference_len, params.merge))
            {
                Ok(ratio) => Cell::Ratio(ratio),
                Err(e) => {
                    log::warn!("{} vs {}: {}", reference.name, query.name, e);
                    Cell::Unavailable
                }
            }
        })
        .collect()
}
