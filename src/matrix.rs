// The similarity matrix and its semicolon-delimited serialization.

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[path = "matrix_test.rs"]
mod matrix_test;

/// One cell of the similarity matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    /// Fraction of the row's sequence covered by chunks of the column's.
    Ratio(f64),
    /// Diagonal marker; a sequence is never matched against itself.
    SelfMatch,
    /// This pair's computation failed; the cause is in the log.
    Unavailable,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Ratio(r) => write!(f, "{}", r),
            Cell::SelfMatch => f.write_str("-"),
            Cell::Unavailable => f.write_str("NA"),
        }
    }
}

/// Asymmetric similarity matrix over a fixed set of sequence names.
///
/// Cell `(R, Q)` measures how much of R is covered by chunks drawn from Q,
/// which need not equal `(Q, R)`. Rows and columns share one name order:
/// the order the sequences were first encountered.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    names: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl SimilarityMatrix {
    pub fn new(names: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert_eq!(names.len(), rows.len());
        debug_assert!(rows.iter().all(|r| r.len() == names.len()));
        SimilarityMatrix { names, rows }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Look a cell up by row and column name.
    pub fn cell(&self, row_name: &str, col_name: &str) -> Option<Cell> {
        let row = self.names.iter().position(|n| n == row_name)?;
        let col = self.names.iter().position(|n| n == col_name)?;
        self.get(row, col)
    }

    /// Write the matrix as a semicolon-delimited UTF-8 table: a header row of
    /// column names, then one row per sequence with its name in the first
    /// field.
    pub fn write_csv<W: Write>(&self, mut out: W) -> io::Result<()> {
        for name in &self.names {
            write!(out, ";{}", name)?;
        }
        writeln!(out)?;
        for (name, row) in self.names.iter().zip(&self.rows) {
            write!(out, "{}", name)?;
            for cell in row {
                write!(out, ";{}", cell)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn write_to_path(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_csv(&mut out)?;
        out.flush()
    }
}
