// Loading FASTA-like genome files from a directory of collections.
//
// Layout mirrored from the reference tool: `root/<collection>/<file>`, one or
// more records per file. This is I/O glue around the matching core; its only
// product is a SequenceSet.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::utils::xzopen;

#[path = "loader_test.rs"]
mod loader_test;

/// A named, uppercase-normalized nucleotide sequence. Ambiguity codes are
/// carried through untouched.
#[derive(Debug, Clone)]
pub struct Sequence {
    pub name: String,
    pub symbols: String,
}

/// Sequences in order of first encounter, with overwrite-by-name semantics.
#[derive(Debug, Clone, Default)]
pub struct SequenceSet {
    order: Vec<Sequence>,
}

impl SequenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a sequence. A repeated name replaces the earlier symbols but
    /// keeps the original position in the encounter order.
    pub fn insert(&mut self, name: String, symbols: String) {
        if let Some(existing) = self.order.iter_mut().find(|s| s.name == name) {
            existing.symbols = symbols;
        } else {
            self.order.push(Sequence { name, symbols });
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn sequences(&self) -> &[Sequence] {
        &self.order
    }

    pub fn get(&self, name: &str) -> Option<&Sequence> {
        self.order.iter().find(|s| s.name == name)
    }
}

/// Split FASTA-like text into `(name, symbols)` records.
///
/// A header is any line containing `>`; the record name is the text after
/// the `>`. Data lines concatenate until the next header. The whole input is
/// uppercased first, which also folds away soft-masked lowercase stretches.
/// Lines before the first header are ignored.
pub fn parse_records(input: &str) -> Vec<(String, String)> {
    let input = input.to_uppercase();
    let mut records = Vec::new();
    let mut name: Option<String> = None;
    let mut symbols = String::new();

    for line in input.lines() {
        if let Some(pos) = line.find('>') {
            if let Some(finished) = name.take() {
                records.push((finished, std::mem::take(&mut symbols)));
            }
            name = Some(line[pos + 1..].to_string());
        } else if name.is_some() {
            symbols.push_str(line);
        }
    }
    if let Some(finished) = name {
        records.push((finished, symbols));
    }
    records
}

/// Load every record from every regular file found one level below `root`.
///
/// Entries directly under `root` that are not directories are skipped, as
/// are directories nested below the collections. Files and collections are
/// visited in name order so the matrix layout is reproducible. Gzipped files
/// are decompressed transparently.
pub fn load_sequences(root: &Path) -> Result<SequenceSet> {
    let mut set = SequenceSet::new();
    for dir in sorted_entries(root)? {
        if !dir.is_dir() {
            continue;
        }
        for file in sorted_entries(&dir)? {
            if !file.is_file() {
                continue;
            }
            load_file(&file, &mut set)
                .with_context(|| format!("loading {}", file.display()))?;
        }
    }
    Ok(set)
}

fn load_file(path: &Path, set: &mut SequenceSet) -> Result<()> {
    let mut reader = xzopen(path)?;
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    for (name, symbols) in parse_records(&contents) {
        log::debug!(
            "record '{}' ({} bp) from {}",
            name,
            symbols.len(),
            path.display()
        );
        set.insert(name, symbols);
    }
    Ok(())
}

fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let iter =
        fs::read_dir(dir).with_context(|| format!("reading directory {}", dir.display()))?;
    for entry in iter {
        entries.push(entry?.path());
    }
    entries.sort();
    Ok(entries)
}
