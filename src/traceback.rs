use std::borrow::Cow;

use log::trace;

use crate::config::Penalties;
use crate::matrix::{DpTable, Source};
use crate::scoring::{AlignmentStats, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Symbol from seq2 against a gap in seq1.
    Insertion,
    /// Symbol from seq1 against a gap in seq2.
    Deletion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub score: i64,
    pub aligned_seq1: Vec<u8>,
    pub aligned_seq2: Vec<u8>,
    pub operations: Vec<TracebackOperation>,
}

impl AlignmentResult {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn stats(&self) -> AlignmentStats {
        AlignmentStats::from_operations(&self.operations)
    }

    /// Fraction of columns that are matches, 0.0 for an empty alignment.
    pub fn identity(&self) -> f64 {
        let stats = self.stats();
        match stats.columns() {
            0 => 0.0,
            columns => stats.matches as f64 / columns as f64,
        }
    }

    /// Cost of the reconstructed path, recomputed from its operations.
    pub fn path_cost(&self, penalties: Penalties) -> i64 {
        self.stats().cost(penalties)
    }

    pub fn aligned_seq1_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_seq1)
    }

    pub fn aligned_seq2_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.aligned_seq2)
    }

    /// Non-gap symbols of each row, in order.
    ///
    /// Driven by the operations rather than the gap marker, so input symbols
    /// that happen to equal the marker survive.
    pub fn ungapped(&self) -> (Vec<u8>, Vec<u8>) {
        let mut seq1 = Vec::with_capacity(self.len());
        let mut seq2 = Vec::with_capacity(self.len());
        for (k, op) in self.operations.iter().enumerate() {
            match op {
                TracebackOperation::Match | TracebackOperation::Mismatch => {
                    seq1.push(self.aligned_seq1[k]);
                    seq2.push(self.aligned_seq2[k]);
                }
                TracebackOperation::Deletion => seq1.push(self.aligned_seq1[k]),
                TracebackOperation::Insertion => seq2.push(self.aligned_seq2[k]),
            }
        }
        (seq1, seq2)
    }
}

pub struct Traceback<'t, 'a> {
    table: &'t DpTable<'a>,
    gap_symbol: u8,
}

impl<'t, 'a> Traceback<'t, 'a> {
    pub fn new(table: &'t DpTable<'a>, gap_symbol: u8) -> Self {
        Self { table, gap_symbol }
    }

    /// Walks from the bottom-right cell back to the origin.
    ///
    /// On the first row only left moves are possible and on the first column
    /// only up moves, whatever the cell stores.
    pub fn reconstruct_alignment(&self) -> AlignmentResult {
        let seq1 = self.table.seq1();
        let seq2 = self.table.seq2();
        let capacity = seq1.len() + seq2.len();

        let mut aligned_seq1 = Vec::with_capacity(capacity);
        let mut aligned_seq2 = Vec::with_capacity(capacity);
        let mut operations = Vec::with_capacity(capacity);

        let mut current = Position {
            i: seq1.len(),
            j: seq2.len(),
        };

        while !current.is_origin() {
            let source = match (current.i, current.j) {
                (0, _) => Source::Left,
                (_, 0) => Source::Up,
                (i, j) => match self.table.get(i, j).source {
                    Some(source) => source,
                    // DpTable::fill assigns a source to every cell but the origin
                    None => unreachable!("interior cell ({i}, {j}) has no source"),
                },
            };
            trace!("{:?} at ({}, {})", source, current.i, current.j);

            match source {
                Source::Diag => {
                    let a = seq1[current.i - 1];
                    let b = seq2[current.j - 1];
                    aligned_seq1.push(a);
                    aligned_seq2.push(b);
                    operations.push(if a == b {
                        TracebackOperation::Match
                    } else {
                        TracebackOperation::Mismatch
                    });
                    current.i -= 1;
                    current.j -= 1;
                }
                Source::Up => {
                    aligned_seq1.push(seq1[current.i - 1]);
                    aligned_seq2.push(self.gap_symbol);
                    operations.push(TracebackOperation::Deletion);
                    current.i -= 1;
                }
                Source::Left => {
                    aligned_seq1.push(self.gap_symbol);
                    aligned_seq2.push(seq2[current.j - 1]);
                    operations.push(TracebackOperation::Insertion);
                    current.j -= 1;
                }
            }
        }

        // Built back to front
        aligned_seq1.reverse();
        aligned_seq2.reverse();
        operations.reverse();

        AlignmentResult {
            score: self.table.score(),
            aligned_seq1,
            aligned_seq2,
            operations,
        }
    }
}
