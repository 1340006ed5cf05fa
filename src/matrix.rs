use log::debug;

use crate::config::Penalties;

/// Which predecessor a cell's value was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    Diag, // match/mismatch, both sequences advance
    Up,   // gap in seq2, seq1 advances
    Left, // gap in seq1, seq2 advances
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DpCell {
    /// Cumulative cost, widened so `length × i32 penalty` cannot overflow.
    pub value: i64,
    /// `None` only for the origin cell.
    pub source: Option<Source>,
}

impl DpCell {
    const ORIGIN: DpCell = DpCell {
        value: 0,
        source: None,
    };

    fn new(value: i64, source: Source) -> Self {
        Self {
            value,
            source: Some(source),
        }
    }
}

/// Picks the best of the three candidates for an interior cell.
///
/// The comparisons run in a fixed order: diagonal first, then up, then left.
/// An up/diagonal tie goes to up. A left tie only wins when the running
/// best is not up. Several optimal alignments usually exist, and changing
/// this order changes which one traceback returns.
pub(crate) fn select_best(diag: i64, up: i64, left: i64) -> DpCell {
    let mut best_val = diag;
    let mut best_source = Source::Diag;

    if up < best_val {
        best_val = up;
        best_source = Source::Up;
    } else if up == best_val {
        best_source = Source::Up;
    }

    if left < best_val {
        best_val = left;
        best_source = Source::Left;
    } else if left == best_val && best_source != Source::Up {
        best_source = Source::Left;
    }

    DpCell::new(best_val, best_source)
}

/// The filled (m+1)×(n+1) table for a pair of sequences, stored row-major.
#[derive(Debug, Clone)]
pub struct DpTable<'a> {
    data: Vec<DpCell>,
    rows: usize,
    cols: usize,
    seq1: &'a [u8],
    seq2: &'a [u8],
}

impl<'a> DpTable<'a> {
    pub fn fill(seq1: &'a [u8], seq2: &'a [u8], penalties: Penalties) -> Self {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;
        debug!("Filling {}x{} DP table ({:?})", rows, cols, penalties);

        let mut table = Self {
            data: vec![DpCell::ORIGIN; rows * cols],
            rows,
            cols,
            seq1,
            seq2,
        };

        let gap = i64::from(penalties.gap);
        for i in 1..rows {
            table.set(i, 0, DpCell::new(gap * i as i64, Source::Up));
        }
        for j in 1..cols {
            table.set(0, j, DpCell::new(gap * j as i64, Source::Left));
        }

        for i in 1..rows {
            for j in 1..cols {
                let cost = i64::from(penalties.substitution(seq1[i - 1], seq2[j - 1]));
                let diag = table.get(i - 1, j - 1).value + cost;
                let up = table.get(i - 1, j).value + gap;
                let left = table.get(i, j - 1).value + gap;

                table.set(i, j, select_best(diag, up, left));
            }
        }

        debug!("DP table filled, score {}", table.score());
        table
    }

    fn set(&mut self, row: usize, col: usize, cell: DpCell) {
        self.data[row * self.cols + col] = cell;
    }

    /// Panics if `row >= rows()` or `col >= cols()`.
    pub fn get(&self, row: usize, col: usize) -> DpCell {
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn seq1(&self) -> &'a [u8] {
        self.seq1
    }

    pub fn seq2(&self) -> &'a [u8] {
        self.seq2
    }

    /// Value of the bottom-right cell, the optimal global alignment cost.
    pub fn score(&self) -> i64 {
        self.get(self.rows - 1, self.cols - 1).value
    }

    /// Cell values as one vector per row.
    pub fn values(&self) -> Vec<Vec<i64>> {
        self.data
            .chunks(self.cols)
            .map(|row| row.iter().map(|cell| cell.value).collect())
            .collect()
    }
}
