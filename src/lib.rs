//! Global pairwise alignment of byte sequences with a Needleman-Wunsch
//! dynamic program: linear gap cost, flat mismatch cost, free matches.
//!
//! ```
//! use nw_aligner::align;
//!
//! let result = align(b"GATTACA", b"GCATGCU", 1, 1);
//! assert_eq!(result.score, 4);
//! assert_eq!(result.aligned_seq1, b"G-ATTACA");
//! assert_eq!(result.aligned_seq2, b"GCATG-CU");
//! ```

use log::{debug, warn};
use thiserror::Error;

pub mod batch;
pub mod config;
pub mod matrix;
pub mod request;
pub mod scoring;
pub mod traceback;

pub use crate::batch::{align_batch, align_pairs};
pub use crate::config::{AlignerConfig, Penalties};
pub use crate::matrix::{DpCell, DpTable, Source};
pub use crate::request::{AlignRequest, AlignResponse};
pub use crate::scoring::{score_columns, AlignmentStats, Position};
pub use crate::traceback::{AlignmentResult, Traceback, TracebackOperation};

/// Failures of the layers around the aligner. Alignment itself never fails.
#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("Expected 4 arguments (seq1, seq2, gap penalty, mismatch penalty), got {0}")]
    InvalidArgumentCount(usize),
    #[error("Invalid {name} penalty: {value:?} is not an integer")]
    InvalidPenalty { name: &'static str, value: String },
    #[error("Invalid gap symbol {0:?}: must be a single ASCII character")]
    InvalidGapSymbol(char),
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Default)]
pub struct Aligner {
    config: AlignerConfig,
}

impl Aligner {
    pub fn new(config: AlignerConfig) -> Self {
        if config.penalties().is_negative() {
            warn!(
                "Negative penalties {:?} accepted, alignments will favour them",
                config.penalties()
            );
        }
        Self { config }
    }

    pub fn with_penalties(gap: i32, mismatch: i32) -> Self {
        Self::new(
            AlignerConfig::new()
                .with_gap_penalty(gap)
                .with_mismatch_penalty(mismatch),
        )
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    /// Fills the DP table without tracing back, for callers that want the
    /// matrix itself.
    pub fn fill<'a>(&self, seq1: &'a [u8], seq2: &'a [u8]) -> DpTable<'a> {
        DpTable::fill(seq1, seq2, self.config.penalties())
    }

    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> AlignmentResult {
        let table = self.fill(seq1, seq2);
        let result = Traceback::new(&table, self.config.gap_byte()).reconstruct_alignment();
        debug!(
            "Aligned {} x {} symbols: score {}, {} columns",
            seq1.len(),
            seq2.len(),
            result.score,
            result.len()
        );
        result
    }
}

/// Aligns `seq1` against `seq2` with the default gap marker `-`.
pub fn align(seq1: &[u8], seq2: &[u8], gap_penalty: i32, mismatch_penalty: i32) -> AlignmentResult {
    Aligner::with_penalties(gap_penalty, mismatch_penalty).align(seq1, seq2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligner_uses_config() {
        let config = AlignerConfig::new()
            .with_gap_penalty(2)
            .with_gap_symbol('_')
            .unwrap();
        let result = Aligner::new(config).align(b"ABC", b"");
        assert_eq!(result.score, 6);
        assert_eq!(result.aligned_seq2, b"___");
    }

    #[test]
    fn test_fill_and_align_agree() {
        let aligner = Aligner::with_penalties(1, 1);
        let table = aligner.fill(b"GATTACA", b"GCATGCU");
        let result = aligner.align(b"GATTACA", b"GCATGCU");
        assert_eq!(table.score(), result.score);
        assert_eq!(
            Traceback::new(&table, b'-').reconstruct_alignment(),
            result
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AlignerError::InvalidArgumentCount(3).to_string(),
            "Expected 4 arguments (seq1, seq2, gap penalty, mismatch penalty), got 3"
        );
        let err = AlignerError::InvalidPenalty {
            name: "gap",
            value: "x".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid gap penalty: \"x\" is not an integer");
    }
}
