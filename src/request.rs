//! Request and response records for callers on the other side of a process
//! boundary. Field names follow the JSON shape those callers expect:
//! `{"score", "alignedSeq1", "alignedSeq2"}`.
//!
//! Sequences travel as strings but are aligned byte by byte; multi-byte
//! UTF-8 characters are not kept whole.

use serde::{Deserialize, Serialize};

use crate::traceback::AlignmentResult;
use crate::{Aligner, AlignerError};

const EXPECTED_ARGS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignRequest {
    pub seq1: String,
    pub seq2: String,
    pub gap_penalty: i32,
    pub mismatch_penalty: i32,
}

impl AlignRequest {
    pub fn new(
        seq1: impl Into<String>,
        seq2: impl Into<String>,
        gap_penalty: i32,
        mismatch_penalty: i32,
    ) -> Self {
        Self {
            seq1: seq1.into(),
            seq2: seq2.into(),
            gap_penalty,
            mismatch_penalty,
        }
    }

    /// Builds a request from positional arguments
    /// `[seq1, seq2, gap_penalty, mismatch_penalty]`.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, AlignerError> {
        if args.len() != EXPECTED_ARGS {
            return Err(AlignerError::InvalidArgumentCount(args.len()));
        }

        Ok(Self {
            seq1: args[0].as_ref().to_string(),
            seq2: args[1].as_ref().to_string(),
            gap_penalty: parse_penalty("gap", args[2].as_ref())?,
            mismatch_penalty: parse_penalty("mismatch", args[3].as_ref())?,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, AlignerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn aligner(&self) -> Aligner {
        Aligner::with_penalties(self.gap_penalty, self.mismatch_penalty)
    }

    pub fn run(&self) -> AlignmentResult {
        self.aligner().align(self.seq1.as_bytes(), self.seq2.as_bytes())
    }
}

fn parse_penalty(name: &'static str, value: &str) -> Result<i32, AlignerError> {
    value
        .trim()
        .parse()
        .map_err(|_| AlignerError::InvalidPenalty {
            name,
            value: value.to_string(),
        })
}

/// Aligned rows are converted with `String::from_utf8_lossy`, so a split
/// multi-byte character shows up as U+FFFD and gap-stripping such a row
/// no longer reproduces the request's sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignResponse {
    pub score: i64,
    pub aligned_seq1: String,
    pub aligned_seq2: String,
}

impl AlignResponse {
    pub fn to_json(&self) -> Result<String, AlignerError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<&AlignmentResult> for AlignResponse {
    fn from(result: &AlignmentResult) -> Self {
        Self {
            score: result.score,
            aligned_seq1: result.aligned_seq1_str().into_owned(),
            aligned_seq2: result.aligned_seq2_str().into_owned(),
        }
    }
}

impl From<AlignmentResult> for AlignResponse {
    fn from(result: AlignmentResult) -> Self {
        Self::from(&result)
    }
}
