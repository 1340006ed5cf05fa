use crate::config::Penalties;
use crate::traceback::TracebackOperation;
use crate::AlignerError;

/// A cell coordinate in the DP table: `i` indexes seq1, `j` indexes seq2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn is_origin(&self) -> bool {
        self.i == 0 && self.j == 0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

impl AlignmentStats {
    pub fn from_operations(operations: &[TracebackOperation]) -> Self {
        operations.iter().fold(Self::default(), |mut acc, op| {
            match op {
                TracebackOperation::Match => acc.matches += 1,
                TracebackOperation::Mismatch => acc.mismatches += 1,
                TracebackOperation::Insertion | TracebackOperation::Deletion => acc.gaps += 1,
            }
            acc
        })
    }

    pub fn columns(&self) -> usize {
        self.matches + self.mismatches + self.gaps
    }

    /// Total cost of the counted columns under `penalties`.
    pub fn cost(&self, penalties: Penalties) -> i64 {
        self.mismatches as i64 * i64::from(penalties.mismatch)
            + self.gaps as i64 * i64::from(penalties.gap)
    }
}

/// Recomputes the cost of an explicit alignment column by column.
///
/// A column holding `gap_symbol` on either row costs a gap, so a symbol
/// equal to the gap marker in the input sequences is scored as a gap here.
pub fn score_columns(
    aligned1: &[u8],
    aligned2: &[u8],
    penalties: Penalties,
    gap_symbol: u8,
) -> Result<i64, AlignerError> {
    if aligned1.len() != aligned2.len() {
        return Err(AlignerError::InvalidAlignment(format!(
            "rows differ in length ({} vs {})",
            aligned1.len(),
            aligned2.len()
        )));
    }

    Ok(aligned1
        .iter()
        .zip(aligned2)
        .map(|(&a, &b)| {
            if a == gap_symbol || b == gap_symbol {
                i64::from(penalties.gap)
            } else {
                i64::from(penalties.substitution(a, b))
            }
        })
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use TracebackOperation::*;

    #[test]
    fn test_stats_from_operations() {
        let ops = [Match, Insertion, Match, Match, Mismatch, Deletion, Match, Mismatch];
        let stats = AlignmentStats::from_operations(&ops);
        assert_eq!(
            stats,
            AlignmentStats {
                matches: 4,
                mismatches: 2,
                gaps: 2
            }
        );
        assert_eq!(stats.columns(), 8);
        assert_eq!(stats.cost(Penalties::new(2, 3)), 10);
    }

    #[test]
    fn test_score_columns() {
        let score = score_columns(b"G-ATTACA", b"GCATG-CU", Penalties::new(1, 1), b'-').unwrap();
        assert_eq!(score, 4);

        let score = score_columns(b"G-ATTACA", b"GCATG-CU", Penalties::new(2, 3), b'-').unwrap();
        assert_eq!(score, 10);
    }

    #[test]
    fn test_cost_with_extreme_penalties() {
        let stats = AlignmentStats {
            matches: 0,
            mismatches: 3,
            gaps: 2,
        };
        let max = i64::from(i32::MAX);
        assert_eq!(stats.cost(Penalties::new(i32::MAX, i32::MAX)), 5 * max);

        let score = score_columns(b"A-C", b"GT-", Penalties::new(i32::MAX, i32::MAX), b'-').unwrap();
        assert_eq!(score, 3 * max);
    }

    #[test]
    fn test_score_columns_empty() {
        assert_eq!(score_columns(b"", b"", Penalties::new(5, 5), b'-').unwrap(), 0);
    }

    #[test]
    fn test_score_columns_length_mismatch() {
        let err = score_columns(b"AC", b"A", Penalties::default(), b'-').unwrap_err();
        assert!(matches!(err, AlignerError::InvalidAlignment(_)));
    }

    #[test]
    fn test_position_origin() {
        assert!(Position { i: 0, j: 0 }.is_origin());
        assert!(!Position { i: 0, j: 1 }.is_origin());
    }
}
