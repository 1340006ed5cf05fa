use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::request::AlignRequest;
use crate::traceback::AlignmentResult;
use crate::Aligner;

/// Aligns independent requests in parallel, each with its own penalties.
/// Results come back in input order.
pub fn align_batch(requests: &[AlignRequest]) -> Vec<AlignmentResult> {
    let start_time = Instant::now();
    let results: Vec<AlignmentResult> = requests.par_iter().map(AlignRequest::run).collect();
    info!(
        "Aligned {} requests in {} ms",
        results.len(),
        start_time.elapsed().as_millis()
    );
    results
}

/// Aligns many sequence pairs with one shared configuration.
pub fn align_pairs<A, B>(aligner: &Aligner, pairs: &[(A, B)]) -> Vec<AlignmentResult>
where
    A: AsRef<[u8]> + Sync,
    B: AsRef<[u8]> + Sync,
{
    let start_time = Instant::now();
    let results: Vec<AlignmentResult> = pairs
        .par_iter()
        .map(|(seq1, seq2)| aligner.align(seq1.as_ref(), seq2.as_ref()))
        .collect();
    info!(
        "Aligned {} pairs in {} ms",
        results.len(),
        start_time.elapsed().as_millis()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_align_batch_preserves_order() {
        let requests = vec![
            AlignRequest::new("GATTACA", "GCATGCU", 1, 1),
            AlignRequest::new("ABC", "", 2, 1),
            AlignRequest::new("", "", 1, 1),
            AlignRequest::new("A", "B", 1, 2),
        ];
        let results = align_batch(&requests);
        let scores: Vec<i64> = results.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![4, 6, 0, 2]);
        assert_eq!(results[3].aligned_seq1, b"-A");
        assert_eq!(results[3].aligned_seq2, b"B-");
    }

    #[test]
    fn test_align_batch_matches_sequential() {
        let requests: Vec<AlignRequest> = (0..32)
            .map(|k| AlignRequest::new("ACGTACGT".repeat(k % 4 + 1), "ACGTAGCT", 1 + (k as i32 % 3), 1))
            .collect();
        let sequential: Vec<AlignmentResult> = requests.iter().map(AlignRequest::run).collect();
        assert_eq!(align_batch(&requests), sequential);
    }

    #[test]
    fn test_align_pairs() {
        let aligner = Aligner::with_penalties(1, 1);
        let pairs = vec![
            (b"ACGTACGT".to_vec(), b"ACGTAGCT".to_vec()),
            (b"GGTTAACC".to_vec(), b"GGTTAACT".to_vec()),
        ];
        let results = align_pairs(&aligner, &pairs);
        assert_eq!(results[0].score, 2);
        assert_eq!(results[0].aligned_seq1, b"ACGTA-CGT");
        assert_eq!(results[0].aligned_seq2, b"ACGTAGC-T");
        assert_eq!(results[1].score, 1);
    }

    #[test]
    fn test_empty_batch() {
        assert!(align_batch(&[]).is_empty());
    }
}
