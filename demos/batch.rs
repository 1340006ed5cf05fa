use nw_aligner::{align_batch, AlignRequest, AlignResponse};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let requests = vec![
        AlignRequest::new("ACGTACGT", "ACGTAGCT", 1, 1),
        AlignRequest::new("GGTTAACC", "GGTTAACT", 1, 1),
        AlignRequest::new("GATTACA", "GCATGCU", 2, 3),
    ];

    for (i, result) in align_batch(&requests).into_iter().enumerate() {
        println!("Alignment {}: {}", i, AlignResponse::from(result).to_json()?);
    }

    Ok(())
}
