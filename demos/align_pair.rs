use nw_aligner::{Aligner, AlignerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = AlignerConfig::new()
        .with_gap_penalty(2)
        .with_mismatch_penalty(1)
        .with_gap_symbol('-')?;
    let aligner = Aligner::new(config);

    let seq1 = b"PALETTE";
    let seq2 = b"PALATE";

    for row in aligner.fill(seq1, seq2).values() {
        println!("{:?}", row);
    }

    let result = aligner.align(seq1, seq2);
    println!("Score: {}", result.score);
    println!("Aligned sequence 1: {}", result.aligned_seq1_str());
    println!("Aligned sequence 2: {}", result.aligned_seq2_str());
    println!("Operations: {:?}", result.operations);

    Ok(())
}
