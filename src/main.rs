use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use nw_aligner::{align_batch, AlignRequest, AlignResponse, Aligner, AlignerConfig, AlignmentResult};

#[derive(Parser)]
#[command(name = "nw-align")]
#[command(about = "Global pairwise alignment with linear gap and mismatch penalties")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Align two sequences
    Pair {
        seq1: String,
        seq2: String,

        /// Cost of aligning a symbol against a gap
        #[arg(short, long, allow_hyphen_values = true)]
        gap: Option<i32>,

        /// Cost of aligning two different symbols
        #[arg(short, long, allow_hyphen_values = true)]
        mismatch: Option<i32>,

        /// JSON config file with penalties and gap symbol
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Print the filled score matrix
        #[arg(long)]
        matrix: bool,
    },

    /// Align every request of a JSON Lines file in parallel
    Batch {
        /// One {"seq1", "seq2", "gapPenalty", "mismatchPenalty"} object per line
        input: PathBuf,
    },

    /// Positional form: SEQ1 SEQ2 GAP_PENALTY MISMATCH_PENALTY, JSON output
    Raw {
        #[arg(allow_hyphen_values = true, num_args = 0..)]
        args: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Pair {
            seq1,
            seq2,
            gap,
            mismatch,
            config,
            json,
            matrix,
        } => {
            let mut config = match config {
                Some(path) => AlignerConfig::from_json_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => AlignerConfig::default(),
            };
            if let Some(gap) = gap {
                config = config.with_gap_penalty(gap);
            }
            if let Some(mismatch) = mismatch {
                config = config.with_mismatch_penalty(mismatch);
            }

            let aligner = Aligner::new(config);
            if matrix {
                print_matrix(&aligner, seq1.as_bytes(), seq2.as_bytes());
            }
            let result = aligner.align(seq1.as_bytes(), seq2.as_bytes());
            if json {
                println!("{}", AlignResponse::from(&result).to_json()?);
            } else {
                print_alignment(&result);
            }
        }

        Commands::Batch { input } => {
            let file = File::open(&input)
                .with_context(|| format!("Failed to open {}", input.display()))?;
            let mut requests = Vec::new();
            for (line_no, line) in BufReader::new(file).lines().enumerate() {
                let line = line?;
                if line.trim().is_empty() {
                    continue;
                }
                let request = AlignRequest::from_json(&line)
                    .with_context(|| format!("{}:{}: invalid request", input.display(), line_no + 1))?;
                requests.push(request);
            }
            info!("Read {} requests from {}", requests.len(), input.display());

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for result in align_batch(&requests) {
                writeln!(out, "{}", AlignResponse::from(result).to_json()?)?;
            }
            out.flush()?;
        }

        Commands::Raw { args } => {
            let request = AlignRequest::from_args(&args)?;
            println!("{}", AlignResponse::from(request.run()).to_json()?);
        }
    }

    Ok(())
}

fn print_alignment(result: &AlignmentResult) {
    let stats = result.stats();
    println!("Score: {}", result.score);
    println!("{}", result.aligned_seq1_str());
    println!("{}", result.aligned_seq2_str());
    println!(
        "Matches: {}, mismatches: {}, gaps: {}, identity: {:.1}%",
        stats.matches,
        stats.mismatches,
        stats.gaps,
        result.identity() * 100.0
    );
}

fn print_matrix(aligner: &Aligner, seq1: &[u8], seq2: &[u8]) {
    let table = aligner.fill(seq1, seq2);
    let header: Vec<String> = std::iter::once("-".to_string())
        .chain(seq2.iter().map(|&b| (b as char).to_string()))
        .collect();
    println!("    {}", header.iter().map(|h| format!("{:>4}", h)).collect::<String>());
    for (i, row) in table.values().iter().enumerate() {
        let label = if i == 0 { '-' } else { seq1[i - 1] as char };
        let cells: String = row.iter().map(|v| format!("{:>4}", v)).collect();
        println!("{:>4}{}", label, cells);
    }
    println!();
}
