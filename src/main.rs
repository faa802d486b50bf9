use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;

use squares::Inputs;

/// Compute the weighted average of squares from a file of numbers.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Text file containing numbers separated by whitespace.
    #[arg(value_name = "FILE_NUMBERS")]
    file_numbers: PathBuf,

    /// Optional text file containing weights separated by whitespace.
    #[arg(long, value_name = "FILE_WEIGHTS")]
    weights: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let inputs = Inputs::from_files(&args.file_numbers, args.weights.as_deref())?;
    let result = inputs.average_of_squares()?;
    info!("average of squares over {} values: {result}", inputs.len());

    println!("{result:?}");
    Ok(())
}
