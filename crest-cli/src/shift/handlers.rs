use anyhow::Result;
use clap::ArgMatches;

use crest_peaks::reading::read_aligned_reads_w_stdin;
use crest_peaks::shift::estimate_fragment_length;

/// Matches items from CLAP args before running the fragment length estimator
pub fn run_shift(matches: &ArgMatches) -> Result<()> {
    let reads_path = matches
        .get_one::<String>("reads")
        .expect("reads path is required");

    let max_shift = matches
        .get_one::<i32>("maxshift")
        .expect("maxshift has a default");

    let reads = read_aligned_reads_w_stdin(reads_path)?;
    let estimate = estimate_fragment_length(&reads, *max_shift)?;

    println!("{}", estimate);

    Ok(())
}
