use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use crest_peaks::pipeline::{FragmentLength, PeakCallConfig, call_peaks};
use crest_peaks::reading::read_aligned_reads_w_stdin;
use crest_peaks::summarize::filter_by_chrom;
use crest_peaks::writing::{write_peaks_json, write_peaks_tsv};

/// Matches items from CLAP args before running call_peaks
pub fn run_call(matches: &ArgMatches) -> Result<()> {
    let reads_path = matches
        .get_one::<String>("reads")
        .expect("reads path is required");

    let threshold = matches
        .get_one::<i32>("threshold")
        .expect("threshold is required");

    let fraglen = matches
        .get_one::<String>("fraglen")
        .expect("fraglen has a default");

    let max_shift = matches
        .get_one::<i32>("maxshift")
        .expect("maxshift has a default");

    let chrom = matches.get_one::<String>("chrom");

    let output = matches
        .get_one::<String>("output")
        .expect("output path is required");

    let output_type = matches
        .get_one::<String>("outputtype")
        .expect("output type has a default");

    let fragment_length = match fraglen.as_str() {
        "auto" => FragmentLength::Auto {
            max_shift: *max_shift,
        },
        value => FragmentLength::Fixed(
            value
                .parse()
                .with_context(|| format!("Invalid fragment length: {}", value))?,
        ),
    };

    let config = PeakCallConfig {
        threshold: *threshold,
        fragment_length,
    };

    let reads = read_aligned_reads_w_stdin(reads_path)?;
    let mut peaks = call_peaks(&reads, &config)?;
    if let Some(chrom) = chrom {
        peaks = filter_by_chrom(&peaks, chrom);
    }

    match output_type.as_str() {
        "json" => write_peaks_json(&peaks, Path::new(output))?,
        _ => write_peaks_tsv(&peaks, Path::new(output))?,
    }

    println!("Wrote {} peaks to {}", peaks.len(), output);

    Ok(())
}
