use fxhash::FxHashMap;
use indicatif::ProgressBar;
use log::{info, warn};
use rayon::prelude::*;

use crest_core::errors::PeakCallError;
use crest_core::models::{AlignedRead, PeakSummary};

use crate::coverage::accumulate;
use crate::extend::extend_reads;
use crate::islands::detect_islands;
use crate::shift::estimate_fragment_length;
use crate::summarize::{rank_peaks, summarize};

/// How the pipeline obtains the fragment length used for extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentLength {
    /// Estimate from the strand shift of read 5' ends, searching shifts
    /// up to `max_shift` bases.
    Auto { max_shift: i32 },
    /// Use a caller-supplied length.
    Fixed(i32),
}

/// Caller-facing configuration for one peak-calling run. Both values come
/// from the caller; nothing here is hard-coded.
#[derive(Debug, Clone, Copy)]
pub struct PeakCallConfig {
    /// Depth must strictly exceed this value for a position to join an
    /// island.
    pub threshold: i32,
    pub fragment_length: FragmentLength,
}

/// Run the full read-to-peak pipeline.
///
/// Parameters are validated before any computation begins. Reads are
/// sharded by chromosome and each shard runs the
/// extend/accumulate/detect/summarize chain independently on the rayon
/// pool; no state is shared between shards. Summaries are ranked
/// genome-wide at the end. An empty read set is advisory only: it logs a
/// warning and yields an empty peak set rather than an error.
pub fn call_peaks(
    reads: &[AlignedRead],
    config: &PeakCallConfig,
) -> Result<Vec<PeakSummary>, PeakCallError> {
    if config.threshold < 0 {
        return Err(PeakCallError::InvalidThreshold(config.threshold));
    }
    if let FragmentLength::Fixed(length) = config.fragment_length {
        if length <= 0 {
            return Err(PeakCallError::InvalidFragmentLength(length));
        }
    }

    if reads.is_empty() {
        warn!("no aligned reads supplied; producing an empty peak set");
        return Ok(Vec::new());
    }

    let fragment_length = match config.fragment_length {
        FragmentLength::Fixed(length) => length,
        FragmentLength::Auto { max_shift } => {
            let estimate = estimate_fragment_length(reads, max_shift)?;
            info!("estimated fragment length: {} bp", estimate);
            estimate
        }
    };

    let mut by_chrom: FxHashMap<&str, Vec<AlignedRead>> = FxHashMap::default();
    for read in reads {
        by_chrom
            .entry(read.chrom.as_str())
            .or_default()
            .push(read.clone());
    }
    let mut shards: Vec<(&str, Vec<AlignedRead>)> = by_chrom.into_iter().collect();
    shards.sort_by(|a, b| a.0.cmp(b.0));

    let bar = ProgressBar::new(shards.len() as u64);
    let per_chrom: Result<Vec<Vec<PeakSummary>>, PeakCallError> = shards
        .par_iter()
        .map(|(chrom, chrom_reads)| {
            bar.inc(1);
            let fragments = extend_reads(chrom_reads, fragment_length)?;
            let profile = accumulate(chrom, &fragments);
            let islands = detect_islands(&profile, config.threshold)?;
            Ok(summarize(&islands, &profile))
        })
        .collect();
    bar.finish();

    let peaks: Vec<PeakSummary> = per_chrom?.into_iter().flatten().collect();
    info!(
        "called {} candidate peaks across {} chromosomes",
        peaks.len(),
        shards.len()
    );

    Ok(rank_peaks(peaks))
}
