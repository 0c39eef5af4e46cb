use fxhash::FxHashMap;

use crest_core::errors::PeakCallError;
use crest_core::models::{AlignedRead, Strand};

/// Estimate the fragment length from the strand shift of read 5' ends.
///
/// Fragments are sequenced from both ends, so forward-strand starts pile
/// up one fragment length upstream of reverse-strand ends around a
/// binding site. The estimate is `d + 1` where `d` in `[1, max_shift]`
/// maximizes the cross-correlation between forward 5' counts at `p` and
/// reverse 5' counts at `p + d`, summed over all chromosomes. Ties
/// resolve to the smallest shift.
///
/// Fails when `max_shift` is non-positive, when either strand carries no
/// reads, or when no shift in the window produces any correlation at all.
pub fn estimate_fragment_length(
    reads: &[AlignedRead],
    max_shift: i32,
) -> Result<i32, PeakCallError> {
    if max_shift <= 0 {
        return Err(PeakCallError::FragmentLengthEstimation(format!(
            "shift window must be positive, got {}",
            max_shift
        )));
    }

    // sparse per-chromosome 5' end counts, keyed by strand
    let mut forward: FxHashMap<&str, FxHashMap<u32, u32>> = FxHashMap::default();
    let mut reverse: FxHashMap<&str, FxHashMap<u32, u32>> = FxHashMap::default();
    for read in reads {
        let counts = match read.strand {
            Strand::Forward => &mut forward,
            Strand::Reverse => &mut reverse,
        };
        *counts
            .entry(read.chrom.as_str())
            .or_default()
            .entry(read.five_prime())
            .or_insert(0) += 1;
    }

    if forward.is_empty() || reverse.is_empty() {
        return Err(PeakCallError::FragmentLengthEstimation(
            "reads on both strands are required".to_string(),
        ));
    }

    let mut best_shift = 0;
    let mut best_score: u64 = 0;
    for shift in 1..=max_shift as u32 {
        let mut score: u64 = 0;
        for (chrom, fwd_counts) in &forward {
            let Some(rev_counts) = reverse.get(chrom) else {
                continue;
            };
            for (&pos, &fwd_count) in fwd_counts {
                // a 5' end near u32::MAX has no partner past the coordinate limit
                let Some(shifted) = pos.checked_add(shift) else {
                    continue;
                };
                if let Some(&rev_count) = rev_counts.get(&shifted) {
                    score += fwd_count as u64 * rev_count as u64;
                }
            }
        }
        if score > best_score {
            best_score = score;
            best_shift = shift;
        }
    }

    if best_score == 0 {
        return Err(PeakCallError::FragmentLengthEstimation(format!(
            "no forward/reverse correlation within {} bases",
            max_shift
        )));
    }

    Ok(best_shift as i32 + 1)
}
