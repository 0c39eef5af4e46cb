use crest_core::errors::PeakCallError;
use crest_core::models::{CoverageProfile, Island};

/// Scan a coverage profile for maximal contiguous regions where the depth
/// strictly exceeds `threshold`.
///
/// The scan walks the profile's runs in ascending order holding an
/// open/closed state: a region opens at the first position with
/// depth > T and closes when the depth falls back to <= T, a zero-depth
/// gap is reached, or the profile ends. Islands come out non-overlapping
/// and sorted by ascending start, and the scan never produces two islands
/// separated only by positions with depth > T.
pub fn detect_islands(
    profile: &CoverageProfile,
    threshold: i32,
) -> Result<Vec<Island>, PeakCallError> {
    if threshold < 0 {
        return Err(PeakCallError::InvalidThreshold(threshold));
    }
    let threshold = threshold as u32;

    let mut islands: Vec<Island> = Vec::new();
    // bounds of the island currently being grown, if any
    let mut open: Option<(u32, u32)> = None;

    for run in &profile.runs {
        if run.depth > threshold {
            open = match open {
                Some((start, end)) if run.start == end + 1 => Some((start, run.end)),
                // a zero-depth gap separates the runs, so the island
                // closes even though both sides clear the threshold
                Some((start, end)) => {
                    islands.push(Island {
                        chrom: profile.chrom.clone(),
                        start,
                        end,
                    });
                    Some((run.start, run.end))
                }
                None => Some((run.start, run.end)),
            };
        } else if let Some((start, end)) = open.take() {
            islands.push(Island {
                chrom: profile.chrom.clone(),
                start,
                end,
            });
        }
    }

    // profile end forces closure if still open
    if let Some((start, end)) = open {
        islands.push(Island {
            chrom: profile.chrom.clone(),
            start,
            end,
        });
    }

    Ok(islands)
}
