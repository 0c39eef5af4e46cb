use crest_core::models::{CoverageProfile, Island, PeakSummary};

/// Compute the summary metrics for each island: total depth, maximum
/// depth, and the first position attaining that maximum.
///
/// Inputs are not mutated. The returned summaries carry rank 0 until
/// [`rank_peaks`] assigns the final ordering, so that islands from
/// several chromosomes can be ranked together.
pub fn summarize(islands: &[Island], profile: &CoverageProfile) -> Vec<PeakSummary> {
    islands
        .iter()
        .map(|island| {
            let sum = profile.sum_over(island.start, island.end);
            // every island position exceeds a non-negative threshold, so
            // a run always overlaps the range
            let (max, max_position) = profile
                .max_over(island.start, island.end)
                .unwrap_or((0, island.start));
            PeakSummary {
                chrom: island.chrom.clone(),
                start: island.start,
                end: island.end,
                sum,
                max,
                max_position,
                rank: 0,
            }
        })
        .collect()
}

/// Order peaks by descending max depth, breaking ties by descending sum
/// and then ascending chromosome and start, and assign 1-based ranks.
///
/// Ranking is a pure function of its inputs: re-ranking an already ranked
/// set yields the same output.
pub fn rank_peaks(mut peaks: Vec<PeakSummary>) -> Vec<PeakSummary> {
    peaks.sort_by(|a, b| {
        b.max
            .cmp(&a.max)
            .then_with(|| b.sum.cmp(&a.sum))
            .then_with(|| a.chrom.cmp(&b.chrom))
            .then_with(|| a.start.cmp(&b.start))
    });
    for (index, peak) in peaks.iter_mut().enumerate() {
        peak.rank = index + 1;
    }
    peaks
}

/// Restrict ranked peaks to one chromosome, preserving rank order.
pub fn filter_by_chrom(peaks: &[PeakSummary], chrom: &str) -> Vec<PeakSummary> {
    peaks
        .iter()
        .filter(|peak| peak.chrom == chrom)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::accumulate;
    use crate::islands::detect_islands;
    use crest_core::models::{FragmentInterval, Strand};
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn fragment(chrom: &str, start: u32, end: u32) -> FragmentInterval {
        FragmentInterval {
            chrom: chrom.to_string(),
            start,
            end,
            strand: Strand::Forward,
        }
    }

    #[fixture]
    fn worked_example() -> CoverageProfile {
        // three forward reads at 10, 12, 15 extended to length 10
        accumulate(
            "chr1",
            &[
                fragment("chr1", 10, 19),
                fragment("chr1", 12, 21),
                fragment("chr1", 15, 24),
            ],
        )
    }

    #[rstest]
    fn test_worked_example_metrics(worked_example: CoverageProfile) {
        let islands = detect_islands(&worked_example, 0).unwrap();
        let peaks = summarize(&islands, &worked_example);

        assert_eq!(peaks.len(), 1);
        assert_eq!(peaks[0].start, 10);
        assert_eq!(peaks[0].end, 24);
        assert_eq!(peaks[0].sum, 28);
        assert_eq!(peaks[0].max, 3);
        assert_eq!(peaks[0].max_position, 15);
    }

    #[rstest]
    fn test_sum_matches_positionwise_depths(worked_example: CoverageProfile) {
        let islands = detect_islands(&worked_example, 0).unwrap();
        let peaks = summarize(&islands, &worked_example);
        let by_position: u64 = (peaks[0].start..=peaks[0].end)
            .map(|pos| worked_example.depth_at(pos) as u64)
            .sum();
        assert_eq!(peaks[0].sum, by_position);
    }

    #[rstest]
    fn test_ranking_orders_by_max_then_sum_then_position() {
        let peak = |chrom: &str, start: u32, sum: u64, max: u32| PeakSummary {
            chrom: chrom.to_string(),
            start,
            end: start + 10,
            sum,
            max,
            max_position: start,
            rank: 0,
        };
        let peaks = vec![
            peak("chr2", 500, 40, 5),
            peak("chr1", 100, 90, 7),
            peak("chr1", 300, 60, 5),
            peak("chr1", 200, 60, 5),
        ];

        let ranked = rank_peaks(peaks);
        let order: Vec<(u32, usize)> = ranked.iter().map(|p| (p.start, p.rank)).collect();
        // max 7 first; among max 5, higher sum wins, then ascending start
        assert_eq!(order, vec![(100, 1), (200, 2), (300, 3), (500, 4)]);
    }

    #[rstest]
    fn test_ranking_is_idempotent() {
        let peaks = vec![
            PeakSummary {
                chrom: "chr1".to_string(),
                start: 100,
                end: 120,
                sum: 50,
                max: 4,
                max_position: 105,
                rank: 0,
            },
            PeakSummary {
                chrom: "chr1".to_string(),
                start: 200,
                end: 220,
                sum: 80,
                max: 6,
                max_position: 210,
                rank: 0,
            },
        ];
        let once = rank_peaks(peaks);
        let twice = rank_peaks(once.clone());
        assert_eq!(once, twice);
    }

    #[rstest]
    fn test_filter_by_chrom_preserves_rank_order() {
        let peak = |chrom: &str, start: u32, max: u32| PeakSummary {
            chrom: chrom.to_string(),
            start,
            end: start + 10,
            sum: max as u64 * 10,
            max,
            max_position: start,
            rank: 0,
        };
        let ranked = rank_peaks(vec![
            peak("chr1", 100, 3),
            peak("chr2", 100, 9),
            peak("chr1", 500, 7),
        ]);

        let chr1_only = filter_by_chrom(&ranked, "chr1");
        assert_eq!(chr1_only.len(), 2);
        assert!(chr1_only[0].rank < chr1_only[1].rank);
        assert!(chr1_only.iter().all(|p| p.chrom == "chr1"));
    }

    #[rstest]
    fn test_empty_inputs_yield_empty_outputs(worked_example: CoverageProfile) {
        assert_eq!(summarize(&[], &worked_example), vec![]);
        assert_eq!(rank_peaks(vec![]), vec![]);
    }
}
