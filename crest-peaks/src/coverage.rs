use crest_core::models::{CoverageProfile, DepthRun, FragmentInterval};

/// Build the depth profile for one chromosome by a sweep-line over
/// fragment start and end events.
///
/// Each fragment contributes +1 at its start and -1 just past its end;
/// the depth at any position is the prefix sum of those deltas. Sorting
/// the events keeps construction O(n log n) in the number of fragments
/// regardless of how wide the covered span is. Overlapping fragments
/// stack additively with no cap on depth.
///
/// All fragments are assumed to belong to `chrom`; callers holding
/// several interval sets for one chromosome must pass their union here
/// rather than building separate profiles.
pub fn accumulate(chrom: &str, fragments: &[FragmentInterval]) -> CoverageProfile {
    if fragments.is_empty() {
        return CoverageProfile {
            chrom: chrom.to_string(),
            runs: Vec::new(),
        };
    }

    // event positions are widened so a fragment ending at u32::MAX still
    // gets its closing event one past the end
    let mut events: Vec<(u64, i64)> = Vec::with_capacity(fragments.len() * 2);
    for fragment in fragments {
        events.push((fragment.start as u64, 1));
        events.push((fragment.end as u64 + 1, -1));
    }
    events.sort_unstable();

    let mut runs: Vec<DepthRun> = Vec::new();
    let mut depth: i64 = 0;
    let mut run_start = 0u64;

    let mut i = 0;
    while i < events.len() {
        let position = events[i].0;
        let mut delta = 0i64;
        while i < events.len() && events[i].0 == position {
            delta += events[i].1;
            i += 1;
        }
        // runs are maximal: a run only closes where the depth changes
        if delta == 0 {
            continue;
        }
        if depth > 0 {
            runs.push(DepthRun {
                start: run_start as u32,
                end: (position - 1) as u32,
                depth: depth as u32,
            });
        }
        depth += delta;
        run_start = position;
    }
    debug_assert_eq!(depth, 0, "every +1 event must be balanced by a -1");

    CoverageProfile {
        chrom: chrom.to_string(),
        runs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crest_core::models::Strand;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn fragment(start: u32, end: u32) -> FragmentInterval {
        FragmentInterval {
            chrom: "chr1".to_string(),
            start,
            end,
            strand: Strand::Forward,
        }
    }

    fn runs(profile: &CoverageProfile) -> Vec<(u32, u32, u32)> {
        profile
            .runs
            .iter()
            .map(|r| (r.start, r.end, r.depth))
            .collect()
    }

    #[rstest]
    fn test_empty_input_yields_empty_profile() {
        let profile = accumulate("chr1", &[]);
        assert!(profile.is_empty());
        assert_eq!(profile.span(), None);
    }

    #[rstest]
    fn test_single_fragment() {
        let profile = accumulate("chr1", &[fragment(10, 19)]);
        assert_eq!(runs(&profile), vec![(10, 19, 1)]);
    }

    #[rstest]
    fn test_overlapping_fragments_stack() {
        // the worked three-read example: [10,19], [12,21], [15,24]
        let profile = accumulate("chr1", &[fragment(10, 19), fragment(12, 21), fragment(15, 24)]);
        assert_eq!(
            runs(&profile),
            vec![
                (10, 11, 1),
                (12, 14, 2),
                (15, 19, 3),
                (20, 21, 2),
                (22, 24, 1),
            ]
        );
        assert_eq!(profile.span(), Some((10, 24)));
        assert_eq!(profile.sum_over(10, 24), 28);
    }

    #[rstest]
    fn test_disjoint_fragments_leave_a_gap() {
        let profile = accumulate("chr1", &[fragment(10, 14), fragment(30, 34)]);
        assert_eq!(runs(&profile), vec![(10, 14, 1), (30, 34, 1)]);
        assert_eq!(profile.depth_at(20), 0);
    }

    #[rstest]
    fn test_adjacent_equal_depth_fragments_merge_into_one_run() {
        // [10,14] and [15,19] abut with no depth change at the join
        let profile = accumulate("chr1", &[fragment(10, 14), fragment(15, 19)]);
        assert_eq!(runs(&profile), vec![(10, 19, 1)]);
    }

    #[rstest]
    fn test_identical_fragments_double_depth() {
        let profile = accumulate("chr1", &[fragment(10, 19), fragment(10, 19)]);
        assert_eq!(runs(&profile), vec![(10, 19, 2)]);
    }

    #[rstest]
    fn test_fragment_ending_at_coordinate_limit() {
        let profile = accumulate("chr1", &[fragment(u32::MAX - 9, u32::MAX)]);
        assert_eq!(runs(&profile), vec![(u32::MAX - 9, u32::MAX, 1)]);
        assert_eq!(profile.depth_at(u32::MAX), 1);
    }

    #[rstest]
    fn test_input_order_does_not_matter() {
        let forward = accumulate("chr1", &[fragment(10, 19), fragment(15, 24)]);
        let reversed = accumulate("chr1", &[fragment(15, 24), fragment(10, 19)]);
        assert_eq!(runs(&forward), runs(&reversed));
    }
}
