/// A maximal run of consecutive positions sharing one depth value,
/// 1-based and fully closed.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DepthRun {
    pub start: u32,
    pub end: u32,
    pub depth: u32,
}

impl DepthRun {
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }
}

///
/// Per-chromosome depth-of-coverage profile, stored as bedGraph-style
/// runs of constant depth.
///
/// Runs are sorted by start, non-overlapping, and only cover positions
/// with depth > 0; positions between runs have implicit depth zero. Runs
/// are maximal: two adjacent runs never share the same depth. The profile
/// spans exactly the range from the smallest fragment start to the
/// largest fragment end it was built from.
///
#[derive(Debug, Clone, Default)]
pub struct CoverageProfile {
    pub chrom: String,
    pub runs: Vec<DepthRun>,
}

impl CoverageProfile {
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// The covered span as `(first, last)` position, or `None` for an
    /// empty profile.
    pub fn span(&self) -> Option<(u32, u32)> {
        match (self.runs.first(), self.runs.last()) {
            (Some(first), Some(last)) => Some((first.start, last.end)),
            _ => None,
        }
    }

    /// Depth at a single position. Positions outside every run, including
    /// anything outside the covered span, report zero.
    pub fn depth_at(&self, pos: u32) -> u32 {
        let idx = self.runs.partition_point(|run| run.start <= pos);
        if idx == 0 {
            return 0;
        }
        let run = &self.runs[idx - 1];
        if run.end >= pos { run.depth } else { 0 }
    }

    /// Total depth over the closed range `[start, end]`.
    pub fn sum_over(&self, start: u32, end: u32) -> u64 {
        self.runs
            .iter()
            .filter(|run| run.start <= end && run.end >= start)
            .map(|run| {
                let lo = run.start.max(start);
                let hi = run.end.min(end);
                run.depth as u64 * (hi - lo + 1) as u64
            })
            .sum()
    }

    /// Maximum depth over the closed range `[start, end]` together with
    /// the first position attaining it, scanning ascending. `None` when
    /// no run overlaps the range.
    pub fn max_over(&self, start: u32, end: u32) -> Option<(u32, u32)> {
        let mut best: Option<(u32, u32)> = None;
        for run in self
            .runs
            .iter()
            .filter(|run| run.start <= end && run.end >= start)
        {
            let first_pos = run.start.max(start);
            match best {
                Some((depth, _)) if run.depth <= depth => {}
                _ => best = Some((run.depth, first_pos)),
            }
        }
        best
    }
}
