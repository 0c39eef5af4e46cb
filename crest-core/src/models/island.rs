use std::fmt::{self, Display};

///
/// A maximal contiguous region of a [`CoverageProfile`] where the depth
/// strictly exceeds the calling threshold. Islands on one chromosome are
/// non-overlapping and ordered by ascending start. Summary metrics (sum,
/// max, summit position) are computed separately and reported on
/// [`PeakSummary`].
///
/// [`CoverageProfile`]: crate::models::coverage::CoverageProfile
/// [`PeakSummary`]: crate::models::summary::PeakSummary
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct Island {
    pub chrom: String,
    pub start: u32,
    pub end: u32,
}

impl Island {
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }
}

impl Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.chrom, self.start, self.end)
    }
}
