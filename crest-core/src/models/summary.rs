use std::fmt::{self, Display};

use serde::Serialize;

///
/// A ranked candidate binding-site interval: one island annotated with
/// its summary metrics and its position in the genome-wide ranking.
///
/// `sum` is the total depth over the closed range, `max` the highest
/// depth, and `max_position` the first position attaining that depth in
/// ascending order. Ranks are 1-based.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize)]
pub struct PeakSummary {
    pub chrom: String,
    pub start: u32,
    pub end: u32,
    pub sum: u64,
    pub max: u32,
    pub max_position: u32,
    pub rank: usize,
}

impl PeakSummary {
    ///
    /// Get the tab-separated report row for this peak
    ///
    pub fn as_row(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chrom, self.start, self.end, self.sum, self.max, self.max_position, self.rank,
        )
    }
}

impl Display for PeakSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_row())
    }
}
