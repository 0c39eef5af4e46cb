use std::fmt::{self, Display};

use crate::models::read::Strand;

///
/// An aligned read resized to the inferred fragment length, anchored at
/// its 5' end. Same 1-based, fully-closed coordinates as [`AlignedRead`].
///
/// [`AlignedRead`]: crate::models::read::AlignedRead
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct FragmentInterval {
    pub chrom: String,
    pub start: u32,
    pub end: u32,
    pub strand: Strand,
}

impl FragmentInterval {
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }
}

impl Display for FragmentInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.chrom, self.start, self.end, self.strand
        )
    }
}
