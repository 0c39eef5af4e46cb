use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::PeakCallError;

/// Strand of an aligned read.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Strand {
    Forward,
    Reverse,
}

impl FromStr for Strand {
    type Err = PeakCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            _ => Err(PeakCallError::InvalidStrand(s.to_string())),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

///
/// A single aligned sequencing read, as reported by an external aligner.
///
/// Coordinates are 1-based and fully closed: the read occupies every
/// position in `[start, end]`. BED input (0-based, half-open) is shifted
/// on load.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone)]
pub struct AlignedRead {
    pub chrom: String,
    pub start: u32,
    pub end: u32,
    pub strand: Strand,
}

impl AlignedRead {
    ///
    /// Original alignment length of the read
    ///
    pub fn width(&self) -> u32 {
        self.end - self.start + 1
    }

    /// The 5' anchor of the read: its start on the forward strand, its end
    /// on the reverse strand.
    pub fn five_prime(&self) -> u32 {
        match self.strand {
            Strand::Forward => self.start,
            Strand::Reverse => self.end,
        }
    }
}

impl Display for AlignedRead {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.chrom, self.start, self.end, self.strand
        )
    }
}
