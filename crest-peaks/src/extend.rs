use crest_core::errors::PeakCallError;
use crest_core::models::{AlignedRead, FragmentInterval, Strand};

/// Resize each read to the inferred fragment length, preserving the 5'
/// anchor appropriate to its strand.
///
/// A forward read starting at `s` becomes `[s, s + L - 1]`; a reverse
/// read ending at `e` becomes `[e - L + 1, e]`, clamped at position 1
/// when the extension would run off the left edge of the chromosome.
/// Rightward extension saturates at `u32::MAX` rather than wrapping.
/// Output order follows input order but carries no meaning downstream.
pub fn extend_reads(
    reads: &[AlignedRead],
    fragment_length: i32,
) -> Result<Vec<FragmentInterval>, PeakCallError> {
    if fragment_length <= 0 {
        return Err(PeakCallError::InvalidFragmentLength(fragment_length));
    }
    let length = fragment_length as u32;

    let mut fragments = Vec::with_capacity(reads.len());
    for read in reads {
        let (start, end) = match read.strand {
            Strand::Forward => (read.start, read.start.saturating_add(length - 1)),
            Strand::Reverse => {
                let start = read.end.saturating_sub(length - 1).max(1);
                (start, read.end)
            }
        };
        fragments.push(FragmentInterval {
            chrom: read.chrom.clone(),
            start,
            end,
            strand: read.strand,
        });
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    fn read(start: u32, end: u32, strand: Strand) -> AlignedRead {
        AlignedRead {
            chrom: "chr1".to_string(),
            start,
            end,
            strand,
        }
    }

    #[rstest]
    fn test_forward_read_extends_rightward() {
        let reads = vec![read(10, 14, Strand::Forward)];
        let fragments = extend_reads(&reads, 10).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].start, 10);
        assert_eq!(fragments[0].end, 19);
        assert_eq!(fragments[0].width(), 10);
    }

    #[rstest]
    fn test_reverse_read_extends_leftward() {
        let reads = vec![read(50, 54, Strand::Reverse)];
        let fragments = extend_reads(&reads, 10).unwrap();
        assert_eq!(fragments[0].start, 45);
        assert_eq!(fragments[0].end, 54);
        assert_eq!(fragments[0].width(), 10);
    }

    #[rstest]
    fn test_reverse_read_clamps_at_chromosome_start() {
        let reads = vec![read(3, 7, Strand::Reverse)];
        let fragments = extend_reads(&reads, 20).unwrap();
        assert_eq!(fragments[0].start, 1);
        assert_eq!(fragments[0].end, 7);
    }

    #[rstest]
    fn test_forward_extension_saturates_at_coordinate_limit() {
        let reads = vec![read(u32::MAX - 5, u32::MAX - 1, Strand::Forward)];
        let fragments = extend_reads(&reads, 100).unwrap();
        assert_eq!(fragments[0].start, u32::MAX - 5);
        assert_eq!(fragments[0].end, u32::MAX);
    }

    #[rstest]
    #[case(0)]
    #[case(-180)]
    fn test_nonpositive_fragment_length_rejected(#[case] length: i32) {
        let reads = vec![read(10, 14, Strand::Forward)];
        let result = extend_reads(&reads, length);
        assert!(matches!(
            result,
            Err(PeakCallError::InvalidFragmentLength(l)) if l == length
        ));
    }

    #[rstest]
    fn test_output_order_follows_input_order() {
        let reads = vec![
            read(100, 104, Strand::Forward),
            read(10, 14, Strand::Forward),
        ];
        let fragments = extend_reads(&reads, 5).unwrap();
        assert_eq!(fragments[0].start, 100);
        assert_eq!(fragments[1].start, 10);
    }

    #[rstest]
    fn test_empty_input_yields_empty_output() {
        let fragments = extend_reads(&[], 180).unwrap();
        assert!(fragments.is_empty());
    }
}
