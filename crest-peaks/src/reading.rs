use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crest_core::models::{AlignedRead, Strand};
use crest_core::utils::{get_dynamic_reader, get_dynamic_reader_w_stdin, is_header_line};

/// Load aligned reads from a BED6-like file, plain or gzipped.
///
/// Columns: chrom, start, end, name, score, strand; name and score are
/// carried by the format but ignored here. BED coordinates are 0-based
/// and half-open and are shifted to the 1-based, fully-closed convention
/// used in-memory. Blank lines, comments, and browser/track headers are
/// skipped.
pub fn read_aligned_reads(path: &Path) -> Result<Vec<AlignedRead>> {
    let reader = get_dynamic_reader(path)?;
    collect_reads(reader, &path.display().to_string())
}

/// Load aligned reads from a BED6-like file path, or from stdin when
/// `path_str` is `-`. Same format handling as [`read_aligned_reads`].
pub fn read_aligned_reads_w_stdin(path_str: &str) -> Result<Vec<AlignedRead>> {
    let reader = get_dynamic_reader_w_stdin(path_str)?;
    collect_reads(reader, path_str)
}

fn collect_reads<R: BufRead>(reader: R, source: &str) -> Result<Vec<AlignedRead>> {
    let mut reads = Vec::new();
    for (line_number, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line from {}", source))?;
        let trimmed = line.trim();
        if is_header_line(trimmed) {
            continue;
        }
        let read = parse_read_line(trimmed)
            .with_context(|| format!("{}:{}: malformed read record", source, line_number + 1))?;
        reads.push(read);
    }

    Ok(reads)
}

/// Parse one BED6 line into an [`AlignedRead`], shifting 0-based
/// half-open coordinates to 1-based closed.
pub fn parse_read_line(line: &str) -> Result<AlignedRead> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < 6 {
        bail!(
            "expected at least 6 tab-separated fields, got {}",
            fields.len()
        );
    }

    let chrom = fields[0].to_string();
    let start: u32 = fields[1]
        .parse()
        .with_context(|| format!("Failed to parse start position: {}", fields[1]))?;
    let end: u32 = fields[2]
        .parse()
        .with_context(|| format!("Failed to parse end position: {}", fields[2]))?;
    if end <= start {
        bail!("end must be greater than start, got {}-{}", start, end);
    }
    let strand: Strand = fields[5]
        .parse()
        .with_context(|| format!("Failed to parse strand: {}", fields[5]))?;

    Ok(AlignedRead {
        chrom,
        start: start + 1,
        end,
        strand,
    })
}
