use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crest_core::models::PeakSummary;

pub const TSV_HEADER: &str = "chrom\tstart\tend\tsum\tmax\tmax_position\trank";

/// Write ranked peaks as a tab-separated table with a header row.
pub fn write_peaks_tsv(peaks: &[PeakSummary], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "{}", TSV_HEADER)?;
    for peak in peaks {
        writeln!(writer, "{}", peak.as_row())?;
    }

    Ok(())
}

/// Write ranked peaks as a JSON array.
pub fn write_peaks_json(peaks: &[PeakSummary], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create output file: {:?}", path))?;
    serde_json::to_writer_pretty(BufWriter::new(file), peaks)
        .with_context(|| format!("Failed to serialize peaks to {:?}", path))?;

    Ok(())
}
