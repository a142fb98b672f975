use crate::model::RankedAverage;
use anyhow::Context;
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::{File, create_dir_all};
use std::path::Path;

pub const REPORT_HEADER: [&str; 2] = ["country", "average_gdp"];

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    country: &'a str,
    average_gdp: String,
}

/// Write the ranking as `country,average_gdp` CSV, averages to two decimals.
///
/// The header is always written, so an empty ranking yields a header-only file.
pub fn write_report(ranked: &[RankedAverage], path: impl AsRef<Path>) -> anyhow::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create report {}", path.display()))?;

    // Header written by hand: serde-driven headers only appear with at least one row.
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(f);
    wtr.write_record(REPORT_HEADER)?;
    for (i, row) in ranked.iter().enumerate() {
        wtr.serialize(ReportRow {
            country: &row.country,
            average_gdp: format!("{:.2}", row.average),
        })
        .with_context(|| format!("serialize report row #{}", i + 1))?;
    }
    wtr.flush()
        .with_context(|| format!("flush report {}", path.display()))?;
    Ok(())
}
