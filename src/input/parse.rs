use crate::input::{ColumnLayout, CountryYearMap, GdpRecord};
use anyhow::Context;
use csv::{ReaderBuilder, StringRecord};
use std::borrow::Cow;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Read every input file, in order, into a single country/year map.
///
/// Later files overwrite earlier values for the same (country, year).
/// Files without a header or without the required columns are skipped, as are
/// rows too short to cover those columns. A missing file or a non-integer
/// year/gdp value aborts the whole read.
pub fn read_files<P: AsRef<Path>>(paths: &[P]) -> anyhow::Result<CountryYearMap> {
    let mut out = CountryYearMap::new();
    for path in paths {
        read_file(path.as_ref(), &mut out)?;
    }
    Ok(out)
}

/// Fold one CSV file into `out`.
pub fn read_file(path: &Path, out: &mut CountryYearMap) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("open input file {}", path.display()))?;

    // Header handling is manual: an empty file has no header and is skipped.
    // The reader drops blank lines, so a header not on line 1 means line 1 was blank.
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);
    let mut records = rdr.records();

    let header = match records.next() {
        Some(header) => header.with_context(|| format!("read header of {}", path.display()))?,
        None => {
            debug!(path = %path.display(), "skipping empty file");
            return Ok(());
        }
    };

    if header.position().map(|p| p.line()) != Some(1) {
        debug!(path = %path.display(), "skipping file with blank header line");
        return Ok(());
    }

    let Some(layout) = ColumnLayout::locate(&header) else {
        debug!(path = %path.display(), "skipping file without country/gdp/year columns");
        return Ok(());
    };

    for row in records {
        let row = row.with_context(|| format!("read row of {}", path.display()))?;
        let lno = row.position().map(|p| p.line()).unwrap_or_default();

        if row.len() < layout.required_len() {
            debug!(path = %path.display(), line = lno, fields = row.len(), "skipping short row");
            continue;
        }

        out.insert(parse_row(&row, &layout, path, lno)?);
    }

    Ok(())
}

fn parse_row(
    row: &StringRecord,
    layout: &ColumnLayout,
    path: &Path,
    lno: u64,
) -> anyhow::Result<GdpRecord> {
    let country = row[layout.country].to_string();
    let year = parse_int(row, layout.year, ColumnLayout::YEAR, path, lno)?;
    let gdp = parse_int(row, layout.gdp, ColumnLayout::GDP, path, lno)?;
    Ok(GdpRecord { country, year, gdp })
}

fn parse_int(
    row: &StringRecord,
    pos: usize,
    column: &str,
    path: &Path,
    lno: u64,
) -> anyhow::Result<i64> {
    let raw = &row[pos];
    strip_digit_separators(raw.trim()).parse::<i64>().with_context(|| {
        format!(
            "invalid {} value {:?} at {}:{}",
            column,
            raw,
            path.display(),
            lno
        )
    })
}

/// Drop `_` separators placed between digits ("1_000"). Any other use of `_`
/// is left in place so the parse fails.
fn strip_digit_separators(s: &str) -> Cow<'_, str> {
    if !s.contains('_') {
        return Cow::Borrowed(s);
    }
    let bytes = s.as_bytes();
    let separated = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && bytes[i - 1].is_ascii_digit()
                && bytes.get(i + 1).is_some_and(u8::is_ascii_digit))
    });
    if separated {
        Cow::Owned(s.replace('_', ""))
    } else {
        Cow::Borrowed(s)
    }
}
