use std::path::Path;

use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};

/// A CSV file read whole: one header row plus verbatim data rows.
///
/// Rows keep the widths the reader saw. The form export in particular is
/// position-indexed, so rows are neither padded to the header width nor
/// trimmed; callers that slice by index substitute empty strings for
/// anything out of range.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of the first header exactly matching `name`.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Read an entire CSV file into memory.
///
/// The first non-blank record is the header row. Fully blank records are
/// skipped; ragged records are kept at their actual width.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let mut headers: Option<Vec<String>> = None;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        match headers {
            None => headers = Some(record.iter().map(normalize_header).collect()),
            Some(_) => rows.push(record.iter().map(String::from).collect()),
        }
    }
    Ok(CsvTable {
        headers: headers.unwrap_or_default(),
        rows,
    })
}

/// Write a header row and data rows to `path`.
///
/// The writer is flexible: rows are emitted at whatever width the caller
/// produced.
pub fn write_rows(path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("create csv: {}", path.display()))?;
    writer
        .write_record(headers)
        .with_context(|| format!("write header: {}", path.display()))?;
    for row in rows {
        writer
            .write_record(row)
            .with_context(|| format!("write row: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_headers_and_ragged_rows() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("in.csv");
        fs::write(&path, "\u{feff}a,b,c\n1,2,3\nshort\n").expect("write fixture");

        let table = read_csv_table(&path).expect("read table");
        assert_eq!(table.headers, vec!["a", "b", "c"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["short"]);
    }

    #[test]
    fn skips_blank_records() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("in.csv");
        fs::write(&path, "a,b\n,\n1,2\n").expect("write fixture");

        let table = read_csv_table(&path).expect("read table");
        assert_eq!(table.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn column_lookup_is_exact() {
        let table = CsvTable {
            headers: vec!["full_name".to_string(), "Full_Name".to_string()],
            rows: Vec::new(),
        };
        assert_eq!(table.column("full_name"), Some(0));
        assert_eq!(table.column("FULL_NAME"), None);
    }

    #[test]
    fn round_trips_rows_through_write() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        let headers = vec!["x".to_string(), "y".to_string()];
        let rows = vec![vec!["1".to_string(), "two words".to_string()]];
        write_rows(&path, &headers, &rows).expect("write rows");

        let table = read_csv_table(&path).expect("read back");
        assert_eq!(table.headers, headers);
        assert_eq!(table.rows, rows);
    }
}
