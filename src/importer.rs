use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::{debug, warn};

use crate::db::insert_transaction;
use crate::error::{ImportError, Result};
use crate::models::{CsvRow, TransactionRecord};

/// Accepted `Date` layouts, tried in order: (chrono format, separator, year first).
const DATE_FORMATS: &[(&str, char, bool)] = &[("%Y-%m-%d", '-', true), ("%m/%d/%Y", '/', false)];

/// chrono's `%Y` takes any digit count, a sign and leading whitespace, so the
/// layout is checked here first: only digits and the separator, 4-digit year.
fn matches_layout(raw: &str, sep: char, year_first: bool) -> bool {
    if !raw.chars().all(|c| c.is_ascii_digit() || c == sep) {
        return false;
    }
    let year = if year_first {
        raw.split(sep).next()
    } else {
        raw.rsplit(sep).next()
    };
    year.is_some_and(|y| y.len() == 4)
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .filter(|(_, sep, year_first)| matches_layout(raw, *sep, *year_first))
        .find_map(|(fmt, _, _)| NaiveDate::parse_from_str(raw, fmt).ok())
}

/// SQLite stores NaN as NULL, so only finite values count as amounts.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Turn one CSV row into a record. A row whose date matches neither format
/// is logged and yields `None`; its other fields are not looked at.
pub fn parse_row(row: CsvRow, line: u64) -> Result<Option<TransactionRecord>> {
    let Some(date) = parse_date(&row.date) else {
        warn!(line, "Skipping row with invalid date: {}", row.date);
        return Ok(None);
    };
    let raw_amount = row.amount.unwrap_or_default();
    let amount = parse_amount(&raw_amount).ok_or_else(|| ImportError::InvalidAmount {
        line,
        value: raw_amount.clone(),
    })?;
    Ok(Some(TransactionRecord::imported(date, amount, row.description)))
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: usize,
}

/// Insert every row of a header-led CSV into `transactions` inside a single
/// database transaction. Any error drops the transaction, rolling back all
/// rows of the run.
pub fn import_csv<R: Read>(conn: &mut Connection, reader: R) -> Result<ImportResult> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = rdr.headers()?.clone();

    let tx = conn.transaction()?;
    let mut result = ImportResult::default();
    let mut record = csv::StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        let row: CsvRow = record.deserialize(Some(&headers))?;
        match parse_row(row, line)? {
            Some(txn) => {
                insert_transaction(&tx, &txn)?;
                result.imported += 1;
            }
            None => result.skipped += 1,
        }
    }
    tx.commit()?;

    debug!(imported = result.imported, skipped = result.skipped, "committed");
    Ok(result)
}

pub fn import_file(conn: &mut Connection, file_path: &Path) -> Result<ImportResult> {
    let file = std::fs::File::open(file_path).map_err(|source| ImportError::OpenCsv {
        path: file_path.display().to_string(),
        source,
    })?;
    import_csv(conn, std::io::BufReader::new(file))
}
