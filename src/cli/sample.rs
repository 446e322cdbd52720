use std::path::Path;

use serde::Serialize;

use crate::error::Result;

pub const SAMPLE_FILE: &str = "sample_transactions.csv";

#[derive(Serialize)]
struct SampleRow {
    #[serde(rename = "Date")]
    date: &'static str,
    #[serde(rename = "Description")]
    description: &'static str,
    #[serde(rename = "Original Description")]
    original_description: &'static str,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Amount")]
    amount: &'static str,
    #[serde(rename = "Status")]
    status: &'static str,
}

const SAMPLE_ROWS: &[SampleRow] = &[
    SampleRow {
        date: "2025-01-20",
        description: "Restaurant dinner",
        original_description: "MCDONALD'S #12345 MAIN ST",
        category: "Food & Dining",
        amount: "-75.23",
        status: "Posted",
    },
    SampleRow {
        date: "2025-01-19",
        description: "Salary deposit",
        original_description: "PAYROLL DEPOSIT COMPANY ABC",
        category: "Income",
        amount: "3000.00",
        status: "Posted",
    },
    SampleRow {
        date: "2025-01-18",
        description: "Internet bill",
        original_description: "INTERNET SERVICES BILL PAYMENT",
        category: "Utilities",
        amount: "-45.00",
        status: "Posted",
    },
];

/// Write the sample rows with a header line, replacing any existing file.
pub fn write_sample_csv(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);
    for row in SAMPLE_ROWS {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run() -> Result<()> {
    write_sample_csv(Path::new(SAMPLE_FILE))?;
    println!(
        "Created {SAMPLE_FILE} with columns: Date, Description, Original Description, Category, Amount, Status"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: &str = "Date,Description,Original Description,Category,Amount,Status\r\n\
2025-01-20,Restaurant dinner,MCDONALD'S #12345 MAIN ST,Food & Dining,-75.23,Posted\r\n\
2025-01-19,Salary deposit,PAYROLL DEPOSIT COMPANY ABC,Income,3000.00,Posted\r\n\
2025-01-18,Internet bill,INTERNET SERVICES BILL PAYMENT,Utilities,-45.00,Posted\r\n";

    #[test]
    fn test_sample_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SAMPLE_FILE);
        write_sample_csv(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), EXPECTED);
    }

    #[test]
    fn test_sample_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SAMPLE_FILE);
        std::fs::write(&path, "stale contents that are longer than nothing\n").unwrap();
        write_sample_csv(&path).unwrap();
        let first = std::fs::read(&path).unwrap();
        write_sample_csv(&path).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, EXPECTED.as_bytes());
    }

    #[test]
    fn test_sample_is_importable() {
        use crate::db::TRANSACTIONS_FIXTURE;
        use crate::importer::import_file;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SAMPLE_FILE);
        write_sample_csv(&path).unwrap();

        let mut conn = rusqlite::Connection::open_in_memory().unwrap();
        conn.execute_batch(TRANSACTIONS_FIXTURE).unwrap();
        let result = import_file(&mut conn, &path).unwrap();
        assert_eq!(result.imported, 3);
        assert_eq!(result.skipped, 0);

        let expenses: i64 = conn
            .query_row(
                "SELECT count(*) FROM transactions WHERE transaction_type = 'expense'",
                [],
                |r| r.get(0),
            )
            .unwrap();
        assert_eq!(expenses, 2);
    }

    #[test]
    fn test_unwritable_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(SAMPLE_FILE);
        assert!(write_sample_csv(&path).is_err());
    }
}
