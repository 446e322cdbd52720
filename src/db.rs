use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::{ImportError, Result};
use crate::models::TransactionRecord;
use crate::settings::Settings;

const INSERT_TRANSACTION: &str = "INSERT INTO transactions (date, amount, description, category, account, transaction_type) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";

/// Shape of the `transactions` table as the server application creates it.
/// The importer never creates tables; tests use this to build fixtures.
#[cfg(test)]
pub const TRANSACTIONS_FIXTURE: &str = "
CREATE TABLE transactions (
    id INTEGER PRIMARY KEY,
    date TEXT NOT NULL,
    amount REAL NOT NULL,
    description TEXT,
    category TEXT NOT NULL,
    subcategory TEXT,
    account TEXT NOT NULL,
    transaction_type TEXT NOT NULL,
    user_id INTEGER,
    created_at TEXT DEFAULT (datetime('now'))
);
";

/// Open the configured database. The file must already exist. Any failure,
/// including a wrong SQLCipher key, is reported as `ImportError::Connect`.
pub fn get_connection(settings: &Settings) -> Result<Connection> {
    let db_path = settings.db_path();
    let open = || -> rusqlite::Result<Connection> {
        let conn = Connection::open_with_flags(
            &db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        if !settings.password.is_empty() {
            conn.pragma_update(None, "key", &settings.password)?;
        }
        // Forces the header read so a bad key or non-database file fails here.
        conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))?;
        Ok(conn)
    };
    let conn = open().map_err(|source| ImportError::Connect {
        database: db_path.display().to_string(),
        source,
    })?;
    debug!(
        database = %db_path.display(),
        user = %settings.user,
        encrypted = !settings.password.is_empty(),
        "connected"
    );
    Ok(conn)
}

pub fn insert_transaction(conn: &Connection, record: &TransactionRecord) -> Result<()> {
    let mut stmt = conn.prepare_cached(INSERT_TRANSACTION)?;
    stmt.execute(rusqlite::params![
        record.date.format("%Y-%m-%d").to_string(),
        record.amount,
        record.description,
        record.category,
        record.account,
        record.transaction_type.as_str(),
    ])?;
    Ok(())
}
