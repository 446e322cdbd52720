use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Cannot connect to database {database}: {source}")]
    Connect {
        database: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open {path}: {source}")]
    OpenCsv {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid amount on line {line}: {value:?}")]
    InvalidAmount { line: u64, value: String },
}

pub type Result<T> = std::result::Result<T, ImportError>;
