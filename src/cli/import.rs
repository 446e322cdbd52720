use std::path::PathBuf;

use colored::Colorize;
use tracing::warn;

use crate::db::get_connection;
use crate::error::Result;
use crate::importer::import_file;
use crate::settings::Settings;

pub fn run(file: &str, settings: &Settings) -> Result<()> {
    let file_path = PathBuf::from(file);
    let mut conn = get_connection(settings)?;

    let outcome = import_file(&mut conn, &file_path);
    if let Err((_, e)) = conn.close() {
        warn!("Failed to close database connection: {e}");
    }
    let result = outcome?;

    println!("{}", format!("Successfully imported transactions from {file}").green());
    if result.skipped > 0 {
        println!("{} imported, {} skipped (invalid date)", result.imported, result.skipped);
    } else {
        println!("{} imported", result.imported);
    }
    Ok(())
}
