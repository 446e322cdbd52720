pub mod import;
pub mod sample;

use clap::Parser;

pub const USAGE_HINT: &str = "Please specify --csv <file> to import or --sample to create a sample file";

#[derive(Parser, Debug)]
#[command(
    name = "txn-import",
    version,
    about = "Import transactions from a CSV file into the transactions database."
)]
pub struct Cli {
    /// CSV file to import
    #[arg(long, value_name = "PATH")]
    pub csv: Option<String>,
    /// Create sample_transactions.csv in the current directory
    #[arg(long)]
    pub sample: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_flag() {
        let cli = Cli::try_parse_from(["txn-import", "--csv", "stmt.csv"]).unwrap();
        assert_eq!(cli.csv.as_deref(), Some("stmt.csv"));
        assert!(!cli.sample);
    }

    #[test]
    fn test_parse_both_flags() {
        let cli = Cli::try_parse_from(["txn-import", "--sample", "--csv", "stmt.csv"]).unwrap();
        assert!(cli.sample);
        assert_eq!(cli.csv.as_deref(), Some("stmt.csv"));
    }

    #[test]
    fn test_parse_no_flags() {
        let cli = Cli::try_parse_from(["txn-import"]).unwrap();
        assert!(cli.csv.is_none());
        assert!(!cli.sample);
    }

    #[test]
    fn test_csv_requires_value() {
        assert!(Cli::try_parse_from(["txn-import", "--csv"]).is_err());
    }
}
