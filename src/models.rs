use chrono::NaiveDate;
use serde::Deserialize;

/// Category assigned to every imported row; the CSV's own category is ignored.
pub const IMPORT_CATEGORY: &str = "Other";
/// Account assigned to every imported row.
pub const IMPORT_ACCOUNT: &str = "Imported";

/// One data row of an input CSV, keyed by header name. Columns other than
/// these three are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Amount", default)]
    pub amount: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Negative amounts are expenses; zero and positive amounts are income.
    pub fn from_amount(amount: f64) -> Self {
        if amount < 0.0 {
            Self::Expense
        } else {
            Self::Income
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

/// A row ready for insert into the `transactions` table.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRecord {
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
    pub category: &'static str,
    pub account: &'static str,
    pub transaction_type: TransactionType,
}

impl TransactionRecord {
    pub fn imported(date: NaiveDate, amount: f64, description: String) -> Self {
        Self {
            date,
            amount,
            description,
            category: IMPORT_CATEGORY,
            account: IMPORT_ACCOUNT,
            transaction_type: TransactionType::from_amount(amount),
        }
    }
}
