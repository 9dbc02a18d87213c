//! Company Profile Model

use serde::{Deserialize, Serialize};

/// Date display format preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DateFormat {
    #[default]
    YearMonthDay,
    DayMonthYear,
    MonthDayYear,
}

/// Time display format preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeFormat {
    #[default]
    H24,
    H12,
}

/// Document numbering configuration
///
/// Receipt and voucher sequences are independent; each number is
/// `{prefix}{next_number}` and the counter increments after issuance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentSettings {
    pub receipt_prefix: String,
    pub receipt_next_number: u64,
    pub voucher_prefix: String,
    pub voucher_next_number: u64,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            receipt_prefix: "OR-".to_string(),
            receipt_next_number: 1001,
            voucher_prefix: "PV-".to_string(),
            voucher_next_number: 5001,
        }
    }
}

/// Company profile - venue identity and document/display preferences
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub document_settings: DocumentSettings,
    #[serde(default)]
    pub date_format: DateFormat,
    #[serde(default)]
    pub time_format: TimeFormat,
    /// Custom message appended to report footers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_message: Option<String>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: "Your Sports Centre".to_string(),
            address: "123 Sports Complex Blvd".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            document_settings: DocumentSettings::default(),
            date_format: DateFormat::default(),
            time_format: TimeFormat::default(),
            footer_message: None,
        }
    }
}
