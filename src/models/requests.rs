//! Request DTOs for the HTTP API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::export::{Columns, Record};

/// Request body for `POST /api/export/csv`
#[derive(Debug, Clone, Deserialize)]
pub struct CsvExportRequest {
    /// Rows to export; missing or null is treated like an empty list
    #[serde(default)]
    pub records: Option<Vec<Record>>,
    /// File name without date suffix or extension
    pub file_name: String,
    /// Column selection, defaults to the first record's keys
    #[serde(default)]
    pub columns: Option<ColumnsRequest>,
}

/// Column selection as sent over the wire: `"first_record"`, `"union"`, or a
/// list of column names.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColumnsRequest {
    Mode(ColumnMode),
    Names(Vec<String>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnMode {
    FirstRecord,
    Union,
}

impl From<ColumnsRequest> for Columns {
    fn from(req: ColumnsRequest) -> Self {
        match req {
            ColumnsRequest::Mode(ColumnMode::FirstRecord) => Columns::FirstRecord,
            ColumnsRequest::Mode(ColumnMode::Union) => Columns::Union,
            ColumnsRequest::Names(names) => Columns::Explicit(names),
        }
    }
}

impl CsvExportRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_file_name(&self.file_name)
    }
}

/// Request body for `POST /api/export/txt`
#[derive(Debug, Clone, Deserialize)]
pub struct TxtExportRequest {
    pub content: String,
    pub file_name: String,
}

impl TxtExportRequest {
    pub fn validate(&self) -> Option<String> {
        validate_file_name(&self.file_name)
    }
}

fn validate_file_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some("File name cannot be empty".to_string());
    }
    if name.contains(['/', '\\']) {
        return Some("File name cannot contain path separators".to_string());
    }
    None
}

/// Request body for `POST /api/validate`; each field present is checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

/// Request body for `PUT /api/cache`
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSetRequest {
    /// The cache key
    pub key: String,
    /// Any JSON value
    pub value: Value,
    /// Optional TTL in milliseconds
    #[serde(default)]
    pub ttl_ms: Option<u64>,
}

impl CacheSetRequest {
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        None
    }
}

/// Request body for `POST /api/charts/:kind`
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRequest {
    /// Id of the canvas the chart is drawn on
    pub target: String,
    pub labels: Vec<String>,
    pub data: Vec<f64>,
    /// Series label (bar and line)
    #[serde(default)]
    pub label: Option<String>,
    /// Series colour (bar and line)
    #[serde(default)]
    pub color: Option<String>,
    /// Slice colours (pie)
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}
