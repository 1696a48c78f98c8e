//! Export Module
//!
//! Turns record sets into `;`-delimited CSV downloads and raw text into TXT
//! downloads. Files are named `<base>_<YYYY-MM-DD>.<ext>` using the UTC date
//! of the exporter's clock.

pub mod alert;
mod csv_format;
mod download;


use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::clock::{Clock, SystemClock};

pub use csv_format::{render_csv, render_field, Columns, DELIMITER};
pub use alert::{Alert, AlertKind, AlertLog, AlertSink, TracingAlerts};
pub use download::{
    DirectoryDownloads, Download, DownloadSink, MemoryDownloads, CSV_CONTENT_TYPE,
    TXT_CONTENT_TYPE,
};

/// One exportable row: a flat key/value object whose key order is kept.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// UTF-8 byte-order mark written at the start of CSV files.
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Warning shown when a CSV export has no records.
pub const NO_DATA_MESSAGE: &str = "No data to export!";

// == Export Error ==
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Invalid download file name: {0:?}")]
    InvalidFileName(String),

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What an export call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// A file was handed to the download sink.
    Delivered { file_name: String },
    /// There was nothing to export; a warning was raised instead.
    NoData,
}

/// Builds `<base>_<YYYY-MM-DD>.<extension>`.
pub fn dated_file_name(base: &str, date: NaiveDate, extension: &str) -> String {
    format!("{}_{}.{}", base, date.format("%Y-%m-%d"), extension)
}

// == Exporter ==
/// Produces CSV/TXT downloads into a sink, raising alerts through an alert sink.
pub struct Exporter<S, A> {
    sink: S,
    alerts: A,
    clock: Arc<dyn Clock>,
    columns: Columns,
}

impl<S: DownloadSink, A: AlertSink> Exporter<S, A> {
    /// Creates an exporter that dates files with the system clock.
    pub fn new(sink: S, alerts: A) -> Self {
        Self::with_clock(sink, alerts, Arc::new(SystemClock))
    }

    pub fn with_clock(sink: S, alerts: A, clock: Arc<dyn Clock>) -> Self {
        Self {
            sink,
            alerts,
            clock,
            columns: Columns::default(),
        }
    }

    /// Sets how CSV columns are chosen.
    pub fn with_columns(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    // == CSV ==
    /// Exports `records` as `<base>_<date>.csv`.
    ///
    /// With no records, raises a warning and delivers nothing.
    pub fn export_csv(
        &mut self,
        records: Option<&[Record]>,
        file_name_base: &str,
    ) -> Result<ExportOutcome, ExportError> {
        let records = match records {
            Some(records) if !records.is_empty() => records,
            _ => {
                self.alerts.show_alert(AlertKind::Warning, NO_DATA_MESSAGE);
                return Ok(ExportOutcome::NoData);
            }
        };

        let body = render_csv(records, &self.columns)?;
        let mut bytes = Vec::with_capacity(UTF8_BOM.len() + body.len());
        bytes.extend_from_slice(UTF8_BOM.as_bytes());
        bytes.extend_from_slice(body.as_bytes());

        let file_name = self.file_name(file_name_base, "csv");
        info!(file_name = %file_name, rows = records.len(), "exporting CSV");
        self.deliver(file_name, CSV_CONTENT_TYPE, bytes)
    }

    // == TXT ==
    /// Exports `content` unchanged as `<base>_<date>.txt`.
    pub fn export_txt(
        &mut self,
        content: &str,
        file_name_base: &str,
    ) -> Result<ExportOutcome, ExportError> {
        let file_name = self.file_name(file_name_base, "txt");
        info!(file_name = %file_name, bytes = content.len(), "exporting TXT");
        self.deliver(file_name, TXT_CONTENT_TYPE, content.as_bytes().to_vec())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn alerts(&self) -> &A {
        &self.alerts
    }

    pub fn into_parts(self) -> (S, A) {
        (self.sink, self.alerts)
    }

    fn file_name(&self, base: &str, extension: &str) -> String {
        dated_file_name(base, self.clock.now().date_naive(), extension)
    }

    fn deliver(
        &mut self,
        file_name: String,
        content_type: &'static str,
        bytes: Vec<u8>,
    ) -> Result<ExportOutcome, ExportError> {
        self.sink.deliver(Download {
            file_name: file_name.clone(),
            content_type,
            bytes,
        })?;
        Ok(ExportOutcome::Delivered { file_name })
    }
}
