//! Canteen Kit - Utilities for a cafeteria management web app
//!
//! CSV/TXT export, input validation, a TTL cache, chart configuration and
//! page widget discovery, plus an HTTP service exposing all of them.

pub mod api;
pub mod cache;
pub mod charts;
pub mod clock;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod validation;
pub mod widgets;

pub use api::AppState;
pub use cache::TtlCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use export::{Exporter, ExportOutcome, Record};
