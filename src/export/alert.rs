//! User-visible alerts raised by the exporters.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Alert severity, named after the Bootstrap alert classes the page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Info,
    Warning,
    Danger,
}

impl AlertKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertKind::Success => "success",
            AlertKind::Info => "info",
            AlertKind::Warning => "warning",
            AlertKind::Danger => "danger",
        }
    }
}

/// A single alert shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

/// Receives alerts meant for the user.
pub trait AlertSink {
    fn show_alert(&self, kind: AlertKind, message: &str);
}

impl<T: AlertSink + ?Sized> AlertSink for &T {
    fn show_alert(&self, kind: AlertKind, message: &str) {
        (**self).show_alert(kind, message)
    }
}

// == Tracing Alerts ==
/// Writes alerts to the log and nowhere else.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAlerts;

impl AlertSink for TracingAlerts {
    fn show_alert(&self, kind: AlertKind, message: &str) {
        log_alert(kind, message);
    }
}

// == Alert Log ==
/// Keeps every alert so the caller can render them, and logs them too.
#[derive(Debug, Default)]
pub struct AlertLog {
    alerts: Mutex<Vec<Alert>>,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the alerts raised so far.
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn into_alerts(self) -> Vec<Alert> {
        self.alerts.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl AlertSink for AlertLog {
    fn show_alert(&self, kind: AlertKind, message: &str) {
        log_alert(kind, message);
        self.alerts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Alert {
                kind,
                message: message.to_string(),
            });
    }
}

fn log_alert(kind: AlertKind, message: &str) {
    match kind {
        AlertKind::Warning | AlertKind::Danger => warn!(kind = kind.as_str(), "{}", message),
        AlertKind::Success | AlertKind::Info => info!(kind = kind.as_str(), "{}", message),
    }
}
