//! Response DTOs for the HTTP API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::export::Alert;
use crate::widgets::WidgetDescriptor;

/// Response body for `GET /api/cache/:key`
#[derive(Debug, Clone, Serialize)]
pub struct CacheGetResponse {
    pub key: String,
    pub value: Value,
    /// Milliseconds until the entry expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl_remaining_ms: Option<u64>,
}

/// Plain acknowledgement with a message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for `GET /api/cache/stats`
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<crate::cache::CacheStats> for StatsResponse {
    fn from(stats: crate::cache::CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for `POST /api/validate`; only requested checks appear.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
}

/// Response body when an export had nothing to export.
#[derive(Debug, Clone, Serialize)]
pub struct AlertResponse {
    pub alert: Alert,
}

/// Response body for `POST /api/widgets/scan`
#[derive(Debug, Clone, Serialize)]
pub struct WidgetScanResponse {
    pub tooltips: usize,
    pub popovers: usize,
    pub widgets: Vec<WidgetDescriptor>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
