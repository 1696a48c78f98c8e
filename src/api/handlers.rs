//! API Handlers
//!
//! HTTP request handlers for each endpoint of the service.

use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::TtlCache;
use crate::charts::{Chart, ChartBuilder, ChartJs, ChartKind};
use crate::clock::{Clock, SystemClock};
use crate::error::{ApiError, Result};
use crate::export::{
    Alert, AlertKind, AlertLog, Columns, DirectoryDownloads, Download, DownloadSink,
    ExportOutcome, Exporter, MemoryDownloads, NO_DATA_MESSAGE,
};
use crate::models::{
    AlertResponse, CacheGetResponse, CacheSetRequest, ChartRequest, CsvExportRequest,
    HealthResponse, MessageResponse, StatsResponse, TxtExportRequest, ValidateRequest,
    ValidateResponse, WidgetScanResponse,
};
use crate::validation::{validate_email, validate_id, validate_value};
use crate::widgets::{init_widgets, HtmlPage, WidgetKind, WidgetPlan};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache of JSON values
    pub cache: Arc<RwLock<TtlCache<Value>>>,
    /// Time source for export file dates
    pub clock: Arc<dyn Clock>,
    /// Directory that also receives every export, if configured
    pub export_dir: Option<PathBuf>,
}

impl AppState {
    /// Creates a new AppState around `cache`, using the system clock.
    pub fn new(cache: TtlCache<Value>) -> Self {
        Self::with_clock(cache, Arc::new(SystemClock))
    }

    pub fn with_clock(cache: TtlCache<Value>, clock: Arc<dyn Clock>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            clock,
            export_dir: None,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let cache = TtlCache::with_clock(clock.clone(), config.default_ttl_ms);
        Self {
            export_dir: config.export_dir.clone(),
            ..Self::with_clock(cache, clock)
        }
    }

    fn exporter(&self, columns: Columns) -> Exporter<MemoryDownloads, AlertLog> {
        Exporter::with_clock(MemoryDownloads::new(), AlertLog::new(), self.clock.clone())
            .with_columns(columns)
    }

    /// Turns an export result into an attachment, or a warning if there was no data.
    fn finish_export(
        &self,
        outcome: ExportOutcome,
        exporter: Exporter<MemoryDownloads, AlertLog>,
    ) -> Result<Response> {
        let (downloads, alerts) = exporter.into_parts();

        if outcome == ExportOutcome::NoData {
            let alert = alerts.into_alerts().pop().unwrap_or_else(|| Alert {
                kind: AlertKind::Warning,
                message: NO_DATA_MESSAGE.to_string(),
            });
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, Json(AlertResponse { alert }))
                .into_response());
        }

        let download = downloads
            .into_downloads()
            .pop()
            .ok_or_else(|| ApiError::Internal("export produced no file".to_string()))?;

        if let Some(dir) = &self.export_dir {
            DirectoryDownloads::new(dir)?.deliver(download.clone())?;
        }

        Ok(attachment(download))
    }
}

fn attachment(download: Download) -> Response {
    // Header values must be visible ASCII
    let safe_name: String = download
        .file_name
        .chars()
        .map(|c| if c.is_ascii_graphic() && c != '"' { c } else { '_' })
        .collect();
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", safe_name))
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    (
        [
            (header::CONTENT_TYPE, HeaderValue::from_static(download.content_type)),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        download.bytes,
    )
        .into_response()
}

/// Handler for POST /api/export/csv
///
/// Returns the CSV as an attachment, or 422 with a warning alert when there
/// are no records.
pub async fn export_csv_handler(
    State(state): State<AppState>,
    Json(req): Json<CsvExportRequest>,
) -> Result<Response> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let columns = req.columns.map(Columns::from).unwrap_or_default();
    let mut exporter = state.exporter(columns);
    let outcome = exporter.export_csv(req.records.as_deref(), &req.file_name)?;

    state.finish_export(outcome, exporter)
}

/// Handler for POST /api/export/txt
pub async fn export_txt_handler(
    State(state): State<AppState>,
    Json(req): Json<TxtExportRequest>,
) -> Result<Response> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let mut exporter = state.exporter(Columns::default());
    let outcome = exporter.export_txt(&req.content, &req.file_name)?;

    state.finish_export(outcome, exporter)
}

/// Handler for POST /api/validate
pub async fn validate_handler(Json(req): Json<ValidateRequest>) -> Json<ValidateResponse> {
    Json(ValidateResponse {
        email: req.email.as_deref().map(validate_email),
        id: req.id.as_deref().map(validate_id),
        value: req.value.as_deref().map(validate_value),
    })
}

/// Handler for PUT /api/cache
pub async fn cache_set_handler(
    State(state): State<AppState>,
    Json(req): Json<CacheSetRequest>,
) -> Result<Json<MessageResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    cache.set(req.key.clone(), req.value, req.ttl_ms);

    Ok(Json(MessageResponse::new(format!(
        "Key '{}' set successfully",
        req.key
    ))))
}

/// Handler for GET /api/cache/:key
pub async fn cache_get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<CacheGetResponse>> {
    // Write lock: an expired entry is removed on read
    let mut cache = state.cache.write().await;
    let value = cache
        .get(&key)
        .ok_or_else(|| ApiError::NotFound(key.clone()))?;
    let ttl_remaining_ms = cache.ttl_remaining_ms(&key);

    Ok(Json(CacheGetResponse {
        key,
        value,
        ttl_remaining_ms,
    }))
}

/// Handler for DELETE /api/cache/:key
pub async fn cache_delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<MessageResponse>> {
    let mut cache = state.cache.write().await;
    if !cache.remove(&key) {
        return Err(ApiError::NotFound(key));
    }

    Ok(Json(MessageResponse::new(format!(
        "Key '{}' deleted successfully",
        key
    ))))
}

/// Handler for DELETE /api/cache
pub async fn cache_clear_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    let mut cache = state.cache.write().await;
    let cleared = cache.len();
    cache.clear();
    info!(cleared, "cache cleared");

    Json(MessageResponse::new(format!("Cleared {} entries", cleared)))
}

/// Handler for GET /api/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for POST /api/charts/:kind
pub async fn chart_handler(
    Path(kind): Path<ChartKind>,
    Json(req): Json<ChartRequest>,
) -> Json<Chart> {
    let builder = ChartBuilder::new(ChartJs);
    let chart = match kind {
        ChartKind::Pie => builder.pie(&req.target, req.labels, req.data, req.colors),
        ChartKind::Bar => builder.bar(&req.target, req.labels, req.data, req.label, req.color),
        ChartKind::Line => builder.line(&req.target, req.labels, req.data, req.label, req.color),
    };
    Json(chart)
}

/// Handler for POST /api/widgets/scan
///
/// Takes an HTML page as the body and lists the widgets it declares.
pub async fn widget_scan_handler(body: String) -> Json<WidgetScanResponse> {
    Json(scan_widgets(&body))
}

fn scan_widgets(html: &str) -> WidgetScanResponse {
    let page = HtmlPage::parse(html);
    let widgets = init_widgets(&page, &mut WidgetPlan);
    let tooltips = widgets
        .iter()
        .filter(|w| w.kind == WidgetKind::Tooltip)
        .count();

    WidgetScanResponse {
        tooltips,
        popovers: widgets.len() - tooltips,
        widgets,
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
